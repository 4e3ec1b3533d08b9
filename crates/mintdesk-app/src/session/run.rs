//! The input/event loop.

use std::io::Write;

use mintdesk_common::DeskError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::error::RecvError;

use super::core::{Flow, Session};

impl<W: Write> Session<W> {
    /// Run commands from `input` until `quit` or end of input. At end of
    /// input the loop keeps going until every pending panel load reported.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), DeskError> {
        let mut lines = input.lines();
        let mut events = self.bus.subscribe();
        let mut input_open = true;

        loop {
            if !input_open && self.pending == 0 {
                break;
            }
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => {
                            if self.handle_line(&line)? == Flow::Quit {
                                break;
                            }
                        }
                        None => {
                            tracing::debug!(pending = self.pending, "end of input");
                            input_open = false;
                        }
                    }
                }
                event = events.recv() => {
                    match event {
                        Ok(event) => self.apply_event(event)?,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "session lagged behind panel loads");
                            self.pending = self.pending.saturating_sub(skipped as usize);
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
