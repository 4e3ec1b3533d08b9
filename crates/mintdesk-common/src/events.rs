use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::AppId;

/// Events crossing task boundaries. Window state changes are delivered
/// synchronously by the window manager and never travel through here.
///
/// `seq` identifies the load that produced a panel event; only the latest
/// load of an app may update its window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// A remote-backed panel finished loading and has a new body.
    PanelReady { app_id: AppId, seq: u64, body: String },
    /// A remote-backed panel failed; `error` is the user-facing message.
    PanelFailed {
        app_id: AppId,
        seq: u64,
        error: String,
    },
    #[serde(other)]
    Unknown,
}

impl Event {
    /// App and load sequence of a panel event.
    pub fn panel_load(&self) -> Option<(&AppId, u64)> {
        match self {
            Event::PanelReady { app_id, seq, .. } | Event::PanelFailed { app_id, seq, .. } => {
                Some((app_id, *seq))
            }
            Event::Unknown => None,
        }
    }
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::debug!("event dropped, no subscribers");
                0
            }
        }
    }

    /// A publish-only handle for background tasks.
    pub fn sender(&self) -> broadcast::Sender<Event> {
        self.sender.clone()
    }
}
