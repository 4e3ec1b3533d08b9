//! Action dispatch: routes parsed commands to the window manager and panels.

use std::io::Write;

use mintdesk_common::{Action, AppId, DeskError, Point, Size};
use mintdesk_wm::{OpenOptions, WindowRecord, WindowState};

use super::core::{Flow, Session};
use crate::panels;

impl<W: Write> Session<W> {
    /// Parse and run one input line. Parse errors are reported, not returned.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, DeskError> {
        match Action::parse_command(line) {
            Ok(action) => self.dispatch(action),
            Err(e) => {
                tracing::debug!(line, error = %e, "command rejected");
                writeln!(self.out, "error: {e} (try `help`)")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Flow, DeskError> {
        tracing::debug!(action = action.label(), "dispatch");
        match action {
            Action::OpenApp(app) => {
                let reopened = self.wm.is_open(&app);
                self.wm.open(&app, OpenOptions::default());
                if !reopened && panels::is_remote_panel(&app) {
                    self.start_load(&app);
                }
            }
            Action::CloseApp(app) => {
                if !self.wm.close(&app) {
                    return self.no_window(&app);
                }
            }
            Action::FocusApp(app) => {
                if !self.wm.focus(&app) {
                    return self.no_window(&app);
                }
            }
            Action::MinimizeApp(app) => {
                if !self.wm.is_open(&app) {
                    return self.no_window(&app);
                }
                self.wm.minimize(&app);
            }
            Action::ToggleMaximize(app) => {
                if !self.wm.toggle_maximize(&app) {
                    return self.no_window(&app);
                }
            }
            Action::DragWindow { app, dx, dy } => {
                if !self.wm.is_open(&app) {
                    return self.no_window(&app);
                }
                if !self.wm.drag_by(&app, dx, dy) {
                    writeln!(self.out, "{app} is maximized; restore it first")?;
                }
            }
            Action::ResizeWindow {
                app,
                direction,
                dx,
                dy,
            } => {
                if !self.wm.is_open(&app) {
                    return self.no_window(&app);
                }
                if !self.wm.resize_by(&app, direction, dx, dy) {
                    writeln!(self.out, "{app} is maximized; restore it first")?;
                }
            }
            Action::Click { x, y } => match self.wm.click(Point::new(x, y)) {
                Some((app, region)) => writeln!(self.out, "click: {app} {region:?}")?,
                None => writeln!(self.out, "click: desktop")?,
            },
            Action::TaskbarClick(app) => {
                if !self.wm.activate_from_taskbar(&app) {
                    return self.no_window(&app);
                }
            }
            Action::ToggleShowDesktop => {
                self.wm.toggle_show_desktop();
            }
            Action::ListWindows => {
                self.list_windows()?;
                return Ok(Flow::Continue);
            }
            Action::ShowWindow(app) => {
                match self.wm.get(&app) {
                    Some(record) => {
                        let text = format!(
                            "── {} {} ──\n{}",
                            record.icon(),
                            record.title(),
                            record.render()
                        );
                        writeln!(self.out, "{text}")?;
                    }
                    None => return self.no_window(&app),
                }
                return Ok(Flow::Continue);
            }
            Action::SetViewport { width, height } => {
                if width <= 0.0 || height <= 0.0 {
                    writeln!(self.out, "error: viewport must be positive")?;
                    return Ok(Flow::Continue);
                }
                self.wm.set_viewport(Size::new(width, height));
                writeln!(self.out, "viewport: {width}x{height}")?;
            }
            Action::FilterProjects(filter) => {
                self.filter = filter;
                writeln!(self.out, "projects filter: {filter:?}")?;
                let projects = AppId::from(panels::PROJECTS_APP);
                if self.wm.is_open(&projects) {
                    self.start_load(&projects);
                }
                return Ok(Flow::Continue);
            }
            Action::RefreshPanel(app) => {
                if !self.wm.is_open(&app) {
                    return self.no_window(&app);
                }
                if panels::is_remote_panel(&app) {
                    self.start_load(&app);
                } else {
                    writeln!(self.out, "{app} has nothing to refresh")?;
                }
                return Ok(Flow::Continue);
            }
            Action::Help => {
                self.help()?;
                return Ok(Flow::Continue);
            }
            Action::Quit => return Ok(Flow::Quit),
            Action::None => return Ok(Flow::Continue),
        }
        self.print_taskbar()?;
        Ok(Flow::Continue)
    }

    fn no_window(&mut self, app: &AppId) -> Result<Flow, DeskError> {
        writeln!(self.out, "no window: {app}")?;
        Ok(Flow::Continue)
    }

    pub(super) fn print_taskbar(&mut self) -> Result<(), DeskError> {
        let line = self.taskbar.borrow().render();
        writeln!(self.out, "taskbar: {line}")?;
        Ok(())
    }

    fn list_windows(&mut self) -> Result<(), DeskError> {
        if self.wm.count() == 0 {
            writeln!(self.out, "(no windows)")?;
            return Ok(());
        }
        let lines: Vec<String> = self.wm.records().iter().map(describe).collect();
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn help(&mut self) -> Result<(), DeskError> {
        writeln!(self.out, "Commands:")?;
        for action in Action::help_actions() {
            writeln!(self.out, "  {:<44} {}", action.usage(), action.label())?;
        }
        Ok(())
    }
}

fn describe(record: &WindowRecord) -> String {
    let b = record.bounds();
    let state = match record.state() {
        WindowState::Normal => "normal",
        WindowState::Minimized => "minimized",
        WindowState::Maximized => "maximized",
    };
    format!(
        "{:<11} {} {:<24} {:>5},{:<5} {:>4}x{:<4} z={} {}",
        record.app_id().as_str(),
        record.icon(),
        record.title(),
        b.x,
        b.y,
        b.width,
        b.height,
        record.z_index(),
        state
    )
}
