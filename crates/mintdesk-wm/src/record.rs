//! Per-window state.

use std::fmt;

use mintdesk_common::{AppId, Rect};
use serde::{Deserialize, Serialize};

use crate::content::Surface;

/// Visible state of a window. Minimized and maximized never coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// One open application window.
///
/// Only the window manager mutates records; callers get shared references.
pub struct WindowRecord {
    pub(crate) app_id: AppId,
    pub(crate) title: String,
    pub(crate) icon: String,
    pub(crate) bounds: Rect,
    pub(crate) z_index: u32,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
    /// Bounds saved on maximize, restored verbatim on un-maximize.
    pub(crate) restore_bounds: Option<Rect>,
    pub(crate) content: Box<dyn Surface>,
}

impl WindowRecord {
    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn restore_bounds(&self) -> Option<Rect> {
        self.restore_bounds
    }

    pub fn state(&self) -> WindowState {
        if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    /// Current body text.
    pub fn render(&self) -> String {
        self.content.render()
    }
}

impl fmt::Debug for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRecord")
            .field("app_id", &self.app_id)
            .field("title", &self.title)
            .field("bounds", &self.bounds)
            .field("z_index", &self.z_index)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
