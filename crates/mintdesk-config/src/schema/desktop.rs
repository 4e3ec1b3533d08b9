//! Desktop surface configuration.

use serde::{Deserialize, Serialize};

/// Viewport and chrome of the simulated desktop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Initial viewport width in pixels.
    pub viewport_width: f64,
    /// Initial viewport height in pixels.
    pub viewport_height: f64,
    /// Height reserved for the bottom panel; excluded from the work area.
    pub panel_height: f64,
    /// First z-index handed out by the window manager.
    pub z_index_seed: u32,
    /// Show the desktop widgets when no window is maximized.
    pub widgets: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1440.0,
            viewport_height: 900.0,
            panel_height: 48.0,
            z_index_seed: 100,
            widgets: true,
        }
    }
}
