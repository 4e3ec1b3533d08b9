//! Window geometry configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Initial window origin for one app.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionConfig {
    pub x: f64,
    pub y: f64,
}

impl PositionConfig {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size limits, snapping and per-app placement of windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    pub default_width: f64,
    pub default_height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Distance in pixels at which a dragged window snaps to a viewport edge.
    pub snap_threshold: f64,
    /// Per-app initial origin, keyed by app id.
    pub positions: BTreeMap<String, PositionConfig>,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        let positions = [
            ("about", 100.0, 80.0),
            ("skills", 150.0, 100.0),
            ("projects", 200.0, 120.0),
            ("github", 120.0, 90.0),
            ("contact", 180.0, 110.0),
            ("experience", 140.0, 95.0),
        ]
        .into_iter()
        .map(|(id, x, y)| (id.to_string(), PositionConfig::new(x, y)))
        .collect();

        Self {
            default_width: 600.0,
            default_height: 450.0,
            min_width: 300.0,
            min_height: 200.0,
            snap_threshold: 20.0,
            positions,
        }
    }
}
