//! Window manager settings.

use std::collections::HashMap;

use mintdesk_common::{AppId, Point, Rect, Size};

use crate::catalog::{DEFAULT_POSITION, DEFAULT_POSITIONS};
use crate::geometry;

#[derive(Debug, Clone)]
pub struct WmSettings {
    pub viewport: Size,
    /// Height of the bottom panel, excluded from the work area.
    pub panel_height: f64,
    pub z_index_seed: u32,
    pub default_size: Size,
    pub min_size: Size,
    pub snap_threshold: f64,
    pub positions: HashMap<AppId, Point>,
    /// Whether desktop widgets exist at all.
    pub widgets: bool,
}

impl WmSettings {
    /// Area windows may occupy: the viewport minus the panel.
    pub fn work_area(&self) -> Rect {
        geometry::work_area(self.viewport, self.panel_height)
    }

    /// Configured origin for a freshly opened window.
    pub fn initial_position(&self, app_id: &AppId) -> Point {
        self.positions
            .get(app_id)
            .copied()
            .unwrap_or(DEFAULT_POSITION)
    }
}

impl Default for WmSettings {
    fn default() -> Self {
        Self {
            viewport: Size::new(1440.0, 900.0),
            panel_height: 48.0,
            z_index_seed: 100,
            default_size: Size::new(600.0, 450.0),
            min_size: Size::new(300.0, 200.0),
            snap_threshold: 20.0,
            positions: DEFAULT_POSITIONS
                .iter()
                .map(|(id, p)| (AppId::from(*id), *p))
                .collect(),
            widgets: true,
        }
    }
}
