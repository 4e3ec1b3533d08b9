//! Window regions and hit testing.

use mintdesk_common::{Point, Rect, ResizeDirection};
use serde::{Deserialize, Serialize};

/// Region of a window under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Drag handle.
    TitleBar,
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    Resize(ResizeDirection),
}

impl WindowRegion {
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }

    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self {
            WindowRegion::Resize(dir) => Some(*dir),
            _ => None,
        }
    }

    /// CSS cursor name for this region.
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton
            | WindowRegion::MinimizeButton
            | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::Resize(dir) => dir.cursor(),
        }
    }
}

/// Window chrome metrics used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub title_bar_height: f64,
    pub button_size: f64,
    pub button_spacing: f64,
    /// Gap between the rightmost button and the window edge.
    pub button_margin: f64,
    /// Thickness of the edge resize handles.
    pub resize_handle: f64,
    /// Extent of the corner resize handles along each edge.
    pub corner_handle: f64,
}

pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    button_size: 16.0,
    button_spacing: 8.0,
    button_margin: 10.0,
    resize_handle: 6.0,
    corner_handle: 12.0,
};

impl FrameStyle {
    /// Button `slot` counted from the right edge: 0 close, 1 maximize, 2 minimize.
    fn button_rect(&self, bounds: Rect, slot: u32) -> Rect {
        let slot = f64::from(slot);
        let x = bounds.right()
            - self.button_margin
            - self.button_size * (slot + 1.0)
            - self.button_spacing * slot;
        let y = bounds.y + (self.title_bar_height - self.button_size) / 2.0;
        Rect::new(x, y, self.button_size, self.button_size)
    }

    pub fn close_button_rect(&self, bounds: Rect) -> Rect {
        self.button_rect(bounds, 0)
    }

    pub fn maximize_button_rect(&self, bounds: Rect) -> Rect {
        self.button_rect(bounds, 1)
    }

    pub fn minimize_button_rect(&self, bounds: Rect) -> Rect {
        self.button_rect(bounds, 2)
    }

    /// Title bar band below the north resize handle.
    pub fn title_bar_rect(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x,
            bounds.y + self.resize_handle,
            bounds.width,
            self.title_bar_height - self.resize_handle,
        )
    }

    /// Region of `bounds` under `pos`, or `None` when `pos` is outside.
    ///
    /// Priority: buttons, resize corners, title bar, resize edges, content.
    pub fn hit_test(&self, bounds: Rect, pos: Point) -> Option<WindowRegion> {
        if !bounds.contains(pos) {
            return None;
        }

        if let Some(region) = self.hit_test_buttons(bounds, pos) {
            return Some(region);
        }
        if let Some(dir) = self.hit_test_edges(bounds, pos, self.corner_handle, true) {
            return Some(WindowRegion::Resize(dir));
        }
        if self.title_bar_rect(bounds).contains(pos) {
            return Some(WindowRegion::TitleBar);
        }
        if let Some(dir) = self.hit_test_edges(bounds, pos, self.resize_handle, false) {
            return Some(WindowRegion::Resize(dir));
        }
        Some(WindowRegion::Content)
    }

    fn hit_test_buttons(&self, bounds: Rect, pos: Point) -> Option<WindowRegion> {
        if self.close_button_rect(bounds).contains(pos) {
            return Some(WindowRegion::CloseButton);
        }
        if self.maximize_button_rect(bounds).contains(pos) {
            return Some(WindowRegion::MaximizeButton);
        }
        if self.minimize_button_rect(bounds).contains(pos) {
            return Some(WindowRegion::MinimizeButton);
        }
        None
    }

    fn hit_test_edges(
        &self,
        bounds: Rect,
        pos: Point,
        handle: f64,
        corners_only: bool,
    ) -> Option<ResizeDirection> {
        let left = pos.x < bounds.x + handle;
        let right = pos.x >= bounds.right() - handle;
        let top = pos.y < bounds.y + handle;
        let bottom = pos.y >= bounds.bottom() - handle;

        let corner = match (top, bottom, left, right) {
            (true, _, true, _) => Some(ResizeDirection::NW),
            (true, _, _, true) => Some(ResizeDirection::NE),
            (_, true, true, _) => Some(ResizeDirection::SW),
            (_, true, _, true) => Some(ResizeDirection::SE),
            _ => None,
        };
        if corners_only || corner.is_some() {
            return corner;
        }

        if top {
            Some(ResizeDirection::N)
        } else if bottom {
            Some(ResizeDirection::S)
        } else if left {
            Some(ResizeDirection::W)
        } else if right {
            Some(ResizeDirection::E)
        } else {
            None
        }
    }
}
