//! Pointer gesture state: exists only between press and release.

use mintdesk_common::{AppId, Point, Rect, ResizeDirection};

/// Current drag operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Dragging by the title bar.
    Move {
        app_id: AppId,
        start_pointer: Point,
        start_bounds: Rect,
    },
    /// Dragging a resize edge or corner.
    Resize {
        app_id: AppId,
        direction: ResizeDirection,
        start_pointer: Point,
        start_bounds: Rect,
    },
}

impl Gesture {
    pub fn app_id(&self) -> &AppId {
        match self {
            Gesture::Move { app_id, .. } | Gesture::Resize { app_id, .. } => app_id,
        }
    }

    pub fn start_bounds(&self) -> Rect {
        match self {
            Gesture::Move { start_bounds, .. } | Gesture::Resize { start_bounds, .. } => {
                *start_bounds
            }
        }
    }

    /// Pointer travel since the press.
    pub fn delta(&self, pointer: Point) -> Point {
        match self {
            Gesture::Move { start_pointer, .. } | Gesture::Resize { start_pointer, .. } => {
                pointer - *start_pointer
            }
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Gesture::Move { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Gesture::Resize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_gesture_delta() {
        let g = Gesture::Move {
            app_id: "about".into(),
            start_pointer: Point::new(150.0, 110.0),
            start_bounds: Rect::new(100.0, 100.0, 400.0, 300.0),
        };
        assert!(g.is_move());
        assert!(!g.is_resize());
        assert_eq!(g.app_id().as_str(), "about");
        assert_eq!(g.delta(Point::new(170.0, 90.0)), Point::new(20.0, -20.0));
    }

    #[test]
    fn resize_gesture_keeps_start_bounds() {
        let start = Rect::new(10.0, 20.0, 300.0, 200.0);
        let g = Gesture::Resize {
            app_id: "skills".into(),
            direction: ResizeDirection::SE,
            start_pointer: Point::ZERO,
            start_bounds: start,
        };
        assert!(g.is_resize());
        assert_eq!(g.start_bounds(), start);
    }
}
