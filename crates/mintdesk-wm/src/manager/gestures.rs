//! Hit testing, pointer gestures, and the move/resize operations they drive.

use std::cmp::Reverse;

use mintdesk_common::{AppId, Point, ResizeDirection};
use tracing::debug;

use crate::gesture::Gesture;
use crate::geometry;
use crate::region::{WindowRegion, FRAME_STYLE};

use super::WindowManager;

impl WindowManager {
    /// Topmost visible window and region under `point`.
    pub fn region_at(&self, point: Point) -> Option<(AppId, WindowRegion)> {
        let mut visible: Vec<_> = self.records.iter().filter(|r| !r.minimized).collect();
        visible.sort_by_key(|r| Reverse(r.z_index));
        visible.into_iter().find_map(|r| {
            FRAME_STYLE
                .hit_test(r.bounds, point)
                .map(|region| (r.app_id.clone(), region))
        })
    }

    /// Pointer down on `region` of `app_id`.
    ///
    /// Always focuses the window. Starts a move on the title bar or a resize
    /// on an edge; maximized windows never start a gesture. Returns whether a
    /// gesture started.
    pub fn press(&mut self, app_id: &AppId, region: WindowRegion, pointer: Point) -> bool {
        self.gesture = None;
        if !self.focus(app_id) {
            return false;
        }
        let Some(record) = self.get(app_id) else {
            return false;
        };
        if record.maximized {
            return false;
        }

        let start_bounds = record.bounds;
        self.gesture = match region {
            WindowRegion::TitleBar => Some(Gesture::Move {
                app_id: app_id.clone(),
                start_pointer: pointer,
                start_bounds,
            }),
            WindowRegion::Resize(direction) => Some(Gesture::Resize {
                app_id: app_id.clone(),
                direction,
                start_pointer: pointer,
                start_bounds,
            }),
            _ => None,
        };
        self.gesture.is_some()
    }

    /// Forward pointer travel since the press to the active gesture.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(gesture) = self.gesture.clone() else {
            return false;
        };
        let delta = gesture.delta(pointer);
        match gesture {
            Gesture::Move { app_id, .. } => self.move_window(&app_id, delta.x, delta.y),
            Gesture::Resize {
                app_id, direction, ..
            } => self.resize(&app_id, direction, delta.x, delta.y),
        }
    }

    /// End the active gesture. Returns whether one was active.
    pub fn release(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    /// Move by `(dx, dy)` from the gesture-start origin, or from the current
    /// origin outside a move gesture. The result is clamped into the work
    /// area and snapped to nearby edges.
    pub fn move_window(&mut self, app_id: &AppId, dx: f64, dy: f64) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        let record = &self.records[idx];
        if record.maximized || record.minimized {
            return false;
        }

        let base = match &self.gesture {
            Some(g @ Gesture::Move { .. }) if g.app_id() == app_id => g.start_bounds(),
            _ => record.bounds,
        };
        let origin = geometry::place(
            base.origin() + Point::new(dx, dy),
            record.bounds.size(),
            self.work_area(),
            self.settings.snap_threshold,
        );

        let record = &mut self.records[idx];
        record.bounds.x = origin.x;
        record.bounds.y = origin.y;
        true
    }

    /// Resize from `direction` by `(dx, dy)`, relative to the gesture-start
    /// bounds or the current bounds outside a resize gesture.
    pub fn resize(&mut self, app_id: &AppId, direction: ResizeDirection, dx: f64, dy: f64) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        let record = &self.records[idx];
        if record.maximized || record.minimized {
            return false;
        }

        let base = match &self.gesture {
            Some(g @ Gesture::Resize { .. }) if g.app_id() == app_id => g.start_bounds(),
            _ => record.bounds,
        };
        let bounds =
            geometry::resize_bounds(base, direction, dx, dy, self.settings.min_size);
        self.records[idx].bounds = bounds;
        true
    }

    /// Full title-bar drag: press, move by `(dx, dy)`, release.
    pub fn drag_by(&mut self, app_id: &AppId, dx: f64, dy: f64) -> bool {
        let Some(record) = self.get(app_id) else {
            return false;
        };
        let title = FRAME_STYLE.title_bar_rect(record.bounds);
        let grab = Point::new(title.x + title.width / 4.0, title.y + title.height / 2.0);
        let moved = self.press(app_id, WindowRegion::TitleBar, grab)
            && self.pointer_move(grab + Point::new(dx, dy));
        self.release();
        moved
    }

    /// Full edge drag: press on `direction`, move by `(dx, dy)`, release.
    pub fn resize_by(
        &mut self,
        app_id: &AppId,
        direction: ResizeDirection,
        dx: f64,
        dy: f64,
    ) -> bool {
        let Some(record) = self.get(app_id) else {
            return false;
        };
        let b = record.bounds;
        let x = if direction.west() {
            b.x
        } else if direction.east() {
            b.right() - 1.0
        } else {
            b.x + b.width / 2.0
        };
        let y = if direction.north() {
            b.y
        } else if direction.south() {
            b.bottom() - 1.0
        } else {
            b.y + b.height / 2.0
        };
        let grab = Point::new(x, y);
        let resized = self.press(app_id, WindowRegion::Resize(direction), grab)
            && self.pointer_move(grab + Point::new(dx, dy));
        self.release();
        resized
    }

    /// Click at `point`: press and release, then run the window button under
    /// the pointer, if any.
    pub fn click(&mut self, point: Point) -> Option<(AppId, WindowRegion)> {
        let (app_id, region) = self.region_at(point)?;
        self.press(&app_id, region, point);
        self.release();

        match region {
            WindowRegion::CloseButton => {
                self.close(&app_id);
            }
            WindowRegion::MinimizeButton => {
                self.minimize(&app_id);
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(&app_id);
            }
            _ => {}
        }
        debug!(app = %app_id, ?region, "click");
        Some((app_id, region))
    }
}
