//! Open, close, minimize, maximize and desktop-wide operations.

use mintdesk_common::{AppId, Rect, Size};
use tracing::debug;

use crate::catalog::resolve_meta;
use crate::content::{Surface, TextSurface, CONTENT_NOT_FOUND};
use crate::geometry;
use crate::record::WindowRecord;

use super::{OpenOptions, WindowManager};

impl WindowManager {
    /// Open `app_id`, or bring the existing window forward.
    ///
    /// Never creates a second record for the same id. A minimized window is
    /// restored. Unknown ids open with a fallback title and placeholder body.
    pub fn open(&mut self, app_id: &AppId, options: OpenOptions) -> &WindowRecord {
        let prev = self.active.clone();
        let idx = match self.index_of(app_id) {
            Some(idx) => {
                debug!(app = %app_id, "window already open");
                idx
            }
            None => {
                let record = self.create_record(app_id, options);
                debug!(app = %app_id, bounds = ?record.bounds, "window opened");
                self.records.push(record);
                self.records.len() - 1
            }
        };
        self.focus_inner(app_id);
        self.publish(prev);
        &self.records[idx]
    }

    fn create_record(&mut self, app_id: &AppId, options: OpenOptions) -> WindowRecord {
        let meta = resolve_meta(app_id);
        let min = self.settings.min_size;
        let size = options.size.unwrap_or(self.settings.default_size);
        let size = Size::new(size.width.max(min.width), size.height.max(min.height));
        let origin = options
            .position
            .unwrap_or_else(|| self.settings.initial_position(app_id));
        let origin = geometry::clamp_origin(origin, size, self.work_area());
        let content = self
            .provider
            .content(app_id)
            .unwrap_or_else(|| TextSurface::boxed(CONTENT_NOT_FOUND));

        WindowRecord {
            app_id: app_id.clone(),
            title: meta.title,
            icon: meta.icon,
            bounds: Rect::from_origin_size(origin, size),
            z_index: self.next_z_index(),
            minimized: false,
            maximized: false,
            restore_bounds: None,
            content,
        }
    }

    /// Remove the window and drop its content.
    pub fn close(&mut self, app_id: &AppId) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        let prev = self.active.clone();
        let record = self.records.remove(idx);
        if self.active.as_ref() == Some(app_id) {
            self.active = None;
        }
        self.cancel_gesture_for(app_id);
        drop(record);
        debug!(app = %app_id, "window closed");
        self.publish(prev);
        true
    }

    /// Hide the window. A maximized window is un-maximized first.
    /// If it was active, nothing becomes active.
    pub fn minimize(&mut self, app_id: &AppId) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        if self.records[idx].minimized {
            return false;
        }
        let prev = self.active.clone();
        self.minimize_at(idx);
        self.publish(prev);
        true
    }

    fn minimize_at(&mut self, idx: usize) {
        self.unmaximize_at(idx);
        let app_id = self.records[idx].app_id.clone();
        self.records[idx].minimized = true;
        if self.active.as_ref() == Some(&app_id) {
            self.active = None;
        }
        self.cancel_gesture_for(&app_id);
        debug!(app = %app_id, "window minimized");
    }

    fn unmaximize_at(&mut self, idx: usize) {
        let record = &mut self.records[idx];
        if record.maximized {
            record.bounds = record.restore_bounds.take().unwrap_or(record.bounds);
            record.maximized = false;
        }
    }

    /// Fill the work area, or return to the bounds saved on maximize.
    /// A minimized window is restored first.
    pub fn toggle_maximize(&mut self, app_id: &AppId) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        let prev = self.active.clone();

        if self.records[idx].maximized {
            self.unmaximize_at(idx);
            debug!(app = %app_id, "window unmaximized");
        } else {
            if self.records[idx].minimized {
                self.focus_inner(app_id);
            }
            let area = self.work_area();
            let record = &mut self.records[idx];
            record.restore_bounds = Some(record.bounds);
            record.bounds = area;
            record.maximized = true;
            debug!(app = %app_id, "window maximized");
        }

        self.cancel_gesture_for(app_id);
        self.publish(prev);
        true
    }

    /// Minimize everything, or restore everything when all windows are
    /// already minimized. Restoring walks the previous z order so the old
    /// top window ends up on top and active.
    pub fn toggle_show_desktop(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        let prev = self.active.clone();

        if self.records.iter().all(|r| r.minimized) {
            let mut order: Vec<(u32, AppId)> = self
                .records
                .iter()
                .map(|r| (r.z_index, r.app_id.clone()))
                .collect();
            order.sort_by_key(|(z, _)| *z);
            for (_, app_id) in order {
                self.focus_inner(&app_id);
            }
            debug!(count = self.records.len(), "desktop restored");
        } else {
            for idx in 0..self.records.len() {
                if !self.records[idx].minimized {
                    self.minimize_at(idx);
                }
            }
            debug!(count = self.records.len(), "desktop shown");
        }

        self.publish(prev);
        true
    }

    /// Resize the viewport. Maximized windows refit the new work area; the
    /// rest are clamped back inside it.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.settings.viewport = viewport;
        let area = self.work_area();
        for record in &mut self.records {
            if record.maximized {
                record.bounds = area;
            } else {
                let origin =
                    geometry::clamp_origin(record.bounds.origin(), record.bounds.size(), area);
                record.bounds.x = origin.x;
                record.bounds.y = origin.y;
            }
        }
        debug!(width = viewport.width, height = viewport.height, "viewport changed");
        let prev = self.active.clone();
        self.publish(prev);
    }

    /// Swap a window's body. The previous surface is dropped.
    pub fn replace_content(&mut self, app_id: &AppId, content: Box<dyn Surface>) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        self.records[idx].content = content;
        debug!(app = %app_id, "content replaced");
        true
    }
}
