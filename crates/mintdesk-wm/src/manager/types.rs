//! Core types and constructors for WindowManager.

use mintdesk_common::{AppId, Point, Rect, Size};

use crate::content::{ContentProvider, NoContent};
use crate::events::Subscribers;
use crate::gesture::Gesture;
use crate::record::WindowRecord;
use crate::settings::WmSettings;
use crate::taskbar::TaskbarEntry;

/// Placement overrides for `open`. Unset fields fall back to settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpenOptions {
    pub position: Option<Point>,
    pub size: Option<Size>,
}

impl OpenOptions {
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
            size: None,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

/// Owns every open window: registry, z-order, focus, the active gesture and
/// the subscriber list.
pub struct WindowManager {
    /// Records in opening order. Stacking is by `z_index`, not position here.
    pub(super) records: Vec<WindowRecord>,
    pub(super) active: Option<AppId>,
    /// Next z-index to hand out.
    pub(super) next_z: u32,
    pub(super) settings: WmSettings,
    pub(super) provider: Box<dyn ContentProvider>,
    pub(super) subscribers: Subscribers,
    pub(super) gesture: Option<Gesture>,
    /// Last published widget visibility.
    pub(super) widgets_visible: bool,
}

impl WindowManager {
    pub fn new(settings: WmSettings, provider: impl ContentProvider + 'static) -> Self {
        Self {
            records: Vec::new(),
            active: None,
            next_z: settings.z_index_seed,
            widgets_visible: settings.widgets,
            settings,
            provider: Box::new(provider),
            subscribers: Subscribers::default(),
            gesture: None,
        }
    }

    // -- Accessors --

    pub fn get(&self, app_id: &AppId) -> Option<&WindowRecord> {
        self.records.iter().find(|r| &r.app_id == app_id)
    }

    pub fn is_open(&self, app_id: &AppId) -> bool {
        self.index_of(app_id).is_some()
    }

    /// All records in opening order.
    pub fn records(&self) -> &[WindowRecord] {
        &self.records
    }

    pub fn active(&self) -> Option<&AppId> {
        self.active.as_ref()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Non-minimized windows, back to front.
    pub fn stacking_order(&self) -> Vec<&AppId> {
        let mut visible: Vec<&WindowRecord> =
            self.records.iter().filter(|r| !r.minimized).collect();
        visible.sort_by_key(|r| r.z_index);
        visible.into_iter().map(|r| &r.app_id).collect()
    }

    /// Topmost non-minimized window.
    pub fn top(&self) -> Option<&AppId> {
        self.records
            .iter()
            .filter(|r| !r.minimized)
            .max_by_key(|r| r.z_index)
            .map(|r| &r.app_id)
    }

    pub fn widgets_visible(&self) -> bool {
        self.widgets_visible
    }

    /// Taskbar view of every record, in opening order.
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.records
            .iter()
            .map(|r| TaskbarEntry {
                app_id: r.app_id.clone(),
                title: r.title.clone(),
                icon: r.icon.clone(),
                active: !r.minimized && self.active.as_ref() == Some(&r.app_id),
                minimized: r.minimized,
            })
            .collect()
    }

    pub fn settings(&self) -> &WmSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Size {
        self.settings.viewport
    }

    pub fn work_area(&self) -> Rect {
        self.settings.work_area()
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    // -- Internal helpers --

    pub(super) fn index_of(&self, app_id: &AppId) -> Option<usize> {
        self.records.iter().position(|r| &r.app_id == app_id)
    }

    pub(super) fn next_z_index(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Drop the active gesture if it targets `app_id`.
    pub(super) fn cancel_gesture_for(&mut self, app_id: &AppId) {
        if self.gesture.as_ref().is_some_and(|g| g.app_id() == app_id) {
            self.gesture = None;
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WmSettings::default(), NoContent)
    }
}
