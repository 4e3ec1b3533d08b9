//! Focus and restore handling for WindowManager.

use mintdesk_common::AppId;
use tracing::debug;

use super::WindowManager;

impl WindowManager {
    /// Raise `app_id` to the top and make it the sole active window.
    /// A minimized window is restored first.
    pub fn focus(&mut self, app_id: &AppId) -> bool {
        let prev = self.active.clone();
        if !self.focus_inner(app_id) {
            return false;
        }
        self.publish(prev);
        true
    }

    /// Clear the minimized flag and focus.
    pub fn restore(&mut self, app_id: &AppId) -> bool {
        self.focus(app_id)
    }

    /// Taskbar entry click: restore a minimized window, otherwise focus it.
    pub fn activate_from_taskbar(&mut self, app_id: &AppId) -> bool {
        match self.get(app_id) {
            Some(r) if r.minimized => self.restore(app_id),
            Some(_) => self.focus(app_id),
            None => false,
        }
    }

    pub(super) fn focus_inner(&mut self, app_id: &AppId) -> bool {
        let Some(idx) = self.index_of(app_id) else {
            return false;
        };
        let z = self.next_z_index();
        let record = &mut self.records[idx];
        record.minimized = false;
        record.z_index = z;
        self.active = Some(app_id.clone());
        debug!(app = %app_id, z, "window focused");
        true
    }
}
