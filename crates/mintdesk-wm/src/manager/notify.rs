//! Subscriber registration and change publication.

use mintdesk_common::AppId;

use crate::events::{SubscriptionId, WindowEvent};

use super::WindowManager;

impl WindowManager {
    /// Register a callback invoked synchronously after every state change.
    pub fn subscribe(&mut self, callback: impl FnMut(&WindowEvent) + 'static) -> SubscriptionId {
        self.subscribers.add(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Emit the events implied by a completed mutation.
    pub(super) fn publish(&mut self, prev_active: Option<AppId>) {
        let widgets = self.settings.widgets && !self.records.iter().any(|r| r.maximized);
        if widgets != self.widgets_visible {
            self.widgets_visible = widgets;
            self.subscribers
                .emit(&WindowEvent::WidgetsVisibilityChanged(widgets));
        }

        if self.active != prev_active {
            self.subscribers
                .emit(&WindowEvent::ActiveWindowChanged(self.active.clone()));
        }

        let entries = self.taskbar();
        self.subscribers.emit(&WindowEvent::WindowsChanged(entries));
    }
}
