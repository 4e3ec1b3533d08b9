//! Taskbar view: a subscriber mirroring the window list.

use std::cell::RefCell;
use std::rc::Rc;

use mintdesk_common::AppId;
use serde::{Deserialize, Serialize};

use crate::events::{SubscriptionId, WindowEvent};
use crate::manager::WindowManager;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    pub active: bool,
    pub minimized: bool,
}

/// Latest taskbar state, fed only by `WindowEvent`s.
#[derive(Debug, Clone, Default)]
pub struct Taskbar {
    entries: Vec<TaskbarEntry>,
    active: Option<AppId>,
    widgets_visible: bool,
}

impl Taskbar {
    pub fn new() -> Self {
        Self {
            widgets_visible: true,
            ..Self::default()
        }
    }

    /// Subscribe a shared taskbar to `wm`, seeded with its current state.
    pub fn attach(wm: &mut WindowManager) -> (Rc<RefCell<Taskbar>>, SubscriptionId) {
        let taskbar = Rc::new(RefCell::new(Taskbar {
            entries: wm.taskbar(),
            active: wm.active().cloned(),
            widgets_visible: wm.widgets_visible(),
        }));
        let sink = Rc::clone(&taskbar);
        let id = wm.subscribe(move |event| sink.borrow_mut().apply(event));
        (taskbar, id)
    }

    pub fn apply(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::WindowsChanged(entries) => {
                self.entries = entries.clone();
                self.active = entries
                    .iter()
                    .find(|e| e.active)
                    .map(|e| e.app_id.clone());
            }
            WindowEvent::ActiveWindowChanged(active) => self.active = active.clone(),
            WindowEvent::WidgetsVisibilityChanged(visible) => self.widgets_visible = *visible,
        }
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&AppId> {
        self.active.as_ref()
    }

    pub fn widgets_visible(&self) -> bool {
        self.widgets_visible
    }

    /// One-line rendering: `[icon title]`, `*` marks the active entry and
    /// minimized entries are parenthesized.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "(no windows)".into();
        }
        self.entries
            .iter()
            .map(|e| {
                let label = format!("{} {}", e.icon, e.title);
                if e.minimized {
                    format!("[({label})]")
                } else if e.active {
                    format!("[{label}*]")
                } else {
                    format!("[{label}]")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
