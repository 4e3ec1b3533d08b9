//! Synchronous window-state notifications.

use mintdesk_common::AppId;
use serde::{Deserialize, Serialize};

use crate::taskbar::TaskbarEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WindowEvent {
    /// Window list changed; carries the full taskbar view in opening order.
    WindowsChanged(Vec<TaskbarEntry>),
    ActiveWindowChanged(Option<AppId>),
    /// Desktop widgets are shown iff no window is maximized.
    WidgetsVisibilityChanged(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&WindowEvent)>;

/// Subscriber list, invoked in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub fn add(&mut self, callback: impl FnMut(&WindowEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: &WindowEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::default();

        let l1 = log.clone();
        subs.add(move |_| l1.borrow_mut().push(1));
        let l2 = log.clone();
        subs.add(move |_| l2.borrow_mut().push(2));

        subs.emit(&WindowEvent::WidgetsVisibilityChanged(false));
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn remove_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subs = Subscribers::default();
        let c = count.clone();
        let id = subs.add(move |_| *c.borrow_mut() += 1);

        subs.emit(&WindowEvent::ActiveWindowChanged(None));
        assert!(subs.remove(id));
        assert!(!subs.remove(id));
        subs.emit(&WindowEvent::ActiveWindowChanged(None));

        assert_eq!(*count.borrow(), 1);
        assert!(subs.is_empty());
    }

    #[test]
    fn window_event_serde() {
        let event = WindowEvent::ActiveWindowChanged(Some("about".into()));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"ActiveWindowChanged","data":"about"}"#);
        let back: WindowEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
