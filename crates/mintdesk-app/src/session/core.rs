//! Session state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;
use std::sync::Arc;

use mintdesk_common::{AppId, EventBus, ProjectFilter};
use mintdesk_github::GithubService;
use mintdesk_wm::{Taskbar, WindowManager};

/// Bus capacity; panel loads are the only publishers.
const EVENT_CAPACITY: usize = 64;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One desktop: the window manager, its taskbar view, and the background
/// loaders of the GitHub panels. Output goes to `out`.
pub struct Session<W: Write> {
    pub(super) wm: WindowManager,
    pub(super) taskbar: Rc<RefCell<Taskbar>>,
    pub(super) bus: EventBus,
    /// `None` when running offline.
    pub(super) github: Option<Arc<GithubService>>,
    pub(super) username: String,
    pub(super) filter: ProjectFilter,
    /// Loads spawned but not yet reported back over the bus.
    pub(super) pending: usize,
    /// Newest load in flight per app; older results are dropped.
    pub(super) loads: HashMap<AppId, u64>,
    pub(super) next_load: u64,
    pub(super) out: W,
}

impl<W: Write> Session<W> {
    pub fn new(
        mut wm: WindowManager,
        github: Option<Arc<GithubService>>,
        username: impl Into<String>,
        out: W,
    ) -> Self {
        let (taskbar, _) = Taskbar::attach(&mut wm);
        Self {
            wm,
            taskbar,
            bus: EventBus::new(EVENT_CAPACITY),
            github,
            username: username.into(),
            filter: ProjectFilter::default(),
            pending: 0,
            loads: HashMap::new(),
            next_load: 0,
            out,
        }
    }

    pub fn window_manager(&self) -> &WindowManager {
        &self.wm
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn pending_loads(&self) -> usize {
        self.pending
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
