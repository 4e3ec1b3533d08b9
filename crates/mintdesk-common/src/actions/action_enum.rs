use serde::{Deserialize, Serialize};

use super::{ProjectFilter, ResizeDirection};
use crate::types::AppId;

/// Every user-triggerable action on the desktop.
///
/// Shell commands, menu entries and taskbar clicks all resolve to an `Action`.
/// The session dispatcher matches on this enum to route to the window manager
/// or the panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // -- Windows --
    OpenApp(AppId),
    CloseApp(AppId),
    FocusApp(AppId),
    MinimizeApp(AppId),
    ToggleMaximize(AppId),
    DragWindow {
        app: AppId,
        dx: f64,
        dy: f64,
    },
    ResizeWindow {
        app: AppId,
        direction: ResizeDirection,
        dx: f64,
        dy: f64,
    },
    Click {
        x: f64,
        y: f64,
    },

    // -- Taskbar --
    TaskbarClick(AppId),
    ToggleShowDesktop,
    ListWindows,
    ShowWindow(AppId),

    // -- Desktop --
    SetViewport {
        width: f64,
        height: f64,
    },

    // -- Panels --
    FilterProjects(ProjectFilter),
    RefreshPanel(AppId),

    // -- Session --
    Help,
    Quit,

    // -- Noop --
    None,
}
