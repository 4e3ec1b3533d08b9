use super::Action;

impl Action {
    /// Human-readable label for the help listing.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenApp(_) => "Open App",
            Action::CloseApp(_) => "Close Window",
            Action::FocusApp(_) => "Focus Window",
            Action::MinimizeApp(_) => "Minimize Window",
            Action::ToggleMaximize(_) => "Maximize / Restore Window",
            Action::DragWindow { .. } => "Drag Window",
            Action::ResizeWindow { .. } => "Resize Window",
            Action::Click { .. } => "Click Desktop",
            Action::TaskbarClick(_) => "Taskbar Entry",
            Action::ToggleShowDesktop => "Show Desktop",
            Action::ListWindows => "List Windows",
            Action::ShowWindow(_) => "Show Window Content",
            Action::SetViewport { .. } => "Resize Viewport",
            Action::FilterProjects(_) => "Filter Projects",
            Action::RefreshPanel(_) => "Refresh Panel",
            Action::Help => "Help",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Command syntax shown next to the label in the help listing.
    pub fn usage(&self) -> &'static str {
        match self {
            Action::OpenApp(_) => "open <app>",
            Action::CloseApp(_) => "close <app>",
            Action::FocusApp(_) => "focus <app>",
            Action::MinimizeApp(_) => "min <app>",
            Action::ToggleMaximize(_) => "max <app>",
            Action::DragWindow { .. } => "drag <app> <dx> <dy>",
            Action::ResizeWindow { .. } => "resize <app> <n|s|e|w|ne|nw|se|sw> <dx> <dy>",
            Action::Click { .. } => "click <x> <y>",
            Action::TaskbarClick(_) => "taskbar <app>",
            Action::ToggleShowDesktop => "desktop",
            Action::ListWindows => "list",
            Action::ShowWindow(_) => "show <app>",
            Action::SetViewport { .. } => "viewport <width> <height>",
            Action::FilterProjects(_) => "filter <all|github|figma>",
            Action::RefreshPanel(_) => "refresh <app>",
            Action::Help => "help",
            Action::Quit => "quit",
            Action::None => "",
        }
    }

    /// All actions listed by `help`, one representative per command.
    pub fn help_actions() -> Vec<Action> {
        use crate::actions::{ProjectFilter, ResizeDirection};
        use crate::types::AppId;

        let app = AppId::from("about");
        vec![
            Action::OpenApp(app.clone()),
            Action::CloseApp(app.clone()),
            Action::FocusApp(app.clone()),
            Action::MinimizeApp(app.clone()),
            Action::ToggleMaximize(app.clone()),
            Action::DragWindow {
                app: app.clone(),
                dx: 0.0,
                dy: 0.0,
            },
            Action::ResizeWindow {
                app: app.clone(),
                direction: ResizeDirection::SE,
                dx: 0.0,
                dy: 0.0,
            },
            Action::Click { x: 0.0, y: 0.0 },
            Action::TaskbarClick(app.clone()),
            Action::ToggleShowDesktop,
            Action::ListWindows,
            Action::ShowWindow(app.clone()),
            Action::SetViewport {
                width: 0.0,
                height: 0.0,
            },
            Action::FilterProjects(ProjectFilter::All),
            Action::RefreshPanel(app),
            Action::Help,
            Action::Quit,
        ]
    }
}
