use super::{Action, ProjectFilter, ResizeDirection};
use crate::types::AppId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: expected {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },
}

impl Action {
    /// Parse one shell line. Blank lines and `#` comments yield `Action::None`.
    pub fn parse_command(line: &str) -> Result<Action, ActionParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Action::None);
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match command.as_str() {
            "open" => Ok(Action::OpenApp(app_arg("open", &args)?)),
            "close" => Ok(Action::CloseApp(app_arg("close", &args)?)),
            "focus" => Ok(Action::FocusApp(app_arg("focus", &args)?)),
            "min" | "minimize" => Ok(Action::MinimizeApp(app_arg("min", &args)?)),
            "max" | "maximize" => Ok(Action::ToggleMaximize(app_arg("max", &args)?)),
            "taskbar" => Ok(Action::TaskbarClick(app_arg("taskbar", &args)?)),
            "show" => Ok(Action::ShowWindow(app_arg("show", &args)?)),
            "refresh" => Ok(Action::RefreshPanel(app_arg("refresh", &args)?)),
            "drag" => {
                arity("drag", &args, 3)?;
                Ok(Action::DragWindow {
                    app: AppId::from(args[0]),
                    dx: number("dx", args[1])?,
                    dy: number("dy", args[2])?,
                })
            }
            "resize" => {
                arity("resize", &args, 4)?;
                Ok(Action::ResizeWindow {
                    app: AppId::from(args[0]),
                    direction: args[1].parse::<ResizeDirection>()?,
                    dx: number("dx", args[2])?,
                    dy: number("dy", args[3])?,
                })
            }
            "click" => {
                arity("click", &args, 2)?;
                Ok(Action::Click {
                    x: number("x", args[0])?,
                    y: number("y", args[1])?,
                })
            }
            "viewport" => {
                arity("viewport", &args, 2)?;
                Ok(Action::SetViewport {
                    width: number("width", args[0])?,
                    height: number("height", args[1])?,
                })
            }
            "filter" => {
                arity("filter", &args, 1)?;
                Ok(Action::FilterProjects(args[0].parse::<ProjectFilter>()?))
            }
            "desktop" => no_args("desktop", &args, Action::ToggleShowDesktop),
            "list" | "ls" => no_args("list", &args, Action::ListWindows),
            "help" | "?" => no_args("help", &args, Action::Help),
            "quit" | "exit" => no_args("quit", &args, Action::Quit),
            other => Err(ActionParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn arity(command: &'static str, args: &[&str], expected: usize) -> Result<(), ActionParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ActionParseError::WrongArity {
            command,
            expected,
            got: args.len(),
        })
    }
}

fn app_arg(command: &'static str, args: &[&str]) -> Result<AppId, ActionParseError> {
    arity(command, args, 1)?;
    Ok(AppId::from(args[0]))
}

fn no_args(
    command: &'static str,
    args: &[&str],
    action: Action,
) -> Result<Action, ActionParseError> {
    arity(command, args, 0)?;
    Ok(action)
}

fn number(name: &'static str, raw: &str) -> Result<f64, ActionParseError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ActionParseError::InvalidArgument {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_noops() {
        assert_eq!(Action::parse_command("").unwrap(), Action::None);
        assert_eq!(Action::parse_command("   ").unwrap(), Action::None);
        assert_eq!(Action::parse_command("# open about").unwrap(), Action::None);
    }

    #[test]
    fn single_app_commands() {
        assert_eq!(
            Action::parse_command("open about").unwrap(),
            Action::OpenApp("about".into())
        );
        assert_eq!(
            Action::parse_command("  MIN skills ").unwrap(),
            Action::MinimizeApp("skills".into())
        );
        assert_eq!(
            Action::parse_command("maximize projects").unwrap(),
            Action::ToggleMaximize("projects".into())
        );
        assert_eq!(
            Action::parse_command("taskbar contact").unwrap(),
            Action::TaskbarClick("contact".into())
        );
    }

    #[test]
    fn drag_and_resize() {
        assert_eq!(
            Action::parse_command("drag about 40 -12.5").unwrap(),
            Action::DragWindow {
                app: "about".into(),
                dx: 40.0,
                dy: -12.5,
            }
        );
        assert_eq!(
            Action::parse_command("resize about nw -20 -10").unwrap(),
            Action::ResizeWindow {
                app: "about".into(),
                direction: ResizeDirection::NW,
                dx: -20.0,
                dy: -10.0,
            }
        );
    }

    #[test]
    fn no_arg_commands() {
        assert_eq!(
            Action::parse_command("desktop").unwrap(),
            Action::ToggleShowDesktop
        );
        assert_eq!(Action::parse_command("ls").unwrap(), Action::ListWindows);
        assert_eq!(Action::parse_command("exit").unwrap(), Action::Quit);
        assert_eq!(Action::parse_command("?").unwrap(), Action::Help);
    }

    #[test]
    fn filter_and_viewport() {
        assert_eq!(
            Action::parse_command("filter figma").unwrap(),
            Action::FilterProjects(ProjectFilter::Figma)
        );
        assert_eq!(
            Action::parse_command("viewport 1280 720").unwrap(),
            Action::SetViewport {
                width: 1280.0,
                height: 720.0,
            }
        );
    }

    #[test]
    fn unknown_command() {
        let err = Action::parse_command("paint canvas").unwrap_err();
        assert_eq!(err, ActionParseError::UnknownCommand("paint".into()));
        assert_eq!(err.to_string(), "unknown command: paint");
    }

    #[test]
    fn wrong_arity() {
        let err = Action::parse_command("drag about 10").unwrap_err();
        assert_eq!(
            err,
            ActionParseError::WrongArity {
                command: "drag",
                expected: 3,
                got: 2,
            }
        );
        assert!(Action::parse_command("open").is_err());
        assert!(Action::parse_command("desktop now").is_err());
    }

    #[test]
    fn invalid_numbers_rejected() {
        assert!(matches!(
            Action::parse_command("click abc 10").unwrap_err(),
            ActionParseError::InvalidArgument { name: "x", .. }
        ));
        assert!(Action::parse_command("click NaN 10").is_err());
        assert!(Action::parse_command("click inf 10").is_err());
    }

    #[test]
    fn invalid_direction_rejected() {
        let err = Action::parse_command("resize about up 1 1").unwrap_err();
        assert_eq!(
            err,
            ActionParseError::InvalidArgument {
                name: "direction",
                value: "up".into(),
            }
        );
    }
}
