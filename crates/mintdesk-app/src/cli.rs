use std::path::PathBuf;

use clap::Parser;

/// mintdesk: a portfolio desktop driven from the command line.
#[derive(Parser, Debug)]
#[command(name = "mintdesk", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (e.g. `debug`, `mintdesk_wm=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read commands from a file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// GitHub user whose projects and stats are shown.
    #[arg(long)]
    pub user: Option<String>,

    /// Never contact GitHub; remote panels show their error text.
    #[arg(long)]
    pub offline: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Turn a bare level into a directive scoped to our crates.
pub fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("mintdesk={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "mintdesk",
            "--config",
            "/tmp/desk.toml",
            "--log-level",
            "debug",
            "--script",
            "demo.txt",
            "--user",
            "octocat",
            "--offline",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/desk.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.script, Some(PathBuf::from("demo.txt")));
        assert_eq!(args.user.as_deref(), Some("octocat"));
        assert!(args.offline);
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["mintdesk"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.script.is_none());
        assert!(!args.offline);
    }

    #[test]
    fn directive_scoping() {
        assert_eq!(log_directive("info"), "mintdesk=info");
        assert_eq!(log_directive("mintdesk_wm=trace"), "mintdesk_wm=trace");
    }
}
