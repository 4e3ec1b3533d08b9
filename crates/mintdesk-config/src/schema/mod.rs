//! Configuration schema types for mintdesk.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod desktop;
mod github;
mod logging;
mod windows;

pub use desktop::*;
pub use github::*;
pub use logging::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub desktop: DesktopConfig,
    pub windows: WindowsConfig,
    pub github: GithubConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: DeskConfig = toml::from_str("").unwrap();
        assert_eq!(config.desktop.z_index_seed, 100);
        assert_eq!(config.desktop.panel_height, 48.0);
        assert_eq!(config.windows.snap_threshold, 20.0);
        assert_eq!(config.github.repo_limit, 6);
        assert_eq!(config.github.cache_ttl_secs, 300);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn default_positions_cover_portfolio_apps() {
        let windows = WindowsConfig::default();
        assert_eq!(
            windows.positions.get("about"),
            Some(&PositionConfig::new(100.0, 80.0))
        );
        assert_eq!(
            windows.positions.get("projects"),
            Some(&PositionConfig::new(200.0, 120.0))
        );
        assert_eq!(
            windows.positions.get("experience"),
            Some(&PositionConfig::new(140.0, 95.0))
        );
        assert!(!windows.positions.contains_key("resume"));
    }

    #[test]
    fn partial_section_keeps_other_fields() {
        let config: DeskConfig = toml::from_str(
            r#"
[windows]
min_width = 320.0

[github]
username = "octocat"
"#,
        )
        .unwrap();
        assert_eq!(config.windows.min_width, 320.0);
        assert_eq!(config.windows.min_height, 200.0);
        assert_eq!(config.windows.positions.len(), 6);
        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.api_base, "https://api.github.com");
    }

    #[test]
    fn positions_table_replaces_defaults() {
        let config: DeskConfig = toml::from_str(
            r#"
[windows.positions]
about = { x = 10.0, y = 20.0 }
"#,
        )
        .unwrap();
        assert_eq!(config.windows.positions.len(), 1);
        assert_eq!(
            config.windows.positions["about"],
            PositionConfig::new(10.0, 20.0)
        );
    }

    #[test]
    fn excluded_repos_default() {
        let github = GithubConfig::default();
        assert!(github.excluded_repos.iter().any(|r| r == "netflix-clone"));
        assert_eq!(github.excluded_repos.len(), 4);
    }
}
