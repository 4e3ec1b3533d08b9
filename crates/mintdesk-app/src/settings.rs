//! Translation from the on-disk config to the runtime settings of each crate.

use std::time::Duration;

use mintdesk_common::{AppId, Point, Size};
use mintdesk_config::schema::GithubConfig;
use mintdesk_config::DeskConfig;
use mintdesk_github::{ClientConfig, RetryPolicy, ServiceSettings};
use mintdesk_wm::WmSettings;

pub fn wm_settings(config: &DeskConfig) -> WmSettings {
    let desktop = &config.desktop;
    let windows = &config.windows;
    WmSettings {
        viewport: Size::new(desktop.viewport_width, desktop.viewport_height),
        panel_height: desktop.panel_height,
        z_index_seed: desktop.z_index_seed,
        default_size: Size::new(windows.default_width, windows.default_height),
        min_size: Size::new(windows.min_width, windows.min_height),
        snap_threshold: windows.snap_threshold,
        positions: windows
            .positions
            .iter()
            .map(|(id, p)| (AppId::from(id.as_str()), Point::new(p.x, p.y)))
            .collect(),
        widgets: desktop.widgets,
    }
}

pub fn client_config(github: &GithubConfig) -> ClientConfig {
    ClientConfig {
        api_base: github.api_base.clone(),
        username: github.username.clone(),
        timeout: Duration::from_secs(github.request_timeout_secs),
    }
}

pub fn service_settings(github: &GithubConfig) -> ServiceSettings {
    ServiceSettings {
        excluded_repos: github.excluded_repos.clone(),
        repo_limit: github.repo_limit,
        cache_ttl: Duration::from_secs(github.cache_ttl_secs),
        retry: RetryPolicy {
            max_retries: github.max_retries,
            initial_backoff: Duration::from_millis(github.initial_backoff_ms),
            max_backoff: Duration::from_millis(github.max_backoff_ms),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_wm_defaults() {
        let from_config = wm_settings(&DeskConfig::default());
        let defaults = WmSettings::default();
        assert_eq!(from_config.viewport, defaults.viewport);
        assert_eq!(from_config.panel_height, defaults.panel_height);
        assert_eq!(from_config.z_index_seed, defaults.z_index_seed);
        assert_eq!(from_config.default_size, defaults.default_size);
        assert_eq!(from_config.min_size, defaults.min_size);
        assert_eq!(from_config.positions, defaults.positions);
    }

    #[test]
    fn positions_are_carried_over() {
        let mut config = DeskConfig::default();
        config.windows.positions.insert(
            "resume".into(),
            mintdesk_config::schema::PositionConfig::new(300.0, 40.0),
        );
        let settings = wm_settings(&config);
        assert_eq!(
            settings.initial_position(&AppId::from("resume")),
            Point::new(300.0, 40.0)
        );
    }

    #[test]
    fn github_settings() {
        let github = GithubConfig::default();
        let client = client_config(&github);
        assert_eq!(client.username, "anjisha616");
        assert_eq!(client.timeout, Duration::from_secs(15));

        let service = service_settings(&github);
        assert_eq!(service.repo_limit, 6);
        assert_eq!(service.cache_ttl, Duration::from_secs(300));
        assert_eq!(service.retry.max_retries, 3);
        assert_eq!(service.retry.initial_backoff, Duration::from_millis(500));
        assert!(service.excluded_repos.iter().any(|r| r == "netflix-clone"));
    }
}
