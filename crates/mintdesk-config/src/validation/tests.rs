//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = DeskConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_min_width_too_small() {
    let mut config = DeskConfig::default();
    config.windows.min_width = 10.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("windows.min_width"));
}

#[test]
fn catches_negative_snap_threshold() {
    let mut config = DeskConfig::default();
    config.windows.snap_threshold = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("windows.snap_threshold"));
}

#[test]
fn catches_default_size_below_minimum() {
    let mut config = DeskConfig::default();
    config.windows.default_height = 100.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("windows.default_height"));
}

#[test]
fn catches_position_outside_viewport() {
    let mut config = DeskConfig::default();
    config
        .windows
        .positions
        .insert("about".into(), PositionConfig::new(-5.0, 10.0));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("windows.positions.about"));
}

#[test]
fn catches_panel_height_too_large() {
    let mut config = DeskConfig::default();
    config.desktop.panel_height = 500.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("desktop.panel_height"));
}

#[test]
fn catches_repo_limit_zero() {
    let mut config = DeskConfig::default();
    config.github.repo_limit = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("github.repo_limit"));
}

#[test]
fn catches_non_http_api_base() {
    let mut config = DeskConfig::default();
    config.github.api_base = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("github.api_base"));
}

#[test]
fn catches_backoff_inversion() {
    let mut config = DeskConfig::default();
    config.github.initial_backoff_ms = 10_000;
    config.github.max_backoff_ms = 1_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("github.initial_backoff_ms"));
}

#[test]
fn catches_empty_username() {
    let mut config = DeskConfig::default();
    config.github.username = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("github.username"));
}

#[test]
fn catches_unknown_log_level() {
    let mut config = DeskConfig::default();
    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = DeskConfig::default();
    config.windows.min_width = 1.0;
    config.github.max_retries = 50;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("windows.min_width"));
    assert!(err.contains("github.max_retries"));
    assert!(err.contains("; "));
}
