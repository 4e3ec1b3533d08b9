//! Full configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::{DeskConfig, DesktopConfig, GithubConfig, LoggingConfig, WindowsConfig};
use helpers::{validate_range, validate_range_f64};
use mintdesk_common::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DeskConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_desktop(&mut errors, &config.desktop);
    validate_windows(&mut errors, &config.windows, &config.desktop);
    validate_github(&mut errors, &config.github);
    validate_logging(&mut errors, &config.logging);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_desktop(errors: &mut Vec<String>, desktop: &DesktopConfig) {
    validate_range_f64(errors, "desktop.viewport_width", desktop.viewport_width, 320.0, 10_000.0);
    validate_range_f64(errors, "desktop.viewport_height", desktop.viewport_height, 240.0, 10_000.0);
    validate_range_f64(errors, "desktop.panel_height", desktop.panel_height, 0.0, 200.0);
}

fn validate_windows(errors: &mut Vec<String>, windows: &WindowsConfig, desktop: &DesktopConfig) {
    validate_range_f64(errors, "windows.min_width", windows.min_width, 50.0, 2_000.0);
    validate_range_f64(errors, "windows.min_height", windows.min_height, 50.0, 2_000.0);
    validate_range_f64(errors, "windows.snap_threshold", windows.snap_threshold, 0.0, 200.0);

    if windows.default_width < windows.min_width {
        errors.push(format!(
            "windows.default_width = {} is below windows.min_width = {}",
            windows.default_width, windows.min_width
        ));
    }
    if windows.default_height < windows.min_height {
        errors.push(format!(
            "windows.default_height = {} is below windows.min_height = {}",
            windows.default_height, windows.min_height
        ));
    }

    for (app, pos) in &windows.positions {
        if pos.x < 0.0 || pos.y < 0.0 || pos.x > desktop.viewport_width || pos.y > desktop.viewport_height
        {
            errors.push(format!(
                "windows.positions.{app} = ({}, {}) is outside the viewport",
                pos.x, pos.y
            ));
        }
    }
}

fn validate_github(errors: &mut Vec<String>, github: &GithubConfig) {
    if github.username.trim().is_empty() {
        errors.push("github.username must not be empty".into());
    }
    if !github.api_base.starts_with("http://") && !github.api_base.starts_with("https://") {
        errors.push(format!(
            "github.api_base = {:?} must be an http(s) URL",
            github.api_base
        ));
    }
    validate_range(errors, "github.repo_limit", github.repo_limit as u64, 1, 30);
    validate_range(errors, "github.max_retries", u64::from(github.max_retries), 0, 10);
    validate_range(errors, "github.request_timeout_secs", github.request_timeout_secs, 1, 120);
    if github.initial_backoff_ms > github.max_backoff_ms {
        errors.push(format!(
            "github.initial_backoff_ms = {} exceeds github.max_backoff_ms = {}",
            github.initial_backoff_ms, github.max_backoff_ms
        ));
    }
}

fn validate_logging(errors: &mut Vec<String>, logging: &LoggingConfig) {
    if !LOG_LEVELS.contains(&logging.level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
