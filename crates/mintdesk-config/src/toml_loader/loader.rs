//! Reading `DeskConfig` from TOML.

use crate::schema::DeskConfig;
use crate::validation;
use mintdesk_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{default_config_path, ensure_config_file};

/// Parse config text. Sections and keys left out keep their defaults.
///
/// Values outside their allowed ranges are reported as a warning only; the
/// desktop clamps them when it builds its settings.
pub fn parse_config(content: &str) -> Result<DeskConfig, ConfigError> {
    let config: DeskConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("invalid TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(error = %e, "config has out-of-range values");
    }
    Ok(config)
}

/// Load the config at `path`. A missing file is `FileNotFound`, so callers
/// can tell "not there" apart from "broken".
pub fn load_from_path(path: &Path) -> Result<DeskConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config = parse_config(&content)?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the per-user config. On first run the starter template is written
/// to [`default_config_path`] and then read back, so the desktop starts from
/// the same file the user will later edit.
pub fn load_default() -> Result<DeskConfig, ConfigError> {
    let path = default_config_path()?;
    if ensure_config_file(&path)? {
        info!(path = %path.display(), "first run, starting from the template");
    }
    load_from_path(&path)
}
