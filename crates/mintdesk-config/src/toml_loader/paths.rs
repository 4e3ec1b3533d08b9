//! Where the desktop keeps its config file, and the first-run template.

use mintdesk_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const CONFIG_DIR_NAME: &str = "mintdesk";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `<base>/mintdesk/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// The per-user config file, e.g. `~/.config/mintdesk/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("no per-user config directory on this platform".into())
    })?;
    Ok(config_path_in(&base))
}

/// Write the commented starter config to `path` unless a file is already
/// there. Returns `true` when the template was written; an existing file is
/// never touched.
pub fn ensure_config_file(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        debug!(path = %path.display(), "config file present");
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", dir.display()))
        })?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("cannot write starter config {}: {e}", path.display()))
    })?;

    info!(path = %path.display(), "wrote starter config");
    Ok(true)
}
