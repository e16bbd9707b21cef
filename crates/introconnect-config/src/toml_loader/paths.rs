//! Where the config file lives, and writing the commented default.

use std::path::{Path, PathBuf};

use introconnect_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// `<os config dir>/introconnect/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("introconnect").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |at: &Path| {
        let at = at.to_path_buf();
        move |source| ConfigError::Io { path: at, source }
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_err(path))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
