use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app_dirs;

use super::{AppSettings, ConfigError};

/// Default filename used to store the settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the settings file path, ensuring the app root exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app root, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from_path(&config_path()?)
}

/// Persist settings to the app root.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: AppSettings = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    let normalized = settings.clone().normalized();
    if normalized != settings {
        warn!("Config at {} had invalid values; defaults applied", path.display());
    }
    Ok(normalized)
}

/// Save settings to `path`, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
