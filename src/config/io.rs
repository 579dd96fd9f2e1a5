use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app_dirs;

use super::errors::ConfigError;
use super::types::WidgetConfig;

/// Default filename used to store the widget configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<WidgetConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        info!("No config at {}; using defaults", path.display());
        return Ok(WidgetConfig::default());
    }
    load_from(&path)
}

/// Parse and normalize a configuration file.
pub fn load_from(path: &Path) -> Result<WidgetConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: WidgetConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    if config.draggable_children.is_empty() {
        warn!("Config at {} lists no draggable items", path.display());
    }
    info!(
        "Loaded config from {} ({} draggable items)",
        path.display(),
        config.draggable_children.len()
    );
    Ok(config.normalized())
}

/// Persist configuration to the app directory.
pub fn save(config: &WidgetConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &WidgetConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
