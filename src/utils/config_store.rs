//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::utils::dirs::config_dir;

/// Path of the configuration file
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load a TOML config file; a missing or empty file yields defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        error!(error = %e, path = ?path, "Failed to parse config file");
        e
    })?;
    Ok(config)
}

/// Save a TOML config file
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load the configuration file from the config directory
pub fn load() -> Result<AppConfig> {
    load_config_from(&config_path()?)
}

/// Remember the chosen locale for the next launch
pub fn persist_locale(locale: &str) -> Result<()> {
    let path = config_path()?;
    let mut config = load_config_from(&path)?;
    config.locale = Some(locale.to_string());
    save_config_to(&path, &config)?;
    info!(locale, path = ?path, "Locale saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "  \n").expect("write");
        assert_eq!(load_config_from(&path).expect("defaults"), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut config = AppConfig::default();
        config.locale = Some("zh-CN".to_string());
        config.log.file_enabled = false;

        save_config_to(&path, &config).expect("save");
        assert_eq!(load_config_from(&path).expect("load"), config);
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "locale = [").expect("write");
        assert!(load_config_from(&path).is_err());
    }
}
