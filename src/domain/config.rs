//! Config - Application Configuration
//!
//! Launch preferences only. View state (selected camera, fullscreen,
//! time filter) is never persisted and always resets on start.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// UI locale ("en" or "zh-CN"); system locale when absent
    pub locale: Option<String>,
    /// Initial window geometry
    pub window: WindowConfig,
    /// Logging options
    pub log: LogConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file
    pub file_enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("locale = \"zh-CN\"\n[window]\nwidth = 1600.0\n")
            .expect("valid toml");
        assert_eq!(config.locale.as_deref(), Some("zh-CN"));
        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.log, LogConfig::default());
    }
}
