//! Application Directories
//!
//! Platform-specific locations:
//! - **Linux**: `~/.config/sentinel-dash/`, `~/.local/share/sentinel-dash/`
//! - **macOS**: `~/Library/Application Support/com.sentinel.sentinel-dash/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\sentinel\sentinel-dash\`

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "sentinel", "sentinel-dash").ok_or(Error::ConfigDir)
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
pub fn config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (exports)
pub fn data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_local_dir())
}

/// Get or create the log directory
pub fn log_dir() -> Result<PathBuf> {
    ensure_dir(&project_dirs()?.data_local_dir().join("logs"))
}
