//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Feed panel image height (16:9 of the inline panel width)
pub const FEED_HEIGHT: f32 = 420.0;
pub const FEED_FULLSCREEN_HEIGHT: f32 = 720.0;

/// Camera grid tile dimensions
pub const CAMERA_TILE_WIDTH: f32 = 200.0;
pub const CAMERA_TILE_HEIGHT: f32 = 112.0;

/// Right sidebar widget column width
pub const WIDGET_COLUMN_WIDTH: f32 = 380.0;

/// Chart sizing
pub const CHART_DEFAULT_HEIGHT: f32 = 220.0;
pub const CHART_REFERENCE_WIDTH: f32 = 440.0;
pub const DETECTION_CHART_HEIGHT: f32 = 180.0;
pub const WEEKLY_CHART_HEIGHT: f32 = 256.0;

/// Incident list viewport height
pub const INCIDENT_LIST_MAX_HEIGHT: f32 = 300.0;

/// Pulse period of the "LIVE" marker
pub const LIVE_PULSE_MS: u64 = 1500;

/// File names
pub const CONFIG_FILE_NAME: &str = "sentinel-dash.toml";
pub const LOG_FILE_PREFIX: &str = "sentinel-dash.log";
pub const EXPORT_DIR_NAME: &str = "exports";

/// Navigation intents kept in history
pub const NAVIGATION_HISTORY_LIMIT: usize = 50;

/// Feed image download timeout
pub const FEED_FETCH_TIMEOUT_SECS: u64 = 20;
