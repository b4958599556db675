//! Utilities
//!
//! Clock and formatting helpers plus file persistence.

pub mod bounded;
pub mod clock;
pub mod config_store;
pub mod dirs;
pub mod export;
pub mod format;
