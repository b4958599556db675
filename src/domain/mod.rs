//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe what the dashboard shows.

pub mod camera;
pub mod config;
pub mod incident;
pub mod series;
pub mod stat;
pub mod style;
pub mod system_status;
pub mod time_filter;
