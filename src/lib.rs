//! Sentinel Dashboard Library
//!
//! View state, fixtures and GPUI views of a security camera monitoring
//! dashboard: live feed, camera grid, incidents, system status and charts.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod fixtures;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
