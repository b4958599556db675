//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod dashboard_state;
pub mod feed_image_state;
pub mod i18n_state;
pub mod navigation_state;
