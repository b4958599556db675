//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local view models.

pub mod cameras;
pub mod dashboard;
