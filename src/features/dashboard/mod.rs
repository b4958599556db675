//! Dashboard Feature
//!
//! Stat tiles, live feed, camera grid, sidebar widgets and weekly report.

pub mod controller;
pub mod page;
pub mod view_model;
mod widgets;
