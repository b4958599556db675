//! Composite Components
//!
//! Components built from primitives: cards, charts, stat tiles, overlays.

pub mod bar_chart;
pub mod card;
pub mod fullscreen;
pub mod stat_tile;
