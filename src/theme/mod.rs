//! Theme - Colours for the Dashboard

pub mod colors;
