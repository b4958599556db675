//! Components - Reusable UI Components
//!
//! Building blocks shared by the pages.

pub mod composite;
pub mod layout;
pub mod primitives;
