//! Layout Components
//!
//! Header and sidebar framing every page.

pub mod header;
pub mod sidebar;
