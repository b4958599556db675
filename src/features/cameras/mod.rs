//! Cameras Feature
//!
//! Listing of every configured camera.

pub mod page;
