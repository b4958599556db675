//! Services - Background I/O
//!
//! Work that runs off the UI thread and reports back into entities.

pub mod feed_fetch;
