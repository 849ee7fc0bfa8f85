//! Services - Background Sources
//!
//! Work that runs off the UI thread and reports through `AppEvent`s.

pub mod feed;
