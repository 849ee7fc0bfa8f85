//! Contact Table Library
//!
//! A desktop contact table that grows as contacts are published on the
//! application event bus.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod logging;
pub mod services;
pub mod theme;
pub mod utils;
pub mod views;
