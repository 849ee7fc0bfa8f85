//! Theme - Colors and Sizes

pub mod colors;

pub use colors::Colors;

/// Table row height in pixels
pub const ROW_HEIGHT: f32 = 36.0;

/// Table header height in pixels
pub const HEADER_HEIGHT: f32 = 40.0;
