//! Views - GPUI Entities

pub mod contact_table;
pub mod element_painter;
