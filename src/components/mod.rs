//! Components - Declarative UI Components
//!
//! Pure UI components that don't depend on GPUI or do I/O. Views paint
//! the element trees these components render.

pub mod contact_table;
pub mod element;
pub mod lifecycle;

pub use contact_table::ContactTable;
pub use element::{create_element, Element, Props, Tag};
pub use lifecycle::{Component, StateCell};
