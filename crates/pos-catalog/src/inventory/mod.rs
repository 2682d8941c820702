//! Inventory editing module.

mod editor;

pub use editor::{EditState, Inventory};
