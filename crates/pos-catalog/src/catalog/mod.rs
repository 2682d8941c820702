//! Product catalog module.
//!
//! Contains the product record and the in-memory store of the last fetched
//! list.

mod product;
mod store;

pub use product::Product;
pub use store::ProductStore;
