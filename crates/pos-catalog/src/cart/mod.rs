//! Point-of-sale cart module.
//!
//! Contains the register (product list plus cart) and cart totals.

mod register;
mod summary;

pub use register::Register;
pub use summary::{CartLine, CartSummary};
