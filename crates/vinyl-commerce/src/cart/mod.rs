//! Shopping cart module.
//!
//! Contains the cart, its lines, and derived totals.

#[allow(clippy::module_inception)]
mod cart;
mod totals;

pub use cart::{Cart, CartLine};
pub use totals::{CartTotals, LineTotal};
