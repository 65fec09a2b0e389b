//! Checkout module.
//!
//! Contains the checkout state machine, payment methods and order receipts.

mod flow;
mod payment;
mod receipt;

pub use flow::{CheckoutMode, CheckoutState};
pub use payment::PaymentMethod;
pub use receipt::Receipt;
