//! Commerce error types.

use thiserror::Error;

use crate::checkout::CheckoutMode;
use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// The session reducer never propagates these to the caller; each one is turned
/// into an error notification whose text is the `Display` output below.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Record #{0} is not in the catalog")]
    ProductNotFound(ProductId),

    /// Checkout requested with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Checkout submitted before a payment method was chosen.
    #[error("Select a payment method")]
    PaymentMethodRequired,

    /// Checkout transition not allowed from the current mode.
    #[error("Cannot {action} while in {mode} mode")]
    InvalidCheckoutTransition {
        mode: CheckoutMode,
        action: &'static str,
    },

    /// Unrecognised payment method identifier.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Unrecognised navigation section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Two catalog records share an id.
    #[error("Duplicate record id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog record with a zero or negative price.
    #[error("Record #{id} has invalid price {amount}")]
    InvalidPrice { id: ProductId, amount: i64 },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
