//! Snapshot of a confirmed order.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::checkout::PaymentMethod;
use crate::error::CommerceError;
use crate::money::Money;

/// What the customer bought, captured just before the cart is cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    /// Payment method used.
    pub payment_method: PaymentMethod,
    /// Total item count.
    pub items: u64,
    /// Amount paid.
    pub total: Money,
    /// Purchased lines.
    pub lines: Vec<CartLine>,
}

impl Receipt {
    /// Capture the current contents of a cart.
    pub fn capture(cart: &Cart, payment_method: PaymentMethod) -> Result<Self, CommerceError> {
        let totals = cart.totals()?;
        Ok(Self {
            payment_method,
            items: totals.items,
            total: totals.grand_total,
            lines: cart.lines().to_vec(),
        })
    }
}
