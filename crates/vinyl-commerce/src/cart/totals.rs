//! Derived cart totals.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals breakdown for a cart, recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub items: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery charge. The shop delivers for free.
    pub delivery: Money,
    /// Amount to pay (subtotal + delivery).
    pub grand_total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Check if delivery is free.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery.is_zero()
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

/// Totals for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineTotal {
    /// Record ID.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price × quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals {
            items: 0,
            subtotal: Money::zero(Currency::RUB),
            delivery: Money::zero(Currency::RUB),
            grand_total: Money::zero(Currency::RUB),
            lines: vec![],
        };
        assert!(totals.is_empty());
        assert!(totals.has_free_delivery());
    }
}
