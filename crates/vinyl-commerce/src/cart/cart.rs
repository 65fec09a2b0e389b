//! Cart and cart line types.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line per product id, in the order products were first
/// added. A line never has a quantity below 1. Carts are only built through
/// these methods, so there is no `Deserialize`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Cart {
    /// Currency the totals are computed in.
    pub currency: Currency,
    /// Lines in insertion order.
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    /// Returns the line's quantity afterwards.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove the line for a product.
    ///
    /// Returns `false` if there was no such line.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() < len_before
    }

    /// Set a line's quantity.
    ///
    /// A quantity below 1 removes the line. Quantities beyond `u32::MAX` are
    /// clamped. Returns `false` if the cart has no line for `id`.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|l| l.product.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Quantity of a product in the cart (0 if absent).
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        Ok(self.totals()?.grand_total)
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Calculate cart totals.
    ///
    /// Returns an error if arithmetic overflows.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LineTotal {
                    product_id: line.product.id,
                    unit_price: line.unit_price(self.currency),
                    quantity: line.quantity,
                    total: line.total(self.currency)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal = Money::try_sum(lines.iter().map(|l| &l.total), self.currency)
            .ok_or(CommerceError::Overflow)?;
        let delivery = Money::zero(self.currency);
        let grand_total = subtotal.try_add(&delivery).ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            items: self.total_items(),
            subtotal,
            delivery,
            grand_total,
            lines,
        })
    }
}

/// A product paired with its quantity in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// The record being bought.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price in the cart currency.
    pub fn unit_price(&self, currency: Currency) -> Money {
        self.product.unit_price(currency)
    }

    /// Line total (unit price × quantity).
    pub fn total(&self, currency: Currency) -> Result<Money, CommerceError> {
        self.unit_price(currency)
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight_sessions() -> Product {
        Product::new(1, "Midnight Sessions", "The Velvet Sound", 2499)
    }

    fn retrograde() -> Product {
        Product::new(4, "Retrograde", "Sonic Archive", 1899)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::RUB);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().unwrap().is_zero());
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::RUB);
        assert_eq!(cart.add(&midnight_sessions()), 1);
        assert_eq!(cart.add(&midnight_sessions()), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().unwrap().amount, 4998);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&retrograde());
        cart.add(&midnight_sessions());
        cart.add(&retrograde());

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());

        assert!(cart.update_quantity(ProductId::new(1), 5));
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());

        assert!(cart.update_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());
        cart.add(&retrograde());

        cart.update_quantity(ProductId::new(4), -3);
        assert!(cart.line(ProductId::new(4)).is_none());
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());

        assert!(!cart.update_quantity(ProductId::new(99), 3));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());
        cart.update_quantity(ProductId::new(1), i64::MAX);
        assert_eq!(cart.quantity_of(ProductId::new(1)), u32::MAX);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());

        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
        assert!(!cart.remove(ProductId::new(1)));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());
        cart.add(&midnight_sessions());
        cart.add(&retrograde());

        let totals = cart.totals().unwrap();
        assert_eq!(totals.items, 3);
        assert_eq!(totals.subtotal.amount, 2 * 2499 + 1899);
        assert!(totals.delivery.is_zero());
        assert_eq!(totals.grand_total.amount, 6897);
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines[0].total.amount, 4998);
    }

    #[test]
    fn test_totals_overflow() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&Product::new(1, "Priceless", "Nobody", i64::MAX));
        cart.update_quantity(ProductId::new(1), 2);
        assert_eq!(cart.totals(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_line_serializes_flat() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&midnight_sessions());
        let json = serde_json::to_value(&cart.lines()[0]).unwrap();
        assert_eq!(json["title"], "Midnight Sessions");
        assert_eq!(json["quantity"], 1);
    }
}
