//! User actions the presentation layer can dispatch.

use serde::{Deserialize, Serialize};

use crate::checkout::PaymentMethod;
use crate::ids::ProductId;
use crate::storefront::Section;

/// A single user interaction.
///
/// Serialized with an `action` tag so sessions can be scripted, e.g.
/// `{"action": "update_quantity", "product_id": 1, "quantity": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Add one unit of a catalog record to the cart.
    AddToCart { product_id: ProductId },
    /// Drop a record from the cart.
    RemoveFromCart { product_id: ProductId },
    /// Set a line quantity; below 1 removes the line.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Leave the cart view for payment confirmation.
    BeginCheckout,
    /// Pick a payment method.
    SelectPayment { method: PaymentMethod },
    /// Return from payment confirmation to the cart.
    BackToCart,
    /// Confirm the order.
    SubmitCheckout,
    /// Switch to another section of the shop.
    Navigate { section: Section },
    /// Change the search box contents.
    Search { query: String },
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddToCart { .. } => "add_to_cart",
            Action::RemoveFromCart { .. } => "remove_from_cart",
            Action::UpdateQuantity { .. } => "update_quantity",
            Action::BeginCheckout => "begin_checkout",
            Action::SelectPayment { .. } => "select_payment",
            Action::BackToCart => "back_to_cart",
            Action::SubmitCheckout => "submit_checkout",
            Action::Navigate { .. } => "navigate",
            Action::Search { .. } => "search",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json() {
        let json = r#"{"action": "update_quantity", "product_id": 1, "quantity": -2}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(
            action,
            Action::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: -2
            }
        );
    }

    #[test]
    fn test_unit_action_json() {
        let action: Action = serde_json::from_str(r#"{"action": "submit_checkout"}"#).unwrap();
        assert_eq!(action, Action::SubmitCheckout);
        assert_eq!(action.name(), "submit_checkout");
    }

    #[test]
    fn test_payment_action_json() {
        let action: Action =
            serde_json::from_str(r#"{"action": "select_payment", "method": "transfer"}"#).unwrap();
        assert_eq!(
            action,
            Action::SelectPayment {
                method: PaymentMethod::Transfer
            }
        );
    }
}
