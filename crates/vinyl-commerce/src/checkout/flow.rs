//! Checkout state machine.
//!
//! Two modes: browsing the cart and confirming payment. The cart itself is not
//! owned here; callers pass in whatever the transition needs to know about it.

use std::fmt;

use crate::checkout::PaymentMethod;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Which view of the cart the customer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// Browsing and editing the cart.
    #[default]
    Cart,
    /// Choosing a payment method and confirming.
    Checkout,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Cart => "cart",
            CheckoutMode::Checkout => "checkout",
        }
    }
}

impl fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checkout state: the current mode and the chosen payment method.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutState {
    /// Current mode.
    pub mode: CheckoutMode,
    /// Payment method picked by the customer, if any.
    pub selected_payment: Option<PaymentMethod>,
}

impl CheckoutState {
    /// Initial state: browsing, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move from the cart to payment confirmation.
    ///
    /// Requires a non-empty cart.
    pub fn begin(&mut self, cart_is_empty: bool) -> Result<(), CommerceError> {
        self.require(CheckoutMode::Cart, "start checkout")?;
        if cart_is_empty {
            return Err(CommerceError::EmptyCart);
        }
        self.mode = CheckoutMode::Checkout;
        Ok(())
    }

    /// Pick a payment method. Picking again replaces the previous choice.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        self.require(CheckoutMode::Checkout, "select a payment method")?;
        self.selected_payment = Some(method);
        Ok(())
    }

    /// Return to the cart. The selected payment method is kept.
    pub fn back(&mut self) -> Result<(), CommerceError> {
        self.require(CheckoutMode::Checkout, "go back to the cart")?;
        self.mode = CheckoutMode::Cart;
        Ok(())
    }

    /// Confirm the order.
    ///
    /// On success the state resets to its initial value and the method that
    /// was used is returned. Without a selected method, or with a cart emptied
    /// while confirming, nothing changes.
    pub fn submit(&mut self, cart_is_empty: bool) -> Result<PaymentMethod, CommerceError> {
        self.require(CheckoutMode::Checkout, "submit checkout")?;
        if cart_is_empty {
            return Err(CommerceError::EmptyCart);
        }
        let method = self
            .selected_payment
            .ok_or(CommerceError::PaymentMethodRequired)?;
        *self = Self::default();
        Ok(method)
    }

    /// Check if the customer is confirming payment.
    pub fn is_confirming(&self) -> bool {
        self.mode == CheckoutMode::Checkout
    }

    fn require(&self, mode: CheckoutMode, action: &'static str) -> Result<(), CommerceError> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                mode: self.mode,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_creation() {
        let state = CheckoutState::new();
        assert_eq!(state.mode, CheckoutMode::Cart);
        assert!(state.selected_payment.is_none());
    }

    #[test]
    fn test_begin_requires_items() {
        let mut state = CheckoutState::new();
        assert_eq!(state.begin(true), Err(CommerceError::EmptyCart));
        assert_eq!(state.mode, CheckoutMode::Cart);

        assert!(state.begin(false).is_ok());
        assert!(state.is_confirming());
    }

    #[test]
    fn test_begin_twice_is_rejected() {
        let mut state = CheckoutState::new();
        state.begin(false).unwrap();
        assert!(matches!(
            state.begin(false),
            Err(CommerceError::InvalidCheckoutTransition { mode: CheckoutMode::Checkout, .. })
        ));
    }

    #[test]
    fn test_select_payment_only_when_confirming() {
        let mut state = CheckoutState::new();
        assert!(state.select_payment(PaymentMethod::Card).is_err());
        assert!(state.selected_payment.is_none());

        state.begin(false).unwrap();
        state.select_payment(PaymentMethod::Card).unwrap();
        state.select_payment(PaymentMethod::Transfer).unwrap();
        assert_eq!(state.selected_payment, Some(PaymentMethod::Transfer));
        assert!(state.is_confirming());
    }

    #[test]
    fn test_back_keeps_selection() {
        let mut state = CheckoutState::new();
        state.begin(false).unwrap();
        state.select_payment(PaymentMethod::Wallet).unwrap();

        state.back().unwrap();
        assert_eq!(state.mode, CheckoutMode::Cart);
        assert_eq!(state.selected_payment, Some(PaymentMethod::Wallet));
    }

    #[test]
    fn test_submit_without_method() {
        let mut state = CheckoutState::new();
        state.begin(false).unwrap();

        assert_eq!(state.submit(false), Err(CommerceError::PaymentMethodRequired));
        assert!(state.is_confirming());
    }

    #[test]
    fn test_submit_resets() {
        let mut state = CheckoutState::new();
        state.begin(false).unwrap();
        state.select_payment(PaymentMethod::Card).unwrap();

        assert_eq!(state.submit(false), Ok(PaymentMethod::Card));
        assert_eq!(state, CheckoutState::new());
    }

    #[test]
    fn test_submit_rejects_emptied_cart() {
        let mut state = CheckoutState::new();
        state.begin(false).unwrap();
        state.select_payment(PaymentMethod::Card).unwrap();

        assert_eq!(state.submit(true), Err(CommerceError::EmptyCart));
        assert!(state.is_confirming());
        assert_eq!(state.selected_payment, Some(PaymentMethod::Card));
    }

    #[test]
    fn test_mode_wire_format() {
        assert_eq!(serde_json::to_string(&CheckoutMode::Checkout).unwrap(), "\"checkout\"");
    }
}
