//! Session state and the transition function that advances it.

use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutState, Receipt};
use crate::error::CommerceError;
use crate::money::Currency;
use crate::notify::Notification;
use crate::storefront::{Action, Section};

/// Message shown after a successful order.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed! We will contact you shortly";

/// Everything that changes during a shopping session.
///
/// Serialized for snapshots only; a session is always rebuilt by replaying actions.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SessionState {
    /// Cart contents.
    pub cart: Cart,
    /// Checkout mode and payment selection.
    pub checkout: CheckoutState,
    /// Visible section.
    pub section: Section,
    /// Search box contents.
    pub search_query: String,
}

impl SessionState {
    /// Initial state: empty cart in `currency`, browsing the catalog.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            ..Self::default()
        }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the action.
    pub state: SessionState,
    /// Notifications the action produced, in order.
    pub notifications: Vec<Notification>,
    /// Set when the action placed an order.
    pub receipt: Option<Receipt>,
}

#[derive(Default)]
struct Effect {
    notification: Option<Notification>,
    receipt: Option<Receipt>,
}

impl Effect {
    fn quiet() -> Self {
        Self::default()
    }

    fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
            receipt: None,
        }
    }
}

/// Apply `action` to `state`.
///
/// Rejected actions leave the state untouched and yield a single error
/// notification.
pub fn reduce(mut state: SessionState, catalog: &Catalog, action: Action) -> Transition {
    let name = action.name();
    let (notifications, receipt) = match apply(&mut state, catalog, action) {
        Ok(effect) => (effect.notification.into_iter().collect(), effect.receipt),
        Err(e) => {
            tracing::debug!(action = name, error = %e, "action rejected");
            (vec![Notification::from(e)], None)
        }
    };

    Transition {
        state,
        notifications,
        receipt,
    }
}

fn apply(
    state: &mut SessionState,
    catalog: &Catalog,
    action: Action,
) -> Result<Effect, CommerceError> {
    match action {
        Action::AddToCart { product_id } => {
            let product = catalog
                .get(product_id)
                .ok_or(CommerceError::ProductNotFound(product_id))?;
            let quantity = state.cart.add(product);
            tracing::debug!(product_id = %product_id, quantity, "added to cart");
            Ok(Effect::notify(Notification::success(format!(
                "{} added to cart",
                product.title
            ))))
        }
        Action::RemoveFromCart { product_id } => {
            let removed = state.cart.remove(product_id);
            tracing::debug!(product_id = %product_id, removed, "removed from cart");
            Ok(Effect::quiet())
        }
        Action::UpdateQuantity {
            product_id,
            quantity,
        } => {
            let changed = state.cart.update_quantity(product_id, quantity);
            tracing::debug!(product_id = %product_id, quantity, changed, "quantity updated");
            Ok(Effect::quiet())
        }
        Action::BeginCheckout => {
            state.checkout.begin(state.cart.is_empty())?;
            Ok(Effect::quiet())
        }
        Action::SelectPayment { method } => {
            state.checkout.select_payment(method)?;
            Ok(Effect::quiet())
        }
        Action::BackToCart => {
            state.checkout.back()?;
            Ok(Effect::quiet())
        }
        Action::SubmitCheckout => {
            let mut checkout = state.checkout;
            let method = checkout.submit(state.cart.is_empty())?;
            let receipt = Receipt::capture(&state.cart, method)?;

            state.checkout = checkout;
            state.cart.clear();
            tracing::info!(
                payment_method = method.as_str(),
                items = receipt.items,
                total = receipt.total.amount,
                "order placed"
            );
            Ok(Effect {
                notification: Some(Notification::success(ORDER_PLACED_MESSAGE)),
                receipt: Some(receipt),
            })
        }
        Action::Navigate { section } => {
            state.section = section;
            Ok(Effect::quiet())
        }
        Action::Search { query } => {
            state.search_query = query;
            Ok(Effect::quiet())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{CheckoutMode, PaymentMethod};
    use crate::ids::ProductId;
    use crate::notify::NotificationKind;

    fn run(state: SessionState, actions: Vec<Action>) -> Transition {
        let catalog = Catalog::vinyl_shop();
        let mut transition = Transition {
            state,
            notifications: Vec::new(),
            receipt: None,
        };
        for action in actions {
            let next = reduce(transition.state, &catalog, action);
            transition.state = next.state;
            transition.notifications.extend(next.notifications);
            transition.receipt = next.receipt.or(transition.receipt);
        }
        transition
    }

    fn add(id: u32) -> Action {
        Action::AddToCart {
            product_id: ProductId::new(id),
        }
    }

    #[test]
    fn test_add_notifies_with_title() {
        let t = run(SessionState::new(Currency::RUB), vec![add(1)]);
        assert_eq!(
            t.notifications,
            vec![Notification::success("Midnight Sessions added to cart")]
        );
    }

    #[test]
    fn test_add_unknown_record() {
        let initial = SessionState::new(Currency::RUB);
        let t = run(initial.clone(), vec![add(404)]);
        assert_eq!(t.state, initial);
        assert_eq!(t.notifications[0].kind, NotificationKind::Error);
    }

    #[test]
    fn test_begin_checkout_with_empty_cart() {
        let initial = SessionState::new(Currency::RUB);
        let t = run(initial.clone(), vec![Action::BeginCheckout]);
        assert_eq!(t.state, initial);
        assert_eq!(t.notifications, vec![Notification::error("Your cart is empty")]);
    }

    #[test]
    fn test_submit_without_payment_changes_nothing() {
        let t = run(
            SessionState::new(Currency::RUB),
            vec![add(1), Action::BeginCheckout],
        );
        let before = t.state.clone();

        let t = run(t.state, vec![Action::SubmitCheckout]);
        assert_eq!(t.state, before);
        assert_eq!(t.notifications, vec![Notification::error("Select a payment method")]);
        assert!(t.receipt.is_none());
    }

    #[test]
    fn test_submit_clears_cart_and_resets() {
        let t = run(
            SessionState::new(Currency::RUB),
            vec![
                add(1),
                add(2),
                Action::BeginCheckout,
                Action::SelectPayment {
                    method: PaymentMethod::Card,
                },
                Action::SubmitCheckout,
            ],
        );

        assert!(t.state.cart.is_empty());
        assert_eq!(t.state.checkout.mode, CheckoutMode::Cart);
        assert!(t.state.checkout.selected_payment.is_none());
        assert_eq!(
            t.notifications.last(),
            Some(&Notification::success(ORDER_PLACED_MESSAGE))
        );

        let receipt = t.receipt.unwrap();
        assert_eq!(receipt.payment_method, PaymentMethod::Card);
        assert_eq!(receipt.total.amount, 2499 + 2199);
    }

    #[test]
    fn test_submit_after_emptying_cart_is_rejected() {
        let t = run(
            SessionState::new(Currency::RUB),
            vec![
                add(1),
                Action::BeginCheckout,
                Action::SelectPayment {
                    method: PaymentMethod::Card,
                },
                Action::UpdateQuantity {
                    product_id: ProductId::new(1),
                    quantity: 0,
                },
            ],
        );
        let before = t.state.clone();

        let t = run(t.state, vec![Action::SubmitCheckout]);
        assert_eq!(t.state, before);
        assert_eq!(t.notifications, vec![Notification::error("Your cart is empty")]);
        assert!(t.receipt.is_none());
        assert!(t.state.checkout.is_confirming());
    }

    #[test]
    fn test_state_snapshot_shape() {
        let t = run(SessionState::new(Currency::RUB), vec![add(4), add(4)]);
        let json = serde_json::to_value(&t.state).unwrap();

        assert_eq!(json["checkout"]["mode"], "cart");
        assert_eq!(json["section"], "catalog");
        assert_eq!(json["cart"]["lines"][0]["id"], 4);
        assert_eq!(json["cart"]["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_back_keeps_payment_method() {
        let t = run(
            SessionState::new(Currency::RUB),
            vec![
                add(3),
                Action::BeginCheckout,
                Action::SelectPayment {
                    method: PaymentMethod::Wallet,
                },
                Action::BackToCart,
            ],
        );
        assert_eq!(t.state.checkout.mode, CheckoutMode::Cart);
        assert_eq!(t.state.checkout.selected_payment, Some(PaymentMethod::Wallet));
        assert_eq!(t.state.cart.total_items(), 1);
    }

    #[test]
    fn test_navigation_and_search_leave_cart_alone() {
        let t = run(
            SessionState::new(Currency::RUB),
            vec![
                add(1),
                Action::Navigate {
                    section: Section::Search,
                },
                Action::Search {
                    query: "jazz".to_string(),
                },
            ],
        );
        assert_eq!(t.state.section, Section::Search);
        assert_eq!(t.state.search_query, "jazz");
        assert_eq!(t.state.cart.total_items(), 1);
    }
}
