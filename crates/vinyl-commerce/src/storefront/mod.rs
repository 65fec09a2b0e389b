//! Storefront session.
//!
//! [`SessionState`] is a plain value advanced by [`reduce`]. [`Storefront`] bundles
//! it with the catalog and the search display policy and is what a presentation
//! layer talks to.

mod action;
mod section;
mod state;

pub use action::Action;
pub use section::Section;
pub use state::{reduce, SessionState, Transition, ORDER_PLACED_MESSAGE};

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::checkout::{CheckoutState, PaymentMethod, Receipt};
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::money::Money;
use crate::notify::{Notification, NotificationSink};
use crate::search::{search, EmptyQueryPolicy, SearchResults};

/// What a single dispatched action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    /// Notifications, in order.
    pub notifications: Vec<Notification>,
    /// Set when the action placed an order.
    pub receipt: Option<Receipt>,
}

impl Dispatched {
    /// Check if the action was turned down.
    pub fn is_rejected(&self) -> bool {
        self.notifications.iter().any(|n| n.is_error())
    }
}

/// A shopping session over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Storefront {
    id: SessionId,
    catalog: Catalog,
    state: SessionState,
    empty_query: EmptyQueryPolicy,
    last_receipt: Option<Receipt>,
}

impl Storefront {
    /// Start a session over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        let state = SessionState::new(catalog.currency());
        Self {
            id: SessionId::generate(),
            catalog,
            state,
            empty_query: EmptyQueryPolicy::default(),
            last_receipt: None,
        }
    }

    /// Set what an empty search box shows.
    pub fn with_empty_query_policy(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    /// Apply an action, keeping its receipt if it placed an order.
    pub fn apply(&mut self, action: Action) -> Dispatched {
        let state = std::mem::take(&mut self.state);
        let transition = reduce(state, &self.catalog, action);
        self.state = transition.state;
        if transition.receipt.is_some() {
            self.last_receipt.clone_from(&transition.receipt);
        }
        Dispatched {
            notifications: transition.notifications,
            receipt: transition.receipt,
        }
    }

    /// Apply an action and return the notifications it produced.
    pub fn dispatch(&mut self, action: Action) -> Vec<Notification> {
        self.apply(action).notifications
    }

    pub fn dispatch_to<S: NotificationSink + ?Sized>(&mut self, action: Action, sink: &mut S) {
        for notification in self.dispatch(action) {
            sink.notify(notification);
        }
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Vec<Notification> {
        self.dispatch(Action::AddToCart { product_id })
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Vec<Notification> {
        self.dispatch(Action::RemoveFromCart { product_id })
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> Vec<Notification> {
        self.dispatch(Action::UpdateQuantity {
            product_id,
            quantity,
        })
    }

    pub fn begin_checkout(&mut self) -> Vec<Notification> {
        self.dispatch(Action::BeginCheckout)
    }

    pub fn select_payment(&mut self, method: PaymentMethod) -> Vec<Notification> {
        self.dispatch(Action::SelectPayment { method })
    }

    pub fn back_to_cart(&mut self) -> Vec<Notification> {
        self.dispatch(Action::BackToCart)
    }

    pub fn submit_checkout(&mut self) -> Vec<Notification> {
        self.dispatch(Action::SubmitCheckout)
    }

    pub fn navigate(&mut self, section: Section) -> Vec<Notification> {
        self.dispatch(Action::Navigate { section })
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> Vec<Notification> {
        self.dispatch(Action::Search {
            query: query.into(),
        })
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    pub fn checkout(&self) -> &CheckoutState {
        &self.state.checkout
    }

    pub fn section(&self) -> Section {
        self.state.section
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    /// Receipt of the most recent order placed in this session.
    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        self.state.cart.totals()
    }

    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.state.cart.total_price()
    }

    pub fn total_items(&self) -> u64 {
        self.state.cart.total_items()
    }

    /// Results for the current search box contents.
    pub fn search_results(&self) -> SearchResults<'_> {
        search(
            self.catalog.products(),
            &self.state.search_query,
            self.empty_query,
        )
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Catalog::vinyl_shop())
    }
}
