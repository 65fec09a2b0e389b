//! Storefront domain logic for the vinyl record shop.
//!
//! This crate holds everything that is not presentation:
//!
//! - **Catalog**: the fixed list of records on sale
//! - **Cart**: lines keyed by record id, quantities, derived totals
//! - **Checkout**: cart/checkout mode, payment method selection, submission
//! - **Search**: case-insensitive filter over title, artist and genre
//! - **Storefront**: session state advanced by a pure reducer, emitting notifications
//!
//! # Example
//!
//! ```rust
//! use vinyl_commerce::prelude::*;
//!
//! let mut shop = Storefront::new(Catalog::vinyl_shop());
//! shop.add_to_cart(ProductId::new(1));
//! shop.add_to_cart(ProductId::new(1));
//! assert_eq!(shop.total_price().unwrap().amount, 4998);
//!
//! shop.begin_checkout();
//! shop.select_payment(PaymentMethod::Card);
//! let notes = shop.submit_checkout();
//! assert!(!notes[0].is_error());
//! assert!(shop.cart().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::{ProductId, SessionId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SessionId};
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{Notification, NotificationKind, NotificationSink};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotal};

    // Checkout
    pub use crate::checkout::{CheckoutMode, CheckoutState, PaymentMethod, Receipt};

    // Search
    pub use crate::search::{filter_records, search, EmptyQueryPolicy, SearchResults};

    // Storefront
    pub use crate::storefront::{
        reduce, Action, Dispatched, Section, SessionState, Storefront, Transition,
    };
}
