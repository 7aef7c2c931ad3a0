//! Wholesale ordering domain types and pricing for Tapline.
//!
//! This crate provides the pure, synchronous half of the Tapline
//! wholesale ordering flow:
//!
//! - **Catalog**: typed product records with packaging classification
//!   and stock levels
//! - **Customer**: wholesale customer records with business
//!   classification and payment terms
//! - **Cart**: building validated line items from quantity selections
//! - **Pricing**: deterministic order totals (volume discount, tax,
//!   keg deposits)
//! - **Session**: the single-owner ordering session state machine
//!
//! # Example
//!
//! ```rust,ignore
//! use tapline_commerce::prelude::*;
//!
//! let builder = CartBuilder::new();
//! let items = builder.build(&catalog, &quantities)?;
//!
//! let config = PricingConfig::default();
//! let totals = price_order(&items, &customer, &config)?;
//! println!("Total: {}", totals.total.display());
//! ```
//!
//! Everything here is side-effect free: nothing in this crate performs
//! I/O or awaits. Fetching the catalog feed, searching the customer
//! directory, and submitting finished orders live in `tapline-data`.

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod order;
pub mod pricing;
pub mod session;

pub use error::OrderError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::OrderError;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductKind, StockLevel};

    // Customer
    pub use crate::customer::{CustomerRecord, PaymentTerms};

    // Cart
    pub use crate::cart::{CartBuilder, LineItem, StockPolicy};

    // Pricing
    pub use crate::pricing::{
        price_order, ClassificationMatch, LineItemPricing, PricingBreakdown, PricingConfig,
    };

    // Order + session
    pub use crate::order::{Order, SubmissionPayload};
    pub use crate::session::{OrderSession, SessionStep};
}
