//! Order pricing module.
//!
//! Deterministic totals for a validated line-item list: subtotal,
//! volume discount, classification-based tax, and keg deposits.

mod breakdown;
mod config;
mod engine;

pub use breakdown::{LineItemPricing, PricingBreakdown};
pub use config::{ClassificationMatch, PricingConfig};
pub use engine::price_order;

pub use config::{
    CASE_DISCOUNT_RATE, CASE_DISCOUNT_THRESHOLD, KEG_DEPOSIT_CENTS, TAXABLE_CLASSIFICATION,
    TAX_RATE,
};
