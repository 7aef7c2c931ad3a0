//! Pricing breakdown types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for an order.
///
/// Purely derived from (line items, customer, config); recompute it
/// rather than caching it against mutated inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingBreakdown {
    /// Subtotal before discount.
    pub subtotal: Money,
    /// Volume discount amount.
    pub discount: Money,
    /// Tax amount (on subtotal minus discount).
    pub tax: Money,
    /// Total keg deposits.
    pub deposit_total: Money,
    /// Final total (subtotal - discount + tax + deposits).
    pub total: Money,
    /// Case-classified units counted toward the discount.
    pub case_units: i64,
    /// Keg-classified units counted toward deposits.
    pub deposit_units: i64,
    /// Per-line-item breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl PricingBreakdown {
    /// Amount the tax was computed on.
    pub fn taxable_amount(&self) -> Money {
        // subtotal and discount share a currency by construction.
        Money::new(
            self.subtotal.amount_cents - self.discount.amount_cents,
            self.subtotal.currency,
        )
    }

    /// Check if the volume discount applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Check if tax applied.
    pub fn has_tax(&self) -> bool {
        self.tax.is_positive()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product name.
    pub product_name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity).
    pub total: Money,
}
