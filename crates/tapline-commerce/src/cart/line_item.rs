//! Cart line items.

use crate::catalog::{Product, ProductKind};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A validated line item.
///
/// Unit price and packaging kind are snapshotted from the product at
/// selection time; they must never be re-read from a later catalog
/// fetch. Invariant: `quantity > 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product name (denormalized for display and submission).
    pub product_name: String,
    /// Unit price at selection time.
    pub unit_price: Money,
    /// Packaging kind at selection time.
    pub kind: ProductKind,
    /// Quantity ordered. Always positive.
    pub quantity: i64,
    /// Set when the builder clamped this quantity down to stock under
    /// `StockPolicy::Clamp`, so a changed quantity is never silent.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub clamped: bool,
}

impl LineItem {
    /// Snapshot a product into a line item.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_name: product.name.clone(),
            unit_price: product.unit_price,
            kind: product.kind,
            quantity,
            clamped: false,
        }
    }

    /// Line total (unit price times quantity).
    ///
    /// Returns None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockLevel;
    use crate::money::Currency;

    #[test]
    fn test_from_product_snapshots_price_and_kind() {
        let product = Product::new(
            "IPA Case (24)",
            Money::new(3600, Currency::USD),
            StockLevel::Known(40),
            "Cases",
        );
        let item = LineItem::from_product(&product, 3);
        assert_eq!(item.product_name, "IPA Case (24)");
        assert_eq!(item.unit_price.amount_cents, 3600);
        assert_eq!(item.kind, ProductKind::Case);
        assert!(!item.clamped);
    }

    #[test]
    fn test_line_total() {
        let product = Product::new(
            "Stout Keg",
            Money::new(12500, Currency::USD),
            StockLevel::Unknown,
            "Kegs",
        );
        let item = LineItem::from_product(&product, 2);
        assert_eq!(item.line_total().unwrap().amount_cents, 25000);
    }
}
