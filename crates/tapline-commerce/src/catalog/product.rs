//! Product and stock types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Packaging classification of a product.
///
/// Resolved once when the catalog snapshot is built, from the feed's
/// category column with a name-substring fallback. Pricing never
/// re-derives this from display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Bulk case packaging, counted toward the volume discount.
    Case,
    /// Returnable-deposit container (full or fractional keg).
    Keg,
    /// Anything else.
    #[default]
    Other,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Case => "case",
            ProductKind::Keg => "keg",
            ProductKind::Other => "other",
        }
    }

    /// Classify a product from its category tag and display name.
    ///
    /// Matching is case-insensitive. Fractional keg markers ("1/2",
    /// "1/6") count as kegs; keg wins over case when both match.
    pub fn classify(category: &str, name: &str) -> Self {
        let category = category.to_lowercase();
        let name = name.to_lowercase();

        if category.contains("keg")
            || name.contains("keg")
            || name.contains("1/2")
            || name.contains("1/6")
        {
            ProductKind::Keg
        } else if category.contains("case") || name.contains("case") {
            ProductKind::Case
        } else {
            ProductKind::Other
        }
    }

    /// Whether quantities of this kind count toward the case discount.
    pub fn is_case(&self) -> bool {
        *self == ProductKind::Case
    }

    /// Whether this kind carries a per-unit deposit.
    pub fn is_keg(&self) -> bool {
        *self == ProductKind::Keg
    }
}

/// Stock level for a product.
///
/// The feed may omit the stock column entirely, in which case the
/// level is unknown and any positive quantity is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockLevel {
    /// Stock count reported by the feed.
    Known(i64),
    /// The feed did not report stock for this product.
    #[default]
    Unknown,
}

impl StockLevel {
    /// Get the available quantity, if known.
    pub fn available(&self) -> Option<i64> {
        match self {
            StockLevel::Known(n) => Some(*n),
            StockLevel::Unknown => None,
        }
    }

    /// Check whether a requested quantity can be fulfilled.
    ///
    /// Unknown stock admits any quantity.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        match self {
            StockLevel::Known(n) => *n >= quantity,
            StockLevel::Unknown => true,
        }
    }

    /// Check if the product is known to be out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockLevel::Known(n) if *n <= 0)
    }
}

/// A product in a catalog snapshot.
///
/// Immutable during an ordering session; there is no write path back
/// to the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name (unique within a snapshot).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Stock level at fetch time.
    pub stock: StockLevel,
    /// Packaging classification.
    pub kind: ProductKind,
    /// Raw category tag from the feed.
    pub category: String,
}

impl Product {
    /// Create a product, classifying it from its category and name.
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        stock: StockLevel,
        category: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let category = category.into();
        let kind = ProductKind::classify(&category, &name);
        Self {
            name,
            unit_price,
            stock,
            kind,
            category,
        }
    }

    /// Check if the product can appear in a cart at all.
    pub fn is_orderable(&self) -> bool {
        !self.stock.is_out_of_stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_classify_from_category() {
        assert_eq!(ProductKind::classify("Kegs", "House Lager"), ProductKind::Keg);
        assert_eq!(ProductKind::classify("Cases", "House Lager"), ProductKind::Case);
        assert_eq!(ProductKind::classify("Merch", "Pint Glass"), ProductKind::Other);
    }

    #[test]
    fn test_classify_from_name_fallback() {
        assert_eq!(
            ProductKind::classify("", "IPA Case (24)"),
            ProductKind::Case
        );
        assert_eq!(
            ProductKind::classify("", "Stout Keg"),
            ProductKind::Keg
        );
    }

    #[test]
    fn test_classify_fractional_keg_markers() {
        assert_eq!(ProductKind::classify("", "Pilsner 1/2 BBL"), ProductKind::Keg);
        assert_eq!(ProductKind::classify("", "Saison 1/6 BBL"), ProductKind::Keg);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(ProductKind::classify("KEG", "x"), ProductKind::Keg);
        assert_eq!(ProductKind::classify("", "AMBER CASE"), ProductKind::Case);
    }

    #[test]
    fn test_keg_wins_over_case() {
        // A keg sold by the case of one still carries a deposit.
        assert_eq!(
            ProductKind::classify("Kegs", "Lager Case Keg"),
            ProductKind::Keg
        );
    }

    #[test]
    fn test_stock_can_fulfill() {
        assert!(StockLevel::Known(10).can_fulfill(10));
        assert!(!StockLevel::Known(10).can_fulfill(11));
        assert!(StockLevel::Unknown.can_fulfill(1_000_000));
    }

    #[test]
    fn test_stock_out_of_stock() {
        assert!(StockLevel::Known(0).is_out_of_stock());
        assert!(!StockLevel::Known(1).is_out_of_stock());
        assert!(!StockLevel::Unknown.is_out_of_stock());
    }

    #[test]
    fn test_product_new_classifies() {
        let p = Product::new(
            "House Lager 1/2 BBL",
            Money::new(12500, Currency::USD),
            StockLevel::Known(8),
            "",
        );
        assert_eq!(p.kind, ProductKind::Keg);
        assert!(p.is_orderable());
    }
}
