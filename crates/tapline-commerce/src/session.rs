//! The ordering session state machine.
//!
//! One session owns the whole flow: the catalog snapshot, the selected
//! customer, the quantity selections, and the reviewed cart. It is the
//! explicit context object passed to each operation; there are no
//! ambient globals and no concurrent access.

use std::collections::HashMap;

use crate::cart::{CartBuilder, LineItem};
use crate::catalog::Product;
use crate::customer::CustomerRecord;
use crate::error::OrderError;
use crate::order::Order;
use crate::pricing::{price_order, PricingBreakdown, PricingConfig};
use serde::{Deserialize, Serialize};

/// Steps in the ordering flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionStep {
    /// Selecting a customer from the directory.
    #[default]
    Customer,
    /// Selecting product quantities.
    Products,
    /// Reviewing the priced order.
    Review,
    /// Order submitted.
    Complete,
}

impl SessionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStep::Customer => "customer",
            SessionStep::Products => "products",
            SessionStep::Review => "review",
            SessionStep::Complete => "complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            SessionStep::Customer => 1,
            SessionStep::Products => 2,
            SessionStep::Review => 3,
            SessionStep::Complete => 4,
        }
    }
}

/// An in-progress ordering session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSession {
    /// Current step.
    step: SessionStep,
    /// Catalog snapshot, read-only for the session once loaded.
    catalog: Vec<Product>,
    /// Selected customer.
    customer: Option<CustomerRecord>,
    /// Requested quantities by product name.
    quantities: HashMap<String, i64>,
    /// Line items from the last successful review.
    line_items: Vec<LineItem>,
    /// Totals from the last successful review.
    totals: Option<PricingBreakdown>,
    /// Unix timestamp of creation.
    created_at: i64,
    /// Unix timestamp of last update.
    updated_at: i64,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    /// Start a fresh session at the customer step.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            step: SessionStep::Customer,
            catalog: Vec::new(),
            customer: None,
            quantities: HashMap::new(),
            line_items: Vec::new(),
            totals: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The current step.
    pub fn step(&self) -> SessionStep {
        self.step
    }

    /// The catalog snapshot.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The selected customer, once one has been chosen.
    pub fn customer(&self) -> Option<&CustomerRecord> {
        self.customer.as_ref()
    }

    /// Quantities entered so far.
    pub fn quantities(&self) -> &HashMap<String, i64> {
        &self.quantities
    }

    /// Line items from the last successful review.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Totals from the last successful review.
    pub fn totals(&self) -> Option<&PricingBreakdown> {
        self.totals.as_ref()
    }

    /// Install a freshly fetched catalog snapshot.
    ///
    /// Allowed while selecting a customer or products (the two loads
    /// are independent); a reviewed cart keeps its snapshotted prices
    /// regardless.
    pub fn load_catalog(&mut self, catalog: Vec<Product>) -> Result<(), OrderError> {
        match self.step {
            SessionStep::Customer | SessionStep::Products => {
                self.catalog = catalog;
                self.touch();
                Ok(())
            }
            step => Err(OrderError::WrongStep {
                step: step.as_str().to_string(),
                operation: "load_catalog".to_string(),
            }),
        }
    }

    /// Whether the catalog loaded with any products.
    ///
    /// A failed fetch leaves this false; callers surface "catalog
    /// unavailable" instead of an empty product grid.
    pub fn catalog_available(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// Select the customer and move to product selection.
    pub fn select_customer(&mut self, customer: CustomerRecord) -> Result<(), OrderError> {
        if self.step != SessionStep::Customer {
            return Err(OrderError::WrongStep {
                step: self.step.as_str().to_string(),
                operation: "select_customer".to_string(),
            });
        }
        self.customer = Some(customer);
        self.step = SessionStep::Products;
        self.touch();
        Ok(())
    }

    /// Record a requested quantity for a product.
    pub fn set_quantity(
        &mut self,
        product_name: impl Into<String>,
        quantity: i64,
    ) -> Result<(), OrderError> {
        if self.step != SessionStep::Products {
            return Err(OrderError::WrongStep {
                step: self.step.as_str().to_string(),
                operation: "set_quantity".to_string(),
            });
        }
        let name = product_name.into();
        if quantity == 0 {
            self.quantities.remove(&name);
        } else {
            self.quantities.insert(name, quantity);
        }
        self.touch();
        Ok(())
    }

    /// Build and price the cart, moving to review.
    ///
    /// A build or pricing error (empty cart, stock exceeded) leaves
    /// the session at the products step with its quantities intact so
    /// the user can correct and retry.
    pub fn review(
        &mut self,
        builder: &CartBuilder,
        config: &PricingConfig,
    ) -> Result<&PricingBreakdown, OrderError> {
        if self.step != SessionStep::Products {
            return Err(OrderError::WrongStep {
                step: self.step.as_str().to_string(),
                operation: "review".to_string(),
            });
        }
        let customer = self.customer.as_ref().ok_or(OrderError::WrongStep {
            step: self.step.as_str().to_string(),
            operation: "review".to_string(),
        })?;

        let items = builder.build(&self.catalog, &self.quantities)?;
        let totals = price_order(&items, customer, config)?;

        self.line_items = items;
        self.step = SessionStep::Review;
        self.touch();
        Ok(self.totals.insert(totals))
    }

    /// Go back from review to product selection, keeping quantities.
    pub fn back_to_products(&mut self) -> Result<(), OrderError> {
        if self.step != SessionStep::Review {
            return Err(OrderError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: SessionStep::Products.as_str().to_string(),
            });
        }
        self.step = SessionStep::Products;
        self.touch();
        Ok(())
    }

    /// Build the immutable order from the reviewed state.
    ///
    /// The session is left untouched: a failed submission keeps the
    /// cart and customer so the same order can be finalized and
    /// resubmitted without re-entering data.
    pub fn finalize(&self) -> Result<Order, OrderError> {
        if self.step != SessionStep::Review {
            return Err(OrderError::WrongStep {
                step: self.step.as_str().to_string(),
                operation: "finalize".to_string(),
            });
        }
        let customer = self.customer.clone().ok_or(OrderError::WrongStep {
            step: self.step.as_str().to_string(),
            operation: "finalize".to_string(),
        })?;
        let totals = self.totals.clone().ok_or(OrderError::EmptyCart)?;
        Ok(Order::new(customer, self.line_items.clone(), totals))
    }

    /// Mark the order as successfully submitted.
    pub fn complete(&mut self) -> Result<(), OrderError> {
        if self.step != SessionStep::Review {
            return Err(OrderError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: SessionStep::Complete.as_str().to_string(),
            });
        }
        self.step = SessionStep::Complete;
        self.touch();
        Ok(())
    }

    /// Check if the session finished.
    pub fn is_complete(&self) -> bool {
        self.step == SessionStep::Complete
    }

    fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockLevel;
    use crate::money::{Currency, Money};

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(
                "IPA Case (24)",
                Money::new(3600, Currency::USD),
                StockLevel::Known(10),
                "Cases",
            ),
            Product::new(
                "Stout Keg",
                Money::new(12500, Currency::USD),
                StockLevel::Known(4),
                "Kegs",
            ),
        ]
    }

    fn restaurant() -> CustomerRecord {
        let mut c = CustomerRecord::named("Blue Door Bistro");
        c.classification = "Restaurant".to_string();
        c
    }

    #[test]
    fn test_new_session_starts_at_customer() {
        let session = OrderSession::new();
        assert_eq!(session.step(), SessionStep::Customer);
        assert!(!session.catalog_available());
    }

    #[test]
    fn test_full_flow() {
        let mut session = OrderSession::new();
        session.load_catalog(catalog()).unwrap();
        session.select_customer(restaurant()).unwrap();
        assert_eq!(session.step(), SessionStep::Products);

        session.set_quantity("IPA Case (24)", 2).unwrap();
        let totals = session
            .review(&CartBuilder::new(), &PricingConfig::default())
            .unwrap();
        assert_eq!(totals.subtotal.amount_cents, 7200);
        assert_eq!(session.step(), SessionStep::Review);

        let order = session.finalize().unwrap();
        assert_eq!(order.item_count(), 2);

        session.complete().unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn test_review_requires_products_step() {
        let mut session = OrderSession::new();
        let err = session
            .review(&CartBuilder::new(), &PricingConfig::default())
            .unwrap_err();
        assert!(matches!(err, OrderError::WrongStep { .. }));
    }

    #[test]
    fn test_failed_review_keeps_quantities() {
        let mut session = OrderSession::new();
        session.load_catalog(catalog()).unwrap();
        session.select_customer(restaurant()).unwrap();
        session.set_quantity("Stout Keg", 99).unwrap();

        let err = session
            .review(&CartBuilder::new(), &PricingConfig::default())
            .unwrap_err();
        assert!(matches!(err, OrderError::StockExceeded { .. }));
        assert_eq!(session.step(), SessionStep::Products);
        assert_eq!(session.quantities().get("Stout Keg"), Some(&99));
    }

    #[test]
    fn test_empty_cart_blocks_review() {
        let mut session = OrderSession::new();
        session.load_catalog(catalog()).unwrap();
        session.select_customer(restaurant()).unwrap();

        let err = session
            .review(&CartBuilder::new(), &PricingConfig::default())
            .unwrap_err();
        assert_eq!(err, OrderError::EmptyCart);
    }

    #[test]
    fn test_back_to_products_keeps_entries() {
        let mut session = OrderSession::new();
        session.load_catalog(catalog()).unwrap();
        session.select_customer(restaurant()).unwrap();
        session.set_quantity("IPA Case (24)", 2).unwrap();
        session
            .review(&CartBuilder::new(), &PricingConfig::default())
            .unwrap();

        session.back_to_products().unwrap();
        assert_eq!(session.step(), SessionStep::Products);
        assert_eq!(session.quantities().get("IPA Case (24)"), Some(&2));
    }

    #[test]
    fn test_zero_quantity_clears_entry() {
        let mut session = OrderSession::new();
        session.load_catalog(catalog()).unwrap();
        session.select_customer(restaurant()).unwrap();
        session.set_quantity("IPA Case (24)", 2).unwrap();
        session.set_quantity("IPA Case (24)", 0).unwrap();
        assert!(session.quantities().is_empty());
    }

    #[test]
    fn test_finalize_preserves_session_for_retry() {
        let mut session = OrderSession::new();
        session.load_catalog(catalog()).unwrap();
        session.select_customer(restaurant()).unwrap();
        session.set_quantity("Stout Keg", 1).unwrap();
        session
            .review(&CartBuilder::new(), &PricingConfig::default())
            .unwrap();

        // A failed submission finalizes again without data re-entry.
        let first = session.finalize().unwrap();
        let second = session.finalize().unwrap();
        assert_eq!(session.step(), SessionStep::Review);
        assert_eq!(first.line_items, second.line_items);
        assert_eq!(first.totals, second.totals);
    }

    #[test]
    fn test_complete_requires_review() {
        let mut session = OrderSession::new();
        let err = session.complete().unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { .. }));
    }
}
