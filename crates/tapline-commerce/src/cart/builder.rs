//! Cart building and stock validation.

use std::collections::HashMap;

use crate::cart::LineItem;
use crate::catalog::Product;
use crate::error::OrderError;
use serde::{Deserialize, Serialize};

/// What to do when a requested quantity exceeds known stock.
///
/// Whichever policy is chosen applies uniformly to the whole build;
/// neither outcome is ever silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StockPolicy {
    /// Fail the whole build with `StockExceeded`.
    #[default]
    Reject,
    /// Clamp the quantity down to available stock and mark the line
    /// item as clamped. A product with zero stock still rejects, since
    /// clamping to zero would just drop the line.
    Clamp,
}

/// Builds an ordered line-item list from a catalog snapshot and a
/// quantity selection.
#[derive(Debug, Clone, Default)]
pub struct CartBuilder {
    policy: StockPolicy,
}

impl CartBuilder {
    /// Create a builder with the default (rejecting) stock policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stock policy.
    pub fn with_policy(mut self, policy: StockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active stock policy.
    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// Build line items from requested quantities, keyed by product
    /// name. Absent or zero entries are skipped; quantities are
    /// validated against stock per the active policy.
    ///
    /// Line items come back in catalog order. An empty result is
    /// `EmptyCart`, never a silent empty list: pricing must not run on
    /// zero line items.
    pub fn build(
        &self,
        catalog: &[Product],
        quantities: &HashMap<String, i64>,
    ) -> Result<Vec<LineItem>, OrderError> {
        let mut items = Vec::new();

        for product in catalog {
            let requested = match quantities.get(&product.name) {
                Some(&q) => q,
                None => continue,
            };

            if requested == 0 {
                continue;
            }
            if requested < 0 {
                return Err(OrderError::InvalidQuantity {
                    product: product.name.clone(),
                    quantity: requested,
                });
            }

            if product.stock.can_fulfill(requested) {
                items.push(LineItem::from_product(product, requested));
                continue;
            }

            // Known stock, exceeded. `can_fulfill` only fails on Known.
            let available = product.stock.available().unwrap_or(0);
            match self.policy {
                StockPolicy::Reject => {
                    return Err(OrderError::StockExceeded {
                        product: product.name.clone(),
                        requested,
                        available,
                    });
                }
                StockPolicy::Clamp if available > 0 => {
                    let mut item = LineItem::from_product(product, available);
                    item.clamped = true;
                    items.push(item);
                }
                StockPolicy::Clamp => {
                    return Err(OrderError::StockExceeded {
                        product: product.name.clone(),
                        requested,
                        available,
                    });
                }
            }
        }

        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(items)
    }
}
