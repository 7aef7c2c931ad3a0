//! Finalized orders and the submission payload.

use crate::cart::LineItem;
use crate::customer::CustomerRecord;
use crate::pricing::PricingBreakdown;
use serde::{Deserialize, Serialize};

/// A finalized order, ready for submission.
///
/// Immutable once built; there is no update or cancel path. A failed
/// submission is retried by submitting the same order again, and a
/// changed order means restarting from the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Human-readable order number.
    pub order_number: String,
    /// The customer placing the order.
    pub customer: CustomerRecord,
    /// Ordered line items.
    pub line_items: Vec<LineItem>,
    /// Computed totals at finalization time.
    pub totals: PricingBreakdown,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Build an order from reviewed session state.
    pub fn new(
        customer: CustomerRecord,
        line_items: Vec<LineItem>,
        totals: PricingBreakdown,
    ) -> Self {
        Self {
            order_number: Self::generate_order_number(),
            customer,
            line_items,
            totals,
            created_at: current_timestamp(),
        }
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        format!("ORD-{}", current_timestamp())
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Borrow the wire payload for the submission sink.
    pub fn payload(&self) -> SubmissionPayload<'_> {
        SubmissionPayload {
            customer: &self.customer,
            items: &self.line_items,
            totals: &self.totals,
        }
    }
}

/// The JSON shape the submission sink accepts.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload<'a> {
    /// The customer record.
    pub customer: &'a CustomerRecord,
    /// Ordered line items.
    pub items: &'a [LineItem],
    /// Computed totals, included so the sink can cross-check.
    pub totals: &'a PricingBreakdown,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
