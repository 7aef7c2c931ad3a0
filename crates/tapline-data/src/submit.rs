//! Order submission gateway.

use std::sync::Arc;

use tapline_commerce::order::Order;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::transport::Transport;

/// Posts finalized orders to the submission sink.
pub struct SubmissionGateway {
    transport: Arc<dyn Transport>,
    url: String,
}

impl SubmissionGateway {
    /// Create a gateway for a sink URL.
    pub fn new(transport: Arc<dyn Transport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// Submit an order.
    ///
    /// Failure is surfaced distinctly so the caller can keep the
    /// session's cart and customer for a retry; the order itself is
    /// immutable and can be posted again as-is.
    pub async fn submit(&self, order: &Order) -> Result<(), FetchError> {
        let payload = serde_json::to_value(order.payload())?;
        let resp = self.transport.post_json(&self.url, &payload).await?;
        if !resp.is_success() {
            warn!(
                order_number = %order.order_number,
                status = resp.status,
                "order submission rejected"
            );
            return Err(FetchError::Http {
                status: resp.status,
                url: self.url.clone(),
            });
        }
        debug!(order_number = %order.order_number, "order submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::tests_support::MockTransport;
    use crate::transport::Response;
    use tapline_commerce::cart::LineItem;
    use tapline_commerce::catalog::{Product, StockLevel};
    use tapline_commerce::customer::CustomerRecord;
    use tapline_commerce::money::{Currency, Money};
    use tapline_commerce::pricing::{price_order, PricingConfig};

    fn sample_order() -> Order {
        let product = Product::new(
            "Stout Keg",
            Money::new(12500, Currency::USD),
            StockLevel::Known(4),
            "Kegs",
        );
        let items = vec![LineItem::from_product(&product, 2)];
        let mut customer = CustomerRecord::named("Blue Door Bistro");
        customer.classification = "Restaurant".to_string();
        let totals = price_order(&items, &customer, &PricingConfig::default()).unwrap();
        Order::new(customer, items, totals)
    }

    #[tokio::test]
    async fn test_submit_posts_payload() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Response::with_body(200, r#"{"ok": true}"#));
        let gateway = SubmissionGateway::new(mock.clone(), "http://sink.test/orders");

        gateway.submit(&sample_order()).await.unwrap();

        assert_eq!(mock.requested_urls(), vec!["http://sink.test/orders"]);
        let bodies = mock.posted_bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["customer"]["display_name"], "Blue Door Bistro");
        assert_eq!(bodies[0]["items"].as_array().unwrap().len(), 1);
        assert_eq!(
            bodies[0]["totals"]["deposit_total"]["amount_cents"].as_i64(),
            Some(6000)
        );
    }

    #[tokio::test]
    async fn test_submit_surfaces_http_failure() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Response::with_body(502, "bad gateway"));
        let gateway = SubmissionGateway::new(mock, "http://sink.test/orders");

        let err = gateway.submit(&sample_order()).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_submit_surfaces_connection_failure() {
        let mock = Arc::new(MockTransport::new());
        mock.push_err(FetchError::Connection("refused".to_string()));
        let gateway = SubmissionGateway::new(mock, "http://sink.test/orders");

        let order = sample_order();
        let err = gateway.submit(&order).await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
        // The order is untouched and can be retried as-is.
        assert_eq!(order.item_count(), 2);
    }
}
