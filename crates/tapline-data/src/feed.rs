//! Catalog feed parsing and loading.
//!
//! The catalog publishes as a header-labeled, comma-separated tabular
//! feed. Header spellings drift between snapshots, so each field
//! resolves through a prioritized alias list; rows that fail to yield
//! a product name are dropped, and numeric fields that fail to parse
//! default to 0 instead of propagating junk.

use std::sync::Arc;

use tapline_commerce::catalog::{Product, StockLevel};
use tapline_commerce::money::{Currency, Money};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::transport::Transport;

/// Accepted header spellings per field, in priority order.
const NAME_ALIASES: &[&str] = &["product name", "name", "product"];
const PRICE_ALIASES: &[&str] = &["price", "unit price"];
const STOCK_ALIASES: &[&str] = &["qty in stock", "quantity in stock", "stock", "inventory"];
const CATEGORY_ALIASES: &[&str] = &["category", "type"];

/// Normalize a header cell: lowercase, collapsed inner whitespace.
fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve a column index by trying aliases in priority order.
fn resolve_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

/// Parse the feed text into typed products.
///
/// Rows with an empty or unresolvable name are dropped. A missing
/// stock column leaves every row's stock unknown rather than zero.
pub fn parse_feed(text: &str, currency: Currency) -> Vec<Product> {
    let mut lines = text.trim().lines();
    let headers: Vec<String> = match lines.next() {
        Some(header_row) => header_row.split(',').map(normalize_header).collect(),
        None => return Vec::new(),
    };

    let name_col = match resolve_column(&headers, NAME_ALIASES) {
        Some(col) => col,
        None => {
            warn!("catalog feed has no recognizable name column");
            return Vec::new();
        }
    };
    let price_col = resolve_column(&headers, PRICE_ALIASES);
    let stock_col = resolve_column(&headers, STOCK_ALIASES);
    let category_col = resolve_column(&headers, CATEGORY_ALIASES);

    let mut products = Vec::new();
    for line in lines {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();

        let name = cells.get(name_col).copied().unwrap_or_default();
        if name.is_empty() {
            debug!("dropping feed row with empty name");
            continue;
        }

        // Unit prices are non-negative; a negative cell is feed junk
        // and clamps to zero like a negative stock count does.
        let price = price_col
            .and_then(|col| cells.get(col))
            .and_then(|cell| cell.parse::<f64>().ok())
            .unwrap_or(0.0)
            .max(0.0);

        let stock = match stock_col {
            Some(col) => {
                let count = cells
                    .get(col)
                    .and_then(|cell| cell.parse::<i64>().ok())
                    .unwrap_or(0);
                StockLevel::Known(count.max(0))
            }
            None => StockLevel::Unknown,
        };

        let category = category_col
            .and_then(|col| cells.get(col))
            .copied()
            .unwrap_or_default();

        products.push(Product::new(
            name,
            Money::from_decimal(price, currency),
            stock,
            category,
        ));
    }

    products
}

/// Loads catalog snapshots from the published feed URL.
pub struct CatalogLoader {
    transport: Arc<dyn Transport>,
    url: String,
    currency: Currency,
}

impl CatalogLoader {
    /// Create a loader for a feed URL.
    pub fn new(transport: Arc<dyn Transport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
            currency: Currency::USD,
        }
    }

    /// Set the currency product prices are denominated in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Fetch and parse a catalog snapshot.
    ///
    /// A failed fetch comes back as `FetchError` so the caller can
    /// surface "catalog unavailable"; it never panics the session.
    pub async fn load(&self) -> Result<Vec<Product>, FetchError> {
        let resp = self
            .transport
            .get(&self.url)
            .await?
            .error_for_status(&self.url)?;
        let text = resp.text()?;
        let products = parse_feed(&text, self.currency);
        debug!(count = products.len(), "catalog snapshot loaded");
        Ok(products)
    }
}
