//! Customer directory client.
//!
//! Wraps the keyed-search endpoint of the wholesale customer
//! directory. Two policies from the observed service apply uniformly:
//! short queries never hit the network, and a search superseded by a
//! newer one is discarded rather than delivered out of order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tapline_commerce::customer::CustomerRecord;
use tracing::{debug, warn};

use crate::transport::{encode_query_value, Transport};

/// Minimum query length before a network call is made.
pub const MIN_QUERY_LEN: usize = 2;

/// Outcome of a directory search.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectorySearch {
    /// Candidate records for the query (possibly empty).
    Results(Vec<CustomerRecord>),
    /// A newer search was issued while this one was in flight; discard.
    Superseded,
}

impl DirectorySearch {
    /// The records, if this search is still current.
    pub fn records(self) -> Option<Vec<CustomerRecord>> {
        match self {
            DirectorySearch::Results(records) => Some(records),
            DirectorySearch::Superseded => None,
        }
    }
}

/// Wire envelope the directory returns.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<CustomerRecord>,
}

/// Client for the customer directory endpoint.
pub struct DirectoryClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    generation: AtomicU64,
}

impl DirectoryClient {
    /// Create a client for a directory base URL.
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            generation: AtomicU64::new(0),
        }
    }

    /// Search the directory by partial customer name.
    ///
    /// Queries shorter than `MIN_QUERY_LEN` short-circuit to empty
    /// results without a network call. Network or parse failures are
    /// absorbed into empty results; the user just keeps typing. If a
    /// newer search is issued before this one resolves, the stale
    /// result comes back `Superseded` (last query wins).
    pub async fn search(&self, query: &str) -> DirectorySearch {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return DirectorySearch::Results(Vec::new());
        }

        let seq = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let url = format!("{}?q={}", self.base_url, encode_query_value(query));

        let results = match self.fetch(&url).await {
            Ok(records) => records,
            Err(e) => {
                warn!(query, error = %e, "directory search failed, returning no results");
                Vec::new()
            }
        };

        if self.generation.load(Ordering::SeqCst) != seq {
            debug!(query, "directory search superseded by a newer query");
            return DirectorySearch::Superseded;
        }
        DirectorySearch::Results(results)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<CustomerRecord>, crate::error::FetchError> {
        let resp = self.transport.get(url).await?.error_for_status(url)?;
        let envelope: SearchEnvelope = resp.json()?;
        Ok(envelope.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::transport::tests_support::MockTransport;
    use crate::transport::Response;
    use tokio::sync::Notify;

    fn results_body(names: &[&str]) -> String {
        let results: Vec<String> = names
            .iter()
            .map(|n| format!(r#"{{"name": "{}"}}"#, n))
            .collect();
        format!(r#"{{"results": [{}]}}"#, results.join(","))
    }

    #[tokio::test]
    async fn test_short_query_skips_network() {
        let mock = Arc::new(MockTransport::new());
        let client = DirectoryClient::new(mock.clone(), "http://dir.test/search");

        assert_eq!(
            client.search("a").await,
            DirectorySearch::Results(Vec::new())
        );
        assert_eq!(client.search("").await, DirectorySearch::Results(Vec::new()));
        // Whitespace does not count toward the minimum.
        assert_eq!(
            client.search(" b ").await,
            DirectorySearch::Results(Vec::new())
        );
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_search_returns_records() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Response::with_body(
            200,
            results_body(&["Blue Door Bistro", "Blue Heron Tap"]),
        ));
        let client = DirectoryClient::new(mock.clone(), "http://dir.test/search");

        let records = client.search("blue").await.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_name, "Blue Door Bistro");
        assert_eq!(mock.requested_urls(), vec!["http://dir.test/search?q=blue"]);
    }

    #[tokio::test]
    async fn test_query_is_percent_encoded() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Response::with_body(200, results_body(&[])));
        let client = DirectoryClient::new(mock.clone(), "http://dir.test/search");

        client.search("blue door").await;
        assert_eq!(
            mock.requested_urls(),
            vec!["http://dir.test/search?q=blue%20door"]
        );
    }

    #[tokio::test]
    async fn test_network_failure_yields_empty_results() {
        let mock = Arc::new(MockTransport::new());
        mock.push_err(FetchError::Connection("refused".to_string()));
        let client = DirectoryClient::new(mock, "http://dir.test/search");

        let outcome = client.search("blue").await;
        assert_eq!(outcome, DirectorySearch::Results(Vec::new()));
    }

    #[tokio::test]
    async fn test_parse_failure_yields_empty_results() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Response::with_body(200, "<html>not json</html>"));
        let client = DirectoryClient::new(mock, "http://dir.test/search");

        let outcome = client.search("blue").await;
        assert_eq!(outcome, DirectorySearch::Results(Vec::new()));
    }

    #[tokio::test]
    async fn test_missing_results_field_is_empty() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Response::with_body(200, "{}"));
        let client = DirectoryClient::new(mock, "http://dir.test/search");

        let records = client.search("blue").await.records().unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_stale_search_is_superseded() {
        let mock = Arc::new(MockTransport::new());
        let gate = Arc::new(Notify::new());
        // First request stalls until released; second resolves at once.
        mock.push_gated(gate.clone(), Response::with_body(200, results_body(&["Blue Door Bistro"])));
        mock.push_ok(Response::with_body(200, results_body(&["Blue Heron Tap"])));

        let client = Arc::new(DirectoryClient::new(mock.clone(), "http://dir.test/search"));

        let stale_client = client.clone();
        let stale = tokio::spawn(async move { stale_client.search("blu").await });

        // Wait until the first request is actually in flight.
        while mock.request_count() < 1 {
            tokio::task::yield_now().await;
        }

        let fresh = client.search("blue").await;
        assert_eq!(
            fresh.records().unwrap()[0].display_name,
            "Blue Heron Tap"
        );

        gate.notify_one();
        assert_eq!(stale.await.unwrap(), DirectorySearch::Superseded);
    }
}
