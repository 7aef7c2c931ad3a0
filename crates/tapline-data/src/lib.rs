//! HTTP clients for the Tapline ordering flow.
//!
//! This crate owns the three remote collaborators of the wholesale
//! ordering session:
//!
//! - **Catalog feed**: a header-labeled tabular feed, fetched once per
//!   session and normalized into typed products
//! - **Customer directory**: a keyed search endpoint with short-query
//!   short-circuiting and last-query-wins semantics
//! - **Submission sink**: a JSON endpoint accepting finalized orders
//!
//! All network access goes through the [`Transport`] trait, with a
//! reqwest-backed [`HttpTransport`] for production use. The catalog
//! fetch and customer search are independent and may run concurrently;
//! nothing here blocks the synchronous pricing code in
//! `tapline-commerce`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tapline_data::{CatalogLoader, DirectoryClient, HttpTransport};
//!
//! let transport = Arc::new(HttpTransport::new());
//! let loader = CatalogLoader::new(transport.clone(), feed_url);
//! let directory = DirectoryClient::new(transport, directory_url);
//!
//! let (catalog, matches) =
//!     tokio::join!(loader.load(), directory.search("blue"));
//! ```

mod directory;
mod error;
mod feed;
mod submit;
mod transport;

pub use directory::{DirectoryClient, DirectorySearch, MIN_QUERY_LEN};
pub use error::FetchError;
pub use feed::{parse_feed, CatalogLoader};
pub use submit::SubmissionGateway;
pub use transport::{HttpTransport, Response, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogLoader, DirectoryClient, DirectorySearch, FetchError, HttpTransport,
        SubmissionGateway, Transport,
    };
}
