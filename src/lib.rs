//! Minimal async REST client for the Pinecone vector database.
//!
//! Provides typed methods for upserting, querying, listing, and deleting
//! vectors within namespaces. The client's responsibility ends at request
//! construction, auth header injection, JSON serialization, and structured
//! error extraction — no caching, no retries, no pagination orchestration.
//!
//! # Architecture
//!
//! - [`client`]: [`PineconeClient`] — shared request dispatch and the six
//!   index operations
//! - [`config`]: [`ClientConfig`] — endpoint, API key, and timeouts
//! - [`types`]: wire types (vectors, query requests/responses, pagination)
//! - [`error`]: [`ClientError`] and the crate [`Result`] alias
//!
//! Every operation is a single stateless request/response exchange. The
//! underlying `reqwest::Client` is cheaply cloneable and safe to share
//! across concurrent callers; cancellation is per-call (drop the future).
//!
//! # Example
//!
//! ```rust,no_run
//! use pinecone_rest::{PineconeClient, QueryRequest, Vector};
//!
//! # async fn run() -> pinecone_rest::Result<()> {
//! let client = PineconeClient::new(
//!     "https://example-index.svc.us-east1-gcp.pinecone.io",
//!     "my-api-key",
//! );
//!
//! let count = client
//!     .upsert(
//!         &[Vector::new("vec-1", vec![0.1, 0.2, 0.3])],
//!         "production",
//!     )
//!     .await?;
//! assert_eq!(count, 1);
//!
//! let results = client
//!     .query(&QueryRequest::new(vec![0.1, 0.2, 0.3], 10).with_namespace("production"))
//!     .await?;
//! println!("{} matches", results.matches.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::PineconeClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::{
    Filter, Metadata, QueryMatch, QueryRequest, QueryResponse, ReadUsage, Vector, VectorIdPage,
};

/// Wire protocol revision sent as `X-Pinecone-API-Version` on every request.
pub const API_VERSION: &str = "2025-04";

/// Default connection timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
