//! Client configuration.
//!
//! [`ClientConfig`] is typically embedded in application configuration to
//! specify which Pinecone index endpoint to talk to and how.

use serde::{Deserialize, Serialize};

/// Configuration for a [`PineconeClient`](crate::PineconeClient).
///
/// Immutable once the client is constructed from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Index-specific endpoint URL
    /// (e.g. "https://example-index.svc.us-east1-gcp.pinecone.io").
    pub endpoint: String,

    /// API key used for authentication.
    pub api_key: String,

    /// Connection timeout in milliseconds (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// Per-request timeout in milliseconds (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration for the given endpoint and API key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            connect_timeout_ms: None,
            request_timeout_ms: None,
        }
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }
}
