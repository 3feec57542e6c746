//! Error types for Pinecone client operations.

use thiserror::Error;

/// Errors from client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response from the API, normalized into status + message + raw body.
    ///
    /// `message` is the `message` field of a structured JSON error body when
    /// present and non-empty, otherwise the raw body text verbatim.
    #[error("pinecone: {message} (status {status})")]
    Api {
        /// HTTP status code of the failing response.
        status: u16,
        /// Best-effort human-readable message.
        message: String,
        /// Raw response body, unmodified.
        body: String,
    },

    /// Network-level failure (DNS, connection refused, timeout, cancellation).
    /// Surfaced unchanged, never retried.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// Payload could not be encoded as JSON. Surfaced before any network call.
    #[error("payload serialization error: {0}")]
    Serialize(serde_json::Error),

    /// Request could not be constructed (e.g. malformed endpoint URL).
    /// Surfaced before any network call.
    #[error("request construction error: {0}")]
    Request(String),

    /// A 2xx response body was not valid JSON or did not match the expected
    /// shape. Distinct from [`ClientError::Api`].
    #[error("response decode error: {0}")]
    Decode(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
