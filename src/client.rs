//! HTTP client for the Pinecone index API.
//!
//! [`PineconeClient`] routes every operation through a single dispatch
//! helper (auth + version headers, optional JSON body) and every non-2xx
//! response through a single error normalizer, so error shape and headers
//! are enforced in one place.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::{Filter, QueryRequest, QueryResponse, Vector, VectorIdPage};
use crate::API_VERSION;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Request body for `/vectors/upsert`.
#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [Vector],
    namespace: &'a str,
}

/// Response from `/vectors/upsert`.
#[derive(Debug, Deserialize)]
struct UpsertResponse {
    #[serde(rename = "upsertedCount", default)]
    upserted_count: u32,
}

/// Request body for `/vectors/delete` (by ID).
#[derive(Debug, Serialize)]
struct DeleteByIdsRequest<'a> {
    ids: &'a [String],
    namespace: &'a str,
}

/// Request body for `/vectors/delete` (by metadata filter).
#[derive(Debug, Serialize)]
struct DeleteByFilterRequest<'a> {
    namespace: &'a str,
    filter: &'a Filter,
}

/// Response from `/vectors/list`.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    vectors: Vec<ListEntry>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    next: Option<String>,
}

/// Structured error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Extract a best-effort message from a failing response body.
///
/// Uses the `message` field of a structured JSON error when present and
/// non-empty, otherwise the raw body text verbatim.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.to_string())
}

/// Normalize a non-2xx response into [`ClientError::Api`].
///
/// Consumes the response body; the single path by which every operation
/// communicates remote failure.
async fn api_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    ClientError::Api {
        status,
        message: extract_message(&body),
        body,
    }
}

/// Decode a successful response body into the expected shape.
async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let body = resp.text().await.map_err(ClientError::Transport)?;
    serde_json::from_str(&body).map_err(ClientError::Decode)
}

/// Async REST client for a single Pinecone index.
///
/// Immutable after construction and cheap to clone; the underlying
/// `reqwest::Client` is shared and safe for concurrent use. Each operation
/// is one stateless request/response exchange — no retries, no caching.
/// Cancellation is per-call: dropping an operation future aborts the
/// in-flight exchange.
#[derive(Clone)]
pub struct PineconeClient {
    /// Index endpoint with trailing slashes stripped.
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl PineconeClient {
    /// Create a client for the given index endpoint and API key.
    ///
    /// Trailing slashes on `endpoint` are stripped, so
    /// `"https://host/"` and `"https://host"` are equivalent.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from configuration, honoring its timeouts.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let connect_timeout =
            Duration::from_millis(config.connect_timeout_ms.unwrap_or(crate::DEFAULT_CONNECT_TIMEOUT_MS));
        let request_timeout =
            Duration::from_millis(config.request_timeout_ms.unwrap_or(crate::DEFAULT_REQUEST_TIMEOUT_MS));

        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ClientError::Request(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::new(config.endpoint.clone(), config.api_key.clone()).with_http_client(http))
    }

    /// Replace the underlying HTTP transport.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// The normalized index endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request with auth and version headers and an optional JSON
    /// body.
    ///
    /// The body is serialized before any network activity; serialization
    /// and request-construction failures surface without a network call.
    /// Network failures propagate unchanged. Returns the live response for
    /// the operation to interpret.
    async fn dispatch<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&T>,
    ) -> Result<reqwest::Response> {
        let payload = match body {
            Some(value) => Some(serde_json::to_vec(value).map_err(ClientError::Serialize)?),
            None => None,
        };

        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(method = %method, url = %url, "dispatching request");

        let mut req = self
            .http
            .request(method, &url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION);

        if let Some(bytes) = payload {
            req = req.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        req.send().await.map_err(|e| {
            if e.is_builder() {
                ClientError::Request(e.to_string())
            } else {
                ClientError::Transport(e)
            }
        })
    }

    /// Insert or update vectors in `namespace`.
    ///
    /// Vectors sharing an ID with an existing vector overwrite it. An empty
    /// slice is not rejected locally; validation belongs to the service.
    /// Returns the number of vectors written.
    pub async fn upsert(&self, vectors: &[Vector], namespace: &str) -> Result<u32> {
        let payload = UpsertRequest { vectors, namespace };
        let resp = self
            .dispatch(Method::POST, "/vectors/upsert", Some(&payload))
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        let parsed: UpsertResponse = decode_json(resp).await?;
        Ok(parsed.upserted_count)
    }

    /// Similarity search with a dense query vector.
    ///
    /// The filter expression, if any, is passed through opaquely. Read-only.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let resp = self.dispatch(Method::POST, "/query", Some(request)).await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        decode_json(resp).await
    }

    /// List vector IDs in `namespace`, one page at a time.
    ///
    /// `prefix` filters IDs by prefix; `limit` caps the page size (`None`
    /// or `0` uses the service default); `pagination_token` resumes a prior
    /// listing. Query parameters are only included when present. The caller
    /// drives iteration by passing back the returned token; a `None` token
    /// in the result means the listing is exhausted.
    pub async fn list_vector_ids(
        &self,
        namespace: &str,
        prefix: Option<&str>,
        limit: Option<u32>,
        pagination_token: Option<&str>,
    ) -> Result<VectorIdPage> {
        let mut path = format!("/vectors/list?namespace={}", urlencoding::encode(namespace));
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            path.push_str(&format!("&prefix={}", urlencoding::encode(prefix)));
        }
        if let Some(limit) = limit.filter(|l| *l > 0) {
            path.push_str(&format!("&limit={limit}"));
        }
        if let Some(token) = pagination_token.filter(|t| !t.is_empty()) {
            path.push_str(&format!("&paginationToken={}", urlencoding::encode(token)));
        }

        let resp = self.dispatch::<()>(Method::GET, &path, None).await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        let parsed: ListResponse = decode_json(resp).await?;
        Ok(VectorIdPage {
            ids: parsed.vectors.into_iter().map(|v| v.id).collect(),
            pagination_token: parsed
                .pagination
                .and_then(|p| p.next)
                .filter(|t| !t.is_empty()),
        })
    }

    /// Delete the given vector IDs from `namespace`.
    ///
    /// Deleting IDs that do not exist is not an error at this layer.
    pub async fn delete_by_ids(&self, ids: &[String], namespace: &str) -> Result<()> {
        let payload = DeleteByIdsRequest { ids, namespace };
        let resp = self
            .dispatch(Method::POST, "/vectors/delete", Some(&payload))
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }
        Ok(())
    }

    /// Delete every vector in `namespace` matching `filter`.
    ///
    /// Same opaque filter convention as [`PineconeClient::query`].
    pub async fn delete_by_filter(&self, namespace: &str, filter: &Filter) -> Result<()> {
        let payload = DeleteByFilterRequest { namespace, filter };
        let resp = self
            .dispatch(Method::POST, "/vectors/delete", Some(&payload))
            .await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }
        Ok(())
    }

    /// Delete `namespace` and every vector in it.
    ///
    /// This is a destructive, irreversible operation: the namespace and all
    /// its data are permanently removed from the index. Any 2xx response
    /// (including 204 No Content) is success.
    pub async fn delete_namespace(&self, namespace: &str) -> Result<()> {
        let path = format!("/namespaces/{}", urlencoding::encode(namespace));
        let resp = self.dispatch::<()>(Method::DELETE, &path, None).await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }
        Ok(())
    }
}

impl fmt::Debug for PineconeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PineconeClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
