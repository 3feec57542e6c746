//! Wire types for the Pinecone index API.
//!
//! Field names follow the service's camelCase JSON convention via serde
//! renames. Metadata and filter expressions are loosely typed and passed
//! through opaquely; the service evaluates them.

use serde::{Deserialize, Serialize};

/// Unordered key-value metadata attached to a vector.
///
/// Values are loosely typed: scalars, arrays, or nested maps.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Opaque metadata filter expression, evaluated remotely.
///
/// By convention a bare scalar under a field key means "equals"; explicit
/// comparison operators (`$eq`, `$ne`, `$gt`, `$lt`, `$in`, ...) may be
/// nested under the field key. The client performs no local validation or
/// evaluation of filter semantics.
pub type Filter = serde_json::Value;

/// A single dense vector with optional metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Identifier, unique within a namespace.
    pub id: String,

    /// Embedding components. No dimensionality invariant is enforced
    /// locally; that is the service's responsibility.
    pub values: Vec<f32>,

    /// Optional metadata, omitted from the payload when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Vector {
    /// Create a vector without metadata.
    pub fn new(id: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            values,
            metadata: None,
        }
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// A similarity search request for the `/query` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// The query embedding vector.
    pub vector: Vec<f32>,

    /// Maximum number of matches to return.
    pub top_k: u32,

    /// Namespace to search. Empty string targets the default namespace.
    #[serde(default)]
    pub namespace: String,

    /// Optional metadata filter, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,

    /// Whether matches should carry their raw vector values.
    #[serde(default)]
    pub include_values: bool,

    /// Whether matches should carry their metadata.
    #[serde(default)]
    pub include_metadata: bool,
}

impl QueryRequest {
    /// Create a query for the `top_k` nearest neighbours of `vector`.
    pub fn new(vector: Vec<f32>, top_k: u32) -> Self {
        Self {
            vector,
            top_k,
            namespace: String::new(),
            filter: None,
            include_values: false,
            include_metadata: false,
        }
    }

    /// Set the target namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set a metadata filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Include raw vector values in matches.
    pub fn with_values(mut self, include: bool) -> Self {
        self.include_values = include;
        self
    }

    /// Include metadata in matches.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }
}

/// Response from the `/query` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Matches in descending similarity order, as returned by the service.
    #[serde(default)]
    pub matches: Vec<QueryMatch>,

    /// Namespace echoed from the request.
    #[serde(default)]
    pub namespace: String,

    /// Read usage accounting for this query.
    #[serde(default)]
    pub usage: ReadUsage,
}

/// A single query match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    /// The matched vector's identifier.
    pub id: String,

    /// Similarity score.
    #[serde(default)]
    pub score: f32,

    /// Raw vector values, present when the query asked for them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f32>>,

    /// Metadata, present when the query asked for it and the vector has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Read-unit accounting returned by queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadUsage {
    /// Read units consumed.
    #[serde(rename = "readUnits", default)]
    pub read_units: u32,
}

/// One page of vector IDs from the `/vectors/list` endpoint.
///
/// The caller drives pagination: pass [`VectorIdPage::pagination_token`]
/// back to `list_vector_ids` to fetch the next page. `None` means the
/// listing is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorIdPage {
    /// Vector IDs in server-given order.
    pub ids: Vec<String>,

    /// Continuation token for the next page, if any.
    pub pagination_token: Option<String>,
}
