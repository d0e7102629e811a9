use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters passed through to the execution engine unchanged.
///
/// Named fields cover the common wire shape; anything else a client sends
/// alongside the query lands in `extra` and survives the round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Protocol extensions attached to a request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestExtensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted_query: Option<PersistedQueryExtension>,
}

impl RequestExtensions {
    fn is_empty(&self) -> bool {
        self.persisted_query.is_none()
    }
}

/// Persisted-query extension carrying the content hash.
///
/// The hash is opaque at this layer: it is whatever key the client wants
/// the document stored under, conventionally its SHA-256 hex digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQueryExtension {
    pub sha256_hash: String,
}

impl PersistedQueryExtension {
    pub fn new(sha256_hash: impl Into<String>) -> Self {
        Self {
            sha256_hash: sha256_hash.into(),
        }
    }
}

/// A single inbound request item.
///
/// Clients send the full document (`query`), a previously registered hash
/// (`extensions.persistedQuery`), or both on the registration round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(flatten)]
    pub params: ExecutionParams,

    #[serde(default, skip_serializing_if = "RequestExtensions::is_empty")]
    pub extensions: RequestExtensions,
}

impl QueryRequest {
    /// Creates a request carrying the full document text
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Creates a request addressing a previously registered document
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            extensions: RequestExtensions {
                persisted_query: Some(PersistedQueryExtension::new(hash)),
            },
            ..Default::default()
        }
    }

    /// Attaches a persisted-query hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.extensions.persisted_query = Some(PersistedQueryExtension::new(hash));
        self
    }

    /// Sets the operation name forwarded to the engine
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.params.operation_name = Some(name.into());
        self
    }

    /// Sets the variables forwarded to the engine
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.params.variables = Some(variables);
        self
    }

    /// The hash carried in the persisted-query extension, if any
    pub fn persisted_hash(&self) -> Option<&str> {
        self.extensions
            .persisted_query
            .as_ref()
            .map(|ext| ext.sha256_hash.as_str())
    }
}
