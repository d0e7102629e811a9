use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error message returned when a persisted hash has no stored document.
///
/// Client SDKs match this exact string to decide whether to retry the
/// request with the full document text, so it must never change.
pub const PERSISTED_QUERY_NOT_FOUND: &str = "PersistedQueryNotFound";

/// One error entry in a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

impl ResponseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response produced for one request item: engine data, or errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

impl QueryResponse {
    /// Successful response wrapping the engine's result
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Error response with a single message
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![ResponseError::new(message)],
        }
    }

    /// The fixed response for an unresolvable persisted-query hash
    pub fn not_found() -> Self {
        Self::from_error(PERSISTED_QUERY_NOT_FOUND)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
