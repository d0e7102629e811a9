//! Execution engine trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::{ExecutionParams, QueryResponse};

/// Seam to the downstream query execution engine.
///
/// The engine receives the effective document plus the pass-through
/// parameters and its result is forwarded verbatim. Execution failures
/// travel in-band in the response `errors`; this layer never interprets
/// them.
#[async_trait]
pub trait ExecutionEngine: Send + Sync + Debug {
    /// Executes a resolved query document
    async fn execute(&self, query: &str, params: &ExecutionParams) -> QueryResponse;
}
