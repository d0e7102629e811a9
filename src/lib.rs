//! Persisted Query Gateway
//!
//! A persisted-query resolution layer in front of an execution engine, with
//! support for:
//! - SHA-256 content addressing with client-pinned identifiers
//! - Pluggable store backends (in-memory via moka, Redis)
//! - Pluggable store fault handling (fail fast, log and continue)
//! - Order-preserving batch execution with per-item isolation
//! - Runtime store and handler swaps that never disturb in-flight requests

pub mod domain;
pub mod infrastructure;

pub use domain::{
    ErrorHandler, ExecutionEngine, ExecutionParams, GatewayError, PERSISTED_QUERY_NOT_FOUND,
    PersistedQueryExtension, QueryRequest, QueryResponse, QueryStore, RequestExtensions,
    Resolution, ResponseError, StoreError, sha256_hex,
};
pub use infrastructure::error_handlers::{FailFastErrorHandler, LoggingErrorHandler};
pub use infrastructure::services::{QueryGateway, QueryResolver};
pub use infrastructure::store::{
    MemoryStore, MemoryStoreConfig, RedisStore, RedisStoreConfig, StoreConfig, StoreFactory,
    StoreType,
};
