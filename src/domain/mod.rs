//! Domain layer - Resolution contracts and wire types

pub mod digest;
pub mod engine;
pub mod error;
pub mod handler;
pub mod request;
pub mod resolution;
pub mod response;
pub mod store;

pub use digest::sha256_hex;
pub use engine::ExecutionEngine;
pub use error::{GatewayError, StoreError};
pub use handler::ErrorHandler;
pub use request::{ExecutionParams, PersistedQueryExtension, QueryRequest, RequestExtensions};
pub use resolution::Resolution;
pub use response::{PERSISTED_QUERY_NOT_FOUND, QueryResponse, ResponseError};
pub use store::QueryStore;

#[cfg(test)]
pub use engine::mock::MockEngine;
#[cfg(test)]
pub use handler::mock::RecordingErrorHandler;
#[cfg(test)]
pub use store::mock::MockQueryStore;
