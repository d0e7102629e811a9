use crate::domain::StoreError;

/// Outcome of resolving one request item against the query store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The effective query document to execute
    Resolved(String),
    /// No document available: unknown hash, or nothing to resolve
    NotFound,
    /// A store fault the configured error handler chose to suppress
    StoreError(StoreError),
}
