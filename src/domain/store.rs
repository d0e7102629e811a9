//! Query store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::StoreError;

/// Persistence contract for hash -> query document mappings.
///
/// A clean miss is `Ok(None)`; `Err` is reserved for backend faults.
/// Callers rely on that distinction to tell an unknown hash apart from a
/// store that is down. Implementations must tolerate concurrent fetches
/// and saves.
#[async_trait]
pub trait QueryStore: Send + Sync + Debug {
    /// Fetches the document stored under `hash`
    async fn fetch_query(&self, hash: &str) -> Result<Option<String>, StoreError>;

    /// Stores `query` under `hash`. Keys are content-derived, so an
    /// existing entry is only ever overwritten with the same text.
    async fn save_query(&self, hash: &str, query: &str) -> Result<(), StoreError>;
}
