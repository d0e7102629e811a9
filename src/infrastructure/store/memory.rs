//! In-memory query store using moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::{QueryStore, StoreError, sha256_hex};

/// Configuration for the in-memory store
#[derive(Debug, Clone)]
pub struct MemoryStoreConfig {
    /// Maximum number of documents
    pub max_capacity: u64,
    /// Optional expiration; `None` keeps documents until evicted by capacity
    pub time_to_live: Option<Duration>,
    /// Time to idle - documents not resolved for this duration are evicted
    pub time_to_idle: Option<Duration>,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_live: None,
            time_to_idle: None,
        }
    }
}

impl MemoryStoreConfig {
    /// Sets the maximum number of documents
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the document expiration
    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    /// Sets the time-to-idle duration
    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.time_to_idle = Some(tti);
        self
    }
}

/// Thread-safe in-memory query store backed by moka.
///
/// The default store: bounded capacity with LRU-like eviction, safe under
/// concurrent fetch/save, no expiration unless configured.
#[derive(Debug)]
pub struct MemoryStore {
    cache: MokaCache<String, String>,
    config: MemoryStoreConfig,
}

impl MemoryStore {
    /// Creates a store with default configuration
    pub fn new() -> Self {
        Self::with_config(MemoryStoreConfig::default())
    }

    /// Creates a store with the given configuration
    pub fn with_config(config: MemoryStoreConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);

        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        Self {
            cache: builder.build(),
            config,
        }
    }

    /// Preloads documents, each keyed by its content digest.
    ///
    /// Useful for deployments that ship a known query set so clients never
    /// hit the registration round trip.
    pub async fn with_entries<I, S>(self, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for query in queries {
            let query = query.into();
            let hash = sha256_hex(&query);
            self.cache.insert(hash, query).await;
        }

        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryStore for MemoryStore {
    async fn fetch_query(&self, hash: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cache.get(hash).await)
    }

    async fn save_query(&self, hash: &str, query: &str) -> Result<(), StoreError> {
        self.cache.insert(hash.to_string(), query.to_string()).await;
        Ok(())
    }
}
