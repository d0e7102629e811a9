//! Store factory for runtime backend selection

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{GatewayError, QueryStore};

use super::memory::{MemoryStore, MemoryStoreConfig};
use super::redis::{RedisStore, RedisStoreConfig};

/// Supported store backends
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StoreType {
    /// In-memory store using moka
    #[default]
    Memory,
    /// Redis store
    Redis,
}

impl std::fmt::Display for StoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreType::Memory => write!(f, "memory"),
            StoreType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for StoreType {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" => Ok(StoreType::Memory),
            "redis" => Ok(StoreType::Redis),
            _ => Err(GatewayError::configuration(format!(
                "Unknown store type: {}. Valid types: memory, redis",
                s
            ))),
        }
    }
}

/// Configuration for the store factory
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend to create
    pub store_type: StoreType,
    /// Redis URL (required for the Redis backend)
    pub redis_url: Option<String>,
    /// Key prefix for namespacing (Redis only)
    pub key_prefix: Option<String>,
    /// Maximum number of documents (memory only)
    pub max_capacity: Option<u64>,
    /// Optional expiration for stored documents
    pub time_to_live: Option<Duration>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: StoreType::Memory,
            redis_url: None,
            key_prefix: None,
            max_capacity: Some(10_000),
            time_to_live: None,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration for the in-memory backend
    pub fn memory() -> Self {
        Self {
            store_type: StoreType::Memory,
            ..Default::default()
        }
    }

    /// Creates a configuration for the Redis backend
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            store_type: StoreType::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Sets the maximum capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    /// Sets the document expiration
    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    /// Creates config from environment variables
    pub fn from_env() -> Result<Self, GatewayError> {
        let store_type = std::env::var("QUERY_STORE_TYPE")
            .unwrap_or_else(|_| "memory".to_string())
            .parse()?;

        let redis_url = std::env::var("QUERY_STORE_REDIS_URL")
            .ok()
            .or_else(|| std::env::var("REDIS_URL").ok());

        let key_prefix = std::env::var("QUERY_STORE_KEY_PREFIX").ok();

        let max_capacity = std::env::var("QUERY_STORE_MAX_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok());

        let time_to_live = std::env::var("QUERY_STORE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);

        Ok(Self {
            store_type,
            redis_url,
            key_prefix,
            max_capacity,
            time_to_live,
        })
    }
}

/// Factory for creating query store instances
#[derive(Debug, Default)]
pub struct StoreFactory;

impl StoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a store instance based on configuration
    pub async fn create(&self, config: &StoreConfig) -> Result<Arc<dyn QueryStore>, GatewayError> {
        match config.store_type {
            StoreType::Memory => {
                let mut memory_config = MemoryStoreConfig::default();

                if let Some(capacity) = config.max_capacity {
                    memory_config = memory_config.with_max_capacity(capacity);
                }

                if let Some(ttl) = config.time_to_live {
                    memory_config = memory_config.with_time_to_live(ttl);
                }

                Ok(Arc::new(MemoryStore::with_config(memory_config)))
            }
            StoreType::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    GatewayError::configuration("Redis URL is required for the redis store type")
                })?;

                let mut redis_config = RedisStoreConfig::new(url);

                if let Some(prefix) = &config.key_prefix {
                    redis_config = redis_config.with_key_prefix(prefix.clone());
                }

                if let Some(ttl) = config.time_to_live {
                    redis_config = redis_config.with_expiration(ttl);
                }

                let store = RedisStore::new(redis_config).await?;
                Ok(Arc::new(store))
            }
        }
    }
}
