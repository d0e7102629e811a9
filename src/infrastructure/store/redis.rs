//! Redis query store implementation

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::domain::{QueryStore, StoreError};

/// Configuration for the Redis store
#[derive(Debug, Clone)]
pub struct RedisStoreConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379")
    pub url: String,
    /// Key prefix for namespacing
    pub key_prefix: Option<String>,
    /// Optional expiration for stored documents; `None` keeps them forever
    pub expiration: Option<Duration>,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            key_prefix: None,
            expiration: None,
        }
    }
}

impl RedisStoreConfig {
    /// Creates a new configuration with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Sets the document expiration.
    ///
    /// Expiry is applied with second granularity (`SET ... EX`); sub-second
    /// durations are clamped up to one second.
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = Some(expiration);
        self
    }
}

/// Redis-backed query store.
///
/// Documents are stored as plain string values under their hash, shared
/// across every process pointing at the same instance. Connection pooling
/// via ConnectionManager.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    config: RedisStoreConfig,
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore")
            .field("config", &self.config)
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl RedisStore {
    /// Connects to Redis with the given configuration
    pub async fn new(config: RedisStoreConfig) -> Result<Self, StoreError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| StoreError::new(format!("Failed to create Redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::new(format!("Failed to connect to Redis: {}", e)))?;

        Ok(Self { connection, config })
    }

    /// Connects with default configuration at the given URL
    pub async fn with_url(url: impl Into<String>) -> Result<Self, StoreError> {
        Self::new(RedisStoreConfig::new(url)).await
    }

    fn prefix_key(&self, hash: &str) -> String {
        match &self.config.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, hash),
            None => hash.to_string(),
        }
    }
}

#[async_trait]
impl QueryStore for RedisStore {
    async fn fetch_query(&self, hash: &str) -> Result<Option<String>, StoreError> {
        let key = self.prefix_key(hash);
        let mut conn = self.connection.clone();

        let result: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| StoreError::new(format!("Failed to fetch query '{}': {}", hash, e)))?;

        Ok(result)
    }

    async fn save_query(&self, hash: &str, query: &str) -> Result<(), StoreError> {
        let key = self.prefix_key(hash);
        let mut conn = self.connection.clone();

        match self.config.expiration {
            Some(expiration) => {
                let secs = expiration.as_secs().max(1);
                let _: () = conn.set_ex(&key, query, secs).await.map_err(|e| {
                    StoreError::new(format!("Failed to save query '{}': {}", hash, e))
                })?;
            }
            None => {
                let _: () = conn.set(&key, query).await.map_err(|e| {
                    StoreError::new(format!("Failed to save query '{}': {}", hash, e))
                })?;
            }
        }

        Ok(())
    }
}
