//! Query store backends

mod factory;
mod memory;
mod redis;

pub use factory::{StoreConfig, StoreFactory, StoreType};
pub use memory::{MemoryStore, MemoryStoreConfig};
pub use redis::{RedisStore, RedisStoreConfig};
