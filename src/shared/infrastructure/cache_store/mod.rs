// Cache backend port.
//
// Purpose
// - Describe the only cache capabilities the read model relies on: get, set with a TTL,
//   and a long-lived set for version tokens.
//
// Boundaries
// - No tag or group eviction. Bulk invalidation is done by versioning keys, so any
//   key/value store with per-key expiry can implement this.

pub mod in_memory;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("cache codec error: {0}")]
    Codec(String),
}

#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError>;

    async fn set(&self, key: &str, value: serde_json::Value, ttl: Duration)
    -> Result<(), CacheError>;

    /// Stores a value that is meant to outlive every regular entry. `safety_ttl`
    /// only guards against unbounded growth.
    async fn set_forever(
        &self,
        key: &str,
        value: serde_json::Value,
        safety_ttl: Duration,
    ) -> Result<(), CacheError>;
}
