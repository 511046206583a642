use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::cache_store::{CacheError, CacheStore};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Entry {
    value: serde_json::Value,
    expires_at: i64,
}

/// Process-local cache backend with per-key expiry measured on the injected clock.
///
/// Expired entries are dropped lazily on read; nothing is ever evicted in bulk.
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
    is_offline: AtomicBool,
    failing_writes: AtomicUsize,
}

impl InMemoryCacheStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            is_offline: AtomicBool::new(false),
            failing_writes: AtomicUsize::new(0),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Makes the next `count` writes fail as if the backend dropped them.
    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), CacheError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(CacheError::Unavailable("Cache store offline".into()));
        }
        Ok(())
    }

    fn take_write_failure(&self) -> bool {
        self.failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }

    async fn write(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.ensure_online()?;
        if self.take_write_failure() {
            return Err(CacheError::Unavailable("Cache write dropped".into()));
        }
        let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at = self.clock.now_millis().saturating_add(ttl_millis);
        self.entries
            .write()
            .await
            .insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }
}

#[async_trait::async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError> {
        self.ensure_online()?;
        let now = self.clock.now_millis();
        {
            let guard = self.entries.read().await;
            match guard.get(key) {
                Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }
        let mut guard = self.entries.write().await;
        if guard.get(key).is_some_and(|entry| entry.expires_at <= now) {
            guard.remove(key);
        }
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.write(key, value, ttl).await
    }

    async fn set_forever(
        &self,
        key: &str,
        value: serde_json::Value,
        safety_ttl: Duration,
    ) -> Result<(), CacheError> {
        self.write(key, value, safety_ttl).await
    }
}
