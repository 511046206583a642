// Versioned read-through cache for project summaries.
//
// Purpose
// - Serve summaries keyed by (owner, search signature, limit, live version) and compute
//   them on a miss.
//
// Responsibilities
// - Never read past a stale version: the version is fetched on every call.
// - Optionally, and only when explicitly configured, serve the last computed value
//   when the entity store is down during a miss. The cache backend must be reachable
//   for this and the fallback entry has its own bounded TTL.

use crate::modules::projects::adapters::outbound::project_store::StoreError;
use crate::modules::projects::use_cases::errors::ApplicationError;
use crate::modules::projects::use_cases::list_project_summaries::cache_key::{
    last_known_key, summary_cache_key,
};
use crate::shared::infrastructure::cache_store::CacheStore;
use crate::shared::infrastructure::cache_versions::{DEFAULT_VERSION_TTL, VersionRegistry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL of a cached summary list.
    pub entry_ttl: Duration,
    /// Safety TTL of version tokens. Must outlive `entry_ttl`.
    pub version_ttl: Duration,
    /// When set, how long a last known value may be served while the store is down.
    pub stale_fallback: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            entry_ttl: Duration::from_secs(300),
            version_ttl: DEFAULT_VERSION_TTL,
            stale_fallback: None,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.entry_ttl = ttl;
        self
    }

    pub fn with_version_ttl(mut self, ttl: Duration) -> Self {
        self.version_ttl = ttl;
        self
    }

    pub fn with_stale_fallback(mut self, bound: Option<Duration>) -> Self {
        self.stale_fallback = bound;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.version_ttl <= self.entry_ttl {
            return Err(format!(
                "version TTL ({:?}) must be longer than the summary TTL ({:?})",
                self.version_ttl, self.entry_ttl
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSource {
    Cache,
    Computed,
    /// Last known value served because the entity store was unavailable.
    StaleFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRead<T> {
    pub value: T,
    pub source: ReadSource,
}

impl<T> CacheRead<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

pub struct ReadModelCache<TCache, TVersions>
where
    TCache: CacheStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    cache: Arc<TCache>,
    versions: Arc<TVersions>,
    config: CacheConfig,
}

impl<TCache, TVersions> ReadModelCache<TCache, TVersions>
where
    TCache: CacheStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    pub fn new(cache: Arc<TCache>, versions: Arc<TVersions>, config: CacheConfig) -> Self {
        Self {
            cache,
            versions,
            config,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub async fn get_or_compute<T, F, Fut>(
        &self,
        owner_id: &str,
        search: Option<&str>,
        limit: Option<usize>,
        compute: F,
    ) -> Result<CacheRead<T>, ApplicationError>
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T, StoreError>> + Send,
    {
        let version = self.versions.get_version(owner_id).await?;
        let key = summary_cache_key(owner_id, search, limit, &version);

        if let Some(cached) = self.cache.get(&key).await? {
            match serde_json::from_value::<T>(cached) {
                Ok(value) => {
                    debug!(owner_id, %key, "summary cache hit");
                    return Ok(CacheRead {
                        value,
                        source: ReadSource::Cache,
                    });
                }
                Err(error) => warn!(owner_id, %key, %error, "discarding undecodable summary entry"),
            }
        }
        debug!(owner_id, %key, "summary cache miss");

        match compute().await {
            Ok(value) => {
                self.remember(owner_id, search, limit, &key, &value).await;
                Ok(CacheRead {
                    value,
                    source: ReadSource::Computed,
                })
            }
            Err(StoreError::Unavailable(reason)) if self.config.stale_fallback.is_some() => {
                self.last_known(owner_id, search, limit)
                    .await?
                    .ok_or(ApplicationError::StoreUnavailable(reason))
            }
            Err(error) => Err(error.into()),
        }
    }

    // The computed value is correct whether or not it could be stored, so write
    // failures are logged rather than returned.
    async fn remember<T: Serialize>(
        &self,
        owner_id: &str,
        search: Option<&str>,
        limit: Option<usize>,
        key: &str,
        value: &T,
    ) {
        let encoded = match serde_json::to_value(value) {
            Ok(encoded) => encoded,
            Err(error) => {
                warn!(owner_id, %key, %error, "summary could not be encoded for caching");
                return;
            }
        };
        if let Some(bound) = self.config.stale_fallback {
            let last_key = last_known_key(owner_id, search, limit);
            if let Err(error) = self.cache.set(&last_key, encoded.clone(), bound).await {
                warn!(owner_id, %last_key, %error, "last known summary not stored");
            }
        }
        if let Err(error) = self.cache.set(key, encoded, self.config.entry_ttl).await {
            warn!(owner_id, %key, %error, "summary not cached");
        }
    }

    async fn last_known<T: DeserializeOwned>(
        &self,
        owner_id: &str,
        search: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Option<CacheRead<T>>, ApplicationError> {
        let last_key = last_known_key(owner_id, search, limit);
        let Some(cached) = self.cache.get(&last_key).await? else {
            return Ok(None);
        };
        match serde_json::from_value::<T>(cached) {
            Ok(value) => {
                warn!(owner_id, %last_key, "entity store unavailable, serving last known summaries");
                Ok(Some(CacheRead {
                    value,
                    source: ReadSource::StaleFallback,
                }))
            }
            Err(error) => {
                warn!(owner_id, %last_key, %error, "discarding undecodable last known entry");
                Ok(None)
            }
        }
    }
}
