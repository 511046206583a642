// Per-user cache version tokens.
//
// Purpose
// - Namespace read model cache keys by a token that changes on every invalidation.
//   Changing the token makes every key built with the old one unaddressable, so no
//   enumeration or deletion of keys is ever needed.
//
// Responsibilities
// - Lazily create a token on first read.
// - Overwrite (never increment) the token on bump and refresh its safety TTL.
//
// Concurrency
// - Two racing bumps both write; the later write wins. Either token is a valid
//   "invalidate everything as of now" marker.

use crate::shared::infrastructure::cache_store::{CacheError, CacheStore};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_VERSION_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[async_trait]
pub trait VersionRegistry: Send + Sync {
    async fn get_version(&self, user_id: &str) -> Result<String, CacheError>;
    async fn bump(&self, user_id: &str) -> Result<String, CacheError>;
}

pub struct CacheVersionRegistry<TCache>
where
    TCache: CacheStore,
{
    cache: Arc<TCache>,
    safety_ttl: Duration,
}

impl<TCache> CacheVersionRegistry<TCache>
where
    TCache: CacheStore,
{
    pub fn new(cache: Arc<TCache>, safety_ttl: Duration) -> Self {
        Self { cache, safety_ttl }
    }

    fn key(user_id: &str) -> String {
        format!("projects.summaries.version:{user_id}")
    }

    // Time-ordered and unique within the process, even for bumps in the same millisecond.
    fn fresh_token() -> String {
        Uuid::now_v7().to_string()
    }

    async fn store(&self, user_id: &str, token: &str) -> Result<(), CacheError> {
        self.cache
            .set_forever(
                &Self::key(user_id),
                serde_json::Value::String(token.to_string()),
                self.safety_ttl,
            )
            .await
    }
}

#[async_trait]
impl<TCache> VersionRegistry for CacheVersionRegistry<TCache>
where
    TCache: CacheStore,
{
    async fn get_version(&self, user_id: &str) -> Result<String, CacheError> {
        match self.cache.get(&Self::key(user_id)).await? {
            Some(serde_json::Value::String(token)) => Ok(token),
            Some(other) => Err(CacheError::Codec(format!(
                "version token for {user_id} is not a string: {other}"
            ))),
            None => {
                let token = Self::fresh_token();
                debug!(user_id, %token, "initialising cache version");
                self.store(user_id, &token).await?;
                Ok(token)
            }
        }
    }

    async fn bump(&self, user_id: &str) -> Result<String, CacheError> {
        let token = Self::fresh_token();
        self.store(user_id, &token).await?;
        debug!(user_id, %token, "cache version bumped");
        Ok(token)
    }
}

#[cfg(test)]
mod cache_version_registry_tests {
    use super::*;
    use crate::shared::core::primitives::FixedClock;
    use crate::shared::infrastructure::cache_store::in_memory::InMemoryCacheStore;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    type BeforeEachReturn = (
        Arc<FixedClock>,
        Arc<InMemoryCacheStore>,
        Arc<CacheVersionRegistry<InMemoryCacheStore>>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let clock = Arc::new(FixedClock::at(1_700_000_000_000));
        let cache = Arc::new(InMemoryCacheStore::new(clock.clone()));
        let registry = Arc::new(CacheVersionRegistry::new(cache.clone(), DEFAULT_VERSION_TTL));
        (clock, cache, registry)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_the_version_lazily_and_keep_it(before_each: BeforeEachReturn) {
        let (_, cache, registry) = before_each;
        assert_eq!(cache.len().await, 0);
        let first = registry.get_version("user-1").await.unwrap();
        let second = registry.get_version("user-1").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_versions_per_user(before_each: BeforeEachReturn) {
        let (_, _, registry) = before_each;
        let a = registry.get_version("user-1").await.unwrap();
        registry.bump("user-2").await.unwrap();
        assert_eq!(registry.get_version("user-1").await.unwrap(), a);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_change_the_version_on_every_bump_within_the_same_millisecond(
        before_each: BeforeEachReturn,
    ) {
        let (_, _, registry) = before_each;
        let before = registry.get_version("user-1").await.unwrap();
        let first = registry.bump("user-1").await.unwrap();
        let second = registry.bump("user-1").await.unwrap();
        assert_ne!(before, first);
        assert_ne!(first, second);
        assert_ne!(before, second);
        assert_eq!(registry.get_version("user-1").await.unwrap(), second);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_outlive_read_model_entries_until_the_safety_ttl(
        before_each: BeforeEachReturn,
    ) {
        let (clock, _, registry) = before_each;
        let token = registry.get_version("user-1").await.unwrap();
        clock.advance_millis(7 * 24 * 60 * 60 * 1_000);
        assert_eq!(registry.get_version("user-1").await.unwrap(), token);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_settle_on_one_of_two_racing_bumps(before_each: BeforeEachReturn) {
        let (_, _, registry) = before_each;
        let before = registry.get_version("user-1").await.unwrap();
        let (left, right) = tokio::join!(registry.bump("user-1"), registry.bump("user-1"));
        let candidates: HashSet<String> = [left.unwrap(), right.unwrap()].into_iter().collect();
        let settled = registry.get_version("user-1").await.unwrap();
        assert!(candidates.contains(&settled));
        assert_ne!(settled, before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_cache_store_is_offline(before_each: BeforeEachReturn) {
        let (_, cache, registry) = before_each;
        cache.toggle_offline();
        assert!(matches!(
            registry.bump("user-1").await,
            Err(CacheError::Unavailable(_))
        ));
    }
}
