use crate::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use crate::modules::projects::use_cases::list_project_summaries::read_model_cache::CacheConfig;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::cache_store::in_memory::InMemoryCacheStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::FIXED_NOW;
use std::sync::Arc;

/// Fully wired in-memory application with handles on its backends.
pub struct TestApp {
    pub store: Arc<InMemoryProjectStore>,
    pub cache: Arc<InMemoryCacheStore>,
    pub clock: Arc<FixedClock>,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        let clock = Arc::new(FixedClock::at(FIXED_NOW));
        let store = Arc::new(InMemoryProjectStore::new());
        let cache = Arc::new(InMemoryCacheStore::new(clock.clone()));
        let state = AppState::new(store.clone(), cache.clone(), clock.clone(), config);
        Self {
            store,
            cache,
            clock,
            state,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
