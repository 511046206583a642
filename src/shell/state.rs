use crate::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use crate::modules::projects::use_cases::list_project_summaries::handler::ListProjectSummariesHandler;
use crate::modules::projects::use_cases::list_tasks::handler::ListTasksHandler;
use crate::modules::projects::use_cases::list_project_summaries::read_model_cache::{
    CacheConfig, ReadModelCache,
};
use crate::modules::projects::use_cases::manage_projects::handler::ProjectCommandHandler;
use crate::modules::projects::use_cases::manage_tasks::handler::TaskCommandHandler;
use crate::modules::projects::use_cases::reconcile_project_status::handler::ProjectStatusCoordinator;
use crate::modules::projects::use_cases::show_dashboard::handler::ShowDashboardHandler;
use crate::modules::projects::use_cases::show_project::handler::ShowProjectHandler;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::cache_store::in_memory::InMemoryCacheStore;
use crate::shared::infrastructure::cache_versions::CacheVersionRegistry;
use std::sync::Arc;

pub type Store = InMemoryProjectStore;
pub type Cache = InMemoryCacheStore;
pub type Versions = CacheVersionRegistry<Cache>;

#[derive(Clone)]
pub struct AppState {
    pub summaries: Arc<ListProjectSummariesHandler<Store, Cache, Versions>>,
    pub dashboard: Arc<ShowDashboardHandler<Store, Cache, Versions>>,
    pub project_details: Arc<ShowProjectHandler<Store>>,
    pub task_board: Arc<ListTasksHandler<Store>>,
    pub projects: Arc<ProjectCommandHandler<Store, Versions>>,
    pub tasks: Arc<TaskCommandHandler<Store, Versions>>,
    pub coordinator: Arc<ProjectStatusCoordinator<Store, Versions>>,
}

impl AppState {
    pub fn new(
        store: Arc<Store>,
        cache: Arc<Cache>,
        clock: Arc<dyn Clock>,
        config: CacheConfig,
    ) -> Self {
        let versions = Arc::new(CacheVersionRegistry::new(cache.clone(), config.version_ttl));
        let read_model = Arc::new(ReadModelCache::new(cache, versions.clone(), config));
        let coordinator = Arc::new(ProjectStatusCoordinator::new(
            store.clone(),
            versions,
            clock,
        ));
        let summaries = Arc::new(ListProjectSummariesHandler::new(store.clone(), read_model));

        Self {
            dashboard: Arc::new(ShowDashboardHandler::new(store.clone(), summaries.clone())),
            project_details: Arc::new(ShowProjectHandler::new(store.clone())),
            task_board: Arc::new(ListTasksHandler::new(store.clone())),
            projects: Arc::new(ProjectCommandHandler::new(store.clone(), coordinator.clone())),
            tasks: Arc::new(TaskCommandHandler::new(store, coordinator.clone())),
            summaries,
            coordinator,
        }
    }
}
