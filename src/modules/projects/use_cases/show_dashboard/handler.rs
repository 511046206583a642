// Dashboard query: recent projects or a search result, plus headline counts.
//
// Active projects and pending tasks are counted over everything the owner has. Alerts
// are counted over the listed projects only.

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::projections::ProjectSummary;
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::core::task::TaskStatus;
use crate::modules::projects::use_cases::errors::ApplicationError;
use crate::modules::projects::use_cases::list_project_summaries::cache_key::normalize_search;
use crate::modules::projects::use_cases::list_project_summaries::handler::{
    ListProjectSummariesHandler, SummaryQuery,
};
use crate::shared::infrastructure::cache_store::CacheStore;
use crate::shared::infrastructure::cache_versions::VersionRegistry;
use serde::Serialize;
use std::sync::Arc;

pub const RECENT_PROJECTS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub active_projects: u64,
    pub alert_projects: u64,
    pub pending_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub search: Option<String>,
    pub stats: DashboardStats,
    pub projects: Vec<ProjectSummary>,
}

pub struct ShowDashboardHandler<TStore, TCache, TVersions>
where
    TStore: ProjectStore + 'static,
    TCache: CacheStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    store: Arc<TStore>,
    summaries: Arc<ListProjectSummariesHandler<TStore, TCache, TVersions>>,
}

impl<TStore, TCache, TVersions> ShowDashboardHandler<TStore, TCache, TVersions>
where
    TStore: ProjectStore + 'static,
    TCache: CacheStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        summaries: Arc<ListProjectSummariesHandler<TStore, TCache, TVersions>>,
    ) -> Self {
        Self { store, summaries }
    }

    /// Without a search term the most recent projects are shown, otherwise every match.
    pub async fn get_dashboard(
        &self,
        owner_id: &str,
        search: Option<&str>,
    ) -> Result<Dashboard, ApplicationError> {
        let search = normalize_search(search);
        let query = SummaryQuery {
            owner_id: owner_id.to_string(),
            limit: match search {
                Some(_) => None,
                None => Some(RECENT_PROJECTS_LIMIT),
            },
            search: search.clone(),
            health: None,
        };
        let projects = self.summaries.get_summaries(&query).await?.into_value();
        let active_projects = self
            .store
            .count_owner_projects(owner_id, ProjectStatus::Active)
            .await?;
        let pending_tasks = self
            .store
            .count_owner_tasks(owner_id, TaskStatus::Pending)
            .await?;

        let stats = DashboardStats {
            active_projects,
            alert_projects: projects
                .iter()
                .filter(|p| p.health == ProjectStatus::Alert)
                .count() as u64,
            pending_tasks,
        };

        Ok(Dashboard {
            search,
            stats,
            projects,
        })
    }
}
