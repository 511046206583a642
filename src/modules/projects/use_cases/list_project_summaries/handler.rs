// Query handler for the per-owner project summaries read model.
//
// Responsibilities
// - Normalize the search term, read through the versioned cache, and project store
//   rows into summaries on a miss.
// - Apply the health filter after the cache, so cached variants only multiply by
//   search and limit.

use crate::modules::projects::adapters::outbound::project_store::{
    ProjectFilter, ProjectStore, StoreError,
};
use crate::modules::projects::core::projections::{ProjectSummary, project_summary};
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::use_cases::errors::ApplicationError;
use crate::modules::projects::use_cases::list_project_summaries::cache_key::normalize_search;
use crate::modules::projects::use_cases::list_project_summaries::read_model_cache::{
    CacheRead, ReadModelCache,
};
use crate::shared::infrastructure::cache_store::CacheStore;
use crate::shared::infrastructure::cache_versions::VersionRegistry;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryQuery {
    pub owner_id: String,
    pub search: Option<String>,
    pub health: Option<ProjectStatus>,
    pub limit: Option<usize>,
}

impl SummaryQuery {
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            ..Self::default()
        }
    }
}

pub struct ListProjectSummariesHandler<TStore, TCache, TVersions>
where
    TStore: ProjectStore + 'static,
    TCache: CacheStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    store: Arc<TStore>,
    read_model: Arc<ReadModelCache<TCache, TVersions>>,
}

impl<TStore, TCache, TVersions> ListProjectSummariesHandler<TStore, TCache, TVersions>
where
    TStore: ProjectStore + 'static,
    TCache: CacheStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    pub fn new(store: Arc<TStore>, read_model: Arc<ReadModelCache<TCache, TVersions>>) -> Self {
        Self { store, read_model }
    }

    pub async fn get_summaries(
        &self,
        query: &SummaryQuery,
    ) -> Result<CacheRead<Vec<ProjectSummary>>, ApplicationError> {
        let search = normalize_search(query.search.as_deref());
        let filter = ProjectFilter {
            search: search.clone(),
            limit: query.limit,
        };
        let store = self.store.clone();
        let owner_id = query.owner_id.clone();

        let read = self
            .read_model
            .get_or_compute(&query.owner_id, search.as_deref(), query.limit, move || async move {
                let rows = store.query_projects_by_owner(&owner_id, &filter).await?;
                Ok::<_, StoreError>(
                    rows.iter()
                        .map(|row| project_summary(&row.project, row.tally))
                        .collect::<Vec<_>>(),
                )
            })
            .await?;

        Ok(match query.health {
            Some(health) => CacheRead {
                value: read
                    .value
                    .into_iter()
                    .filter(|summary| summary.health == health)
                    .collect(),
                source: read.source,
            },
            None => read,
        })
    }
}
