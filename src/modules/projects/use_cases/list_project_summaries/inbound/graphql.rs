use async_graphql::{Context, Enum, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::projects::core::projections::ProjectSummary;
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::use_cases::list_project_summaries::handler::SummaryQuery;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlHealth {
    Active,
    Alert,
}

impl From<ProjectStatus> for GqlHealth {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Active => GqlHealth::Active,
            ProjectStatus::Alert => GqlHealth::Alert,
        }
    }
}

impl From<GqlHealth> for ProjectStatus {
    fn from(health: GqlHealth) -> Self {
        match health {
            GqlHealth::Active => ProjectStatus::Active,
            GqlHealth::Alert => ProjectStatus::Alert,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProjectSummary {
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    pub health: GqlHealth,
    pub task_count: u64,
    pub completed_task_count: u64,
    pub progress: i32,
    pub position: i64,
}

impl From<ProjectSummary> for GqlProjectSummary {
    fn from(s: ProjectSummary) -> Self {
        Self {
            project_id: s.project_id,
            name: s.name,
            description: s.description,
            health: s.health.into(),
            task_count: s.task_count,
            completed_task_count: s.completed_task_count,
            progress: i32::from(s.progress),
            position: s.position,
        }
    }
}

#[derive(Default)]
pub struct SummariesQuery;

#[Object]
impl SummariesQuery {
    async fn project_summaries(
        &self,
        context: &Context<'_>,
        user_id: String,
        search: Option<String>,
        health: Option<GqlHealth>,
        limit: Option<i32>,
    ) -> GqlResult<Vec<GqlProjectSummary>> {
        let state = context.data_unchecked::<AppState>();
        let limit = limit.map(usize::try_from).transpose().map_err(|_| {
            async_graphql::Error::new("limit must not be negative").extend_with(|_, extensions| {
                extensions.set("code", "BAD_REQUEST");
            })
        })?;
        let query = SummaryQuery {
            owner_id: user_id,
            search,
            health: health.map(Into::into),
            limit,
        };
        let read = state.summaries.get_summaries(&query).await.map_err(gql_error)?;
        Ok(read.into_value().into_iter().map(Into::into).collect())
    }
}
