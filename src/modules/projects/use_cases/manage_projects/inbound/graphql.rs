use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::projects::core::project::Project;
use crate::modules::projects::use_cases::list_project_summaries::inbound::graphql::GqlHealth;
use crate::modules::projects::use_cases::manage_projects::command::CreateProject;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlProject {
    pub project_id: ID,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: GqlHealth,
    pub position: i64,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            project_id: ID(p.project_id),
            owner_id: p.owner_id,
            name: p.name,
            description: p.description,
            status: p.status.into(),
            position: p.position,
        }
    }
}

#[derive(Default)]
pub struct ProjectMutations;

#[Object]
impl ProjectMutations {
    async fn create_project(
        &self,
        context: &Context<'_>,
        user_id: String,
        name: String,
        description: Option<String>,
    ) -> GqlResult<GqlProject> {
        let state = context.data_unchecked::<AppState>();
        let committed = state
            .projects
            .create_project(CreateProject {
                owner_id: user_id,
                name,
                description,
            })
            .await
            .map_err(gql_error)?;
        Ok(committed.value.into())
    }
}
