use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::projects::use_cases::manage_projects::inbound::graphql::GqlProject;
use crate::modules::projects::use_cases::manage_tasks::inbound::graphql::GqlTask;
use crate::modules::projects::use_cases::show_project::handler::ProjectDetails;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlProjectDetails {
    pub project: GqlProject,
    pub tasks: Vec<GqlTask>,
}

impl From<ProjectDetails> for GqlProjectDetails {
    fn from(d: ProjectDetails) -> Self {
        Self {
            project: d.project.into(),
            tasks: d.tasks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ProjectQuery;

#[Object]
impl ProjectQuery {
    async fn project(
        &self,
        context: &Context<'_>,
        user_id: String,
        project_id: String,
    ) -> GqlResult<GqlProjectDetails> {
        let state = context.data_unchecked::<AppState>();
        let details = state
            .project_details
            .get_project(&user_id, &project_id)
            .await
            .map_err(gql_error)?;
        Ok(details.into())
    }
}
