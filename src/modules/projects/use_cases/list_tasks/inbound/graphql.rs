use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::use_cases::manage_tasks::inbound::graphql::GqlTask;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct TasksQuery;

#[Object]
impl TasksQuery {
    async fn tasks(&self, context: &Context<'_>, user_id: String) -> GqlResult<Vec<GqlTask>> {
        let state = context.data_unchecked::<AppState>();
        let tasks = state.task_board.list_tasks(&user_id).await.map_err(gql_error)?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }
}
