use async_graphql::{Context, Enum, ID, MaybeUndefined, Object, Result as GqlResult, SimpleObject};

use crate::modules::projects::core::task::{Task, TaskPatch, TaskStatus};
use crate::modules::projects::use_cases::manage_tasks::command::{
    CreateTask, DeleteTask, UpdateTask,
};
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlTaskStatus {
    Pending,
    InProgress,
    Done,
}

impl From<TaskStatus> for GqlTaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => GqlTaskStatus::Pending,
            TaskStatus::InProgress => GqlTaskStatus::InProgress,
            TaskStatus::Done => GqlTaskStatus::Done,
        }
    }
}

impl From<GqlTaskStatus> for TaskStatus {
    fn from(status: GqlTaskStatus) -> Self {
        match status {
            GqlTaskStatus::Pending => TaskStatus::Pending,
            GqlTaskStatus::InProgress => TaskStatus::InProgress,
            GqlTaskStatus::Done => TaskStatus::Done,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTask {
    pub task_id: ID,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: GqlTaskStatus,
    pub deadline: Option<i64>,
}

impl From<Task> for GqlTask {
    fn from(t: Task) -> Self {
        Self {
            task_id: ID(t.task_id),
            project_id: t.project_id,
            title: t.title,
            description: t.description,
            status: t.status.into(),
            deadline: t.deadline,
        }
    }
}

fn nullable<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

#[derive(Default)]
pub struct TaskMutations;

#[Object]
impl TaskMutations {
    #[allow(clippy::too_many_arguments)]
    async fn create_task(
        &self,
        context: &Context<'_>,
        user_id: String,
        project_id: String,
        title: String,
        description: Option<String>,
        status: Option<GqlTaskStatus>,
        deadline: Option<i64>,
    ) -> GqlResult<GqlTask> {
        let state = context.data_unchecked::<AppState>();
        let committed = state
            .tasks
            .create_task(CreateTask {
                user_id,
                project_id,
                title,
                description,
                status: status.map_or(TaskStatus::Pending, Into::into),
                deadline,
            })
            .await
            .map_err(gql_error)?;
        Ok(committed.value.into())
    }

    #[allow(clippy::too_many_arguments)]
    async fn update_task(
        &self,
        context: &Context<'_>,
        user_id: String,
        task_id: String,
        title: Option<String>,
        description: MaybeUndefined<String>,
        status: Option<GqlTaskStatus>,
        deadline: MaybeUndefined<i64>,
    ) -> GqlResult<GqlTask> {
        let state = context.data_unchecked::<AppState>();
        let committed = state
            .tasks
            .update_task(UpdateTask {
                user_id,
                task_id,
                patch: TaskPatch {
                    title,
                    description: nullable(description),
                    status: status.map(Into::into),
                    deadline: nullable(deadline),
                },
            })
            .await
            .map_err(gql_error)?;
        Ok(committed.value.into())
    }

    async fn delete_task(
        &self,
        context: &Context<'_>,
        user_id: String,
        task_id: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let committed = state
            .tasks
            .delete_task(DeleteTask { user_id, task_id })
            .await
            .map_err(gql_error)?;
        Ok(ID(committed.value.task_id))
    }
}
