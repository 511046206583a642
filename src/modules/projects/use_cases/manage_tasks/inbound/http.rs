use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::projects::core::task::{Task, TaskPatch, TaskStatus};
use crate::modules::projects::use_cases::errors::Invalidation;
use crate::modules::projects::use_cases::manage_tasks::command::{
    CreateTask, DeleteTask, UpdateTask,
};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub user_id: String,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "pending")]
    pub status: TaskStatus,
    pub deadline: Option<i64>,
}

/// Absent fields stay unchanged; an explicit `null` clears a nullable field.
#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub user_id: String,
    pub task_id: String,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub deadline: Option<Option<i64>>,
}

#[derive(Deserialize)]
pub struct DeleteTaskBody {
    pub user_id: String,
    pub task_id: String,
}

#[derive(Serialize)]
pub struct TaskResponse {
    pub task: Task,
    pub invalidation: Invalidation,
}

fn pending() -> TaskStatus {
    TaskStatus::Pending
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = CreateTask {
        user_id: body.user_id,
        project_id: body.project_id,
        title: body.title,
        description: body.description,
        status: body.status,
        deadline: body.deadline,
    };
    match state.tasks.create_task(command).await {
        Ok(committed) => (
            StatusCode::CREATED,
            Json(TaskResponse {
                task: committed.value,
                invalidation: committed.invalidation,
            }),
        )
            .into_response(),
        Err(failure) => error_response(failure),
    }
}

pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = UpdateTask {
        user_id: body.user_id,
        task_id: body.task_id,
        patch: TaskPatch {
            title: body.title,
            description: body.description,
            status: body.status,
            deadline: body.deadline,
        },
    };
    match state.tasks.update_task(command).await {
        Ok(committed) => Json(TaskResponse {
            task: committed.value,
            invalidation: committed.invalidation,
        })
        .into_response(),
        Err(failure) => error_response(failure),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    body: Result<Json<DeleteTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = DeleteTask {
        user_id: body.user_id,
        task_id: body.task_id,
    };
    match state.tasks.delete_task(command).await {
        Ok(committed) => Json(TaskResponse {
            task: committed.value,
            invalidation: committed.invalidation,
        })
        .into_response(),
        Err(failure) => error_response(failure),
    }
}
