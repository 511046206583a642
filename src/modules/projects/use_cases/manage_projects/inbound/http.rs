use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::projects::core::project::Project;
use crate::modules::projects::use_cases::errors::Invalidation;
use crate::modules::projects::use_cases::manage_projects::command::{
    CreateProject, DeleteProject, ProjectPosition, ReorderProjects, UpdateProject,
};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProjectBody {
    pub user_id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct PositionBody {
    pub project_id: String,
    pub position: i64,
}

#[derive(Deserialize)]
pub struct ReorderProjectsBody {
    pub user_id: String,
    pub positions: Vec<PositionBody>,
}

#[derive(Deserialize)]
pub struct DeleteProjectBody {
    pub user_id: String,
    pub project_id: String,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    pub project: Project,
    pub invalidation: Invalidation,
}

#[derive(Serialize)]
pub struct ReorderResponse {
    pub applied: usize,
    pub invalidation: Invalidation,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub invalidation: Invalidation,
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = CreateProject {
        owner_id: body.user_id,
        name: body.name,
        description: body.description,
    };
    match state.projects.create_project(command).await {
        Ok(committed) => (
            StatusCode::CREATED,
            Json(ProjectResponse {
                project: committed.value,
                invalidation: committed.invalidation,
            }),
        )
            .into_response(),
        Err(failure) => error_response(failure),
    }
}

pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = UpdateProject {
        user_id: body.user_id,
        project_id: body.project_id,
        name: body.name,
        description: body.description,
    };
    match state.projects.update_project(command).await {
        Ok(committed) => Json(ProjectResponse {
            project: committed.value,
            invalidation: committed.invalidation,
        })
        .into_response(),
        Err(failure) => error_response(failure),
    }
}

pub async fn reorder(
    State(state): State<AppState>,
    body: Result<Json<ReorderProjectsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = ReorderProjects {
        user_id: body.user_id,
        positions: body
            .positions
            .into_iter()
            .map(|p| ProjectPosition {
                project_id: p.project_id,
                position: p.position,
            })
            .collect(),
    };
    match state.projects.reorder_projects(command).await {
        Ok(committed) => Json(ReorderResponse {
            applied: committed.value,
            invalidation: committed.invalidation,
        })
        .into_response(),
        Err(failure) => error_response(failure),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    body: Result<Json<DeleteProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let command = DeleteProject {
        user_id: body.user_id,
        project_id: body.project_id,
    };
    match state.projects.delete_project(command).await {
        Ok(committed) => Json(DeleteResponse {
            invalidation: committed.invalidation,
        })
        .into_response(),
        Err(failure) => error_response(failure),
    }
}
