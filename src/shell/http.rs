use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::error;

use crate::modules::projects::use_cases::errors::ApplicationError;
use crate::modules::projects::use_cases::list_project_summaries::inbound::http as summaries_http;
use crate::modules::projects::use_cases::list_tasks::inbound::http as task_board_http;
use crate::modules::projects::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::projects::use_cases::manage_tasks::inbound::http as tasks_http;
use crate::modules::projects::use_cases::reconcile_project_status::inbound::http as invalidate_http;
use crate::modules::projects::use_cases::show_dashboard::inbound::http as dashboard_http;
use crate::modules::projects::use_cases::show_project::inbound::http as project_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/project-summaries", get(summaries_http::handle))
        .route("/dashboard", get(dashboard_http::handle))
        .route("/project", get(project_http::handle))
        .route("/tasks", get(task_board_http::handle))
        .route("/create-project", post(projects_http::create))
        .route("/update-project", post(projects_http::update))
        .route("/reorder-projects", post(projects_http::reorder))
        .route("/delete-project", post(projects_http::delete))
        .route("/create-task", post(tasks_http::create))
        .route("/update-task", post(tasks_http::update))
        .route("/delete-task", post(tasks_http::delete))
        .route("/invalidate-summaries", post(invalidate_http::handle))
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(failure: ApplicationError) -> Response {
    let status = match &failure {
        ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApplicationError::OwnershipViolation { .. } => StatusCode::FORBIDDEN,
        ApplicationError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ApplicationError::InvariantViolation(_) => {
            error!(error = %failure, "status engine invariant violated");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorBody {
            error: failure.to_string(),
        }),
    )
        .into_response()
}
