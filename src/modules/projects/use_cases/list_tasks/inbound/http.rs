use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TasksParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TasksParams>,
) -> impl IntoResponse {
    match state.task_board.list_tasks(&params.user_id).await {
        Ok(tasks) => Json(tasks).into_response(),
        Err(failure) => error_response(failure),
    }
}
