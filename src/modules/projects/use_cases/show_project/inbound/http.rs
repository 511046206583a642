use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ProjectParams {
    pub user_id: String,
    pub project_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ProjectParams>,
) -> impl IntoResponse {
    match state
        .project_details
        .get_project(&params.user_id, &params.project_id)
        .await
    {
        Ok(details) => Json(details).into_response(),
        Err(failure) => error_response(failure),
    }
}
