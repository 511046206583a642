use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct InvalidateSummariesBody {
    pub user_id: String,
}

/// Explicitly advances the user's read model generation.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<InvalidateSummariesBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    match state.coordinator.invalidate(&body.user_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(failure) => error_response(failure),
    }
}
