use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    pub user_id: String,
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    match state
        .dashboard
        .get_dashboard(&params.user_id, params.search.as_deref())
        .await
    {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(failure) => error_response(failure),
    }
}
