use axum::{
    Json,
    extract::{Query, State},
    http::HeaderValue,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::use_cases::list_project_summaries::handler::SummaryQuery;
use crate::modules::projects::use_cases::list_project_summaries::read_model_cache::ReadSource;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub const READ_SOURCE_HEADER: &str = "x-read-source";

#[derive(Deserialize)]
pub struct ProjectSummariesParams {
    pub user_id: String,
    pub search: Option<String>,
    pub health: Option<ProjectStatus>,
    pub limit: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ProjectSummariesParams>,
) -> impl IntoResponse {
    let query = SummaryQuery {
        owner_id: params.user_id,
        search: params.search,
        health: params.health,
        limit: params.limit,
    };
    match state.summaries.get_summaries(&query).await {
        Ok(read) => {
            let source = match read.source {
                ReadSource::Cache => "cache",
                ReadSource::Computed => "computed",
                ReadSource::StaleFallback => "stale_fallback",
            };
            let mut response = Json(read.value).into_response();
            response
                .headers_mut()
                .insert(READ_SOURCE_HEADER, HeaderValue::from_static(source));
            response
        }
        Err(failure) => error_response(failure),
    }
}
