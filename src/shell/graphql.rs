use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};

use crate::modules::projects::use_cases::errors::ApplicationError;
use crate::modules::projects::use_cases::list_project_summaries::inbound::graphql::SummariesQuery;
use crate::modules::projects::use_cases::list_tasks::inbound::graphql::TasksQuery;
use crate::modules::projects::use_cases::manage_projects::inbound::graphql::ProjectMutations;
use crate::modules::projects::use_cases::manage_tasks::inbound::graphql::TaskMutations;
use crate::modules::projects::use_cases::show_dashboard::inbound::graphql::DashboardQuery;
use crate::modules::projects::use_cases::show_project::inbound::graphql::ProjectQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(SummariesQuery, DashboardQuery, ProjectQuery, TasksQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ProjectMutations, TaskMutations);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Carries the error class in the `code` extension, mirroring the HTTP status mapping.
pub fn gql_error(failure: ApplicationError) -> async_graphql::Error {
    let code = match &failure {
        ApplicationError::NotFound { .. } => "NOT_FOUND",
        ApplicationError::OwnershipViolation { .. } => "FORBIDDEN",
        ApplicationError::StoreUnavailable(_) => "UNAVAILABLE",
        ApplicationError::InvariantViolation(_) => "INTERNAL",
    };
    async_graphql::Error::new(failure.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}
