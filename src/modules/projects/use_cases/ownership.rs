use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::{Project, is_owner};
use crate::modules::projects::use_cases::errors::ApplicationError;
use tracing::debug;

/// Loads a project the acting user owns, for reading or writing.
pub async fn owned_project<TStore>(
    store: &TStore,
    user_id: &str,
    project_id: &str,
) -> Result<Project, ApplicationError>
where
    TStore: ProjectStore + ?Sized,
{
    let project = store
        .find_project(project_id)
        .await?
        .ok_or_else(|| ApplicationError::NotFound {
            entity: "project",
            id: project_id.to_string(),
        })?;

    if !is_owner(user_id, &project) {
        debug!(user_id, project_id, "rejected access to a project owned by someone else");
        return Err(ApplicationError::OwnershipViolation {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
        });
    }
    Ok(project)
}
