use crate::modules::projects::core::status::ProjectStatus;
use serde::{Deserialize, Serialize};

/// A user-owned project. `status` is derived from the project's tasks but persisted,
/// so it can be filtered and sorted on without recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub position: i64,
}

/// Position for a newly created project: one past the owner's highest position, or 1.
pub fn next_position(max_existing: Option<i64>) -> i64 {
    max_existing.map_or(1, |max| max.saturating_add(1))
}

/// Ownership predicate guarding every write path.
pub fn is_owner(user_id: &str, project: &Project) -> bool {
    project.owner_id == user_id
}
