// Entity store port for projects and their tasks.
//
// Purpose
// - The write model's durable storage, seen only through simple CRUD, predicate counts
//   and one aggregate query used to build the read model.
//
// Boundaries
// - Single-row atomicity only. No cross-aggregate transactions are assumed.

use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::projections::TaskTally;
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::core::task::{Task, TaskStatus};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("entity store unavailable: {0}")]
    Unavailable(String),
}

/// Search and limit dimensions of a project listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCountFilter {
    All,
    /// Deadline strictly before the given instant and not done.
    OverdueAt(i64),
    WithStatus(TaskStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectWithTally {
    pub project: Project,
    pub tally: TaskTally,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert_project(&self, project: Project) -> Result<(), StoreError>;
    async fn find_project(&self, project_id: &str) -> Result<Option<Project>, StoreError>;
    async fn max_position(&self, owner_id: &str) -> Result<Option<i64>, StoreError>;
    async fn update_project_details(
        &self,
        project_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), StoreError>;
    async fn update_project_status(
        &self,
        project_id: &str,
        status: ProjectStatus,
    ) -> Result<(), StoreError>;
    /// Returns false when the project does not exist or belongs to someone else.
    async fn update_project_position(
        &self,
        owner_id: &str,
        project_id: &str,
        position: i64,
    ) -> Result<bool, StoreError>;
    /// Removes the project together with its tasks.
    async fn delete_project(&self, project_id: &str) -> Result<(), StoreError>;
    /// Owner's projects ordered by position, with task and completed-task counts.
    async fn query_projects_by_owner(
        &self,
        owner_id: &str,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectWithTally>, StoreError>;
    async fn count_owner_projects(
        &self,
        owner_id: &str,
        status: ProjectStatus,
    ) -> Result<u64, StoreError>;

    async fn insert_task(&self, task: Task) -> Result<(), StoreError>;
    async fn find_task(&self, task_id: &str) -> Result<Option<Task>, StoreError>;
    async fn update_task(&self, task: Task) -> Result<(), StoreError>;
    async fn delete_task(&self, task_id: &str) -> Result<(), StoreError>;
    /// Tasks of one project ordered by deadline, undated tasks first.
    async fn list_project_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError>;
    /// Tasks across all of an owner's projects, in the same deadline order.
    async fn list_owner_tasks(&self, owner_id: &str) -> Result<Vec<Task>, StoreError>;
    async fn count_tasks(
        &self,
        project_id: &str,
        filter: TaskCountFilter,
    ) -> Result<u64, StoreError>;
    /// Counts tasks with the given status across all of an owner's projects.
    async fn count_owner_tasks(
        &self,
        owner_id: &str,
        status: TaskStatus,
    ) -> Result<u64, StoreError>;
}
