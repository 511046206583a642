// Project detail query: one project of the acting user with its tasks in deadline order.

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::task::Task;
use crate::modules::projects::use_cases::errors::ApplicationError;
use crate::modules::projects::use_cases::ownership::owned_project;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetails {
    pub project: Project,
    pub tasks: Vec<Task>,
}

pub struct ShowProjectHandler<TStore>
where
    TStore: ProjectStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ShowProjectHandler<TStore>
where
    TStore: ProjectStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn get_project(
        &self,
        user_id: &str,
        project_id: &str,
    ) -> Result<ProjectDetails, ApplicationError> {
        let project = owned_project(self.store.as_ref(), user_id, project_id).await?;
        let tasks = self.store.list_project_tasks(&project.project_id).await?;
        Ok(ProjectDetails { project, tasks })
    }
}
