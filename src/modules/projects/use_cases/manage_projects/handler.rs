// Project lifecycle commands. Every successful write advances the owner's read model
// generation before returning.

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::{Project, next_position};
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::use_cases::errors::{ApplicationError, Committed};
use crate::modules::projects::use_cases::manage_projects::command::{
    CreateProject, DeleteProject, ReorderProjects, UpdateProject,
};
use crate::modules::projects::use_cases::ownership::owned_project;
use crate::modules::projects::use_cases::reconcile_project_status::handler::ProjectStatusCoordinator;
use crate::shared::core::primitives::new_entity_id;
use crate::shared::infrastructure::cache_versions::VersionRegistry;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProjectCommandHandler<TStore, TVersions>
where
    TStore: ProjectStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    store: Arc<TStore>,
    coordinator: Arc<ProjectStatusCoordinator<TStore, TVersions>>,
}

impl<TStore, TVersions> ProjectCommandHandler<TStore, TVersions>
where
    TStore: ProjectStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        coordinator: Arc<ProjectStatusCoordinator<TStore, TVersions>>,
    ) -> Self {
        Self { store, coordinator }
    }

    pub async fn create_project(
        &self,
        command: CreateProject,
    ) -> Result<Committed<Project>, ApplicationError> {
        let max_position = self.store.max_position(&command.owner_id).await?;
        let project = Project {
            project_id: new_entity_id(),
            owner_id: command.owner_id,
            name: command.name,
            description: command.description,
            status: ProjectStatus::Active,
            position: next_position(max_position),
        };
        self.store.insert_project(project.clone()).await?;
        info!(project_id = %project.project_id, owner_id = %project.owner_id, "project created");

        let invalidation = self
            .coordinator
            .invalidate_after_write(&project.owner_id)
            .await;
        Ok(Committed {
            value: project,
            invalidation,
        })
    }

    pub async fn update_project(
        &self,
        command: UpdateProject,
    ) -> Result<Committed<Project>, ApplicationError> {
        let mut project =
            owned_project(self.store.as_ref(), &command.user_id, &command.project_id).await?;
        self.store
            .update_project_details(
                &project.project_id,
                &command.name,
                command.description.as_deref(),
            )
            .await?;
        project.name = command.name;
        project.description = command.description;

        let invalidation = self
            .coordinator
            .invalidate_after_write(&project.owner_id)
            .await;
        Ok(Committed {
            value: project,
            invalidation,
        })
    }

    /// Applies the positions the user is allowed to set and returns how many were applied.
    pub async fn reorder_projects(
        &self,
        command: ReorderProjects,
    ) -> Result<Committed<usize>, ApplicationError> {
        let mut applied = 0;
        for entry in &command.positions {
            let updated = self
                .store
                .update_project_position(&command.user_id, &entry.project_id, entry.position)
                .await?;
            if updated {
                applied += 1;
            } else {
                debug!(user_id = %command.user_id, project_id = %entry.project_id, "skipped reorder of a project not owned by the user");
            }
        }

        let invalidation = self
            .coordinator
            .invalidate_after_write(&command.user_id)
            .await;
        Ok(Committed {
            value: applied,
            invalidation,
        })
    }

    pub async fn delete_project(
        &self,
        command: DeleteProject,
    ) -> Result<Committed<()>, ApplicationError> {
        let project =
            owned_project(self.store.as_ref(), &command.user_id, &command.project_id).await?;
        self.store.delete_project(&project.project_id).await?;
        info!(project_id = %project.project_id, "project deleted");

        let invalidation = self
            .coordinator
            .invalidate_after_write(&project.owner_id)
            .await;
        Ok(Committed {
            value: (),
            invalidation,
        })
    }
}
