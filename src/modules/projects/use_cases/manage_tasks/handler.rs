// Task lifecycle commands. After each store write the coordinator reconciles the
// owning project's status and invalidates the owner's summaries, before returning.
// When reconciliation fails the task write is undone, so a retry of the same command
// starts from the state it saw the first time.

use crate::modules::projects::adapters::outbound::project_store::{ProjectStore, StoreError};
use crate::modules::projects::core::task::Task;
use crate::modules::projects::use_cases::errors::{ApplicationError, Committed};
use crate::modules::projects::use_cases::manage_tasks::command::{
    CreateTask, DeleteTask, UpdateTask,
};
use crate::modules::projects::use_cases::ownership::owned_project;
use crate::modules::projects::use_cases::reconcile_project_status::handler::ProjectStatusCoordinator;
use crate::shared::core::primitives::new_entity_id;
use crate::shared::infrastructure::cache_versions::VersionRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct TaskCommandHandler<TStore, TVersions>
where
    TStore: ProjectStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    store: Arc<TStore>,
    coordinator: Arc<ProjectStatusCoordinator<TStore, TVersions>>,
}

impl<TStore, TVersions> TaskCommandHandler<TStore, TVersions>
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

    pub async fn create_task(&self, command: CreateTask) -> Result<Committed<Task>, ApplicationError> {
        let project =
            owned_project(self.store.as_ref(), &command.user_id, &command.project_id).await?;
        let task = Task {
            task_id: new_entity_id(),
            project_id: project.project_id,
            title: command.title,
            description: command.description,
            status: command.status,
            deadline: command.deadline,
        };
        self.store.insert_task(task.clone()).await?;

        match self.coordinator.on_task_created(&task).await {
            Ok(outcome) => Ok(Committed {
                value: task,
                invalidation: outcome.invalidation(),
            }),
            Err(error) => {
                self.undo(&task.task_id, self.store.delete_task(&task.task_id))
                    .await;
                Err(error)
            }
        }
    }

    pub async fn update_task(&self, command: UpdateTask) -> Result<Committed<Task>, ApplicationError> {
        let task = self.owned_task(&command.user_id, &command.task_id).await?;
        let (updated, changed) = task.apply(command.patch);
        if changed.is_empty() {
            debug!(task_id = %updated.task_id, "task update changed nothing");
        } else {
            self.store.update_task(updated.clone()).await?;
        }

        // An empty change still goes through the coordinator so a status left behind by
        // an earlier failed attempt gets repaired.
        match self.coordinator.on_task_updated(&updated, &changed).await {
            Ok(outcome) => Ok(Committed {
                value: updated,
                invalidation: outcome.invalidation(),
            }),
            Err(error) => {
                if !changed.is_empty() {
                    self.undo(&task.task_id, self.store.update_task(task.clone()))
                        .await;
                }
                Err(error)
            }
        }
    }

    pub async fn delete_task(&self, command: DeleteTask) -> Result<Committed<Task>, ApplicationError> {
        let task = self.owned_task(&command.user_id, &command.task_id).await?;
        self.store.delete_task(&task.task_id).await?;

        match self.coordinator.on_task_deleted(&task).await {
            Ok(outcome) => Ok(Committed {
                value: task,
                invalidation: outcome.invalidation(),
            }),
            Err(error) => {
                self.undo(&task.task_id, self.store.insert_task(task.clone()))
                    .await;
                Err(error)
            }
        }
    }

    /// Runs the compensating write for a task whose reconciliation failed. The
    /// reconciliation error is what the caller sees, so a failing undo is only logged.
    async fn undo(&self, task_id: &str, write: impl Future<Output = Result<(), StoreError>>) {
        match write.await {
            Ok(()) => info!(task_id, "task write undone after failed reconciliation"),
            Err(error) => {
                warn!(task_id, %error, "task write kept although reconciliation failed")
            }
        }
    }

    async fn owned_task(&self, user_id: &str, task_id: &str) -> Result<Task, ApplicationError> {
        let task = self
            .store
            .find_task(task_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound {
                entity: "task",
                id: task_id.to_string(),
            })?;
        owned_project(self.store.as_ref(), user_id, &task.project_id).await?;
        Ok(task)
    }
}
