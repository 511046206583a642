// Consistency coordinator between the write model and the cached read model.
//
// Responsibilities
// - On task lifecycle events, recount the project's tasks, run the status engine and
//   persist the status when it changed.
// - Then bump the owner's cache version, even when the status did not change, since
//   counts and progress may have.
//
// Ordering
// - The status write completes before the bump starts. A failed status write aborts
//   without bumping, so no cache generation is advertised for state that was not
//   persisted.
// - A bump that still fails after its retry is reported, not rolled back: the store
//   stays the source of truth and summaries catch up when their TTL lapses.
// - Failures surface before anything is persisted, so a caller may undo its own task
//   write. Updates that do not touch status or deadline still repair a persisted
//   status that drifted from the task counts.

use crate::modules::projects::adapters::outbound::project_store::{ProjectStore, TaskCountFilter};
use crate::modules::projects::core::status::{ProjectStatus, TaskCounts, compute_status};
use crate::modules::projects::core::task::{Task, TaskField, affects_project_status};
use crate::modules::projects::use_cases::errors::{ApplicationError, Invalidation};
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::cache_versions::VersionRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

const BUMP_ATTEMPTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Reconciled {
        project_id: String,
        status: ProjectStatus,
        status_changed: bool,
        invalidation: Invalidation,
    },
    /// The update touched neither status nor deadline and the persisted status holds.
    Unaffected,
    /// The task's project no longer exists.
    Orphaned,
}

impl ReconcileOutcome {
    pub fn invalidation(&self) -> Invalidation {
        match self {
            ReconcileOutcome::Reconciled { invalidation, .. } => *invalidation,
            ReconcileOutcome::Unaffected | ReconcileOutcome::Orphaned => Invalidation::NotNeeded,
        }
    }
}

pub struct ProjectStatusCoordinator<TStore, TVersions>
where
    TStore: ProjectStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    store: Arc<TStore>,
    versions: Arc<TVersions>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TVersions> ProjectStatusCoordinator<TStore, TVersions>
where
    TStore: ProjectStore + 'static,
    TVersions: VersionRegistry + 'static,
{
    pub fn new(store: Arc<TStore>, versions: Arc<TVersions>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            versions,
            clock,
        }
    }

    pub async fn on_task_created(&self, task: &Task) -> Result<ReconcileOutcome, ApplicationError> {
        self.reconcile(task).await
    }

    pub async fn on_task_updated(
        &self,
        task: &Task,
        changed: &[TaskField],
    ) -> Result<ReconcileOutcome, ApplicationError> {
        if affects_project_status(changed) {
            return self.reconcile(task).await;
        }

        let Some(project) = self.store.find_project(&task.project_id).await? else {
            return Ok(ReconcileOutcome::Orphaned);
        };
        let (status, _) = self.derive_status(&project.project_id).await?;
        if status == project.status {
            debug!(task_id = %task.task_id, ?changed, "task change does not affect project status");
            return Ok(ReconcileOutcome::Unaffected);
        }
        warn!(
            project_id = %project.project_id,
            persisted = project.status.as_str(),
            derived = status.as_str(),
            "persisted project status drifted, reconciling"
        );
        self.reconcile(task).await
    }

    pub async fn on_task_deleted(&self, task: &Task) -> Result<ReconcileOutcome, ApplicationError> {
        self.reconcile(task).await
    }

    /// Advances the owner's cache version, retrying once on a backend failure.
    pub async fn invalidate(&self, owner_id: &str) -> Result<(), ApplicationError> {
        let mut last_error = None;
        for attempt in 1..=BUMP_ATTEMPTS {
            match self.versions.bump(owner_id).await {
                Ok(_) => {
                    info!(owner_id, "project summaries invalidated");
                    return Ok(());
                }
                Err(error) => {
                    debug!(owner_id, attempt, %error, "cache version bump failed");
                    last_error = Some(error);
                }
            }
        }
        Err(last_error
            .map(ApplicationError::from)
            .unwrap_or_else(|| ApplicationError::StoreUnavailable("cache version bump".into())))
    }

    /// Like `invalidate`, but a persistent failure is only reported as a warning.
    pub async fn invalidate_after_write(&self, owner_id: &str) -> Invalidation {
        match self.invalidate(owner_id).await {
            Ok(()) => Invalidation::Done,
            Err(error) => {
                warn!(owner_id, %error, "write committed but cached summaries were not invalidated");
                Invalidation::Failed
            }
        }
    }

    async fn reconcile(&self, task: &Task) -> Result<ReconcileOutcome, ApplicationError> {
        let Some(project) = self.store.find_project(&task.project_id).await? else {
            debug!(task_id = %task.task_id, project_id = %task.project_id, "orphaned task, nothing to reconcile");
            return Ok(ReconcileOutcome::Orphaned);
        };

        let (status, TaskCounts { total, overdue }) =
            self.derive_status(&project.project_id).await?;

        let status_changed = status != project.status;
        if status_changed {
            self.store
                .update_project_status(&project.project_id, status)
                .await?;
            info!(
                project_id = %project.project_id,
                from = project.status.as_str(),
                to = status.as_str(),
                total,
                overdue,
                "project status changed"
            );
        }

        let invalidation = self.invalidate_after_write(&project.owner_id).await;

        Ok(ReconcileOutcome::Reconciled {
            project_id: project.project_id,
            status,
            status_changed,
            invalidation,
        })
    }

    async fn derive_status(
        &self,
        project_id: &str,
    ) -> Result<(ProjectStatus, TaskCounts), ApplicationError> {
        let now = self.clock.now_millis();
        let total = self
            .store
            .count_tasks(project_id, TaskCountFilter::All)
            .await?;
        let overdue = self
            .store
            .count_tasks(project_id, TaskCountFilter::OverdueAt(now))
            .await?;
        let counts = TaskCounts { total, overdue };
        Ok((compute_status(counts)?, counts))
    }
}
