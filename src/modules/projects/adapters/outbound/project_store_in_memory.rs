// In memory implementation of the ProjectStore port.
//
// Purpose
// - Support use case tests and local development without a database.

use crate::modules::projects::adapters::outbound::project_store::{
    ProjectFilter, ProjectStore, ProjectWithTally, StoreError, TaskCountFilter,
};
use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::projections::TaskTally;
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::core::task::{Task, TaskStatus};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    projects: HashMap<String, Project>,
    tasks: HashMap<String, Task>,
}

#[derive(Default)]
pub struct InMemoryProjectStore {
    tables: RwLock<Tables>,
    is_offline: AtomicBool,
    rejects_status_writes: AtomicBool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Fails only `update_project_status`, leaving reads and other writes intact.
    pub fn toggle_status_writes_failing(&self) {
        self.rejects_status_writes.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Project store offline".into()));
        }
        Ok(())
    }

    fn not_found(entity: &'static str, id: &str) -> StoreError {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

fn matches_search(project: &Project, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    project.name.to_lowercase().contains(&needle)
        || project
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

fn by_deadline(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.deadline
            .cmp(&b.deadline)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
}

fn matches_count_filter(task: &Task, filter: TaskCountFilter) -> bool {
    match filter {
        TaskCountFilter::All => true,
        TaskCountFilter::OverdueAt(now) => task.is_overdue(now),
        TaskCountFilter::WithStatus(status) => task.status == status,
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn insert_project(&self, project: Project) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.tables
            .write()
            .await
            .projects
            .insert(project.project_id.clone(), project);
        Ok(())
    }

    async fn find_project(&self, project_id: &str) -> Result<Option<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.projects.get(project_id).cloned())
    }

    async fn max_position(&self, owner_id: &str) -> Result<Option<i64>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .projects
            .values()
            .filter(|p| p.owner_id == owner_id)
            .map(|p| p.position)
            .max())
    }

    async fn update_project_details(
        &self,
        project_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        let project = guard
            .projects
            .get_mut(project_id)
            .ok_or_else(|| Self::not_found("project", project_id))?;
        project.name = name.to_string();
        project.description = description.map(str::to_string);
        Ok(())
    }

    async fn update_project_status(
        &self,
        project_id: &str,
        status: ProjectStatus,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        if self.rejects_status_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Project status write failed".into()));
        }
        let mut guard = self.tables.write().await;
        let project = guard
            .projects
            .get_mut(project_id)
            .ok_or_else(|| Self::not_found("project", project_id))?;
        project.status = status;
        Ok(())
    }

    async fn update_project_position(
        &self,
        owner_id: &str,
        project_id: &str,
        position: i64,
    ) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        match guard.projects.get_mut(project_id) {
            Some(project) if project.owner_id == owner_id => {
                project.position = position;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_project(&self, project_id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        guard
            .projects
            .remove(project_id)
            .ok_or_else(|| Self::not_found("project", project_id))?;
        guard.tasks.retain(|_, task| task.project_id != project_id);
        Ok(())
    }

    async fn query_projects_by_owner(
        &self,
        owner_id: &str,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectWithTally>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;

        let mut projects: Vec<&Project> = guard
            .projects
            .values()
            .filter(|p| p.owner_id == owner_id)
            .filter(|p| {
                filter
                    .search
                    .as_deref()
                    .is_none_or(|needle| matches_search(p, needle))
            })
            .collect();
        projects.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.project_id.cmp(&b.project_id))
        });
        if let Some(limit) = filter.limit {
            projects.truncate(limit);
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let tally = guard
                    .tasks
                    .values()
                    .filter(|t| t.project_id == project.project_id)
                    .fold(TaskTally::default(), |mut tally, task| {
                        tally.task_count += 1;
                        if task.status == TaskStatus::Done {
                            tally.completed_task_count += 1;
                        }
                        tally
                    });
                ProjectWithTally {
                    project: project.clone(),
                    tally,
                }
            })
            .collect())
    }

    async fn count_owner_projects(
        &self,
        owner_id: &str,
        status: ProjectStatus,
    ) -> Result<u64, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .projects
            .values()
            .filter(|p| p.owner_id == owner_id && p.status == status)
            .count() as u64)
    }

    async fn insert_task(&self, task: Task) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        if !guard.projects.contains_key(&task.project_id) {
            return Err(Self::not_found("project", &task.project_id));
        }
        guard.tasks.insert(task.task_id.clone(), task);
        Ok(())
    }

    async fn find_task(&self, task_id: &str) -> Result<Option<Task>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.tasks.get(task_id).cloned())
    }

    async fn update_task(&self, task: Task) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        let stored = guard
            .tasks
            .get_mut(&task.task_id)
            .ok_or_else(|| Self::not_found("task", &task.task_id))?;
        *stored = task;
        Ok(())
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.tables
            .write()
            .await
            .tasks
            .remove(task_id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found("task", task_id))
    }

    async fn list_project_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError> {
        self.ensure_online()?;
        let mut tasks: Vec<Task> = self
            .tables
            .read()
            .await
            .tasks
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();
        by_deadline(&mut tasks);
        Ok(tasks)
    }

    async fn list_owner_tasks(&self, owner_id: &str) -> Result<Vec<Task>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        let mut tasks: Vec<Task> = guard
            .tasks
            .values()
            .filter(|t| {
                guard
                    .projects
                    .get(&t.project_id)
                    .is_some_and(|p| p.owner_id == owner_id)
            })
            .cloned()
            .collect();
        by_deadline(&mut tasks);
        Ok(tasks)
    }

    async fn count_tasks(
        &self,
        project_id: &str,
        filter: TaskCountFilter,
    ) -> Result<u64, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .tasks
            .values()
            .filter(|t| t.project_id == project_id && matches_count_filter(t, filter))
            .count() as u64)
    }

    async fn count_owner_tasks(
        &self,
        owner_id: &str,
        status: TaskStatus,
    ) -> Result<u64, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard
            .tasks
            .values()
            .filter(|t| t.status == status)
            .filter(|t| {
                guard
                    .projects
                    .get(&t.project_id)
                    .is_some_and(|p| p.owner_id == owner_id)
            })
            .count() as u64)
    }
}
