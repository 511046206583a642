// Task board query: every task across the owner's projects, soonest deadline first and
// undated tasks ahead of all others.

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::task::Task;
use crate::modules::projects::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct ListTasksHandler<TStore>
where
    TStore: ProjectStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListTasksHandler<TStore>
where
    TStore: ProjectStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list_tasks(&self, owner_id: &str) -> Result<Vec<Task>, ApplicationError> {
        Ok(self.store.list_owner_tasks(owner_id).await?)
    }
}
