use crate::modules::projects::core::task::{TaskPatch, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub user_id: String,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub deadline: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTask {
    pub user_id: String,
    pub task_id: String,
    pub patch: TaskPatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTask {
    pub user_id: String,
    pub task_id: String,
}
