use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Epoch milliseconds.
    pub deadline: Option<i64>,
}

impl Task {
    /// Overdue means past its deadline (strictly) and not done.
    pub fn is_overdue(&self, now_millis: i64) -> bool {
        self.status != TaskStatus::Done && self.deadline.is_some_and(|d| d < now_millis)
    }

    /// Applies a patch and reports which fields actually changed value.
    pub fn apply(&self, patch: TaskPatch) -> (Task, Vec<TaskField>) {
        let mut next = self.clone();
        let mut changed = Vec::new();

        if let Some(title) = patch.title
            && title != next.title
        {
            next.title = title;
            changed.push(TaskField::Title);
        }
        if let Some(description) = patch.description
            && description != next.description
        {
            next.description = description;
            changed.push(TaskField::Description);
        }
        if let Some(status) = patch.status
            && status != next.status
        {
            next.status = status;
            changed.push(TaskField::Status);
        }
        if let Some(deadline) = patch.deadline
            && deadline != next.deadline
        {
            next.deadline = deadline;
            changed.push(TaskField::Deadline);
        }

        (next, changed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Title,
    Description,
    Status,
    Deadline,
}

/// Only status and deadline feed the project's health.
pub fn affects_project_status(changed: &[TaskField]) -> bool {
    changed
        .iter()
        .any(|field| matches!(field, TaskField::Status | TaskField::Deadline))
}

/// Partial update. The outer `Option` means "leave unchanged"; for nullable fields the
/// inner `Option` is the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub deadline: Option<Option<i64>>,
}

#[cfg(test)]
mod task_tests {
    use super::*;
    use crate::tests::fixtures::tasks::TaskBuilder;
    use rstest::rstest;

    const NOW: i64 = 1_700_000_000_000;

    #[rstest]
    #[case(TaskStatus::Pending, Some(NOW - 1), true)]
    #[case(TaskStatus::InProgress, Some(NOW - 1), true)]
    #[case(TaskStatus::Done, Some(NOW - 1), false)]
    #[case(TaskStatus::Pending, Some(NOW), false)]
    #[case(TaskStatus::Pending, None, false)]
    fn it_should_detect_overdue_tasks(
        #[case] status: TaskStatus,
        #[case] deadline: Option<i64>,
        #[case] expected: bool,
    ) {
        let task = TaskBuilder::new().status(status).deadline(deadline).build();
        assert_eq!(task.is_overdue(NOW), expected);
    }

    #[rstest]
    fn it_should_report_only_fields_that_changed_value() {
        let task = TaskBuilder::new().status(TaskStatus::Pending).build();
        let (next, changed) = task.apply(TaskPatch {
            title: Some(task.title.clone()),
            status: Some(TaskStatus::Done),
            ..TaskPatch::default()
        });
        assert_eq!(changed, vec![TaskField::Status]);
        assert_eq!(next.status, TaskStatus::Done);
        assert_eq!(next.title, task.title);
    }

    #[rstest]
    fn it_should_clear_a_deadline() {
        let task = TaskBuilder::new().deadline(Some(NOW)).build();
        let (next, changed) = task.apply(TaskPatch {
            deadline: Some(None),
            ..TaskPatch::default()
        });
        assert_eq!(next.deadline, None);
        assert!(affects_project_status(&changed));
    }

    #[rstest]
    fn it_should_ignore_cosmetic_changes_for_the_project_status() {
        assert!(!affects_project_status(&[
            TaskField::Title,
            TaskField::Description
        ]));
        assert!(!affects_project_status(&[]));
    }
}
