use crate::modules::projects::core::task::{Task, TaskStatus};

pub struct TaskBuilder {
    inner: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TaskBuilder {
    pub fn new() -> Self {
        let inner: Task = serde_json::from_str(include_str!("json/task.json"))
            .expect("task fixture should parse");
        Self { inner }
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn status(mut self, v: TaskStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn deadline(mut self, v: Option<i64>) -> Self {
        self.inner.deadline = v;
        self
    }

    pub fn build(self) -> Task {
        self.inner
    }
}

#[cfg(test)]
mod task_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_fixture() {
        let task = TaskBuilder::default().build();
        assert_eq!(task.task_id, "task-fixed-0001");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.description, None);
        assert_eq!(task.deadline, Some(1_700_086_400_000));
    }
}
