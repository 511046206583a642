use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::status::ProjectStatus;

pub struct ProjectBuilder {
    inner: Project,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProjectBuilder {
    pub fn new() -> Self {
        let inner: Project = serde_json::from_str(include_str!("json/project.json"))
            .expect("project fixture should parse");
        Self { inner }
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: Option<&str>) -> Self {
        self.inner.description = v.map(str::to_string);
        self
    }

    pub fn status(mut self, v: ProjectStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn position(mut self, v: i64) -> Self {
        self.inner.position = v;
        self
    }

    pub fn build(self) -> Project {
        self.inner
    }
}

#[cfg(test)]
mod project_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_fixture() {
        let project = ProjectBuilder::default().build();
        assert_eq!(project.project_id, "project-fixed-0001");
        assert_eq!(project.owner_id, "user-fixed-0001");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.position, 1);
    }
}
