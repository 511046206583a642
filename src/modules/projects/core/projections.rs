// Read model projector: map a project and its task tallies to a UI-ready summary.
//
// Boundaries
// - Pure and stable. Caching lives in the list_project_summaries use case.

use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::status::ProjectStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskTally {
    pub task_count: u64,
    pub completed_task_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    pub health: ProjectStatus,
    pub task_count: u64,
    pub completed_task_count: u64,
    /// Floor-rounded completion percentage, 0 without tasks.
    pub progress: u8,
    pub position: i64,
}

pub fn progress(tally: TaskTally) -> u8 {
    if tally.task_count == 0 {
        return 0;
    }
    let completed = tally.completed_task_count.min(tally.task_count);
    let percent = u128::from(completed) * 100 / u128::from(tally.task_count);
    u8::try_from(percent).unwrap_or(100)
}

pub fn project_summary(project: &Project, tally: TaskTally) -> ProjectSummary {
    ProjectSummary {
        project_id: project.project_id.clone(),
        name: project.name.clone(),
        description: project.description.clone(),
        health: project.status,
        task_count: tally.task_count,
        completed_task_count: tally.completed_task_count,
        progress: progress(tally),
        position: project.position,
    }
}

#[cfg(test)]
mod project_summary_projection_tests {
    use super::*;
    use crate::tests::fixtures::projects::ProjectBuilder;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(10, 3, 30)]
    #[case(3, 1, 33)]
    #[case(3, 2, 66)]
    #[case(7, 7, 100)]
    #[case(200, 1, 0)]
    fn it_should_floor_the_progress(
        #[case] task_count: u64,
        #[case] completed_task_count: u64,
        #[case] expected: u8,
    ) {
        let tally = TaskTally {
            task_count,
            completed_task_count,
        };
        assert_eq!(progress(tally), expected);
    }

    #[rstest]
    fn it_should_project_the_summary_from_the_persisted_status() {
        let project = ProjectBuilder::new()
            .name("Roadmap")
            .status(ProjectStatus::Alert)
            .position(2)
            .build();
        let summary = project_summary(
            &project,
            TaskTally {
                task_count: 4,
                completed_task_count: 1,
            },
        );
        assert_eq!(summary.project_id, project.project_id);
        assert_eq!(summary.name, "Roadmap");
        assert_eq!(summary.description, project.description);
        assert_eq!(summary.health, ProjectStatus::Alert);
        assert_eq!(summary.task_count, 4);
        assert_eq!(summary.completed_task_count, 1);
        assert_eq!(summary.progress, 25);
        assert_eq!(summary.position, 2);
    }

    #[rstest]
    fn it_should_be_stable_for_the_same_input() {
        let project = ProjectBuilder::new().build();
        let tally = TaskTally {
            task_count: 9,
            completed_task_count: 4,
        };
        assert_eq!(
            project_summary(&project, tally),
            project_summary(&project, tally)
        );
    }
}
