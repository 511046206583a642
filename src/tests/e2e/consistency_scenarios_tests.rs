use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::status::ProjectStatus;
use crate::modules::projects::core::task::{TaskPatch, TaskStatus};
use crate::modules::projects::use_cases::errors::Invalidation;
use crate::modules::projects::use_cases::list_project_summaries::handler::SummaryQuery;
use crate::modules::projects::use_cases::list_project_summaries::read_model_cache::{
    CacheConfig, ReadSource,
};
use crate::modules::projects::use_cases::manage_projects::command::CreateProject;
use crate::modules::projects::use_cases::manage_tasks::command::{CreateTask, UpdateTask};
use crate::shared::infrastructure::cache_versions::{
    CacheVersionRegistry, DEFAULT_VERSION_TTL, VersionRegistry,
};
use crate::tests::fixtures::app::TestApp;
use crate::tests::fixtures::{FIXED_NOW, ONE_DAY};
use std::sync::Arc;
use std::time::Duration;

const OWNER: &str = "user-e2e";

async fn create_project(app: &TestApp, name: &str) -> String {
    app.state
        .projects
        .create_project(CreateProject {
            owner_id: OWNER.into(),
            name: name.into(),
            description: None,
        })
        .await
        .unwrap()
        .value
        .project_id
}

async fn create_task(
    app: &TestApp,
    project_id: &str,
    status: TaskStatus,
    deadline: Option<i64>,
) -> String {
    app.state
        .tasks
        .create_task(CreateTask {
            user_id: OWNER.into(),
            project_id: project_id.into(),
            title: "Task".into(),
            description: None,
            status,
            deadline,
        })
        .await
        .unwrap()
        .value
        .task_id
}

#[tokio::test]
async fn scenario_a_progress_without_overdue_tasks() {
    let app = TestApp::new();
    let project_id = create_project(&app, "Scenario A").await;
    for i in 0..10 {
        let status = if i < 3 { TaskStatus::Done } else { TaskStatus::Pending };
        create_task(&app, &project_id, status, Some(FIXED_NOW + ONE_DAY)).await;
    }

    let summaries = app
        .state
        .summaries
        .get_summaries(&SummaryQuery::for_owner(OWNER))
        .await
        .unwrap()
        .into_value();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].task_count, 10);
    assert_eq!(summaries[0].completed_task_count, 3);
    assert_eq!(summaries[0].progress, 30);
    assert_eq!(summaries[0].health, ProjectStatus::Active);
}

#[tokio::test]
async fn scenario_b_alert_above_the_overdue_threshold() {
    let app = TestApp::new();
    let project_id = create_project(&app, "Scenario B").await;
    for i in 0..5 {
        let deadline = if i < 2 { FIXED_NOW - ONE_DAY } else { FIXED_NOW + ONE_DAY };
        create_task(&app, &project_id, TaskStatus::Pending, Some(deadline)).await;
    }

    let summaries = app
        .state
        .summaries
        .get_summaries(&SummaryQuery::for_owner(OWNER))
        .await
        .unwrap()
        .into_value();

    assert_eq!(summaries[0].health, ProjectStatus::Alert);
    assert_eq!(summaries[0].progress, 0);
}

#[tokio::test]
async fn scenario_c_new_projects_are_appended() {
    let app = TestApp::new();
    for name in ["One", "Two", "Three"] {
        create_project(&app, name).await;
    }

    let project_id = create_project(&app, "Four").await;

    let project = app.store.find_project(&project_id).await.unwrap().unwrap();
    assert_eq!(project.position, 4);
}

#[tokio::test]
async fn scenario_d_summaries_follow_a_task_update_without_manual_invalidation() {
    let app = TestApp::new();
    let project_id = create_project(&app, "Scenario D").await;
    let task_id = create_task(&app, &project_id, TaskStatus::Pending, Some(FIXED_NOW + ONE_DAY)).await;
    let query = SummaryQuery::for_owner(OWNER);

    let before = app.state.summaries.get_summaries(&query).await.unwrap();
    assert_eq!(before.value[0].health, ProjectStatus::Active);
    let cached = app.state.summaries.get_summaries(&query).await.unwrap();
    assert_eq!(cached.source, ReadSource::Cache);

    let committed = app
        .state
        .tasks
        .update_task(UpdateTask {
            user_id: OWNER.into(),
            task_id,
            patch: TaskPatch {
                deadline: Some(Some(FIXED_NOW - ONE_DAY)),
                ..TaskPatch::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(committed.invalidation, Invalidation::Done);

    let after = app.state.summaries.get_summaries(&query).await.unwrap();
    assert_eq!(after.source, ReadSource::Computed);
    assert_eq!(after.value[0].health, ProjectStatus::Alert);
}

#[tokio::test]
async fn scenario_e_concurrent_bumps_settle_on_one_of_their_tokens() {
    let app = TestApp::new();
    let versions = Arc::new(CacheVersionRegistry::new(app.cache.clone(), DEFAULT_VERSION_TTL));
    let initial = versions.get_version(OWNER).await.unwrap();

    let (first, second) = tokio::join!(versions.bump(OWNER), versions.bump(OWNER));
    let (first, second) = (first.unwrap(), second.unwrap());

    let settled = versions.get_version(OWNER).await.unwrap();
    assert_ne!(first, second);
    assert_ne!(settled, initial);
    assert!(settled == first || settled == second);
}

#[tokio::test]
async fn entries_expire_even_without_writes() {
    let app = TestApp::with_config(CacheConfig::default().with_ttl(Duration::from_secs(60)));
    create_project(&app, "Expiring").await;
    let query = SummaryQuery::for_owner(OWNER);
    app.state.summaries.get_summaries(&query).await.unwrap();

    app.clock.advance_millis(61_000);
    let read = app.state.summaries.get_summaries(&query).await.unwrap();

    assert_eq!(read.source, ReadSource::Computed);
}

#[tokio::test]
async fn a_failed_invalidation_keeps_the_write_and_heals_after_the_ttl() {
    let app = TestApp::with_config(CacheConfig::default().with_ttl(Duration::from_secs(60)));
    let project_id = create_project(&app, "Healing").await;
    let query = SummaryQuery::for_owner(OWNER);
    app.state.summaries.get_summaries(&query).await.unwrap();

    app.cache.fail_next_writes(2);
    let committed = app
        .state
        .tasks
        .create_task(CreateTask {
            user_id: OWNER.into(),
            project_id: project_id.clone(),
            title: "Late".into(),
            description: None,
            status: TaskStatus::Pending,
            deadline: Some(FIXED_NOW - ONE_DAY),
        })
        .await
        .unwrap();
    assert_eq!(committed.invalidation, Invalidation::Failed);

    let stale = app.state.summaries.get_summaries(&query).await.unwrap();
    assert_eq!(stale.value[0].health, ProjectStatus::Active);

    app.clock.advance_millis(61_000);
    let healed = app.state.summaries.get_summaries(&query).await.unwrap();
    assert_eq!(healed.value[0].health, ProjectStatus::Alert);
    assert_eq!(healed.value[0].task_count, 1);
}
