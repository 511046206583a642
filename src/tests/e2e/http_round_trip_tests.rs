use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app::TestApp;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn writes_are_visible_in_the_next_read() {
    let test_app = TestApp::new();
    let app = router(test_app.state.clone());

    let (status, created) = send(
        &app,
        post_json(
            "/create-project",
            serde_json::json!({"user_id": "u-1", "name": "Relaunch"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let project_id = created["project"]["project_id"].as_str().unwrap().to_string();

    let (_, before) = send(&app, get("/project-summaries?user_id=u-1")).await;
    assert_eq!(before[0]["health"], "active");

    let (status, task) = send(
        &app,
        post_json(
            "/create-task",
            serde_json::json!({
                "user_id": "u-1",
                "project_id": project_id,
                "title": "Overdue copy",
                "deadline": 0
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let task_id = task["task"]["task_id"].as_str().unwrap().to_string();

    let (_, after) = send(&app, get("/project-summaries?user_id=u-1")).await;
    assert_eq!(after[0]["health"], "alert");
    assert_eq!(after[0]["task_count"], 1);

    let (status, _) = send(
        &app,
        post_json(
            "/update-task",
            serde_json::json!({"user_id": "u-1", "task_id": task_id, "status": "done"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, dashboard) = send(&app, get("/dashboard?user_id=u-1")).await;
    assert_eq!(dashboard["stats"]["active_projects"], 1);
    assert_eq!(dashboard["stats"]["alert_projects"], 0);
    assert_eq!(dashboard["stats"]["pending_tasks"], 0);
    assert_eq!(dashboard["projects"][0]["progress"], 100);

    let (status, details) = send(
        &app,
        get(&format!("/project?user_id=u-1&project_id={project_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["project"]["status"], "active");
    assert_eq!(details["tasks"][0]["status"], "done");

    let (_, board) = send(&app, get("/tasks?user_id=u-1")).await;
    assert_eq!(board[0]["task_id"], task_id.as_str());
}

#[tokio::test]
async fn other_users_cannot_touch_a_project() {
    let test_app = TestApp::new();
    let app = router(test_app.state.clone());
    let (_, created) = send(
        &app,
        post_json(
            "/create-project",
            serde_json::json!({"user_id": "owner", "name": "Private"}),
        ),
    )
    .await;
    let project_id = created["project"]["project_id"].clone();

    let (status, body) = send(
        &app,
        post_json(
            "/delete-project",
            serde_json::json!({"user_id": "intruder", "project_id": project_id}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("does not own"));
    let (_, listed) = send(&app, get("/project-summaries?user_id=owner")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let project_id = project_id.as_str().unwrap();
    let (status, _) = send(
        &app,
        get(&format!("/project?user_id=intruder&project_id={project_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (_, board) = send(&app, get("/tasks?user_id=intruder")).await;
    assert_eq!(board.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn explicit_invalidation_forces_a_recompute() {
    let test_app = TestApp::new();
    let app = router(test_app.state.clone());
    send(&app, get("/project-summaries?user_id=u-1")).await;

    let response = app.clone().oneshot(get("/project-summaries?user_id=u-1")).await.unwrap();
    assert_eq!(response.headers()["x-read-source"], "cache");

    let (status, _) = send(
        &app,
        post_json("/invalidate-summaries", serde_json::json!({"user_id": "u-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/project-summaries?user_id=u-1")).await.unwrap();
    assert_eq!(response.headers()["x-read-source"], "computed");
}
