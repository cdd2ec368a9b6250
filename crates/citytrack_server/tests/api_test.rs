//! End-to-end tests driving the axum router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use citytrack_engine::GameVariant;
use citytrack_server::{AppState, router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn map_app() -> Router {
    router(AppState::new(GameVariant::IssueMap))
}

fn story_app() -> Router {
    router(AppState::new(GameVariant::Narrative))
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = map_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_service_banner_includes_version() {
    let app = map_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "CityTrack: Civic Sense Simulator - Backend Running"
    );
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_issues_returns_full_catalog() {
    let app = map_app();
    let (status, body) = get(&app, "/api/issues").await;
    assert_eq!(status, StatusCode::OK);

    let issues = body.as_object().expect("object keyed by id");
    assert_eq!(issues.len(), 5);
    assert_eq!(body["1"]["name"], "Garbage Overflow");
    assert_eq!(body["1"]["x"], 300);
    assert_eq!(body["1"]["y"], 200);
    assert_eq!(body["5"]["emoji"], "🎨");
}

#[tokio::test]
async fn test_get_issue_by_id() {
    let app = map_app();
    let (status, body) = get(&app, "/api/issue/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Road Pothole");
    assert_eq!(body["description"], "There is a pothole in the road");
}

#[tokio::test]
async fn test_get_unknown_issue_is_404() {
    let app = map_app();
    let (status, body) = get(&app, "/api/issue/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Issue not found");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_scene_carries_score_and_progress() {
    let app = story_app();
    let (status, body) = get(&app, "/scene/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scene"]["title"], "Garbage Overflowing from Bin");
    assert_eq!(body["scene"]["options"].as_object().expect("options").len(), 3);
    assert_eq!(body["current_score"], 0);
    assert_eq!(body["scene_number"], 1);
    assert_eq!(body["total_scenes"], 5);
}

#[tokio::test]
async fn test_unknown_scene_is_404() {
    let app = story_app();
    let (status, body) = get(&app, "/scene/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Scene not found");
}

#[tokio::test]
async fn test_submit_decision_scores_and_reports() {
    let app = map_app();
    let (status, body) = post(
        &app,
        "/api/submit-decision",
        json!({"issueId": 1, "decision": "fix"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pointsEarned"], 20);
    assert_eq!(body["totalScore"], 20);
    assert_eq!(body["completedIssues"], 1);
    assert_eq!(body["gameActive"], true);
    assert_eq!(body["issueName"], "Garbage Overflow");
}

#[tokio::test]
async fn test_submit_decision_missing_fields_is_400() {
    let app = map_app();

    let (status, body) = post(&app, "/api/submit-decision", json!({"decision": "fix"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing issueId or decision");
    assert_eq!(body["code"], "invalid_argument");

    let (status, _) = post(&app, "/api/submit-decision", json!({"issueId": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_decision_unknown_issue_is_404() {
    let app = map_app();
    let (status, body) = post(
        &app,
        "/api/submit-decision",
        json!({"issueId": 999, "decision": "fix"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Issue not found");
}

#[tokio::test]
async fn test_submit_decision_unknown_kind_is_400() {
    let app = map_app();
    let (status, body) = post(
        &app,
        "/api/submit-decision",
        json!({"issueId": 1, "decision": "maybe"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid decision type");

    // The failed submission must not have touched the session.
    let (_, state) = get(&app, "/api/game-state").await;
    assert_eq!(state["score"], 0);
    assert_eq!(state["completedIssues"], 0);
}

#[tokio::test]
async fn test_submit_decision_accepts_scene_id_alias() {
    let app = story_app();
    let (status, body) = post(
        &app,
        "/api/submit-decision",
        json!({"scene_id": 1, "decision": "A"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pointsEarned"], 20);
    assert_eq!(body["nextScene"], 2);
}

#[tokio::test]
async fn test_full_game_flow() {
    let app = map_app();

    let decisions = [
        (1, "fix", 20),
        (2, "ignore", 10),
        (3, "report", 20),
        (4, "report", 30),
        (5, "fix", 50),
    ];

    for (id, decision, expected_total) in decisions {
        let (status, body) = post(
            &app,
            "/api/submit-decision",
            json!({"issueId": id, "decision": decision}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalScore"], expected_total);
    }

    let (_, state) = get(&app, "/api/game-state").await;
    assert_eq!(state["completedIssues"], 5);
    assert_eq!(state["gameActive"], false);

    let (status, result) = get(&app, "/api/final-result").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["score"], 50);
    assert_eq!(result["rating"], "Aware Citizen");
    assert_eq!(result["message"], "Good civic awareness, but can improve!");
    assert_eq!(result["decisions"].as_array().expect("log").len(), 5);
}

#[tokio::test]
async fn test_final_submission_omits_next_scene() {
    let app = story_app();

    for id in 1..=4 {
        post(
            &app,
            "/api/submit-decision",
            json!({"scene_id": id, "decision": "B"}),
        )
        .await;
    }

    let (_, body) = post(
        &app,
        "/api/submit-decision",
        json!({"scene_id": 5, "decision": "B"}),
    )
    .await;
    assert_eq!(body["gameActive"], false);
    assert!(body.get("nextScene").is_none());
}

#[tokio::test]
async fn test_final_result_is_safe_before_completion() {
    let app = map_app();
    let (status, result) = get(&app, "/api/final-result").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["score"], 0);
    assert_eq!(result["rating"], "Needs Improvement");
}

#[tokio::test]
async fn test_new_game_resets_and_marks_started() {
    let app = map_app();

    post(
        &app,
        "/api/submit-decision",
        json!({"issueId": 1, "decision": "ignore"}),
    )
    .await;

    let (status, body) = post(&app, "/api/new-game", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "New game started");
    assert_eq!(body["gameState"]["score"], 0);
    assert_eq!(body["gameState"]["completedIssues"], 0);
    assert_eq!(body["gameState"]["gameStarted"], true);

    let (_, state) = get(&app, "/api/game-state").await;
    assert_eq!(state["gameStarted"], true);
    assert_eq!(state["gameActive"], true);
}

#[tokio::test]
async fn test_reset_game_clears_started_flag() {
    let app = map_app();

    post(&app, "/api/new-game", json!({})).await;
    post(
        &app,
        "/api/submit-decision",
        json!({"issueId": 1, "decision": "fix"}),
    )
    .await;

    let (status, body) = post(&app, "/api/reset-game", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Game reset");

    let (_, state) = get(&app, "/api/game-state").await;
    assert_eq!(state["score"], 0);
    assert_eq!(state["completedIssues"], 0);
    assert_eq!(state["gameStarted"], false);
    assert_eq!(state["gameActive"], true);
}

#[tokio::test]
async fn test_unmatched_route_is_json_404() {
    let app = map_app();
    let (status, body) = get(&app, "/api/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_cors_preflight_short_circuits() {
    let app = map_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/submit-decision")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    let app = map_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
