//! Route handlers, wire DTOs, and router assembly.

use std::collections::BTreeMap;

use axum::extract::{Path, Request, State};
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use citytrack_engine::{
    CatalogEntry, DecisionOutcome, DecisionRecord, EntryId, FinalReport, Presentation, Session,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Assembles the full API router around `state`.
///
/// Both route families (`/api/issue*` and `/scene/{id}`) are mounted
/// regardless of variant; views render from whatever presentation data
/// the entry carries.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/api/game-state", get(game_state))
        .route("/api/issues", get(list_issues))
        .route("/api/issue/{id}", get(get_issue))
        .route("/scene/{id}", get(get_scene))
        .route("/api/submit-decision", post(submit_decision))
        .route("/api/final-result", get(final_result))
        .route("/api/new-game", post(new_game))
        .route("/api/reset-game", post(reset_game))
        .fallback(route_not_found)
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static("*"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static("content-type"),
    );
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "CityTrack: Civic Sense Simulator - Backend Running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Map-variant wire shape of a catalog entry.
#[derive(Debug, Serialize)]
struct IssueView {
    id: EntryId,
    name: String,
    description: String,
    emoji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<u32>,
}

impl IssueView {
    fn from_entry(entry: &CatalogEntry) -> Self {
        let (x, y) = match entry.presentation() {
            Presentation::MapPin { x, y } => (Some(*x), Some(*y)),
            Presentation::Prompt { .. } => (None, None),
        };
        Self {
            id: *entry.id(),
            name: entry.name().clone(),
            description: entry.description().clone(),
            emoji: entry.emoji().clone(),
            x,
            y,
        }
    }
}

/// Narrative-variant wire shape of a catalog entry.
#[derive(Debug, Serialize)]
struct SceneView {
    id: EntryId,
    title: String,
    description: String,
    background_emoji: String,
    options: BTreeMap<String, String>,
}

impl SceneView {
    fn from_entry(entry: &CatalogEntry) -> Self {
        let options = match entry.presentation() {
            Presentation::Prompt { options } => options
                .iter()
                .map(|option| (option.key().clone(), option.label().clone()))
                .collect(),
            Presentation::MapPin { .. } => BTreeMap::new(),
        };
        Self {
            id: *entry.id(),
            title: entry.name().clone(),
            description: entry.description().clone(),
            background_emoji: entry.emoji().clone(),
            options,
        }
    }
}

/// Wire shape of the running session.
#[derive(Debug, Serialize)]
struct SessionView {
    score: i32,
    #[serde(rename = "completedIssues")]
    completed: usize,
    decisions: Vec<DecisionRecord>,
    #[serde(rename = "gameActive")]
    active: bool,
    #[serde(rename = "gameStarted")]
    started: bool,
}

impl SessionView {
    fn from_session(session: &Session) -> Self {
        Self {
            score: *session.score(),
            completed: session.completed_count(),
            decisions: session.decisions().clone(),
            active: *session.active(),
            started: *session.started(),
        }
    }
}

#[instrument(skip(state))]
async fn game_state(State(state): State<AppState>) -> Json<SessionView> {
    let engine = state.engine().await;
    Json(SessionView::from_session(engine.session()))
}

#[instrument(skip(state))]
async fn list_issues(State(state): State<AppState>) -> Json<BTreeMap<EntryId, IssueView>> {
    let engine = state.engine().await;
    let issues = engine
        .catalog()
        .entries()
        .iter()
        .map(|entry| (*entry.id(), IssueView::from_entry(entry)))
        .collect();
    Json(issues)
}

#[instrument(skip(state))]
async fn get_issue(
    Path(id): Path<EntryId>,
    State(state): State<AppState>,
) -> Result<Json<IssueView>, ApiError> {
    let engine = state.engine().await;
    let entry = engine.entry(id)?;
    Ok(Json(IssueView::from_entry(entry)))
}

#[derive(Debug, Serialize)]
struct SceneResponse {
    scene: SceneView,
    current_score: i32,
    scene_number: EntryId,
    total_scenes: usize,
}

#[instrument(skip(state))]
async fn get_scene(
    Path(id): Path<EntryId>,
    State(state): State<AppState>,
) -> Result<Json<SceneResponse>, ApiError> {
    let engine = state.engine().await;
    let entry = engine
        .entry(id)
        .map_err(|_| ApiError::not_found("Scene not found"))?;
    Ok(Json(SceneResponse {
        scene: SceneView::from_entry(entry),
        current_score: *engine.session().score(),
        scene_number: id,
        total_scenes: engine.catalog().len(),
    }))
}

/// Body of `POST /api/submit-decision`.
///
/// Fields deserialize as optional so that a missing value surfaces as an
/// invalid-argument error rather than a body rejection.
#[derive(Debug, Deserialize)]
struct SubmitDecisionRequest {
    #[serde(rename = "issueId", alias = "scene_id", default)]
    entry_id: Option<EntryId>,
    #[serde(default)]
    decision: Option<String>,
}

#[instrument(skip(state, request))]
async fn submit_decision(
    State(state): State<AppState>,
    Json(request): Json<SubmitDecisionRequest>,
) -> Result<Json<DecisionOutcome>, ApiError> {
    let (Some(id), Some(decision)) = (request.entry_id, request.decision.as_deref()) else {
        warn!("Rejecting submission with missing fields");
        return Err(ApiError::invalid_argument("Missing issueId or decision"));
    };

    let mut engine = state.engine().await;
    let outcome = engine.submit_decision(id, decision)?;
    info!(id, decision, points = outcome.points_earned(), "Decision accepted");
    Ok(Json(outcome))
}

#[instrument(skip(state))]
async fn final_result(State(state): State<AppState>) -> Json<FinalReport> {
    let engine = state.engine().await;
    Json(engine.final_report())
}

#[derive(Debug, Serialize)]
struct NewGameResponse {
    message: &'static str,
    #[serde(rename = "gameState")]
    game_state: SessionView,
}

#[instrument(skip(state))]
async fn new_game(State(state): State<AppState>) -> Json<NewGameResponse> {
    let mut engine = state.engine().await;
    engine.new_game();
    Json(NewGameResponse {
        message: "New game started",
        game_state: SessionView::from_session(engine.session()),
    })
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[instrument(skip(state))]
async fn reset_game(State(state): State<AppState>) -> Json<MessageResponse> {
    let mut engine = state.engine().await;
    engine.reset();
    Json(MessageResponse {
        message: "Game reset",
    })
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
