//! Web API module for Color Nearest Match.
//!
//! This module provides a REST API around the hex validation helpers and the
//! match session, so a browser form can drive the same flow as the CLI.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/hex/validate?hex=` - Check a hex color
//! - `GET /api/hex/normalize?hex=` - Canonical `#RRGGBB` form
//! - `POST /api/match` - One-shot nearest color lookup
//! - `POST /api/sessions` - Create a match session
//! - `GET /api/sessions/{id}` - Session state
//! - `PUT /api/sessions/{id}/input` - Edit the session input
//! - `POST /api/sessions/{id}/match` - Submit the session input
//! - `DELETE /api/sessions/{id}` - Drop a session

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::Config;
use crate::constants::{messages, APP_NAME, SESSION_IDLE_TIMEOUT_SECS};
use crate::error::Error;
use crate::models::{is_valid_hex, ColorMatch, HexColor};
use crate::services::{
    find_with_timeout, ColorMatcher, FixedMatcher, Notification, RecordingNotifier,
};
use crate::session::MatchSession;

// ============================================================================
// Application State
// ============================================================================

/// A match session plus the notifications it has raised since the last response.
struct WebSession {
    session: MatchSession,
    notifications: Arc<RecordingNotifier>,
    last_seen: Instant,
}

impl WebSession {
    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    fn is_idle(&self, idle: Duration) -> bool {
        !self.session.is_loading() && self.last_seen.elapsed() >= idle
    }
}

type SessionMap = HashMap<Uuid, WebSession>;

/// Shared application state for the web API.
///
/// Sessions are dropped by `DELETE` or, once idle for
/// [`SESSION_IDLE_TIMEOUT_SECS`], when the next session is created. A session
/// with a match in flight is never evicted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Match service shared by every session
    matcher: Arc<dyn ColorMatcher>,
    /// Live sessions; the lock is never held across a match request
    sessions: Arc<Mutex<SessionMap>>,
    /// How long an untouched session survives
    idle_timeout: Duration,
}

impl AppState {
    /// Creates a new application state backed by the configured matcher.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let matcher = FixedMatcher::from_config(&config.matcher)?;
        Ok(Self::with_matcher(config, Arc::new(matcher)))
    }

    /// Creates a new application state with an explicit match service.
    pub fn with_matcher(config: Config, matcher: Arc<dyn ColorMatcher>) -> Self {
        Self {
            config: Arc::new(config),
            matcher,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout: Duration::from_secs(SESSION_IDLE_TIMEOUT_SECS),
        }
    }

    /// Overrides how long an untouched session survives.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub name: String,
    /// Crate version.
    pub version: String,
}

/// Query for the hex helpers.
#[derive(Debug, Deserialize)]
pub struct HexQuery {
    /// Raw hex text, verbatim.
    pub hex: String,
}

/// Response of `GET /api/hex/validate`.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// The input as received.
    pub input: String,
    /// Whether it is `#RGB` or `#RRGGBB`.
    pub valid: bool,
}

/// Response of `GET /api/hex/normalize`.
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    /// The input as received.
    pub input: String,
    /// Canonical uppercase `#RRGGBB`.
    pub hex: HexColor,
}

/// Body of `POST /api/match`.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// Hex color to look up.
    pub hex: String,
}

/// Body of `PUT /api/sessions/{id}/input`.
#[derive(Debug, Deserialize)]
pub struct InputUpdateRequest {
    /// New input text; a missing `#` is added.
    pub value: String,
}

/// State of one session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session id.
    pub id: Uuid,
    /// Input text as edited.
    pub input: String,
    /// Canonical form of the input, when valid.
    pub normalized: Option<HexColor>,
    /// Whether a match request is in flight.
    pub loading: bool,
    /// Last successful match.
    pub result: Option<ColorMatch>,
}

impl SessionResponse {
    fn new(id: Uuid, session: &MatchSession) -> Self {
        let state = session.state();
        Self {
            id,
            input: state.input.clone(),
            normalized: session.normalized_input(),
            loading: state.loading,
            result: state.result.clone(),
        }
    }
}

/// Response of `POST /api/sessions/{id}/match`, on success and failure alike.
#[derive(Debug, Serialize)]
pub struct SessionMatchResponse {
    /// Session state after the submission.
    pub state: SessionResponse,
    /// Match produced by this submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ColorMatch>,
    /// Why the submission failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Notifications raised by this submission.
    pub notifications: Vec<Notification>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// HTTP status for a flow error.
fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidFormat { .. } | Error::NoResult => StatusCode::BAD_REQUEST,
        Error::RequestPending => StatusCode::CONFLICT,
        Error::MatchServiceFailure(_) => StatusCode::BAD_GATEWAY,
        Error::ClipboardFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_error(err: &Error) -> (StatusCode, Json<ApiError>) {
    let body = match err {
        Error::InvalidFormat { .. } => {
            ApiError::with_details(messages::INVALID_TITLE, messages::INVALID_DESCRIPTION)
        }
        Error::MatchServiceFailure(detail) => {
            ApiError::with_details(messages::MATCH_FAILED_DESCRIPTION, detail.clone())
        }
        other => ApiError::new(other.to_string()),
    };
    (status_for(err), Json(body))
}

fn session_not_found(id: Uuid) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Session not found: {id}"))),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/hex/validate - Check whether a value is a hex color.
async fn validate_hex(Query(query): Query<HexQuery>) -> Json<ValidateResponse> {
    let valid = is_valid_hex(&query.hex);
    Json(ValidateResponse {
        input: query.hex,
        valid,
    })
}

/// GET /api/hex/normalize - Canonical form of a hex color.
async fn normalize_hex(Query(query): Query<HexQuery>) -> ApiResult<Json<NormalizeResponse>> {
    let hex = HexColor::parse(&query.hex).map_err(|e| api_error(&e))?;
    Ok(Json(NormalizeResponse {
        input: query.hex,
        hex,
    }))
}

/// POST /api/match - One-shot nearest color lookup without a session.
async fn find_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> ApiResult<Json<ColorMatch>> {
    // Invalid input never reaches the match service
    let color = HexColor::parse(&request.hex).map_err(|e| api_error(&e))?;
    debug!(%color, "one-shot match request");

    let found = find_with_timeout(state.matcher.as_ref(), &color, state.config.matcher.timeout())
        .await
        .map_err(|e| api_error(&e))?;

    Ok(Json(found))
}

/// POST /api/sessions - Create a session with the configured defaults.
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let notifications = Arc::new(RecordingNotifier::new());
    let session = MatchSession::from_config(
        &state.config,
        Arc::clone(&state.matcher),
        notifications.clone(),
    );

    let id = Uuid::new_v4();
    let response = SessionResponse::new(id, &session);

    let mut sessions = state.sessions.lock().await;
    let before = sessions.len();
    sessions.retain(|_, entry| !entry.is_idle(state.idle_timeout));
    if sessions.len() < before {
        info!(evicted = before - sessions.len(), "idle sessions evicted");
    }
    sessions.insert(
        id,
        WebSession {
            session,
            notifications,
            last_seen: Instant::now(),
        },
    );
    drop(sessions);

    info!(%id, "session created");
    (StatusCode::CREATED, Json(response))
}

/// GET /api/sessions/{id} - Current session state.
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionResponse>> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    Ok(Json(SessionResponse::new(id, &entry.session)))
}

/// PUT /api/sessions/{id}/input - Edit the session input.
async fn update_input(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<InputUpdateRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let mut sessions = state.sessions.lock().await;
    let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    entry.touch();
    entry.session.edit_input(&request.value);
    Ok(Json(SessionResponse::new(id, &entry.session)))
}

/// POST /api/sessions/{id}/match - Submit the session input.
///
/// The exchange runs in its own task so it completes, and the session leaves
/// `loading`, even if the client goes away mid-request.
async fn submit_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<SessionMatchResponse>)> {
    let (pending, matcher, timeout) = {
        let mut sessions = state.sessions.lock().await;
        let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        entry.touch();
        match entry.session.begin_match() {
            Ok(pending) => (pending, entry.session.matcher(), entry.session.timeout()),
            Err(e) => return Ok(session_match_response(id, entry, Err(e))),
        }
    };

    let sessions = Arc::clone(&state.sessions);
    let exchange = tokio::spawn(async move {
        let outcome = find_with_timeout(matcher.as_ref(), pending.color(), timeout).await;

        let mut sessions = sessions.lock().await;
        let Some(entry) = sessions.get_mut(&id) else {
            debug!(%id, "session deleted while its match was pending");
            return None;
        };
        entry.touch();
        let result = entry.session.finish_match(pending, outcome);
        Some(session_match_response(id, entry, result))
    });

    match exchange.await {
        Ok(Some(response)) => Ok(response),
        Ok(None) => Err(session_not_found(id)),
        Err(e) => {
            error!(%id, error = %e, "match task failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Match task failed")),
            ))
        }
    }
}

fn session_match_response(
    id: Uuid,
    entry: &WebSession,
    result: crate::error::Result<ColorMatch>,
) -> (StatusCode, Json<SessionMatchResponse>) {
    let (status, result, error) = match result {
        Ok(found) => (StatusCode::OK, Some(found), None),
        Err(e) => (status_for(&e), None, Some(e.to_string())),
    };
    (
        status,
        Json(SessionMatchResponse {
            state: SessionResponse::new(id, &entry.session),
            result,
            error,
            notifications: entry.notifications.drain(),
        }),
    )
}

/// DELETE /api/sessions/{id} - Drop a session.
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .sessions
        .lock()
        .await
        .remove(&id)
        .ok_or_else(|| session_not_found(id))?;
    info!(%id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The server is meant to run locally next to its frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Stateless hex helpers
        .route("/api/hex/validate", get(validate_hex))
        .route("/api/hex/normalize", get(normalize_hex))
        .route("/api/match", post(find_match))
        // Sessions
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_session).delete(delete_session))
        .route("/api/sessions/{id}/input", put(update_input))
        .route("/api/sessions/{id}/match", post(submit_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the matcher configuration is invalid or the server
/// fails to bind.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
