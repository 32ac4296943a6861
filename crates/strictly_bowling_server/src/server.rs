//! REST API over the session manager.

use crate::models::{
    CreateGameRequest, CreateGameResponse, GameListResponse, GameStateResponse, RollRequest,
};
use crate::session::{SessionError, SessionManager};
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tracing::{info, instrument, warn};

/// Base path for all game routes.
pub const API_PREFIX: &str = "/api/bowling";

/// Error returned by handlers, rendered as a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    kind: &'static str,
}

impl ApiError {
    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        // Both roll failure kinds are client errors.
        let status = match err {
            SessionError::NotFound { .. } => StatusCode::NOT_FOUND,
            SessionError::EmptyPlayerName | SessionError::Roll(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
            kind: err.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, kind = self.kind, message = %self.message, "Request failed");
        (
            self.status,
            Json(serde_json::json!({
                "status": self.status.as_u16(),
                "message": self.message,
                "kind": self.kind,
            })),
        )
            .into_response()
    }
}

/// Builds the application router over a shared session manager.
pub fn router(sessions: SessionManager) -> Router {
    let games = Router::new()
        .route("/games", post(create_game).get(list_games))
        .route("/games/{game_id}", get(get_game_state).delete(delete_game))
        .route("/games/{game_id}/rolls", post(record_roll));

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, games)
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(sessions)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

#[instrument(skip(sessions))]
async fn create_game(
    State(sessions): State<SessionManager>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<CreateGameResponse>), ApiError> {
    let session = sessions.create_session(&request.player_name)?;
    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse {
            game_id: session.id,
            player_name: session.player_name,
        }),
    ))
}

#[instrument(skip(sessions))]
async fn list_games(State(sessions): State<SessionManager>) -> Json<GameListResponse> {
    Json(GameListResponse {
        game_ids: sessions.list_sessions(),
    })
}

#[instrument(skip(sessions))]
async fn get_game_state(
    State(sessions): State<SessionManager>,
    Path(game_id): Path<String>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let session = sessions
        .get_session(&game_id)
        .ok_or(SessionError::NotFound { id: game_id })?;
    Ok(Json(GameStateResponse::from(&session)))
}

#[instrument(skip(sessions))]
async fn record_roll(
    State(sessions): State<SessionManager>,
    Path(game_id): Path<String>,
    Json(request): Json<RollRequest>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let session = sessions.roll(&game_id, request.pins)?;
    Ok(Json(GameStateResponse::from(&session)))
}

#[instrument(skip(sessions))]
async fn delete_game(
    State(sessions): State<SessionManager>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    sessions.remove_session(&game_id)?;
    Ok(StatusCode::NO_CONTENT)
}
