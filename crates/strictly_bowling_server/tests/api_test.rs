//! Tests for the REST API, driven through the router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use strictly_bowling_server::models::{CreateGameResponse, GameStateResponse};
use strictly_bowling_server::{SessionManager, router};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Valid request");

    let response = app.clone().oneshot(request).await.expect("Infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Readable body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, value)
}

async fn create_game(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/bowling/games",
        Some(json!({ "playerName": "Ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: CreateGameResponse = serde_json::from_value(body).expect("Create response");
    assert_eq!(created.player_name, "Ada");
    created.game_id
}

async fn roll(app: &Router, game_id: &str, pins: i64) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/bowling/games/{game_id}/rolls"),
        Some(json!({ "pins": pins })),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let app = router(SessionManager::new());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_new_game_state() {
    let app = router(SessionManager::new());
    let game_id = create_game(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/bowling/games/{game_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isComplete"], false);
    assert_eq!(body["currentFrame"], 1);
    assert_eq!(body["scores"], json!([]));
    assert_eq!(body["frames"].as_array().map(Vec::len), Some(10));
    assert!(body["frames"][0]["firstRoll"].is_null());
}

#[tokio::test]
async fn test_blank_player_name_is_bad_request() {
    let app = router(SessionManager::new());
    let (status, body) = send(
        &app,
        "POST",
        "/api/bowling/games",
        Some(json!({ "playerName": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Player name is required");
}

#[tokio::test]
async fn test_rolls_produce_scores() {
    let app = router(SessionManager::new());
    let game_id = create_game(&app).await;

    for pins in [10, 3] {
        let (status, _) = roll(&app, &game_id, pins).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = roll(&app, &game_id, 4).await;
    assert_eq!(status, StatusCode::OK);

    let state: GameStateResponse = serde_json::from_value(body).expect("State response");
    assert_eq!(state.current_frame, 3);
    assert_eq!(state.total_score, 24);
    assert_eq!(state.scores.len(), 2);
    assert_eq!(state.scores[0].frame_score, 17);
    assert_eq!(state.scores[1].cumulative_score, 24);
    assert!(state.frames[0].is_strike);
    assert_eq!(state.frames[1].second_roll, Some(4));
}

#[tokio::test]
async fn test_illegal_roll_is_bad_request() {
    let app = router(SessionManager::new());
    let game_id = create_game(&app).await;
    roll(&app, &game_id, 7).await;

    let (status, body) = roll(&app, &game_id, 5).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["kind"], "invalid_argument");
    assert_eq!(body["message"], "Invalid second roll of 5. Must be between 0-3");

    let (status, _) = roll(&app, &game_id, -2).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_roll_after_completion_is_bad_request() {
    let app = router(SessionManager::new());
    let game_id = create_game(&app).await;
    for _ in 0..12 {
        roll(&app, &game_id, 10).await;
    }

    let (status, body) = roll(&app, &game_id, 10).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_state");
    assert_eq!(body["message"], "Game is complete");

    let (_, body) = send(&app, "GET", &format!("/api/bowling/games/{game_id}"), None).await;
    assert_eq!(body["isComplete"], true);
    assert_eq!(body["currentFrame"], 10);
    assert_eq!(body["totalScore"], 300);
}

#[tokio::test]
async fn test_unknown_game_is_not_found() {
    let app = router(SessionManager::new());

    let (status, body) = send(&app, "GET", "/api/bowling/games/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    let (status, _) = roll(&app, "nope", 3).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/bowling/games/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_and_delete_games() {
    let app = router(SessionManager::new());
    let game_id = create_game(&app).await;

    let (status, body) = send(&app, "GET", "/api/bowling/games", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "gameIds": [game_id.clone()] }));

    let (status, body) = send(&app, "DELETE", &format!("/api/bowling/games/{game_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, body) = send(&app, "GET", "/api/bowling/games", None).await;
    assert_eq!(body, json!({ "gameIds": [] }));
}
