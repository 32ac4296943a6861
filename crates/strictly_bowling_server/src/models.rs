//! Request and response bodies for the REST API.

use crate::session::{GameSession, SessionId};
use serde::{Deserialize, Serialize};
use strictly_bowling::{Frame, FrameScore, ScoreCalculator};

/// Body of `POST /games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Display name echoed back in responses.
    #[serde(default)]
    pub player_name: String,
}

/// Response to `POST /games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    /// ID used in later requests.
    pub game_id: SessionId,
    /// Display name as stored.
    pub player_name: String,
}

/// Body of `POST /games/{game_id}/rolls`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RollRequest {
    /// Pins knocked down. Range-checked by the game, so any integer is accepted here.
    pub pins: i64,
}

/// One resolved frame score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDto {
    /// Frame number (1-10).
    pub frame_number: u8,
    /// Points for this frame.
    pub frame_score: u16,
    /// Running total through this frame.
    pub cumulative_score: u16,
}

impl From<&FrameScore> for ScoreDto {
    fn from(score: &FrameScore) -> Self {
        Self {
            frame_number: *score.frame_number(),
            frame_score: *score.score(),
            cumulative_score: *score.cumulative_score(),
        }
    }
}

/// One frame's rolls and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    /// Frame number (1-10).
    pub frame_number: u8,
    /// First roll, if thrown.
    pub first_roll: Option<u8>,
    /// Second roll, if thrown.
    pub second_roll: Option<u8>,
    /// Bonus roll, if thrown.
    pub third_roll: Option<u8>,
    /// All ten pins on the first roll.
    pub is_strike: bool,
    /// All ten pins over two rolls.
    pub is_spare: bool,
    /// No more rolls accepted.
    pub is_complete: bool,
}

impl From<&Frame> for FrameDto {
    fn from(frame: &Frame) -> Self {
        Self {
            frame_number: frame.number(),
            first_roll: frame.first_roll(),
            second_roll: frame.second_roll(),
            third_roll: frame.third_roll(),
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
            is_complete: frame.is_complete(),
        }
    }
}

/// Full view of a game returned by reads and rolls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    /// Session ID.
    pub game_id: SessionId,
    /// Display name.
    pub player_name: String,
    /// All ten frames are complete.
    pub is_complete: bool,
    /// Frame in play, or 10 once complete.
    pub current_frame: u8,
    /// Running total of resolved frames.
    pub total_score: u16,
    /// Scores of resolvable frames only.
    pub scores: Vec<ScoreDto>,
    /// All ten frames.
    pub frames: Vec<FrameDto>,
}

impl From<&GameSession> for GameStateResponse {
    fn from(session: &GameSession) -> Self {
        let game = &session.game;
        let scores = game.scores();
        Self {
            game_id: session.id.clone(),
            player_name: session.player_name.clone(),
            is_complete: game.is_complete(),
            current_frame: game.current_frame().number(),
            total_score: ScoreCalculator::total_score(&scores),
            scores: scores.iter().map(ScoreDto::from).collect(),
            frames: game.frames().iter().map(FrameDto::from).collect(),
        }
    }
}

/// Response to `GET /games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListResponse {
    /// IDs of all active games.
    pub game_ids: Vec<SessionId>,
}
