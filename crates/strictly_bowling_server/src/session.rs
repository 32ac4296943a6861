//! Game session management for the HTTP server.

use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_bowling::{Game, RollError, RollErrorKind, pin_count};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A bowling game owned by one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// Display name supplied when the game was created.
    pub player_name: String,
    /// The game state.
    pub game: Game,
}

impl GameSession {
    /// Creates a new game session with an empty game.
    #[instrument]
    pub fn new(id: SessionId, player_name: String) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            player_name,
            game: Game::new(),
        }
    }
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Game {id} not found")]
    NotFound {
        /// The unknown session ID.
        id: SessionId,
    },

    /// Player name was empty or whitespace.
    #[display("Player name is required")]
    EmptyPlayerName,

    /// The game rejected the roll.
    #[display("{_0}")]
    Roll(RollError),
}

impl SessionError {
    /// Short machine-readable classification used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::NotFound { .. } => "not_found",
            SessionError::EmptyPlayerName => RollErrorKind::InvalidArgument.into(),
            SessionError::Roll(err) => err.kind().into(),
        }
    }
}

impl From<RollError> for SessionError {
    fn from(err: RollError) -> Self {
        SessionError::Roll(err)
    }
}

/// Manages all game sessions.
///
/// Clones share the same registry. Every mutation happens under one lock,
/// so rolls against a session are applied one at a time.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new, empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        // A poisoned lock still guards whole games; rolls never half-apply.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a session with a fresh game and returns it.
    #[instrument(skip(self))]
    pub fn create_session(&self, player_name: &str) -> Result<GameSession, SessionError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            warn!("Rejected session without player name");
            return Err(SessionError::EmptyPlayerName);
        }

        let id = uuid::Uuid::new_v4().to_string();
        let session = GameSession::new(id.clone(), player_name.to_string());
        self.lock().insert(id.clone(), session.clone());

        info!(session_id = %id, "Created new session");
        Ok(session)
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let session = self.lock().get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Rolls `pins` in a session's game and returns the updated snapshot.
    ///
    /// The pin count is range-checked before the game sees it. A rejected
    /// roll leaves the session unchanged.
    #[instrument(skip(self))]
    pub fn roll(&self, id: &str, pins: i64) -> Result<GameSession, SessionError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(id).ok_or_else(|| {
            warn!(session_id = id, "Roll for unknown session");
            SessionError::NotFound { id: id.to_string() }
        })?;

        let result = pin_count(pins).and_then(|pins| session.game.roll(pins));
        if let Err(err) = result {
            warn!(session_id = id, pins, error = %err, kind = %err.kind(), "Roll rejected");
            return Err(err.into());
        }

        info!(
            session_id = id,
            pins,
            frame = session.game.current_frame().number(),
            complete = session.game.is_complete(),
            "Roll recorded"
        );
        Ok(session.clone())
    }

    /// Removes a session.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<(), SessionError> {
        match self.lock().remove(id) {
            Some(_) => {
                info!(session_id = id, "Removed session");
                Ok(())
            }
            None => {
                debug!(session_id = id, "Session not found");
                Err(SessionError::NotFound { id: id.to_string() })
            }
        }
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.lock().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}
