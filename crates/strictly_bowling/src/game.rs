//! A ten-frame bowling game.

use crate::error::{RecordError, RollError};
use crate::frame::{FRAME_COUNT, Frame};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::scoring::{FrameScore, ScoreCalculator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single player's game: ten frames and a cursor at the frame in play.
///
/// A deserialized game is replayed from its stored rolls and must match
/// them exactly, cursor included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) frames: [Frame; FRAME_COUNT],
    pub(crate) current_frame_index: usize,
}

impl Game {
    /// Creates a game with ten empty frames, positioned at frame 1.
    #[instrument]
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|index| Frame::numbered(index as u8 + 1)),
            current_frame_index: 0,
        }
    }

    /// Builds a game by rolling each pin count in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RollError`] encountered; later rolls are not tried.
    #[instrument(skip(rolls), fields(roll_count = rolls.len()))]
    pub fn replay(rolls: &[u8]) -> Result<Self, RollError> {
        let mut game = Self::new();
        for &pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    /// Records a roll in the current frame and advances past it once complete.
    ///
    /// # Errors
    ///
    /// - [`RollError::GameComplete`] once all ten frames are complete.
    /// - Any error from [`Frame::add_roll`], unchanged. The game is not
    ///   modified when a roll is rejected.
    #[instrument(skip(self), fields(frame = self.current_frame().number()))]
    pub fn roll(&mut self, pins: u8) -> Result<(), RollError> {
        let Some(frame) = self.frames.get_mut(self.current_frame_index) else {
            warn!("Roll attempted on complete game");
            return Err(RollError::GameComplete);
        };

        frame.add_roll(pins)?;

        if frame.is_complete() {
            self.current_frame_index += 1;
            debug!(next_index = self.current_frame_index, "Frame complete, advancing");
            if self.is_complete() {
                info!(total = self.total_score(), "Game complete");
            }
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after roll"
        );
        Ok(())
    }

    /// True once all ten frames are complete.
    pub fn is_complete(&self) -> bool {
        self.current_frame_index >= FRAME_COUNT
    }

    /// Index (0-based) of the frame in play; 10 once the game is complete.
    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    /// The frame in play, or the tenth frame once the game is complete.
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame_index.min(FRAME_COUNT - 1)]
    }

    /// All ten frames in order.
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Scores for every frame that can be resolved with the rolls so far.
    pub fn scores(&self) -> Vec<FrameScore> {
        ScoreCalculator::calculate_scores(&self.frames)
    }

    /// Running total of the resolvable frames.
    pub fn total_score(&self) -> u16 {
        ScoreCalculator::total_score(&self.scores())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Stored shape of a [`Game`], checked before it becomes one.
#[derive(Deserialize)]
struct GameRecord {
    frames: [Frame; FRAME_COUNT],
    current_frame_index: usize,
}

impl TryFrom<GameRecord> for Game {
    type Error = RecordError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut game = Game::new();
        for pins in record.frames.iter().flat_map(|frame| frame.rolls()) {
            game.roll(pins)?;
        }

        if game.frames != record.frames || game.current_frame_index != record.current_frame_index {
            warn!(
                stored_index = record.current_frame_index,
                replayed_index = game.current_frame_index,
                "Stored game does not match its rolls"
            );
            return Err(RecordError::GameMismatch);
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollErrorKind;

    #[test]
    fn test_new_game_has_ten_frames() {
        let game = Game::new();
        assert_eq!(game.frames().len(), 10);
        for (index, frame) in game.frames().iter().enumerate() {
            assert_eq!(frame.number() as usize, index + 1);
            assert_eq!(frame.rolls().count(), 0);
        }
        assert_eq!(game.current_frame().number(), 1);
        assert!(!game.is_complete());
    }

    #[test]
    fn test_roll_stays_in_frame_until_complete() {
        let mut game = Game::new();
        game.roll(5).expect("Legal roll");
        assert_eq!(game.current_frame().number(), 1);
        assert_eq!(game.current_frame().first_roll(), Some(5));

        game.roll(3).expect("Legal roll");
        assert_eq!(game.current_frame().number(), 2);
    }

    #[test]
    fn test_strike_advances_immediately() {
        let mut game = Game::new();
        game.roll(10).expect("Strike");
        assert_eq!(game.current_frame_index(), 1);
        assert_eq!(game.current_frame().number(), 2);
    }

    #[test]
    fn test_rejected_roll_leaves_game_unchanged() {
        let mut game = Game::new();
        game.roll(7).expect("Legal roll");
        let before = game.clone();

        let err = game.roll(4).expect_err("Overfills frame");
        assert_eq!(err.kind(), RollErrorKind::InvalidArgument);
        assert_eq!(game, before);

        game.roll(3).expect("Corrected roll");
        assert_eq!(game.current_frame().number(), 2);
    }

    #[test]
    fn test_current_frame_after_completion_is_tenth() {
        let game = Game::replay(&[0; 20]).expect("Legal game");
        assert!(game.is_complete());
        assert_eq!(game.current_frame_index(), 10);
        assert_eq!(game.current_frame().number(), 10);
    }

    #[test]
    fn test_replay_stops_at_first_illegal_roll() {
        let err = Game::replay(&[3, 4, 9, 9]).expect_err("Second nine overfills");
        assert!(matches!(err, RollError::InvalidPins { pins: 9, max: 1, .. }));
    }

    #[test]
    fn test_total_score() {
        assert_eq!(Game::new().total_score(), 0);
        let game = Game::replay(&[10, 3, 4]).expect("Legal rolls");
        assert_eq!(game.total_score(), 24);
    }
}
