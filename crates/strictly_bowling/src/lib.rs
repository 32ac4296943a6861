//! Strictly Bowling - ten-pin bowling scoring.
//!
//! This crate scores a single bowling game. It has no I/O: callers feed
//! rolls into a [`Game`] and read back frames and scores.
//!
//! # Architecture
//!
//! - **Frame**: up to three rolls, roll legality, strike/spare/complete status
//! - **Game**: ten frames and a cursor at the frame in play
//! - **ScoreCalculator**: pure scoring with deferred strike/spare bonuses
//!
//! # Example
//!
//! ```
//! use strictly_bowling::Game;
//!
//! # fn example() -> Result<(), strictly_bowling::RollError> {
//! let mut game = Game::new();
//! game.roll(10)?;
//! game.roll(3)?;
//! game.roll(4)?;
//!
//! let scores = game.scores();
//! assert_eq!(*scores[0].score(), 17);
//! assert_eq!(*scores[1].cumulative_score(), 24);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod frame;
mod game;
mod invariants;
mod scoring;

pub use error::{FrameNumberError, RecordError, RollError, RollErrorKind};
pub use frame::{FRAME_COUNT, Frame, LAST_FRAME, PIN_COUNT, RollSlot, pin_count};
pub use game::Game;
pub use invariants::{
    CursorAtFirstOpenFrame, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    PinsWithinRack, RollsInOrder,
};
pub use scoring::{FrameScore, ScoreCalculator};
