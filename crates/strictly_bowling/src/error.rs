//! Error types for roll submission.

use crate::frame::RollSlot;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Broad classification of a rejected roll.
///
/// Callers use this to decide whether retrying with a different pin count
/// can succeed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RollErrorKind {
    /// The pin count is out of range for the roll being attempted.
    InvalidArgument,
    /// The frame or game no longer accepts rolls.
    InvalidState,
}

/// Error returned when a roll is rejected.
///
/// A rejected roll is never recorded: the frame and game are left exactly
/// as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RollError {
    /// Pin count outside what the rack allows for this roll.
    #[display("Invalid {slot} roll of {pins}. Must be between 0-{max}")]
    InvalidPins {
        /// Which roll of the frame was attempted.
        slot: RollSlot,
        /// The rejected pin count.
        pins: i64,
        /// Largest pin count that would have been accepted.
        max: u8,
    },

    /// The frame already holds all of its rolls.
    #[display("Frame {frame} is complete")]
    FrameComplete {
        /// Frame number (1-10).
        frame: u8,
    },

    /// All ten frames are complete.
    #[display("Game is complete")]
    GameComplete,
}

impl RollError {
    /// Returns whether this is an invalid-argument or invalid-state failure.
    pub fn kind(&self) -> RollErrorKind {
        match self {
            RollError::InvalidPins { .. } => RollErrorKind::InvalidArgument,
            RollError::FrameComplete { .. } | RollError::GameComplete => {
                RollErrorKind::InvalidState
            }
        }
    }
}

/// Frame number outside 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Frame number {number} is outside 1-10")]
pub struct FrameNumberError {
    /// The rejected frame number.
    pub number: u8,
}

/// A stored frame or game that no sequence of legal rolls produces.
///
/// Returned when deserializing a [`Frame`](crate::Frame) or
/// [`Game`](crate::Game), which are rebuilt roll by roll before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RecordError {
    /// The stored frame number is outside 1-10.
    #[display("{_0}")]
    FrameNumber(FrameNumberError),

    /// A stored roll is rejected when replayed.
    #[display("{_0}")]
    Roll(RollError),

    /// Replaying the stored rolls yields a different frame, for example
    /// when a later slot is filled before an earlier one.
    #[display("Frame {frame} does not match its recorded rolls")]
    FrameMismatch {
        /// Frame number (1-10).
        frame: u8,
    },

    /// Replaying the stored rolls yields different frames or a different
    /// cursor.
    #[display("Game does not match its recorded rolls")]
    GameMismatch,
}

impl From<FrameNumberError> for RecordError {
    fn from(err: FrameNumberError) -> Self {
        RecordError::FrameNumber(err)
    }
}

impl From<RollError> for RecordError {
    fn from(err: RollError) -> Self {
        RecordError::Roll(err)
    }
}
