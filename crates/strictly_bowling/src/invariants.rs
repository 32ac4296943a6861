//! First-class invariants for a bowling game.
//!
//! Invariants are properties that must hold after every accepted roll.
//! They are checked in debug builds and can be tested independently.

use crate::frame::{FRAME_COUNT, Frame, PIN_COUNT};
use crate::game::Game;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Records a violation of `I` if it does not hold.
fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

/// Invariant: the cursor sits on the first incomplete frame.
///
/// Frames before it are complete, the frame under it is not, and nothing
/// has been rolled in the frames after it.
pub struct CursorAtFirstOpenFrame;

impl Invariant<Game> for CursorAtFirstOpenFrame {
    fn holds(game: &Game) -> bool {
        let cursor = game.current_frame_index();
        if cursor > FRAME_COUNT {
            return false;
        }
        let (played, rest) = game.frames().split_at(cursor);
        let Some((current, after)) = rest.split_first() else {
            return played.iter().all(Frame::is_complete);
        };
        played.iter().all(Frame::is_complete)
            && !current.is_complete()
            && after.iter().all(|frame| frame.rolls().next().is_none())
    }

    fn description() -> &'static str {
        "Cursor points at the first incomplete frame"
    }
}

/// Invariant: roll slots fill in order and stop where the frame ends.
///
/// Only the tenth frame has a third roll, and only after a strike or spare.
/// Nothing follows a strike in frames 1-9.
pub struct RollsInOrder;

impl Invariant<Game> for RollsInOrder {
    fn holds(game: &Game) -> bool {
        game.frames().iter().all(|frame| {
            let gap = (frame.second_roll.is_some() && frame.first_roll.is_none())
                || (frame.third_roll.is_some() && frame.second_roll.is_none());
            let after_strike = !frame.is_last() && frame.is_strike() && frame.second_roll.is_some();
            let earned_third = frame.is_last()
                && frame.first_roll.map(u16::from).unwrap_or(0)
                    + frame.second_roll.map(u16::from).unwrap_or(0)
                    >= u16::from(PIN_COUNT);
            !gap && !after_strike && (frame.third_roll.is_none() || earned_third)
        })
    }

    fn description() -> &'static str {
        "Rolls fill their slots in order and stop where the frame ends"
    }
}

/// Invariant: every frame could have been built one legal roll at a time.
///
/// Replays each frame's rolls into a fresh frame and requires every roll to
/// be accepted.
pub struct PinsWithinRack;

impl Invariant<Game> for PinsWithinRack {
    fn holds(game: &Game) -> bool {
        game.frames().iter().all(|frame| {
            let mut rebuilt = Frame::numbered(frame.number());
            frame.rolls().all(|pins| rebuilt.add_roll(pins).is_ok()) && rebuilt == *frame
        })
    }

    fn description() -> &'static str {
        "Every roll respects the pins left standing"
    }
}

/// All bowling game invariants as a composable set.
pub type GameInvariants = (CursorAtFirstOpenFrame, RollsInOrder, PinsWithinRack);
