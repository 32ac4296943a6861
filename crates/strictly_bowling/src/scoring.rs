//! Frame-by-frame scoring with deferred strike and spare bonuses.

use crate::frame::{Frame, PIN_COUNT};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Score of one resolved frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FrameScore {
    /// Frame number (1-10).
    frame_number: u8,
    /// Points for this frame, bonus included.
    score: u16,
    /// Running total through this frame.
    cumulative_score: u16,
}

impl FrameScore {
    /// Creates a frame score.
    pub fn new(frame_number: u8, score: u16, cumulative_score: u16) -> Self {
        Self {
            frame_number,
            score,
            cumulative_score,
        }
    }
}

/// Stateless scorer over a sequence of frames.
///
/// Every call re-derives the scores from the recorded rolls. A strike or
/// spare whose bonus rolls have not been thrown yet is left out of the
/// result entirely, and scanning carries on with the frames after it, so a
/// partially played game can report a later open frame while an earlier
/// strike is still pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Scores every frame that can be resolved, in frame order.
    #[instrument(skip(frames), fields(frame_count = frames.len()))]
    pub fn calculate_scores(frames: &[Frame]) -> Vec<FrameScore> {
        let mut cumulative = 0;
        frames
            .iter()
            .enumerate()
            .filter_map(|(index, frame)| {
                let score = Self::frame_score(frame, &frames[index + 1..])?;
                cumulative += score;
                Some(FrameScore::new(frame.number(), score, cumulative))
            })
            .collect()
    }

    /// Running total at the last scored frame, or 0 when none are scored.
    pub fn total_score(scores: &[FrameScore]) -> u16 {
        scores
            .last()
            .map(|score| score.cumulative_score)
            .unwrap_or(0)
    }

    /// Number of later rolls a frame needs before it can be scored.
    pub fn bonus_rolls_needed(frame: &Frame) -> usize {
        if frame.is_last() {
            0
        } else if frame.is_strike() {
            2
        } else if frame.is_spare() {
            1
        } else {
            0
        }
    }

    /// Score for `frame`, or `None` while it is incomplete or waiting on
    /// bonus rolls from `later` frames.
    fn frame_score(frame: &Frame, later: &[Frame]) -> Option<u16> {
        if !frame.is_complete() {
            return None;
        }

        // The tenth frame carries its own bonus rolls.
        if frame.is_last() {
            return Some(frame.pin_total());
        }

        let needed = Self::bonus_rolls_needed(frame);
        let bonus: Vec<u8> = later
            .iter()
            .flat_map(|next| next.rolls())
            .take(needed)
            .collect();
        if bonus.len() < needed {
            trace!(frame = frame.number(), needed, have = bonus.len(), "Awaiting bonus rolls");
            return None;
        }

        let base = if frame.is_strike() || frame.is_spare() {
            u16::from(PIN_COUNT)
        } else {
            frame.pin_total()
        };
        Some(base + bonus.into_iter().map(u16::from).sum::<u16>())
    }
}
