//! A single bowling frame and its roll legality rules.

use crate::error::{FrameNumberError, RecordError, RollError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Pins standing in a full rack.
pub const PIN_COUNT: u8 = 10;

/// Number of the final frame, the only one allowed a bonus roll.
pub const LAST_FRAME: u8 = FRAME_COUNT as u8;

/// Which roll of a frame is being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RollSlot {
    /// Opening roll against a full rack.
    First,
    /// Second roll of the frame.
    Second,
    /// Bonus roll, tenth frame only.
    Third,
}

/// Converts a caller-supplied pin count into a rack-sized value.
///
/// Rejects anything outside `0..=10` as an invalid first roll, which is the
/// widest range any roll can take.
pub fn pin_count(raw: i64) -> Result<u8, RollError> {
    u8::try_from(raw)
        .ok()
        .filter(|pins| *pins <= PIN_COUNT)
        .ok_or(RollError::InvalidPins {
            slot: RollSlot::First,
            pins: raw,
            max: PIN_COUNT,
        })
}

/// One of the ten frames of a game.
///
/// Rolls are stored in order. Completion, strike and spare status are all
/// derived from the stored rolls. Deserialized frames are rebuilt roll by
/// roll, so a stored frame that could not have been bowled is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FrameRecord")]
pub struct Frame {
    pub(crate) number: u8,
    pub(crate) first_roll: Option<u8>,
    pub(crate) second_roll: Option<u8>,
    pub(crate) third_roll: Option<u8>,
}

impl Frame {
    /// Creates an empty frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameNumberError`] if `number` is not in `1..=10`.
    pub fn new(number: u8) -> Result<Self, FrameNumberError> {
        if (1..=LAST_FRAME).contains(&number) {
            Ok(Self::numbered(number))
        } else {
            Err(FrameNumberError { number })
        }
    }

    pub(crate) fn numbered(number: u8) -> Self {
        Self {
            number,
            first_roll: None,
            second_roll: None,
            third_roll: None,
        }
    }

    /// Frame number (1-10).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Pins knocked down by the first roll, if thrown.
    pub fn first_roll(&self) -> Option<u8> {
        self.first_roll
    }

    /// Pins knocked down by the second roll, if thrown.
    pub fn second_roll(&self) -> Option<u8> {
        self.second_roll
    }

    /// Pins knocked down by the bonus roll of the tenth frame, if thrown.
    pub fn third_roll(&self) -> Option<u8> {
        self.third_roll
    }

    /// True for the tenth frame.
    pub fn is_last(&self) -> bool {
        self.number == LAST_FRAME
    }

    /// All ten pins on the first roll.
    pub fn is_strike(&self) -> bool {
        self.first_roll == Some(PIN_COUNT)
    }

    /// All ten pins across the first two rolls, without a strike.
    pub fn is_spare(&self) -> bool {
        match (self.first_roll, self.second_roll) {
            (Some(first), Some(second)) => first != PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// True once the frame accepts no more rolls.
    pub fn is_complete(&self) -> bool {
        match (self.first_roll, self.second_roll, self.third_roll) {
            (None, _, _) => false,
            (Some(first), None, _) => !self.is_last() && first == PIN_COUNT,
            (Some(first), Some(second), None) => !self.is_last() || first + second < PIN_COUNT,
            (Some(_), Some(_), Some(_)) => true,
        }
    }

    /// Recorded rolls in the order they were thrown.
    pub fn rolls(&self) -> impl Iterator<Item = u8> + '_ {
        [self.first_roll, self.second_roll, self.third_roll]
            .into_iter()
            .flatten()
    }

    /// Sum of the recorded rolls.
    pub fn pin_total(&self) -> u16 {
        self.rolls().map(u16::from).sum()
    }

    /// The slot the next roll would fill, or `None` when complete.
    pub fn next_slot(&self) -> Option<RollSlot> {
        if self.is_complete() {
            return None;
        }
        match (self.first_roll, self.second_roll) {
            (None, _) => Some(RollSlot::First),
            (Some(_), None) => Some(RollSlot::Second),
            (Some(_), Some(_)) => Some(RollSlot::Third),
        }
    }

    /// Most pins the next roll may knock down, or `None` when complete.
    ///
    /// The tenth frame resets the rack after a strike or spare, so a strike
    /// followed by a non-strike leaves only `10 - second` for the bonus roll.
    pub fn max_next_roll(&self) -> Option<u8> {
        let slot = self.next_slot()?;
        let max = match (slot, self.first_roll, self.second_roll) {
            (RollSlot::First, _, _) => PIN_COUNT,
            (RollSlot::Second, Some(first), _) if self.is_last() && first == PIN_COUNT => {
                PIN_COUNT
            }
            (RollSlot::Second, Some(first), _) => PIN_COUNT - first,
            (RollSlot::Third, Some(first), Some(second))
                if (first == PIN_COUNT && second == PIN_COUNT) || first + second == PIN_COUNT =>
            {
                PIN_COUNT
            }
            (RollSlot::Third, _, Some(second)) => PIN_COUNT - second,
            // next_slot only yields Second/Third once the earlier rolls exist
            _ => PIN_COUNT,
        };
        Some(max)
    }

    /// Records a roll.
    ///
    /// The roll is validated in full before anything is written, so a
    /// rejected roll leaves the frame untouched.
    ///
    /// # Errors
    ///
    /// - [`RollError::FrameComplete`] if the frame accepts no more rolls.
    /// - [`RollError::InvalidPins`] if `pins` exceeds what is standing.
    #[instrument(skip(self), fields(frame = self.number))]
    pub fn add_roll(&mut self, pins: u8) -> Result<(), RollError> {
        let (Some(slot), Some(max)) = (self.next_slot(), self.max_next_roll()) else {
            warn!("Roll attempted on complete frame");
            return Err(RollError::FrameComplete { frame: self.number });
        };

        if pins > max {
            warn!(%slot, max, "Too many pins for roll");
            return Err(RollError::InvalidPins {
                slot,
                pins: i64::from(pins),
                max,
            });
        }

        match slot {
            RollSlot::First => self.first_roll = Some(pins),
            RollSlot::Second => self.second_roll = Some(pins),
            RollSlot::Third => self.third_roll = Some(pins),
        }

        debug!(
            %slot,
            complete = self.is_complete(),
            strike = self.is_strike(),
            spare = self.is_spare(),
            "Roll recorded"
        );
        Ok(())
    }
}

/// Stored shape of a [`Frame`], checked before it becomes one.
#[derive(Deserialize)]
struct FrameRecord {
    number: u8,
    first_roll: Option<u8>,
    second_roll: Option<u8>,
    third_roll: Option<u8>,
}

impl TryFrom<FrameRecord> for Frame {
    type Error = RecordError;

    fn try_from(record: FrameRecord) -> Result<Self, Self::Error> {
        let mut frame = Frame::new(record.number)?;
        for pins in [record.first_roll, record.second_roll, record.third_roll]
            .into_iter()
            .flatten()
        {
            frame.add_roll(pins)?;
        }

        let slots = (record.first_roll, record.second_roll, record.third_roll);
        if (frame.first_roll, frame.second_roll, frame.third_roll) != slots {
            warn!(frame = record.number, "Stored rolls out of order");
            return Err(RecordError::FrameMismatch {
                frame: record.number,
            });
        }
        Ok(frame)
    }
}
