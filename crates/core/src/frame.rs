//! Frame module - rolls recorded for one frame
//!
//! A frame holds up to two balls, or up to three in the tenth frame where a
//! strike or spare earns fill balls. Rolls are stored inline so recording a
//! roll never allocates.
//!
//! The rack model is shared by every frame: a roll can knock down at most the
//! pins still standing, and the rack is reset to ten whenever it is cleared.
//! Only the tenth frame lives long enough to see a reset.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::InvalidRoll;
use crate::types::{FrameState, Mark, MAX_FRAME_ROLLS, PIN_COUNT};

/// Score-sheet symbol for a ball that knocks down no pins
const GUTTER_SYMBOL: char = '-';

/// Rolls and lifecycle state of a single frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    rolls: ArrayVec<u8, MAX_FRAME_ROLLS>,
    state: FrameState,
    /// Tenth frame: strikes and spares wait for fill balls instead of closing.
    last: bool,
}

impl Frame {
    /// Create an empty frame for frames one to nine
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tenth frame
    pub fn last() -> Self {
        Self {
            last: true,
            ..Self::default()
        }
    }

    pub fn is_last(&self) -> bool {
        self.last
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// All rolls recorded in this frame, fill balls included
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// The rolls that make up the frame itself: the strike ball alone, or the
    /// first two balls.
    pub fn own_rolls(&self) -> &[u8] {
        let len = if self.is_strike() {
            1
        } else {
            self.rolls.len().min(2)
        };
        &self.rolls[..len]
    }

    /// Fill balls rolled after a tenth-frame strike or spare
    pub fn fill_balls(&self) -> &[u8] {
        &self.rolls[self.own_rolls().len()..]
    }

    /// Total pins knocked down in this frame
    pub fn pins(&self) -> u32 {
        self.rolls.iter().map(|&p| u32::from(p)).sum()
    }

    /// How the frame was finished, or `None` while its own balls are incomplete
    pub fn mark(&self) -> Option<Mark> {
        match self.rolls.as_slice() {
            [first, ..] if *first == PIN_COUNT => Some(Mark::Strike),
            [first, second, ..] if first + second == PIN_COUNT => Some(Mark::Spare),
            [_, _, ..] => Some(Mark::Open),
            _ => None,
        }
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    pub fn is_spare(&self) -> bool {
        self.mark() == Some(Mark::Spare)
    }

    /// True once the frame accepts no more rolls
    pub fn is_closed(&self) -> bool {
        self.state.is_done()
    }

    /// Pins available to the next ball (0 once the frame is closed)
    pub fn standing_pins(&self) -> u8 {
        if self.is_closed() {
            return 0;
        }
        let mut standing = PIN_COUNT;
        for &pins in &self.rolls {
            standing = standing.saturating_sub(pins);
            if standing == 0 {
                standing = PIN_COUNT;
            }
        }
        standing
    }

    /// Record a ball and advance the frame state.
    ///
    /// Fails without touching the frame when the frame is closed or `pins`
    /// exceeds the pins standing.
    pub fn push(&mut self, pins: u8) -> Result<(), InvalidRoll> {
        let standing = self.standing_pins();
        if self.is_closed() || pins > standing {
            return Err(InvalidRoll { pins, standing });
        }
        self.rolls
            .try_push(pins)
            .map_err(|_| InvalidRoll { pins, standing: 0 })?;

        self.state = match (self.state, self.last) {
            (FrameState::Empty, false) if pins == PIN_COUNT => FrameState::Closed,
            (FrameState::Empty, true) if pins == PIN_COUNT => {
                FrameState::BonusPending { remaining: 2 }
            }
            (FrameState::Empty, _) => FrameState::OneRoll,
            (FrameState::OneRoll, true) if self.is_spare() => {
                FrameState::BonusPending { remaining: 1 }
            }
            (FrameState::OneRoll, _) => FrameState::Closed,
            (FrameState::BonusPending { remaining }, _) if remaining > 1 => {
                FrameState::BonusPending {
                    remaining: remaining - 1,
                }
            }
            (FrameState::BonusPending { .. }, _) => FrameState::BonusComplete,
            (done, _) => done,
        };
        Ok(())
    }
}

/// Score-sheet notation: `X` strike, `/` spare, `-` gutter ball, digits otherwise.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut standing = PIN_COUNT;
        let mut fresh_rack = true;
        for &pins in &self.rolls {
            let symbol = if fresh_rack && pins == PIN_COUNT {
                Mark::Strike.symbol()
            } else if !fresh_rack && pins == standing {
                Mark::Spare.symbol()
            } else if pins == 0 {
                GUTTER_SYMBOL
            } else {
                char::from(b'0' + pins)
            };
            write!(f, "{symbol}")?;

            standing = standing.saturating_sub(pins);
            fresh_rack = standing == 0;
            if fresh_rack {
                standing = PIN_COUNT;
            }
        }
        Ok(())
    }
}
