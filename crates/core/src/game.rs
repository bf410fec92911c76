//! Game module - the complete state of one bowling game
//!
//! A [`Game`] owns its ten frames and a cursor to the frame taking balls.
//! Rolls are the only mutation; scoring and snapshots are pure reads.
//!
//! Once the tenth frame (and any fill balls) is closed the game is complete
//! and further rolls are silently dropped.

use tracing::{debug, trace};

use crate::error::InvalidRoll;
use crate::frame::Frame;
use crate::scoring::total_score;
use crate::types::{FRAME_COUNT, PIN_COUNT};

const LAST_FRAME: usize = FRAME_COUNT - 1;

/// One game of ten-pin bowling
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    /// Index of the frame taking balls (0-based, stays at the tenth frame).
    current: usize,
}

impl Game {
    /// Create an empty game with the cursor on the first frame
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| {
                if i == LAST_FRAME {
                    Frame::last()
                } else {
                    Frame::new()
                }
            }),
            current: 0,
        }
    }

    /// Replay a sequence of rolls into a new game.
    ///
    /// Stops at the first invalid roll. Rolls past the end of the game are
    /// ignored just as [`Game::roll`] ignores them.
    pub fn from_rolls<I>(rolls: I) -> Result<Self, InvalidRoll>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut game = Self::new();
        for pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    /// Record one ball.
    ///
    /// - `pins` above a full rack, or above the pins standing, is rejected and
    ///   the game is left unchanged.
    /// - After the game is complete the call does nothing.
    /// - A strike closes frames one to nine immediately; a second ball closes
    ///   them otherwise. The tenth frame stays open for its fill balls.
    pub fn roll(&mut self, pins: u8) -> Result<(), InvalidRoll> {
        if pins > PIN_COUNT {
            let err = InvalidRoll {
                pins,
                standing: self.standing_pins(),
            };
            debug!(%err, "roll rejected");
            return Err(err);
        }
        if self.is_complete() {
            debug!(pins, "roll ignored, game complete");
            return Ok(());
        }

        let frame = &mut self.frames[self.current];
        if let Err(err) = frame.push(pins) {
            debug!(%err, frame = self.current + 1, "roll rejected");
            return Err(err);
        }
        trace!(frame = self.current + 1, pins, "roll recorded");

        if frame.is_closed() {
            if self.current < LAST_FRAME {
                self.current += 1;
            } else {
                debug!(score = self.score(), "game complete");
            }
        }
        Ok(())
    }

    /// Total score across all ten frames.
    ///
    /// Callable at any time. Balls not yet rolled count as zero, so an
    /// unfinished game returns the score earned so far.
    pub fn score(&self) -> u32 {
        total_score(&self.frames)
    }

    /// True once the tenth frame and its fill balls are recorded
    pub fn is_complete(&self) -> bool {
        self.frames[LAST_FRAME].is_closed()
    }

    /// Index of the frame taking balls (0-based)
    pub fn frame_index(&self) -> usize {
        self.current
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Every recorded ball in playing order
    pub fn rolls(&self) -> impl Iterator<Item = u8> + '_ {
        self.frames
            .iter()
            .flat_map(|frame| frame.rolls().iter().copied())
    }

    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(|frame| frame.rolls().len()).sum()
    }

    /// Pins available to the next ball (0 once the game is complete)
    pub fn standing_pins(&self) -> u8 {
        self.frames[self.current].standing_pins()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
