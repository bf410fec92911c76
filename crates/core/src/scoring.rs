//! Scoring module - standard ten-pin scoring rules
//!
//! Every frame scores the pins of its own balls. A strike adds the next two
//! balls in playing order and a spare adds the next one. Bonus balls are always
//! read from what was actually rolled, including the tenth frame's fill balls,
//! so back-to-back strikes late in the game need no special case.
//!
//! Missing balls count as zero. On an unfinished game this yields a
//! best-effort partial score; [`FrameScore::resolved`] says whether a frame's
//! value is final.

use arrayvec::ArrayVec;

use crate::frame::Frame;
use crate::types::{Mark, FRAME_COUNT, MAX_FRAME_ROLLS};

/// Room for every ball any ten frames can hold.
const ROLL_BUFFER: usize = FRAME_COUNT * MAX_FRAME_ROLLS;

/// Score of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScore {
    /// Pins from the frame's own balls.
    pub base: u32,
    /// Pins from the following balls earned by a strike or spare.
    pub bonus: u32,
    /// True once the frame's own balls and every bonus ball are recorded.
    pub resolved: bool,
}

impl FrameScore {
    pub fn total(&self) -> u32 {
        self.base + self.bonus
    }
}

fn pin_sum(rolls: &[u8]) -> u32 {
    rolls.iter().map(|&p| u32::from(p)).sum()
}

/// Bonus earned by `mark` from the balls that follow it.
///
/// Returns the bonus pins and whether every bonus ball was available.
pub fn bonus_for(mark: Option<Mark>, following: &[u8]) -> (u32, bool) {
    let wanted = mark.map_or(0, |m| m.bonus_rolls());
    let available = wanted.min(following.len());
    (pin_sum(&following[..available]), available == wanted)
}

/// Score one frame given the balls rolled after its own balls.
pub fn score_frame(frame: &Frame, following: &[u8]) -> FrameScore {
    let mark = frame.mark();
    let (bonus, bonus_resolved) = bonus_for(mark, following);
    FrameScore {
        base: pin_sum(frame.own_rolls()),
        bonus,
        resolved: mark.is_some() && bonus_resolved,
    }
}

/// Score every frame of a game.
pub fn score_frames(frames: &[Frame; FRAME_COUNT]) -> [FrameScore; FRAME_COUNT] {
    let rolls: ArrayVec<u8, ROLL_BUFFER> = frames
        .iter()
        .flat_map(|frame| frame.rolls().iter().copied())
        .collect();

    let mut scores = [FrameScore::default(); FRAME_COUNT];
    let mut offset = 0;
    for (score, frame) in scores.iter_mut().zip(frames) {
        offset += frame.own_rolls().len();
        *score = score_frame(frame, &rolls[offset..]);
        offset += frame.fill_balls().len();
    }
    scores
}

/// Sum of all ten frame scores.
pub fn total_score(frames: &[Frame; FRAME_COUNT]) -> u32 {
    score_frames(frames).iter().map(FrameScore::total).sum()
}
