//! Score card snapshot - the game laid out like a printed score sheet
//!
//! A [`ScoreCard`] is plain data filled from a [`Game`]. It can be refilled in
//! place with [`Game::scorecard_into`] without allocating, or exported with
//! serde.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::scoring::score_frames;
use crate::types::{Mark, FRAME_COUNT, MAX_FRAME_ROLLS};

/// One box on the score sheet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameCard {
    pub rolls: ArrayVec<u8, MAX_FRAME_ROLLS>,
    /// `None` until the frame's own balls are rolled.
    pub mark: Option<Mark>,
    /// `None` until the frame and its bonus balls are rolled.
    pub score: Option<u32>,
    /// Cumulative score, `None` while this or an earlier frame is unresolved.
    pub running_total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreCard {
    pub frames: [FrameCard; FRAME_COUNT],
    /// Best-effort total, same as [`Game::score`].
    pub total: u32,
    pub complete: bool,
}

impl ScoreCard {
    pub fn clear(&mut self) {
        for card in &mut self.frames {
            card.rolls.clear();
            card.mark = None;
            card.score = None;
            card.running_total = None;
        }
        self.total = 0;
        self.complete = false;
    }

    /// Final score, once every frame is resolved
    pub fn final_score(&self) -> Option<u32> {
        self.frames[FRAME_COUNT - 1].running_total
    }
}

impl Game {
    /// Build a fresh score card for this game
    pub fn scorecard(&self) -> ScoreCard {
        let mut card = ScoreCard::default();
        self.scorecard_into(&mut card);
        card
    }

    /// Refill an existing score card in place
    pub fn scorecard_into(&self, out: &mut ScoreCard) {
        out.clear();

        let scores = score_frames(self.frames());
        let mut running = Some(0u32);
        for ((card, frame), score) in out.frames.iter_mut().zip(self.frames()).zip(&scores) {
            card.rolls.extend(frame.rolls().iter().copied());
            card.mark = frame.mark();
            card.score = score.resolved.then(|| score.total());
            running = running.zip(card.score).map(|(sum, s)| sum + s);
            card.running_total = running;
        }

        out.total = scores.iter().map(|s| s.total()).sum();
        out.complete = self.is_complete();
    }
}
