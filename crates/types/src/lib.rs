//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by the scoring engine.
//! All types are plain data with no game logic, so they can be used by the
//! engine, a host application, or an exported score card alike.
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Scored frames per game |
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `MAX_FRAME_ROLLS` | 3 | Rolls the tenth frame can hold (two plus a bonus) |
//! | `MAX_GAME_ROLLS` | 21 | Longest legal game (nine open frames plus a three-roll tenth) |
//! | `PERFECT_SCORE` | 300 | Twelve strikes in a row |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{FrameState, Mark, FRAME_COUNT, PIN_COUNT};
//!
//! // Marks as they appear on a score sheet
//! assert_eq!(Mark::Strike.symbol(), 'X');
//! assert_eq!(Mark::Spare.bonus_rolls(), 1);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Mark::from_str("SPARE"), Some(Mark::Spare));
//!
//! // Frame lifecycle
//! assert!(FrameState::Closed.is_done());
//! assert!(!FrameState::BonusPending { remaining: 1 }.is_done());
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Number of scored frames in a game
pub const FRAME_COUNT: usize = 10;

/// Pins in a full rack
pub const PIN_COUNT: u8 = 10;

/// Maximum rolls stored in a single frame (only the tenth frame uses the third)
pub const MAX_FRAME_ROLLS: usize = 3;

/// Maximum rolls in a legal game: nine two-roll frames plus a three-roll tenth
pub const MAX_GAME_ROLLS: usize = (FRAME_COUNT - 1) * 2 + MAX_FRAME_ROLLS;

/// Score of twelve consecutive strikes
pub const PERFECT_SCORE: u32 = 300;


/// How a frame was finished
///
/// - **Strike**: all ten pins on the first ball
/// - **Spare**: all ten pins across the first two balls
/// - **Open**: pins left standing after two balls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Strike,
    Spare,
    Open,
}

impl Mark {
    /// Parse a mark from its name or score-sheet symbol (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::Mark;
    ///
    /// assert_eq!(Mark::from_str("strike"), Some(Mark::Strike));
    /// assert_eq!(Mark::from_str("X"), Some(Mark::Strike));
    /// assert_eq!(Mark::from_str("/"), Some(Mark::Spare));
    /// assert_eq!(Mark::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" | "x" => Some(Mark::Strike),
            "spare" | "/" => Some(Mark::Spare),
            "open" => Some(Mark::Open),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Strike => "strike",
            Mark::Spare => "spare",
            Mark::Open => "open",
        }
    }

    /// Score-sheet symbol (`X`, `/`, or `-` for an open frame)
    pub fn symbol(&self) -> char {
        match self {
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Open => '-',
        }
    }

    /// Number of following rolls added to the frame as bonus
    pub fn bonus_rolls(&self) -> usize {
        match self {
            Mark::Strike => 2,
            Mark::Spare => 1,
            Mark::Open => 0,
        }
    }
}

/// Lifecycle of a single frame
///
/// Frames one to nine go `Empty -> OneRoll -> Closed`, or straight from
/// `Empty` to `Closed` on a strike. The tenth frame never closes on a strike
/// or spare; it moves to `BonusPending` until its fill balls are rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum FrameState {
    /// No rolls recorded
    #[default]
    Empty,
    /// First ball recorded, pins still standing
    OneRoll,
    /// Frame finished without bonus balls
    Closed,
    /// Tenth frame struck or spared, waiting for `remaining` bonus balls
    BonusPending { remaining: u8 },
    /// Tenth frame finished including its bonus balls
    BonusComplete,
}

impl FrameState {
    /// True once the frame will accept no more rolls
    pub fn is_done(&self) -> bool {
        matches!(self, FrameState::Closed | FrameState::BonusComplete)
    }

    /// True while the frame can take another roll
    pub fn accepts_roll(&self) -> bool {
        !self.is_done()
    }
}
