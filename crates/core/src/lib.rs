//! Core scoring engine - pure, deterministic, and testable
//!
//! This crate contains the bowling rules, per-frame state, and score
//! calculation. It has **no dependencies** on I/O or UI, and its hot paths
//! never touch the heap:
//!
//! - **Deterministic**: the same rolls always produce the same score
//! - **Testable**: unit tests for every frame transition and bonus rule
//! - **Fast**: frames are stored inline, so rolling and scoring do not allocate
//!
//! # Module Structure
//!
//! - [`frame`]: rolls and lifecycle state of a single frame
//! - [`game`]: ten frames plus the cursor; roll ingestion and scoring entry point
//! - [`scoring`]: strike and spare bonus lookahead over playing-order rolls
//! - [`scorecard`]: score-sheet snapshot with running totals
//! - [`error`]: the single [`InvalidRoll`] error
//!
//! # Game Rules
//!
//! - **Frames**: ten per game, two balls each unless the first is a strike
//! - **Strike**: ten pins on the first ball; scores 10 plus the next two balls
//! - **Spare**: ten pins across two balls; scores 10 plus the next ball
//! - **Tenth frame**: a strike or spare earns fill balls (two or one) that only
//!   count as bonus
//! - **After the game**: further rolls are ignored
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! game.roll(10)?; // strike
//! game.roll(4)?;
//! game.roll(6)?; // spare
//! game.roll(3)?;
//! game.roll(0)?;
//!
//! assert_eq!(game.score(), 20 + 13 + 3);
//! assert_eq!(game.frames()[1].to_string(), "4/");
//!
//! // Too many pins for the rack is an error, not a silent miscount.
//! assert!(game.roll(11).is_err());
//! # Ok::<(), tenpin_core::InvalidRoll>(())
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scorecard;
pub mod scoring;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::InvalidRoll;
pub use frame::Frame;
pub use game::Game;
pub use scorecard::{FrameCard, ScoreCard};
pub use scoring::{score_frames, total_score, FrameScore};
