//! Roll validation error

use thiserror::Error;

/// A roll that cannot be recorded.
///
/// Raised when `pins` is above the size of a rack, or above the number of pins
/// still standing in the current frame. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid roll of {pins} pins with {standing} standing")]
pub struct InvalidRoll {
    pub pins: u8,
    pub standing: u8,
}
