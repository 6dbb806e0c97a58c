//! Rule-violation errors for shot submission
//!
//! Every variant is a recoverable rejection of a single submission: the
//! scoreboard is left untouched and the caller decides whether to
//! re-prompt. The engine has no fatal conditions.

use thiserror::Error;

/// A shot submission that breaks the rules of the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreBoardError {
    /// Frame, shot, or pin count outside its legal numeric domain, or a
    /// third shot attempted in the last frame without a strike or spare.
    #[error("{0}")]
    OutOfRange(String),

    /// Nonzero second shot in a non-final frame that already holds a strike.
    #[error("{pins} is not a valid value for the second shot, the player got a strike in the same frame, use zero instead")]
    StrikeViolation { pins: u8 },

    /// The frame's two countable shots would knock down more than 10 pins.
    #[error("{pins} is not a valid value for this shot, the sum for the frame would exceed 10, the maximum value that can be set is {max}")]
    InvalidTotalSum { pins: u8, max: u8 },
}

/// Result type alias for scoreboard operations.
pub type Result<T> = std::result::Result<T, ScoreBoardError>;
