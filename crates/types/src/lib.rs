//! Core types module - shared constants and data types
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring engine, console game, tests).
//!
//! # Game Shape
//!
//! Standard ten-pin bowling dimensions:
//!
//! - **Frames**: 10 per game; frames 1-9 allow up to 2 shots, frame 10 up to 3
//! - **Pins**: every shot knocks down between 0 and 10 pins
//! - **Shot slots**: 21 cells cover the longest possible game; frames 1-9
//!   occupy two cells each (slots 0-17) and the last frame occupies
//!   slots 18, 19 and 20
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{FrameResult, ShotCell, FRAME_COUNT, SHOT_SLOTS};
//!
//! // A cell is unset until a shot is recorded
//! let cell: ShotCell = None;
//! assert_eq!(cell.unwrap_or(0), 0);
//!
//! // Frame outcomes
//! let result = FrameResult::Strike;
//! assert_eq!(result.as_str(), "strike");
//!
//! // Game dimensions
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(SHOT_SLOTS, 21);
//! ```

/// Number of frames in one game (10)
pub const FRAME_COUNT: u8 = 10;

/// The final frame, the only one that allows a third shot
pub const LAST_FRAME: u8 = 10;

/// Pins standing at the top of every frame (10)
pub const PIN_COUNT: u8 = 10;

/// Highest legal shot number within a frame (3, last frame only)
pub const MAX_SHOTS_PER_FRAME: u8 = 3;

/// Total shot cells over a full game (9 frames x 2 shots + 3 in the last)
pub const SHOT_SLOTS: usize = 21;

/// First cell of the last frame; its three shots sit at 18, 19 and 20
pub const LAST_FRAME_FIRST_SLOT: usize = 18;

/// Most players one game can register (6)
pub const MAX_PLAYERS: usize = 6;

/// One shot cell (`None` = not recorded yet, `Some` = pins knocked down)
///
/// Unset cells read as 0 pins during scoring, but stay distinguishable
/// from a recorded gutter ball so completeness checks can tell the two
/// apart.
pub type ShotCell = Option<u8>;

/// Outcome of a non-final frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameResult {
    /// All ten pins on the first shot
    Strike,
    /// All ten pins across both shots, without a strike
    Spare,
    /// Pins left standing after both shots
    Open,
}

impl FrameResult {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameResult::Strike => "strike",
            FrameResult::Spare => "spare",
            FrameResult::Open => "open",
        }
    }
}
