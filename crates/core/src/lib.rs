//! Scoring engine module - pure, deterministic, and testable
//!
//! This module contains the whole rulebook of ten-pin bowling scoring.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same shot sequence always produces the same scores
//! - **Testable**: every rule and bonus chain has unit tests
//! - **Portable**: usable from the console game, tests, or any other frontend
//!
//! # Module Structure
//!
//! - [`scoreboard`]: per-player shot storage, frame predicates, and score
//!   computation with strike/spare bonus look-ahead
//! - [`error`]: the rule-violation error types returned on rejected shots
//! - [`report`]: the printable score sheet
//!
//! # Scoring Rules
//!
//! This implementation follows standard ten-pin scoring:
//!
//! - **Open frame**: the frame scores its own pins
//! - **Spare**: 10 plus the next shot
//! - **Strike**: 10 plus the next two shots, chaining across frames
//! - **Last frame**: up to three shots, scored as their plain sum; a strike
//!   earns two extra shots and a spare earns one
//!
//! Shots that have not been recorded count as 0 pins, so a partially played
//! game always scores cleanly and never errors.
//!
//! # Example
//!
//! ```
//! use tenpin_core::ScoreBoard;
//!
//! let mut board = ScoreBoard::new("Dana");
//! board.set_pins(1, 1, 10).unwrap();
//! board.set_pins(2, 1, 3).unwrap();
//! board.set_pins(2, 2, 4).unwrap();
//!
//! // The strike in frame 1 collects both of frame 2's shots as bonus.
//! assert_eq!(board.final_score(), 24);
//! ```

pub mod error;
pub mod report;
pub mod scoreboard;
mod validate;

pub use tenpin_types as types;

pub use error::{Result, ScoreBoardError};
pub use scoreboard::ScoreBoard;
