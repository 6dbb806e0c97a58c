//! Interactive console game
//!
//! Drives one complete game at the terminal: registers up to six players,
//! prompts every shot, lets the scoring engine arbitrate legality, and
//! prints each player's score sheet at the end.
//!
//! All I/O goes through generic reader/writer parameters, so the whole
//! flow can be driven from tests with scripted input.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tenpin_console::Game;
//!
//! // one player, nine open frames, an open last frame
//! let script = "Solo\nn\n".to_string() + &"0\n0\n".repeat(10);
//! let mut out = Vec::new();
//! Game::new(Cursor::new(script), &mut out).run().unwrap();
//!
//! let transcript = String::from_utf8(out).unwrap();
//! assert!(transcript.contains("Final Score: 0"));
//! ```

pub mod game;
pub mod prompt;

pub use game::Game;
