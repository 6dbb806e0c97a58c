//! The game loop
//!
//! Mirrors a night at the lanes: register the players, bowl frames 1-9
//! with the usual strike/spare flow, handle the last frame's extra
//! shots, then print the statistics.
//!
//! The engine owns legality: a rejected submission prints the rule it
//! broke and the same shot is asked again.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;
use tracing::debug;

use tenpin_core::ScoreBoard;
use tenpin_types::{FrameResult, LAST_FRAME, MAX_PLAYERS};

use crate::prompt::{ask, read_pins, read_yes_no};

/// One interactive game over arbitrary input/output streams.
pub struct Game<R, W> {
    input: R,
    out: W,
    players: Vec<ScoreBoard>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            players: Vec::new(),
        }
    }

    /// Play a full game: registration, ten frames, statistics.
    pub fn run(&mut self) -> Result<()> {
        self.register_players()?;
        for frame in 1..LAST_FRAME {
            self.play_frame(frame)?;
        }
        self.play_last_frame()?;
        self.print_statistics()?;
        Ok(())
    }

    /// The scoreboards in registration order.
    pub fn players(&self) -> &[ScoreBoard] {
        &self.players
    }

    fn register_players(&mut self) -> Result<()> {
        for seat in 1..=MAX_PLAYERS {
            let name = loop {
                let name = ask(
                    &mut self.input,
                    &mut self.out,
                    &format!("Enter the name of player number {seat}: "),
                )?;
                if name.is_empty() {
                    writeln!(self.out, "      a name cannot be empty")?;
                } else if self.players.iter().any(|p| p.player_name() == name) {
                    writeln!(self.out, "      the player {name} already exists")?;
                } else {
                    break name;
                }
            };
            debug!(player = %name, seat, "registered");
            self.players.push(ScoreBoard::new(name));

            if seat == MAX_PLAYERS {
                break;
            }
            if !read_yes_no(
                &mut self.input,
                &mut self.out,
                "Do you want to add another player? [y/n]: ",
            )? {
                break;
            }
        }
        Ok(())
    }

    fn play_frame(&mut self, frame: u8) -> Result<()> {
        writeln!(self.out, "\n---> Frame {frame}")?;
        for player in 0..self.players.len() {
            writeln!(self.out, "\n- {}", self.players[player].player_name())?;
            self.take_shot(player, frame, 1, "    SHOT 1: ")?;

            if self.players[player].result_of(frame)? == FrameResult::Strike {
                // the frame is over, the second shot never happens
                writeln!(self.out, "      {}", "Strike!".green().bold())?;
                continue;
            }

            self.take_shot(player, frame, 2, "    SHOT 2: ")?;
            if self.players[player].result_of(frame)? == FrameResult::Spare {
                writeln!(self.out, "      {}", "Spare!".cyan().bold())?;
            }
        }
        Ok(())
    }

    fn play_last_frame(&mut self) -> Result<()> {
        writeln!(self.out, "\n---> Frame {LAST_FRAME}")?;
        for player in 0..self.players.len() {
            writeln!(self.out, "\n- {}", self.players[player].player_name())?;
            self.take_shot(player, LAST_FRAME, 1, "    SHOT 1: ")?;

            if self.players[player].is_strike_on_last_frame() {
                writeln!(
                    self.out,
                    "      {}",
                    "Strike! You got two extra shots.".green().bold()
                )?;
                self.take_shot(player, LAST_FRAME, 2, "    EXTRA SHOT 1: ")?;
                self.take_shot(player, LAST_FRAME, 3, "    EXTRA SHOT 2: ")?;
            } else {
                self.take_shot(player, LAST_FRAME, 2, "    SHOT 2: ")?;
                if self.players[player].is_spare_on_last_frame() {
                    writeln!(
                        self.out,
                        "      {}",
                        "Spare! You got one extra shot.".cyan().bold()
                    )?;
                    self.take_shot(player, LAST_FRAME, 3, "    EXTRA SHOT 1: ")?;
                }
            }
        }
        Ok(())
    }

    /// Prompt one shot until the engine accepts it.
    fn take_shot(&mut self, player: usize, frame: u8, shot: u8, prompt: &str) -> Result<()> {
        loop {
            let pins = read_pins(&mut self.input, &mut self.out, prompt)?;
            match self.players[player].set_pins(frame, shot, pins) {
                Ok(()) => {
                    debug!(
                        player = %self.players[player].player_name(),
                        frame, shot, pins, "shot recorded"
                    );
                    return Ok(());
                }
                Err(err) => {
                    debug!(%err, frame, shot, pins, "shot rejected");
                    writeln!(self.out, "      {err}")?;
                }
            }
        }
    }

    fn print_statistics(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", "-- STATISTICS".bold())?;
        for board in &mut self.players {
            writeln!(self.out, "\n{}", board.score_sheet())?;
        }
        Ok(())
    }
}
