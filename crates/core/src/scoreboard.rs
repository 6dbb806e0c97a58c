//! ScoreBoard - per-player shot storage and score computation
//!
//! One scoreboard per player. Shots live in a flat 21-cell array (frames
//! 1-9 use two cells each, the last frame up to three) and every frame
//! score is recomputed on demand from the raw cells, so partial games
//! always score cleanly.
//!
//! The board does not enforce submission order: callers may write shots
//! in any order and may overwrite a cell, only pin-legality against the
//! same frame's recorded shots is checked. The console game is the
//! sequencer.

use arrayvec::ArrayVec;

use tenpin_types::{
    FrameResult, ShotCell, FRAME_COUNT, LAST_FRAME, LAST_FRAME_FIRST_SLOT, PIN_COUNT, SHOT_SLOTS,
};

use crate::error::Result;
use crate::validate::{check_frame, check_pins, check_shot, slot_index};

/// Scoreboard for one player over one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    player_name: String,
    /// Flat shot cells, `None` until a shot is recorded.
    shots: [ShotCell; SHOT_SLOTS],
    /// Per-frame scores, refreshed by [`compute_final_score`](Self::compute_final_score).
    frame_scores: [u16; FRAME_COUNT as usize],
}

impl ScoreBoard {
    /// Create an empty scoreboard for the named player.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            shots: [None; SHOT_SLOTS],
            frame_scores: [0; FRAME_COUNT as usize],
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Record the pins knocked down by one shot.
    ///
    /// The submission is validated in full before anything is stored; a
    /// rejected shot leaves the board untouched and the returned error
    /// says which rule it broke.
    pub fn set_pins(&mut self, frame: u8, shot: u8, pins: u8) -> Result<()> {
        check_frame(frame)?;
        check_shot(frame, shot)?;
        check_pins(frame, shot, pins, &self.shots)?;
        self.shots[slot_index(frame, shot)] = Some(pins);
        Ok(())
    }

    /// Pins on a cell, with unset and out-of-range cells reading as 0.
    ///
    /// This is the missing-shot-is-zero policy that lets bonus look-ahead
    /// run over frames that have not been played yet.
    fn pins_or_zero(&self, slot: usize) -> u8 {
        self.shots.get(slot).copied().flatten().unwrap_or(0)
    }

    fn first_shot(&self, frame: u8) -> u8 {
        self.pins_or_zero(slot_index(frame, 1))
    }

    /// Pins felled by the frame's first two shots.
    fn frame_sum(&self, frame: u8) -> u8 {
        self.pins_or_zero(slot_index(frame, 1)) + self.pins_or_zero(slot_index(frame, 2))
    }

    fn strike(&self, frame: u8) -> bool {
        self.first_shot(frame) == PIN_COUNT
    }

    fn spare(&self, frame: u8) -> bool {
        !self.strike(frame) && self.frame_sum(frame) == PIN_COUNT
    }

    /// Whether the frame's first shot felled all ten pins.
    pub fn is_strike(&self, frame: u8) -> Result<bool> {
        check_frame(frame)?;
        Ok(self.strike(frame))
    }

    /// Whether the frame's two shots felled all ten pins, without a strike.
    pub fn is_spare(&self, frame: u8) -> Result<bool> {
        check_frame(frame)?;
        Ok(self.spare(frame))
    }

    /// Whether pins were left standing after the frame's two shots.
    pub fn is_open(&self, frame: u8) -> Result<bool> {
        check_frame(frame)?;
        Ok(!self.strike(frame) && !self.spare(frame))
    }

    /// Classify a frame as strike, spare or open.
    pub fn result_of(&self, frame: u8) -> Result<FrameResult> {
        check_frame(frame)?;
        Ok(if self.strike(frame) {
            FrameResult::Strike
        } else if self.spare(frame) {
            FrameResult::Spare
        } else {
            FrameResult::Open
        })
    }

    /// Strike on the last frame's first shot.
    pub fn is_strike_on_last_frame(&self) -> bool {
        self.pins_or_zero(LAST_FRAME_FIRST_SLOT) == PIN_COUNT
    }

    /// Spare across the last frame's first two shots.
    pub fn is_spare_on_last_frame(&self) -> bool {
        let first = self.pins_or_zero(LAST_FRAME_FIRST_SLOT);
        let second = self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 1);
        first != PIN_COUNT && first + second == PIN_COUNT
    }

    /// Two strikes on the last frame's first two shots.
    pub fn is_double_on_last_frame(&self) -> bool {
        self.pins_or_zero(LAST_FRAME_FIRST_SLOT) == PIN_COUNT
            && self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 1) == PIN_COUNT
    }

    /// Three strikes on the last frame, a turkey.
    pub fn is_triple_on_last_frame(&self) -> bool {
        self.is_double_on_last_frame()
            && self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 2) == PIN_COUNT
    }

    /// Strike on the first shot, then a spare across the last two.
    pub fn is_strike_and_spare_on_last_frame(&self) -> bool {
        let second = self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 1);
        let third = self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 2);
        self.pins_or_zero(LAST_FRAME_FIRST_SLOT) == PIN_COUNT
            && second != PIN_COUNT
            && second + third == PIN_COUNT
    }

    /// Spare across the first two shots, then a strike on the third.
    pub fn is_spare_and_strike_on_last_frame(&self) -> bool {
        self.is_spare_on_last_frame() && self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 2) == PIN_COUNT
    }

    /// Bonus pins for a strike: the next two rolls after the frame.
    fn strike_bonus(&self, frame: u8) -> u16 {
        let next = frame + 1;
        if next == LAST_FRAME {
            // frame 9 draws its bonus from the last frame's first two shots
            (self.pins_or_zero(LAST_FRAME_FIRST_SLOT)
                + self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 1)) as u16
        } else if self.strike(next) {
            (PIN_COUNT + self.first_shot(next + 1)) as u16
        } else {
            self.frame_sum(next) as u16
        }
    }

    /// Recompute every frame's score from the raw shot cells.
    ///
    /// Open frames score their own pins, spares add the next shot, strikes
    /// add the next two rolls, and the last frame is the plain sum of its
    /// cells. Unrecorded shots count as 0, so calling this on a partially
    /// played game is always safe and the result only grows as shots land.
    pub fn compute_final_score(&mut self) {
        for frame in 1..LAST_FRAME {
            let idx = (frame - 1) as usize;
            self.frame_scores[idx] = if self.strike(frame) {
                PIN_COUNT as u16 + self.strike_bonus(frame)
            } else if self.spare(frame) {
                (PIN_COUNT + self.first_shot(frame + 1)) as u16
            } else {
                self.frame_sum(frame) as u16
            };
        }
        self.frame_scores[(LAST_FRAME - 1) as usize] = (self.pins_or_zero(LAST_FRAME_FIRST_SLOT)
            + self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 1)
            + self.pins_or_zero(LAST_FRAME_FIRST_SLOT + 2))
            as u16;
    }

    /// Recompute and return the total score of the game so far.
    pub fn final_score(&mut self) -> u16 {
        self.compute_final_score();
        self.frame_scores.iter().sum()
    }

    /// Score of a single frame, as of the last computation.
    pub fn score_of(&self, frame: u8) -> Result<u16> {
        check_frame(frame)?;
        Ok(self.frame_scores[(frame - 1) as usize])
    }

    /// The frame's recorded cells, two for frames 1-9 and three for the last.
    pub fn shots_of(&self, frame: u8) -> Result<ArrayVec<ShotCell, 3>> {
        check_frame(frame)?;
        let mut cells = ArrayVec::new();
        cells.push(self.shots[slot_index(frame, 1)]);
        cells.push(self.shots[slot_index(frame, 2)]);
        if frame == LAST_FRAME {
            cells.push(self.shots[slot_index(frame, 3)]);
        }
        Ok(cells)
    }

    /// Pins felled by the frame's first two shots, unset cells count 0.
    pub fn sum_of(&self, frame: u8) -> Result<u8> {
        check_frame(frame)?;
        Ok(self.frame_sum(frame))
    }

    /// Total strikes over the whole game.
    ///
    /// The last frame counts additively: one for a strike on its first
    /// shot, one more for a double, and a third for a triple or for a
    /// spare followed by a strike.
    pub fn strikes(&self) -> u8 {
        let mut strikes = 0;
        for frame in 1..LAST_FRAME {
            if self.strike(frame) {
                strikes += 1;
            }
        }
        if self.is_strike_on_last_frame() {
            strikes += 1;
        }
        if self.is_double_on_last_frame() {
            strikes += 1;
        }
        if self.is_triple_on_last_frame() || self.is_spare_and_strike_on_last_frame() {
            strikes += 1;
        }
        strikes
    }

    /// Total spares over the whole game.
    ///
    /// The last frame adds one for a spare across its first two shots and
    /// one more for a strike followed by a spare.
    pub fn spares(&self) -> u8 {
        let mut spares = 0;
        for frame in 1..LAST_FRAME {
            if self.spare(frame) {
                spares += 1;
            }
        }
        if self.is_spare_on_last_frame() {
            spares += 1;
        }
        if self.is_strike_and_spare_on_last_frame() {
            spares += 1;
        }
        spares
    }

    /// Whether every shot the rules call for has been recorded.
    ///
    /// A strike in frames 1-9 ends the frame after one shot; in the last
    /// frame a strike or spare earns a third shot that must also land
    /// before the game counts as complete.
    pub fn is_complete(&self) -> bool {
        for frame in 1..LAST_FRAME {
            match self.shots[slot_index(frame, 1)] {
                None => return false,
                Some(first) => {
                    if first != PIN_COUNT && self.shots[slot_index(frame, 2)].is_none() {
                        return false;
                    }
                }
            }
        }
        let (first, second) = match (
            self.shots[LAST_FRAME_FIRST_SLOT],
            self.shots[LAST_FRAME_FIRST_SLOT + 1],
        ) {
            (Some(first), Some(second)) => (first, second),
            _ => return false,
        };
        let third_earned = first == PIN_COUNT || first + second == PIN_COUNT;
        !(third_earned && self.shots[LAST_FRAME_FIRST_SLOT + 2].is_none())
    }

    /// All 21 raw shot cells in slot order.
    pub fn shot_cells(&self) -> &[ShotCell; SHOT_SLOTS] {
        &self.shots
    }

    /// The ten per-frame scores, as of the last computation.
    pub fn frame_scores(&self) -> &[u16; FRAME_COUNT as usize] {
        &self.frame_scores
    }
}
