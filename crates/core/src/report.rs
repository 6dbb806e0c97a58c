//! Printable score sheet
//!
//! Renders one player's statistics block: the raw shot cells grouped per
//! frame, the per-frame scores, the final score and the strike/spare
//! totals. The contract is the content; column widths are presentation.

use std::fmt::Write;

use tenpin_types::{FRAME_COUNT, LAST_FRAME_FIRST_SLOT};

use crate::scoreboard::ScoreBoard;

impl ScoreBoard {
    /// Render the player's score sheet, refreshing the scores first.
    ///
    /// Unset cells print as 0, the same way the scoring reads them.
    pub fn score_sheet(&mut self) -> String {
        self.compute_final_score();

        let mut sheet = String::new();
        let _ = writeln!(sheet, "-- {}", self.player_name());
        sheet.push('\n');

        sheet.push_str("Frame: ");
        for frame in 1..=FRAME_COUNT {
            let _ = write!(sheet, "   {frame}   ");
        }

        sheet.push_str("\nPins:  ");
        for (slot, cell) in self.shot_cells().iter().enumerate() {
            // two cells per frame, with the last frame grouping all three
            if slot % 2 == 0 && slot != LAST_FRAME_FIRST_SLOT + 2 {
                sheet.push_str("| ");
            }
            let _ = write!(sheet, "{} ", cell.unwrap_or(0));
        }

        sheet.push_str("\nScore: ");
        for score in self.frame_scores() {
            let _ = write!(sheet, "|  {score}  ");
        }

        let final_score: u16 = self.frame_scores().iter().sum();
        let _ = write!(sheet, "\n\nFinal Score: {final_score}\n");
        let _ = writeln!(sheet, "Total Strikes: {}", self.strikes());
        let _ = writeln!(sheet, "Total Spares: {}", self.spares());
        sheet
    }
}
