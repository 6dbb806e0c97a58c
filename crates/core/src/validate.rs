//! Shot-submission validation
//!
//! Checks run in a fixed order: frame range, shot range, pin range, then
//! domain legality against what the same frame already holds. The first
//! failing check wins and nothing is stored.

use tenpin_types::{ShotCell, FRAME_COUNT, LAST_FRAME, MAX_SHOTS_PER_FRAME, PIN_COUNT, SHOT_SLOTS};

use crate::error::{Result, ScoreBoardError};

/// Map (frame, shot) to a cell in the flat shot array.
///
/// Frames 1-9 occupy two cells each; the last frame's three shots land on
/// slots 18, 19 and 20. Callers must pass validated numbers.
pub(crate) fn slot_index(frame: u8, shot: u8) -> usize {
    (frame as usize - 1) * 2 + (shot as usize - 1)
}

/// Check that the frame number is in [1, 10].
pub(crate) fn check_frame(frame: u8) -> Result<()> {
    if frame < 1 || frame > FRAME_COUNT {
        return Err(ScoreBoardError::OutOfRange(format!(
            "{frame} is an invalid frame value, it must be in the range [1-10]"
        )));
    }
    Ok(())
}

/// Check that the shot number is legal for the frame.
pub(crate) fn check_shot(frame: u8, shot: u8) -> Result<()> {
    if shot < 1 || shot > MAX_SHOTS_PER_FRAME {
        return Err(ScoreBoardError::OutOfRange(format!(
            "{shot} is an invalid shot value, it must be 1 or 2, or 3 in the last frame"
        )));
    }
    if shot == 3 && frame != LAST_FRAME {
        return Err(ScoreBoardError::OutOfRange(format!(
            "{shot} is an invalid shot value for a non-final frame, only the last one can have a third shot"
        )));
    }
    Ok(())
}

/// Check the pin count against its range and the frame's recorded shots.
///
/// Unset cells count as 0 pins here, matching the scoring policy.
pub(crate) fn check_pins(
    frame: u8,
    shot: u8,
    pins: u8,
    shots: &[ShotCell; SHOT_SLOTS],
) -> Result<()> {
    if pins > PIN_COUNT {
        return Err(ScoreBoardError::OutOfRange(format!(
            "{pins} is not a valid value, it must be in the range [0-10]"
        )));
    }

    let recorded = |s: u8| shots[slot_index(frame, s)].unwrap_or(0);

    if frame < LAST_FRAME {
        if shot == 2 {
            let first = recorded(1);
            // a strike clears the deck, the second shot can only be 0
            if first == PIN_COUNT && pins != 0 {
                return Err(ScoreBoardError::StrikeViolation { pins });
            }
            if first + pins > PIN_COUNT {
                return Err(ScoreBoardError::InvalidTotalSum {
                    pins,
                    max: PIN_COUNT - first,
                });
            }
        }
    } else {
        match shot {
            2 => {
                let first = recorded(1);
                // a strike on the first shot resets the rack, anything goes
                if first != PIN_COUNT && first + pins > PIN_COUNT {
                    return Err(ScoreBoardError::InvalidTotalSum {
                        pins,
                        max: PIN_COUNT - first,
                    });
                }
            }
            3 => {
                let first = recorded(1);
                let second = recorded(2);
                if first != PIN_COUNT && first + second != PIN_COUNT {
                    return Err(ScoreBoardError::OutOfRange(
                        "a third shot is given only if the player got a strike or a spare in the last frame"
                            .to_string(),
                    ));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> [ShotCell; SHOT_SLOTS] {
        [None; SHOT_SLOTS]
    }

    #[test]
    fn test_check_frame_bounds() {
        assert!(check_frame(0).is_err());
        assert!(check_frame(11).is_err());
        for frame in 1..=10 {
            assert!(check_frame(frame).is_ok());
        }
    }

    #[test]
    fn test_check_shot_bounds() {
        assert!(check_shot(1, 0).is_err());
        assert!(check_shot(1, 4).is_err());
        assert!(check_shot(1, 1).is_ok());
        assert!(check_shot(9, 2).is_ok());
    }

    #[test]
    fn test_third_shot_only_in_last_frame() {
        for frame in 1..=9 {
            assert!(matches!(
                check_shot(frame, 3),
                Err(ScoreBoardError::OutOfRange(_))
            ));
        }
        assert!(check_shot(10, 3).is_ok());
    }

    #[test]
    fn test_pins_over_ten_rejected() {
        let shots = empty();
        assert!(matches!(
            check_pins(1, 1, 11, &shots),
            Err(ScoreBoardError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_second_shot_after_strike() {
        let mut shots = empty();
        shots[slot_index(3, 1)] = Some(10);

        assert_eq!(
            check_pins(3, 2, 7, &shots),
            Err(ScoreBoardError::StrikeViolation { pins: 7 })
        );
        // 0 is the only legal follow-up
        assert!(check_pins(3, 2, 0, &shots).is_ok());
    }

    #[test]
    fn test_frame_sum_capped_at_ten() {
        let mut shots = empty();
        shots[slot_index(5, 1)] = Some(6);

        assert_eq!(
            check_pins(5, 2, 5, &shots),
            Err(ScoreBoardError::InvalidTotalSum { pins: 5, max: 4 })
        );
        assert!(check_pins(5, 2, 4, &shots).is_ok());
    }

    #[test]
    fn test_last_frame_second_shot_rules() {
        // no strike on the first shot keeps the 10-pin cap
        let mut shots = empty();
        shots[slot_index(10, 1)] = Some(8);
        assert_eq!(
            check_pins(10, 2, 3, &shots),
            Err(ScoreBoardError::InvalidTotalSum { pins: 3, max: 2 })
        );

        // a strike resets the rack for the second shot
        shots[slot_index(10, 1)] = Some(10);
        assert!(check_pins(10, 2, 10, &shots).is_ok());
    }

    #[test]
    fn test_third_shot_must_be_earned() {
        let mut shots = empty();
        shots[slot_index(10, 1)] = Some(4);
        shots[slot_index(10, 2)] = Some(5);
        assert!(matches!(
            check_pins(10, 3, 6, &shots),
            Err(ScoreBoardError::OutOfRange(_))
        ));

        // spare earns the extra shot
        shots[slot_index(10, 2)] = Some(6);
        assert!(check_pins(10, 3, 6, &shots).is_ok());

        // so does a strike
        shots[slot_index(10, 1)] = Some(10);
        shots[slot_index(10, 2)] = Some(3);
        assert!(check_pins(10, 3, 6, &shots).is_ok());
    }

    #[test]
    fn test_slot_index_mapping() {
        assert_eq!(slot_index(1, 1), 0);
        assert_eq!(slot_index(1, 2), 1);
        assert_eq!(slot_index(9, 2), 17);
        assert_eq!(slot_index(10, 1), 18);
        assert_eq!(slot_index(10, 3), 20);
    }
}
