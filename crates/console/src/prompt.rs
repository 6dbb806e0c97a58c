//! Line-oriented prompting and input parsing
//!
//! Turns raw lines of user input into game-domain values. Anything
//! unparseable is rejected and re-asked without touching the scoreboard.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use tenpin_types::PIN_COUNT;

/// Print a prompt (no trailing newline) and read one trimmed line.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input
        .read_line(&mut line)
        .context("failed to read input")?
        == 0
    {
        bail!("input ended before the game finished");
    }
    Ok(line.trim().to_string())
}

/// Parse a pin count from one line of input.
///
/// Accepts an integer in [0, 10]; anything else is `None` so the caller
/// can re-prompt.
pub fn parse_pins(line: &str) -> Option<u8> {
    match line.parse::<u8>() {
        Ok(pins) if pins <= PIN_COUNT => Some(pins),
        _ => None,
    }
}

/// Keep prompting until the player enters a pin count in range.
pub fn read_pins<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<u8> {
    loop {
        let line = ask(input, out, prompt)?;
        match parse_pins(&line) {
            Some(pins) => return Ok(pins),
            None => writeln!(
                out,
                "      {line:?} is not a pin count, enter a number from 0 to 10"
            )?,
        }
    }
}

/// Ask a yes/no question, re-asking until the answer is recognizable.
pub fn read_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    loop {
        let answer = ask(input, out, prompt)?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "      please answer y or n")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_pins_accepts_the_legal_range() {
        for pins in 0..=10 {
            assert_eq!(parse_pins(&pins.to_string()), Some(pins));
        }
    }

    #[test]
    fn test_parse_pins_rejects_garbage() {
        assert_eq!(parse_pins(""), None);
        assert_eq!(parse_pins("eleven"), None);
        assert_eq!(parse_pins("11"), None);
        assert_eq!(parse_pins("-1"), None);
        assert_eq!(parse_pins("3.5"), None);
    }

    #[test]
    fn test_read_pins_reprompts_until_valid() {
        let mut input = Cursor::new("nope\n42\n7\n");
        let mut out = Vec::new();

        let pins = read_pins(&mut input, &mut out, "SHOT 1: ").unwrap();
        assert_eq!(pins, 7);

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("SHOT 1:").count(), 3);
        assert!(transcript.contains("is not a pin count"));
    }

    #[test]
    fn test_read_yes_no_variants() {
        let mut input = Cursor::new("maybe\nYES\n");
        let mut out = Vec::new();
        assert!(read_yes_no(&mut input, &mut out, "again? ").unwrap());

        let mut input = Cursor::new("N\n");
        let mut out = Vec::new();
        assert!(!read_yes_no(&mut input, &mut out, "again? ").unwrap());
    }

    #[test]
    fn test_ask_fails_on_exhausted_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(ask(&mut input, &mut out, "name: ").is_err());
    }
}
