//! Parsing of raw shell history text.
//!
//! History text is expected in the shape printed by bash's `history` builtin:
//! one entry per line, a history number, whitespace, then the command text.
//! Lines of any other shape (blank lines, prompts, warnings) are skipped.

use log::debug;
use regex::Regex;

use crate::command::{Command, CommandSequence};
use crate::error::{Error, Result};

const HISTORY_LINE_PATTERN: &str = r"^\s*(\d+)\s+(.*)$";

/// Parses raw history text into a [`CommandSequence`].
///
/// # Errors
///
/// Returns [`Error::HistoryNumber`] if a history number cannot be represented,
/// or [`Error::NonIncreasingHistory`] if the numbering goes backwards. No
/// partial sequence is returned in either case.
///
/// # Examples
///
/// ```
/// use histscript_core::history::parse_history;
///
/// let sequence = parse_history("    1  ls\n    2  cd /tmp\n")?;
/// assert_eq!(sequence.len(), 2);
/// # Ok::<(), histscript_core::error::Error>(())
/// ```
pub fn parse_history(raw: &str) -> Result<CommandSequence> {
    let history_line = Regex::new(HISTORY_LINE_PATTERN)?;

    let mut commands = Vec::new();
    for line in raw.lines() {
        let Some(captures) = history_line.captures(line) else {
            continue;
        };

        // A bare number with no command text is not an entry
        let text = captures[2].trim_end();
        if text.is_empty() {
            continue;
        }

        let token = &captures[1];
        let number = token
            .parse::<u64>()
            .map_err(|_| Error::HistoryNumber(token.to_string()))?;

        commands.push(Command {
            number,
            text: text.to_string(),
        });
    }

    debug!("Parsed {} history entries", commands.len());

    CommandSequence::new(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "    1  ls\n    2  cd /tmp\n    3  git status\n";

    #[test]
    fn test_parse_sample_history() {
        let sequence = parse_history(SAMPLE).unwrap();
        let parsed: Vec<(u64, &str)> = sequence
            .commands()
            .iter()
            .map(|c| (c.number, c.text.as_str()))
            .collect();
        assert_eq!(parsed, vec![(1, "ls"), (2, "cd /tmp"), (3, "git status")]);
    }

    #[test]
    fn test_empty_input_is_empty_sequence() {
        let sequence = parse_history("").unwrap();
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_non_history_lines_are_skipped() {
        let raw = "bash: no job control in this shell\n\n  41  make\n$ \n  42  make test\n  43   \n";
        let sequence = parse_history(raw).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.at_position(1).unwrap().number, 41);
        assert_eq!(sequence.at_position(2).unwrap().text, "make test");
    }

    #[test]
    fn test_text_is_kept_unparsed() {
        let raw = "  7  echo \"a  b\" 'c'  | grep -v \"x\"\r\n";
        let sequence = parse_history(raw).unwrap();
        assert_eq!(
            sequence.at_position(1).unwrap().text,
            "echo \"a  b\" 'c'  | grep -v \"x\""
        );
    }

    #[test]
    fn test_overflowing_number_fails_whole_parse() {
        let raw = "    1  ls\n 99999999999999999999999  pwd\n";
        let result = parse_history(raw);
        match result {
            Err(Error::HistoryNumber(token)) => assert_eq!(token, "99999999999999999999999"),
            other => panic!("Expected HistoryNumber error, got {other:?}"),
        }
    }

    #[test]
    fn test_backwards_numbering_fails() {
        let raw = "    5  ls\n    4  pwd\n";
        assert!(matches!(
            parse_history(raw),
            Err(Error::NonIncreasingHistory { .. })
        ));
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse_history(SAMPLE).unwrap(), parse_history(SAMPLE).unwrap());
    }
}
