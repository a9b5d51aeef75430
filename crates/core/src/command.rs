use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// One historical shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Number assigned by the history source. Not necessarily contiguous.
    pub number: u64,
    pub text: String,
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// Parsed history, in increasing `number` order.
///
/// Commands are addressed by their 1-based display position, which is their
/// rank in the sequence and not their history number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    commands: Vec<Command>,
}

impl CommandSequence {
    /// # Errors
    ///
    /// Returns [`Error::NonIncreasingHistory`] if the numbers are not strictly increasing.
    pub fn new(commands: Vec<Command>) -> Result<Self> {
        for pair in commands.windows(2) {
            if pair[1].number <= pair[0].number {
                return Err(Error::NonIncreasingHistory {
                    number: pair[1].number,
                    previous: pair[0].number,
                });
            }
        }

        Ok(Self { commands })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The command at a 1-based display position.
    #[must_use]
    pub fn at_position(&self, position: usize) -> Option<&Command> {
        position
            .checked_sub(1)
            .and_then(|index| self.commands.get(index))
    }

    /// The 1-based display position of the command with this history number.
    #[must_use]
    pub fn position_of(&self, number: u64) -> Option<usize> {
        self.commands
            .binary_search_by_key(&number, |command| command.number)
            .ok()
            .map(|index| index + 1)
    }

    /// Keeps only the `limit` most recent commands.
    #[must_use]
    pub fn most_recent(mut self, limit: usize) -> Self {
        let skip = self.commands.len().saturating_sub(limit);
        self.commands = self.commands.split_off(skip);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(number: u64, text: &str) -> Command {
        Command {
            number,
            text: text.to_string(),
        }
    }

    fn sample_sequence() -> CommandSequence {
        CommandSequence::new(vec![
            command(10, "ls"),
            command(12, "cd /tmp"),
            command(13, "git status"),
        ])
        .unwrap()
    }

    #[test]
    fn test_positions_are_ranks_not_numbers() {
        let sequence = sample_sequence();
        assert_eq!(sequence.at_position(1).unwrap().number, 10);
        assert_eq!(sequence.at_position(3).unwrap().text, "git status");
        assert!(sequence.at_position(0).is_none());
        assert!(sequence.at_position(4).is_none());
        assert_eq!(sequence.position_of(12), Some(2));
        assert_eq!(sequence.position_of(11), None);
    }

    #[test]
    fn test_non_increasing_numbers_rejected() {
        let result = CommandSequence::new(vec![command(2, "ls"), command(2, "pwd")]);
        assert!(matches!(
            result,
            Err(Error::NonIncreasingHistory {
                number: 2,
                previous: 2
            })
        ));
    }

    #[test]
    fn test_most_recent_keeps_tail() {
        let sequence = sample_sequence().most_recent(2);
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.at_position(1).unwrap().text, "cd /tmp");

        let everything = sample_sequence().most_recent(100);
        assert_eq!(everything, sample_sequence());
    }

    #[test]
    fn test_display_is_raw_text() {
        let quoted = command(1, r#"echo "it's here""#);
        assert_eq!(quoted.to_string(), r#"echo "it's here""#);
    }
}
