//! The working set of chosen commands.

use indexmap::IndexSet;

use crate::command::{Command, CommandSequence};
use crate::error::Result;
use crate::selection::resolve_selection;

/// Selected history numbers in script order.
///
/// A command's order is its index in the set plus one, so removing an entry
/// with `shift_remove` keeps the orders contiguous from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: IndexSet<u64>,
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the selection of the command with this history number.
    ///
    /// Returns `true` if the command is now selected.
    pub fn toggle(&mut self, number: u64) -> bool {
        if self.selected.shift_remove(&number) {
            false
        } else {
            self.selected.insert(number);
            true
        }
    }

    #[must_use]
    pub fn is_selected(&self, number: u64) -> bool {
        self.selected.contains(&number)
    }

    /// 1-based script order of a selected command.
    #[must_use]
    pub fn order_of(&self, number: u64) -> Option<usize> {
        self.selected.get_index_of(&number).map(|index| index + 1)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// History numbers in script order.
    pub fn numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected.iter().copied()
    }

    /// The selected commands sorted by order.
    #[must_use]
    pub fn snapshot<'a>(&self, sequence: &'a CommandSequence) -> Vec<&'a Command> {
        self.selected
            .iter()
            .filter_map(|&number| {
                sequence
                    .position_of(number)
                    .and_then(|position| sequence.at_position(position))
            })
            .collect()
    }

    /// Toggles every command named by a selection expression, in expression order.
    ///
    /// Nothing is toggled unless the whole expression resolves. Returns how
    /// many commands ended up selected and deselected.
    ///
    /// # Errors
    ///
    /// Returns an invalid selection error for a malformed or out-of-range expression.
    pub fn apply(&mut self, sequence: &CommandSequence, expression: &str) -> Result<(usize, usize)> {
        let positions = resolve_selection(expression, sequence.len())?;

        let (mut selected, mut deselected) = (0, 0);
        for command in positions
            .into_iter()
            .filter_map(|position| sequence.at_position(position))
        {
            if self.toggle(command.number) {
                selected += 1;
            } else {
                deselected += 1;
            }
        }

        Ok((selected, deselected))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
