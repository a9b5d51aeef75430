//! The interactive menu loop.
//!
//! A [`Session`] owns the parsed history, the cursor and the selection, and
//! advances one [`MenuState`] at a time until it reaches
//! [`MenuState::Finished`].

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;
use log::{debug, info, warn};

use histscript_core::command::CommandSequence;
use histscript_core::error::{Error, Result};
use histscript_core::history_source::{load_history, HistorySource};
use histscript_core::pager::{self, page};
use histscript_core::script::ScriptWriter;
use histscript_core::selection_store::SelectionStore;

use super::state::{MainChoice, MenuState, SelectChoice};
use super::terminal::{pad_to_width_of, CommandRow, Terminal};

/// Settings that shape a session.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    pub page_size: usize,
    /// Keep only this many recent commands.
    pub history_limit: Option<usize>,
}

pub struct Session<T, H, W> {
    terminal: T,
    source: H,
    writer: W,
    options: SessionOptions,
    sequence: CommandSequence,
    store: SelectionStore,
    cursor: usize,
    state: MenuState,
}

impl<T, H, W> Session<T, H, W>
where
    T: Terminal,
    H: HistorySource,
    W: ScriptWriter,
{
    /// Loads history and sets up a session at the main menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is zero or the history cannot be
    /// loaded. Nothing has been shown to the user at that point.
    pub fn start(terminal: T, source: H, writer: W, options: SessionOptions) -> Result<Self> {
        if options.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }

        let sequence = load_history(&source, options.history_limit)?;
        info!("Session started with {} commands", sequence.len());

        Ok(Self {
            terminal,
            source,
            writer,
            options,
            sequence,
            store: SelectionStore::new(),
            cursor: 0,
            state: MenuState::MainMenu,
        })
    }

    /// Runs until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns the first unrecoverable error.
    pub fn run(&mut self) -> Result<()> {
        while self.state != MenuState::Finished {
            self.step()?;
        }

        Ok(())
    }

    /// Handles the current state and moves to the next one.
    ///
    /// # Errors
    ///
    /// Returns an unrecoverable error. Recoverable errors are reported to the
    /// user and the session stays usable.
    pub fn step(&mut self) -> Result<MenuState> {
        let next = match self.state {
            MenuState::MainMenu => self.show_main_menu()?,
            MenuState::AwaitMainChoice => self.await_main_choice()?,
            MenuState::SelectMenu => self.show_select_menu()?,
            MenuState::AwaitSelectChoice => self.await_select_choice()?,
            MenuState::IncrementCursor => self.move_cursor(pager::next_cursor)?,
            MenuState::DecrementCursor => self.move_cursor(pager::previous_cursor)?,
            MenuState::Generate => self.generate()?,
            MenuState::Finished => MenuState::Finished,
        };

        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;

        Ok(next)
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn sequence(&self) -> &CommandSequence {
        &self.sequence
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionStore {
        &self.store
    }

    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    fn report(&mut self, error: Error, next: MenuState) -> Result<MenuState> {
        if !error.is_recoverable() {
            return Err(error);
        }

        warn!("{error}");
        self.terminal.render_error(&error.to_string())?;
        Ok(next)
    }

    fn show_main_menu(&mut self) -> Result<MenuState> {
        self.terminal.render(&format!(
            "Main menu ({} commands, {} selected)",
            self.sequence.len(),
            self.store.count()
        ))?;
        for line in [
            "  1) [p]review selected commands",
            "  2) [g]enerate script",
            "  3) [s]elect commands",
            "  4) [r]estart and reload history",
            "  5) [e]dit selection",
            "  6) [q]uit",
        ] {
            self.terminal.render(line)?;
        }

        Ok(MenuState::AwaitMainChoice)
    }

    fn await_main_choice(&mut self) -> Result<MenuState> {
        let Some(input) = self.terminal.prompt("Choice: ")? else {
            return Ok(MenuState::Finished);
        };

        let Some(choice) = MainChoice::parse(&input) else {
            self.terminal
                .render_error(&format!("Unrecognized choice `{}`", input.trim()))?;
            return Ok(MenuState::AwaitMainChoice);
        };

        Ok(match choice {
            MainChoice::Preview => {
                self.preview()?;
                MenuState::MainMenu
            }
            MainChoice::Generate => MenuState::Generate,
            MainChoice::Select => MenuState::SelectMenu,
            MainChoice::Restart => {
                self.restart()?;
                MenuState::MainMenu
            }
            MainChoice::Edit => {
                self.cursor = self.first_selected_cursor();
                MenuState::SelectMenu
            }
            MainChoice::Quit => MenuState::Finished,
        })
    }

    fn preview(&mut self) -> Result<()> {
        let snapshot = self.store.snapshot(&self.sequence);
        if snapshot.is_empty() {
            return self.terminal.render("No commands selected.");
        }

        let total = snapshot.len();
        let lines: Vec<String> = snapshot
            .iter()
            .enumerate()
            .map(|(i, command)| format!("  {}. {}", pad_to_width_of(i + 1, total), command.text))
            .collect();

        self.terminal.render("Script preview:")?;
        for line in lines {
            self.terminal.render(&line)?;
        }

        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.sequence = load_history(&self.source, self.options.history_limit)?;
        self.store.clear();
        self.cursor = 0;

        info!("Reloaded {} commands", self.sequence.len());
        self.terminal.render(&format!(
            "Reloaded {} commands, selection cleared.",
            self.sequence.len()
        ))
    }

    /// Cursor for the page holding the earliest selected command.
    fn first_selected_cursor(&self) -> usize {
        self.store
            .numbers()
            .filter_map(|number| self.sequence.position_of(number))
            .min()
            .map_or(0, |position| {
                pager::cursor_for_index(position - 1, self.sequence.len(), self.options.page_size)
            })
    }

    fn show_select_menu(&mut self) -> Result<MenuState> {
        let total = self.sequence.len();
        let shown = page(total, self.cursor, self.options.page_size);

        self.terminal.render(&format!(
            "Commands {}-{} of {} ({} selected)",
            shown.range.start + 1,
            shown.range.end,
            total,
            self.store.count()
        ))?;

        for index in shown.range.clone() {
            let command = &self.sequence.commands()[index];
            let row = CommandRow {
                position: index + 1,
                total,
                command,
                order: self.store.order_of(command.number),
            };
            self.terminal.render_row(&row)?;
        }

        let mut hints = Vec::new();
        if shown.has_previous {
            hints.push("[p]revious");
        }
        if shown.has_next {
            hints.push("[n]ext");
        }
        hints.extend(["[m]ain menu", "[q]uit", "/search", "or toggle e.g. 3,1-2"]);
        self.terminal.render(&hints.iter().join("  "))?;

        Ok(MenuState::AwaitSelectChoice)
    }

    fn await_select_choice(&mut self) -> Result<MenuState> {
        let Some(input) = self.terminal.prompt("Select: ")? else {
            return Ok(MenuState::Finished);
        };

        match SelectChoice::parse(&input) {
            SelectChoice::PreviousPage => Ok(MenuState::DecrementCursor),
            SelectChoice::NextPage => Ok(MenuState::IncrementCursor),
            SelectChoice::MainMenu => Ok(MenuState::MainMenu),
            SelectChoice::Quit => Ok(MenuState::Finished),
            SelectChoice::Nothing => Ok(MenuState::AwaitSelectChoice),
            SelectChoice::Search(pattern) => self.search(&pattern),
            SelectChoice::Expression(expression) => {
                match self.store.apply(&self.sequence, &expression) {
                    Ok((selected, deselected)) => {
                        debug!("`{expression}` selected {selected}, deselected {deselected}");
                        Ok(MenuState::SelectMenu)
                    }
                    Err(e) => self.report(e, MenuState::AwaitSelectChoice),
                }
            }
        }
    }

    fn search(&mut self, pattern: &str) -> Result<MenuState> {
        if pattern.is_empty() {
            return Ok(MenuState::AwaitSelectChoice);
        }

        let matcher = SkimMatcherV2::default();
        let best = self
            .sequence
            .commands()
            .iter()
            .enumerate()
            .filter_map(|(index, command)| {
                matcher
                    .fuzzy_match(&command.text, pattern)
                    .map(|score| (index, score))
            })
            .max_by_key(|&(_, score)| score);

        let Some((index, _)) = best else {
            self.terminal
                .render_error(&format!("No command matches `{pattern}`"))?;
            return Ok(MenuState::AwaitSelectChoice);
        };

        self.cursor = pager::cursor_for_index(index, self.sequence.len(), self.options.page_size);
        self.terminal
            .render(&format!("Best match for `{pattern}` is {}", index + 1))?;

        Ok(MenuState::SelectMenu)
    }

    fn move_cursor(&mut self, step: fn(usize, usize, usize) -> usize) -> Result<MenuState> {
        let moved = step(self.cursor, self.sequence.len(), self.options.page_size);
        if moved == self.cursor {
            self.terminal.render("No more commands in that direction.")?;
        }
        self.cursor = moved;

        Ok(MenuState::SelectMenu)
    }

    fn generate(&mut self) -> Result<MenuState> {
        if self.store.is_empty() {
            self.terminal
                .render("No commands selected, nothing to generate.")?;
            return Ok(MenuState::MainMenu);
        }

        let Some(name) = self.terminal.prompt("Script name: ")? else {
            return Ok(MenuState::Finished);
        };

        let path = match self.writer.script_path(&name) {
            Ok(path) => path,
            Err(e) => return self.report(e, MenuState::MainMenu),
        };

        if path.exists() {
            let question = format!("`{}` exists, overwrite? ([y]es/[N]o): ", path.display());
            let Some(answer) = self.terminal.prompt(&question)? else {
                return Ok(MenuState::Finished);
            };
            if answer.trim().to_lowercase() != "y" {
                self.terminal.render("Script not written.")?;
                return Ok(MenuState::MainMenu);
            }
        }

        let snapshot: Vec<&str> = self
            .store
            .snapshot(&self.sequence)
            .iter()
            .map(|command| command.text.as_str())
            .collect();

        match self.writer.save(&name, &snapshot) {
            Ok(path) => {
                self.terminal.render(&format!(
                    "Wrote {} commands to `{}`",
                    snapshot.len(),
                    path.display()
                ))?;
                Ok(MenuState::MainMenu)
            }
            Err(e) => self.report(e, MenuState::MainMenu),
        }
    }
}
