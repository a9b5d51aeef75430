//! Terminal input and output for the menu.
//!
//! The menu only talks to a [`Terminal`], so it can be driven by the real
//! console ([`ConsoleTerminal`]) or by a scripted terminal in tests.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{stdin, stdout, Stdout, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use histscript_core::command::Command;
use histscript_core::config::DisplayConfig;
use histscript_core::error::Result;
use leon::Template;

use super::colors::SelectedStyle;

/// One command row on a page.
pub struct CommandRow<'a> {
    /// 1-based display position.
    pub position: usize,
    /// Number of commands in the sequence, used to align positions.
    pub total: usize,
    pub command: &'a Command,
    /// Script order when selected.
    pub order: Option<usize>,
}

impl CommandRow<'_> {
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.order.is_some()
    }
}

pub trait Terminal {
    /// Shows `text` and reads one line. `None` means input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    fn prompt(&mut self, text: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn render(&mut self, text: &str) -> Result<()>;

    /// Selected rows are told apart by styling only, never by their text.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be formatted or written.
    fn render_row(&mut self, row: &CommandRow<'_>) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn render_error(&mut self, text: &str) -> Result<()>;
}

/// Pad a value to match the width of the largest value
#[must_use]
pub fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Renders a row through the configured row format.
///
/// # Errors
///
/// Returns an error if the format is not a valid template.
pub fn format_row(row_format: &str, row: &CommandRow<'_>) -> Result<String> {
    let template = Template::parse(row_format)?;

    let values: HashMap<String, String> = HashMap::from([
        (
            "position".to_string(),
            pad_to_width_of(row.position, row.total),
        ),
        ("number".to_string(), row.command.number.to_string()),
        ("text".to_string(), row.command.text.clone()),
        (
            "order".to_string(),
            row.order.map(|order| order.to_string()).unwrap_or_default(),
        ),
    ]);

    Ok(template.render(&values)?)
}

/// Line-based terminal on stdin and stdout.
pub struct ConsoleTerminal {
    stdout: Stdout,
    row_format: String,
    selected_style: SelectedStyle,
}

impl ConsoleTerminal {
    /// # Errors
    ///
    /// Returns an error if the row format or a selection color is invalid.
    pub fn new(display: &DisplayConfig) -> Result<Self> {
        display.validate()?;

        Ok(Self {
            stdout: stdout(),
            row_format: display.row_format.clone(),
            selected_style: SelectedStyle::from_display(display)?,
        })
    }
}

impl Terminal for ConsoleTerminal {
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset)
        )?;
        self.stdout.flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn render(&mut self, text: &str) -> Result<()> {
        queue!(self.stdout, Print(text), Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn render_row(&mut self, row: &CommandRow<'_>) -> Result<()> {
        let line = format_row(&self.row_format, row)?;

        if row.is_selected() {
            let style = self.selected_style;
            if style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if let Some(foreground) = style.foreground {
                queue!(self.stdout, SetForegroundColor(foreground))?;
            }
            if let Some(background) = style.background {
                queue!(self.stdout, SetBackgroundColor(background))?;
            }
        }

        queue!(
            self.stdout,
            Print(line),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    fn render_error(&mut self, text: &str) -> Result<()> {
        queue!(
            self.stdout,
            SetForegroundColor(Color::Red),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        self.stdout.flush()?;
        Ok(())
    }
}
