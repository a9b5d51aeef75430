//! Interactive menu for picking history commands.
//!
//! This module provides the line-based user interface for histscript: a main
//! menu, a paged select menu where commands are toggled with selection
//! expressions, and script generation.
//!
//! # User Interface
//!
//! At the main menu:
//! - `1`/`p` previews the script, `2`/`g` generates it
//! - `3`/`s` and `5`/`e` open the select menu
//! - `4`/`r` reloads history, `6`/`q` quits
//!
//! At the select menu:
//! - `p`/`n` page backwards and forwards, `m` returns to the main menu
//! - `/pattern` jumps to the best fuzzy match
//! - `3,1-2` toggles commands; the order typed is the order in the script
//! - `q` quits

pub mod colors;
pub mod session;
pub mod state;
pub mod terminal;

pub use session::{Session, SessionOptions};
pub use state::{MainChoice, MenuState, SelectChoice};
pub use terminal::{CommandRow, ConsoleTerminal, Terminal};
