//! Histscript CLI Library
//!
//! This crate provides the command-line interface for histscript. It reads the
//! shell history, lets the user page through it and mark commands, and writes
//! the chosen commands, in the chosen order, to an executable script.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and configuration overrides
//! - [`menu`]: The menu state machine and the terminal it drives
//!
//! # Examples
//!
//! ```bash
//! # Pick from the most recent commands of your shell history
//! histscript
//!
//! # Read a history file instead, ten commands per page
//! histscript --history-file ~/.bash_history --page-size 10
//!
//! # Keep the whole history and write scripts into ~/bin
//! histscript --limit 0 --output-dir ~/bin
//! ```

pub mod cli_args;
pub mod menu;
