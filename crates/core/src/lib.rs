//! Histscript Core Library
//!
//! This crate provides the core functionality for histscript, a tool that turns
//! a hand-picked, reordered subset of your shell history into an executable
//! script.
//!
//! # Key Features
//!
//! - **History Parsing**: Turn `history` output into an ordered command sequence
//! - **Selection Expressions**: Parse `3,1-2,7` style selections into positions
//! - **Paging**: Compute the visible window for a cursor and page size
//! - **Selection Store**: Track chosen commands and their script order
//! - **Script Persistence**: Write the chosen commands as an executable script
//!
//! # Examples
//!
//! ```
//! use histscript_core::history::parse_history;
//! use histscript_core::selection_store::SelectionStore;
//!
//! let sequence = parse_history("    1  ls\n    2  cd /tmp\n    3  git status\n")?;
//! let mut store = SelectionStore::new();
//! store.apply(&sequence, "3,1")?;
//!
//! let texts: Vec<&str> = store.snapshot(&sequence).iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(texts, vec!["git status", "ls"]);
//! # Ok::<(), histscript_core::error::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod history_source;
pub mod pager;
pub mod script;
pub mod selection;
pub mod selection_store;
