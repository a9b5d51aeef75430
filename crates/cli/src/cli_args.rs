//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate, and folds the arguments over the loaded configuration.

use clap::Parser;
use histscript_core::config::Config;

/// Command-line arguments for the histscript CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use histscript_cli::cli_args::Args;
///
/// let args = Args::parse_from(["histscript", "--page-size", "10"]);
/// assert_eq!(args.page_size, Some(10));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the configuration YAML.
    ///
    /// If not provided, defaults to `~/.histscript/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Read commands from a plain history file instead of asking the shell.
    #[arg(long, short = 'f')]
    pub history_file: Option<String>,

    /// Number of commands shown per page.
    #[arg(long, short = 'n')]
    pub page_size: Option<usize>,

    /// Keep only this many of the most recent commands. `0` keeps them all.
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Directory generated scripts are written to.
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,
}

impl Args {
    /// Applies command-line values over the configuration.
    #[must_use]
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }

        if let Some(limit) = self.limit {
            config.history_limit = (limit > 0).then_some(limit);
        }

        if let Some(output_dir) = &self.output_dir {
            config.output_directory = Some(output_dir.clone());
        }

        config
    }
}
