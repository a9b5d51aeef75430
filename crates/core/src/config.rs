//! Configuration loading for histscript.
//!
//! This module resolves the configuration file path, expands shell variables
//! like `~` in paths, and deserializes the optional YAML configuration that
//! controls paging, history limits and how selected commands are displayed.

use std::fs::File;
use std::path::Path;

use leon::Template;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.histscript/config.yml";

/// Default shell to use for dumping history
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Default number of commands shown per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default number of most recent history entries kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Default template for a command row
pub const DEFAULT_ROW_FORMAT: &str = "{position}: {text}";

/// Keys a row format may use
pub const ROW_FORMAT_KEYS: [&str; 4] = ["position", "number", "text", "order"];

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Styling handed to the terminal.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Leon template with the keys `position`, `number`, `text` and `order`.
    pub row_format: String,
    pub selected_foreground: Option<ColorDefinition>,
    pub selected_background: Option<ColorDefinition>,
    pub selected_bold: bool,
}

impl DisplayConfig {
    /// # Errors
    ///
    /// Returns an error if the row format does not parse or uses a key outside
    /// [`ROW_FORMAT_KEYS`].
    pub fn validate(&self) -> Result<()> {
        let template = Template::parse(&self.row_format)?;

        if let Some(key) = template.keys().find(|key| !ROW_FORMAT_KEYS.contains(*key)) {
            return Err(Error::UnknownRowKey((*key).to_string()));
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            row_format: DEFAULT_ROW_FORMAT.to_string(),
            selected_foreground: Some(ColorDefinition {
                rgb: None,
                ansi: None,
                name: Some("green".to_string()),
            }),
            selected_background: None,
            selected_bold: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub page_size: usize,
    /// `None` keeps the whole history.
    pub history_limit: Option<usize>,
    pub shell: Option<String>,
    pub output_directory: Option<String>,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            shell: None,
            output_directory: None,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// The shell used to dump history: configured, then `$SHELL`, then [`DEFAULT_SHELL`].
    #[must_use]
    pub fn shell(&self) -> String {
        self.shell
            .clone()
            .or_else(|| std::env::var("SHELL").ok())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string())
    }

    /// Directory scripts are written to, with `~` expanded.
    #[must_use]
    pub fn output_directory(&self) -> String {
        expand_path(self.output_directory.as_deref().unwrap_or("."))
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSize`] if the page size is zero, or an
    /// error for an unusable row format.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }

        self.display.validate()
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use histscript_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    expand_path(config_path)
}

/// Expands shell variables like `~` in a path.
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Loads the configuration, falling back to defaults when the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, is not valid YAML,
/// or describes an invalid configuration.
pub fn load_config(config_path: &str) -> Result<Config> {
    if !Path::new(config_path).exists() {
        debug!("No config at `{}`, using defaults", config_path);
        return Ok(Config::default());
    }

    let reader = File::open(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    let config: Config = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    config.validate()?;

    Ok(config)
}
