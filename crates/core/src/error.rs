use leon::{ParseError as TemplateParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not run `{}` to read the shell history: {}", .shell, .original)]
    HistorySpawn {
        shell: String,
        original: std::io::Error,
    },

    #[error("The history shell `{}` exited with a non-success code: {}", .shell, .stderr)]
    HistoryExit { shell: String, stderr: String },

    #[error("No history entries were found. Is the history empty?")]
    EmptyHistory,

    #[error("Error parsing history: `{}` is not a valid history number", .0)]
    HistoryNumber(String),

    #[error("Error parsing history: entry {} does not follow entry {}", .number, .previous)]
    NonIncreasingHistory { number: u64, previous: u64 },

    #[error("Invalid selection term: `{}`", .0)]
    InvalidSelectionTerm(String),

    #[error("Invalid selection: empty term in `{}`", .0)]
    EmptySelectionTerm(String),

    #[error("Invalid selection range `{}-{}`: start is greater than end", .min, .max)]
    ReversedSelectionRange { min: usize, max: usize },

    #[error("Selection {} is out of range, valid positions are 1 to {}", .position, .count)]
    SelectionOutOfRange { position: usize, count: usize },

    #[error("Script name may not be empty")]
    EmptyScriptName,

    #[error("Could not write script `{}`: {}", .path, .original)]
    ScriptWrite {
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Error parsing row format: {}", .0)]
    RowFormat(#[from] TemplateParseError),

    #[error("Unknown row format key `{}`, expected one of position, number, text or order", .0)]
    UnknownRowKey(String),

    #[error("Error rendering row format: {}", .0)]
    RowRender(#[from] RenderError),

    #[error("Error compiling history pattern: {}", .0)]
    Pattern(#[from] regex::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether the selection expression the user typed was rejected.
    #[must_use]
    pub fn is_invalid_selection(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelectionTerm(_)
                | Self::EmptySelectionTerm(_)
                | Self::ReversedSelectionRange { .. }
                | Self::SelectionOutOfRange { .. }
        )
    }

    /// Whether the script could not be saved.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::EmptyScriptName | Self::ScriptWrite { .. })
    }

    /// Recoverable errors are reported to the user and the session continues.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.is_invalid_selection() || self.is_persistence()
    }
}
