use std::fmt::Write as _;
use std::fs;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::command::CommandSequence;
use crate::error::{Error, Result};
use crate::history::parse_history;

/// Anything that can produce raw numbered history text.
pub trait HistorySource {
    /// # Errors
    ///
    /// Returns an error if the history could not be obtained.
    fn fetch(&self) -> Result<String>;
}

/// Dumps history from an interactive shell.
pub struct ShellHistory {
    pub shell: String,
}

impl HistorySource for ShellHistory {
    fn fetch(&self) -> Result<String> {
        info!("Reading history with `{}`", self.shell);

        // `-i` makes the shell load its history file; `history -r` reloads it
        // in case the rc files did not.
        let output = Command::new(&self.shell)
            .args(["-i", "-c", "history -r; history"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::HistorySpawn {
                shell: self.shell.clone(),
                original: e,
            })?;

        if !output.status.success() {
            return Err(Error::HistoryExit {
                shell: self.shell.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reads a plain history file such as `~/.bash_history`.
///
/// The file holds one command per line, so entries are numbered by line as
/// they are read. Timestamp comments (`#1700000000`) are not commands.
pub struct HistoryFile {
    pub path: String,
}

impl HistorySource for HistoryFile {
    fn fetch(&self) -> Result<String> {
        info!("Reading history file `{}`", self.path);

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| Error::io_error("history".to_string(), self.path.clone(), e))?;

        Ok(number_history_lines(&contents))
    }
}

fn is_timestamp(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

fn number_history_lines(contents: &str) -> String {
    let mut numbered = String::new();

    for (i, line) in contents
        .lines()
        .filter(|line| !is_timestamp(line) && !line.trim().is_empty())
        .enumerate()
    {
        let _ = writeln!(numbered, "{:>5}  {}", i + 1, line);
    }

    numbered
}

/// Fixed history text, mostly for tests.
pub struct StaticHistory(pub String);

impl HistorySource for StaticHistory {
    fn fetch(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Fetches and parses history, keeping at most `limit` recent commands.
///
/// # Errors
///
/// Returns an error if the source fails, the text cannot be parsed, or it
/// holds no commands at all.
pub fn load_history(source: &dyn HistorySource, limit: Option<usize>) -> Result<CommandSequence> {
    let raw = source.fetch()?;
    let mut sequence = parse_history(&raw)?;

    if let Some(limit) = limit {
        sequence = sequence.most_recent(limit);
    }

    if sequence.is_empty() {
        return Err(Error::EmptyHistory);
    }

    debug!("Loaded {} commands", sequence.len());

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_number_history_lines_skips_timestamps() {
        let contents = "#1700000000\nls -la\n\n#1700000005\ncd /tmp\n#not a timestamp\n";
        let numbered = number_history_lines(contents);
        assert_eq!(
            numbered,
            "    1  ls -la\n    2  cd /tmp\n    3  #not a timestamp\n"
        );
    }

    #[test]
    fn test_history_file_round_trips_through_parser() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "ls\necho \"hi there\"\n").unwrap();

        let source = HistoryFile {
            path: temp_file.path().to_str().unwrap().to_string(),
        };
        let sequence = load_history(&source, None).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.at_position(2).unwrap().text, "echo \"hi there\"");
    }

    #[test]
    fn test_missing_history_file() {
        let source = HistoryFile {
            path: "/this/path/does/not/exist".to_string(),
        };
        assert!(matches!(source.fetch(), Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_history_applies_limit() {
        let source = StaticHistory("  1  a\n  2  b\n  3  c\n".to_string());
        let sequence = load_history(&source, Some(2)).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.at_position(1).unwrap().text, "b");
    }

    #[test]
    fn test_load_history_nothing_parseable() {
        let source = StaticHistory("no history here\n".to_string());
        assert!(matches!(
            load_history(&source, None),
            Err(Error::EmptyHistory)
        ));
    }

    #[test]
    fn test_missing_shell_fails_to_spawn() {
        let source = ShellHistory {
            shell: "/this/shell/does/not/exist".to_string(),
        };
        assert!(matches!(source.fetch(), Err(Error::HistorySpawn { .. })));
    }
}
