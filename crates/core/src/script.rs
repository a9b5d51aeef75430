//! Writing the generated script to disk.
//!
//! A script is a bash shebang line followed by one selected command per line,
//! in selection order. Written scripts are made executable.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

pub const SCRIPT_SHEBANG: &str = "#!/bin/bash";

const SCRIPT_EXTENSION: &str = "sh";

/// Persists an ordered list of commands under a user supplied name.
pub trait ScriptWriter {
    /// The path a script with this name would be written to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScriptName`] if the name is blank.
    fn script_path(&self, name: &str) -> Result<PathBuf>;

    /// Writes the script, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the name is blank or the file cannot be written.
    fn save(&self, name: &str, commands: &[&str]) -> Result<PathBuf>;
}

/// Writes scripts into a directory.
pub struct FileScriptWriter {
    pub directory: PathBuf,
}

impl FileScriptWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ScriptWriter for FileScriptWriter {
    fn script_path(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyScriptName);
        }

        let mut path = self.directory.join(name);
        if path.extension().is_none() {
            path.set_extension(SCRIPT_EXTENSION);
        }

        Ok(path)
    }

    fn save(&self, name: &str, commands: &[&str]) -> Result<PathBuf> {
        let path = self.script_path(name)?;

        fs::write(&path, render_script(commands)).map_err(|e| write_error(&path, e))?;
        make_executable(&path)?;

        info!("Wrote {} commands to `{}`", commands.len(), path.display());

        Ok(path)
    }
}

fn write_error(path: &Path, original: std::io::Error) -> Error {
    Error::ScriptWrite {
        path: path.display().to_string(),
        original,
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| write_error(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions).map_err(|e| write_error(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// The full text of a script.
#[must_use]
pub fn render_script(commands: &[&str]) -> String {
    let mut script = String::from(SCRIPT_SHEBANG);
    script.push('\n');

    for command in commands {
        script.push_str(command);
        script.push('\n');
    }

    script
}
