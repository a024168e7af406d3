//! Delivery of the rendered document.
//!
//! The document goes either to stdout or to a file. File writes go
//! through a temporary file in the destination directory that is renamed
//! into place once complete, so a failed run never leaves a truncated
//! HTML file behind and never clobbers the previous one.

use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Destination of a rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-o PATH` selects a file, no flag selects stdout
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Check the destination before any work is done
    pub fn validate(&self) -> Result<(), OutputError> {
        match self {
            OutputTarget::Stdout => Ok(()),
            OutputTarget::File(path) => validate_output_path(path),
        }
    }
}

/// Send a rendered document to its target
///
/// # Errors
/// * `OutputError::InvalidPath` - The file path cannot be written to
/// * `OutputError::WriteFailed` - Writing stdout or the file failed
pub fn emit(content: &str, target: &OutputTarget) -> Result<(), OutputError> {
    match target {
        OutputTarget::Stdout => {
            let mut handle = std::io::stdout().lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
            Ok(())
        }
        OutputTarget::File(path) => write_output(content, path),
    }
}

/// Write a document to `output_path`, replacing it atomically
///
/// Missing parent directories are created.
///
/// # Example
/// ```ignore
/// let html = render(&script, &RenderOptions::new());
/// write_output(&html, "reports/diff.html")?;
/// ```
pub fn write_output(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    validate_output_path(output_path)?;

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        debug!("Creating output directory {}", dir.display());
        std::fs::create_dir_all(dir)
            .map_err(|e| OutputError::InvalidPath(format!("Cannot create {}: {}", dir.display(), e)))?;
    }

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    staged
        .persist(output_path)
        .map_err(|e| OutputError::WriteFailed(e.error))?;

    debug!("{} bytes written to {}", content.len(), output_path.display());
    Ok(())
}

/// Reject paths that can never hold the document
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    // The nearest existing ancestor has to be a directory
    let blocked = path
        .ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .find(|p| p.exists())
        .is_some_and(|p| !p.is_dir());
    if blocked {
        return Err(OutputError::InvalidPath(format!(
            "{} is inside a file, not a directory",
            path.display()
        )));
    }

    Ok(())
}
