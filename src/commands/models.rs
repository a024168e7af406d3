use crate::document::FileKind;
use std::path::PathBuf;

/// Arguments for the diff command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct DiffArgs {
    /// Original file
    pub left: PathBuf,

    /// Modified file
    pub right: PathBuf,

    /// Output path for the HTML document (stdout when absent)
    pub output: Option<PathBuf>,

    /// Kind applied to both files instead of detection
    pub file_type: Option<FileKind>,

    /// Trim every line before diffing
    pub ignore_whitespace: bool,

    /// Skip the external linters
    pub no_validation: bool,

    /// Sort mapping keys during canonicalization
    pub sort_keys: bool,

    /// Document title (overrides the config file)
    pub title: Option<String>,

    /// Print a coloured summary to stderr
    pub print_summary: bool,

    /// Optional TOML config file
    pub config: Option<PathBuf>,
}

/// Arguments for the canonicalize command
#[derive(Debug, Clone, Default)]
pub struct CanonicalizeArgs {
    /// File to canonicalize
    pub file: PathBuf,

    /// Kind to use instead of detection
    pub file_type: Option<FileKind>,

    /// Sort mapping keys
    pub sort_keys: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default)]
pub struct ValidateArgs {
    /// File to check
    pub file: PathBuf,

    /// Kind to use instead of detection
    pub file_type: Option<FileKind>,

    /// Optional TOML config file
    pub config: Option<PathBuf>,
}
