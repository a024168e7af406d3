//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::document::FileKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing structured content
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur while running an external validator
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{tool} reported errors:\n{diagnostics}")]
    Rejected { tool: String, diagnostics: String },

    #[error("{tool} did not finish within {seconds}s")]
    TimedOut { tool: String, seconds: u64 },

    #[error("failed to run {tool}: {source}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

impl From<OutputError> for std::io::Error {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::WriteFailed(e) => e,
            OutputError::InvalidPath(msg) => {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, msg)
            }
        }
    }
}

/// Errors that can occur while loading the TOML config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Terminal errors of a comparison; any of them aborts the whole run
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Validation failed for {}: {source}", .path.display())]
    ValidationFailure {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Error parsing {kind} file {label}: {source}")]
    Parse {
        label: String,
        kind: FileKind,
        #[source]
        source: ParseError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error generating diff: {0}")]
    InternalDiff(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_file_and_kind() {
        let source = serde_json::from_str::<serde_json::Value>("{a: 1}").unwrap_err();
        let err = DiffError::Parse {
            label: "left.json".to_string(),
            kind: FileKind::Json,
            source: ParseError::from(source),
        };

        let message = err.to_string();
        assert!(message.starts_with("Error parsing json file left.json: invalid JSON"));
    }

    #[test]
    fn test_file_not_found_message() {
        let err = DiffError::FileNotFound(PathBuf::from("missing.yaml"));
        assert_eq!(err.to_string(), "File not found: missing.yaml");
    }
}
