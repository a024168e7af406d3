//! Syntax validation through external lint tools.
//!
//! Linters are treated as opaque pass/fail oracles: exit status zero is a
//! pass, anything else is a failure whose output becomes the diagnostics.
//! The comparison core never spawns processes; callers pick a
//! [`Validator`] per file kind with [`validator_for`].

mod linter;

pub use linter::ExternalLinter;

use crate::document::FileKind;
use crate::utils::config::ValidationConfig;
use crate::utils::error::ValidationError;
use std::path::Path;

/// Result of one validator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The tool accepted the file
    Passed,

    /// The tool rejected the file
    Failed { diagnostics: String },

    /// The tool could not be used (not installed)
    Skipped { reason: String },
}

impl ValidationOutcome {
    /// Convert a failure into an error, keeping passes and skips
    pub fn into_result(self, tool: &str) -> Result<ValidationOutcome, ValidationError> {
        match self {
            ValidationOutcome::Failed { diagnostics } => Err(ValidationError::Rejected {
                tool: tool.to_string(),
                diagnostics,
            }),
            other => Ok(other),
        }
    }
}

/// Capability to check the syntax of a file
pub trait Validator {
    /// Name used in messages
    fn name(&self) -> &str;

    /// Check one file
    ///
    /// # Errors
    /// * `ValidationError::TimedOut` - The tool ran past its deadline
    /// * `ValidationError::SpawnFailed` - The tool exists but could not be run
    fn validate(&self, path: &Path, kind: FileKind) -> Result<ValidationOutcome, ValidationError>;
}

/// Pick the configured validator for a file kind
///
/// Returns `None` for plain text, which has no syntax to check.
pub fn validator_for(kind: FileKind, config: &ValidationConfig) -> Option<ExternalLinter> {
    let command = match kind {
        FileKind::Yaml => &config.yaml,
        FileKind::Json => &config.json,
        FileKind::Text => return None,
    };
    Some(ExternalLinter::new(command.clone()).with_timeout(config.timeout()))
}
