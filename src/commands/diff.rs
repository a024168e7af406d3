//! Diff command implementation.
//!
//! The diff command:
//! 1. Checks that both input files exist
//! 2. Runs the external linters (unless disabled)
//! 3. Reads both files
//! 4. Compares them (canonicalize, normalize, diff, render)
//! 5. Writes the HTML document to a file or stdout

use super::models::DiffArgs;
use super::utils::{load_tool_config, read_input, resolve_kind};
use crate::compare::{compare_detailed, CompareOptions, Input};
use crate::diff::render_terminal_summary;
use crate::document::FileKind;
use crate::events::LogSink;
use crate::output::{emit, OutputTarget};
use crate::utils::config::ValidationConfig;
use crate::utils::error::{DiffError, ValidationError};
use crate::validation::{validator_for, ValidationOutcome, Validator};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the diff command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Diff command arguments
///
/// # Returns
/// Ok if the diff was produced, Err with context if any step fails
///
/// # Errors
/// * Missing input files
/// * Linter rejections or timeouts
/// * Malformed YAML/JSON
/// * File read/write errors
///
/// # Example
/// ```ignore
/// let args = DiffArgs {
///     left: PathBuf::from("old.yaml"),
///     right: PathBuf::from("new.yaml"),
///     output: Some(PathBuf::from("diff.html")),
///     ..Default::default()
/// };
///
/// execute_diff(args)?;
/// ```
pub fn execute_diff(args: DiffArgs) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Comparing {} with {}",
        args.left.display(),
        args.right.display()
    );

    let config = load_tool_config(args.config.as_deref())?;

    // Step 1: Check inputs
    info!("Step 1/5: Checking input files...");
    for path in [&args.left, &args.right] {
        if !path.is_file() {
            return Err(DiffError::FileNotFound(path.clone()).into());
        }
    }

    // Step 2: Validate syntax
    if args.no_validation || !config.validation.enabled {
        info!("Step 2/5: Skipping validation (disabled)");
    } else {
        info!("Step 2/5: Validating input files...");
        for path in [&args.left, &args.right] {
            let kind = resolve_kind(path, args.file_type);
            validate_input(path, kind, &config.validation)?;
        }
    }

    // Step 3: Read inputs
    info!("Step 3/5: Reading input files...");
    let left_content = read_input(&args.left)?;
    let right_content = read_input(&args.right)?;
    debug!(
        "Read {} + {} bytes",
        left_content.len(),
        right_content.len()
    );

    // Step 4: Compare
    info!("Step 4/5: Generating diff...");
    let left = to_input(&args.left, left_content, &args);
    let right = to_input(&args.right, right_content, &args);

    let options = CompareOptions::new()
        .with_ignore_whitespace(args.ignore_whitespace)
        .with_sort_keys(args.sort_keys || config.canonical.sort_keys)
        .with_title(args.title.clone().unwrap_or(config.output.title));

    let comparison = compare_detailed(&left, &right, &options, &LogSink)?;

    // Step 5: Write output
    info!("Step 5/5: Writing output...");
    let target = OutputTarget::from_option(args.output.clone());
    match &target {
        OutputTarget::File(path) => {
            emit(&comparison.html, &target).map_err(|e| DiffError::Io {
                path: path.clone(),
                source: e.into(),
            })?;
            info!("Diff saved to {}", path.display());
        }
        OutputTarget::Stdout => {
            emit(&comparison.html, &target).context("Failed to write diff to stdout")?;
        }
    }

    if args.print_summary {
        eprintln!(
            "{}",
            render_terminal_summary(
                &comparison.script.stats(),
                &left.label,
                &right.label
            )
        );
    }

    let elapsed = start_time.elapsed();
    info!("Diff completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate diff arguments
///
/// **Public** - can be called before execute_diff for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &DiffArgs) -> Result<()> {
    if args.left.as_os_str().is_empty() || args.right.as_os_str().is_empty() {
        anyhow::bail!("Input file paths cannot be empty");
    }

    if let Some(title) = &args.title {
        if title.trim().is_empty() {
            anyhow::bail!("Title cannot be empty");
        }
    }

    OutputTarget::from_option(args.output.clone())
        .validate()
        .context("Invalid output path")?;

    Ok(())
}

/// Run the configured linter on one input
///
/// **Private** - a missing linter only warns, a rejection aborts
fn validate_input(
    path: &Path,
    kind: FileKind,
    config: &ValidationConfig,
) -> Result<(), DiffError> {
    let Some(validator) = validator_for(kind, config) else {
        debug!("No validator for {} ({})", path.display(), kind);
        return Ok(());
    };

    let failure = |source: ValidationError| DiffError::ValidationFailure {
        path: path.to_path_buf(),
        source,
    };

    let outcome = validator
        .validate(path, kind)
        .and_then(|outcome| outcome.into_result(validator.name()))
        .map_err(failure)?;

    match outcome {
        ValidationOutcome::Skipped { reason } => {
            warn!("{}; skipping validation of {}", reason, path.display());
        }
        _ => info!("✓ {} passed {}", path.display(), validator.name()),
    }

    Ok(())
}

fn to_input(path: &Path, content: String, args: &DiffArgs) -> Input {
    let label = path.display().to_string();
    match args.file_type {
        Some(kind) => Input::new(label, content, kind),
        None => Input::detected(label, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> DiffArgs {
        DiffArgs {
            left: PathBuf::from("a.yaml"),
            right: PathBuf::from("b.yaml"),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_path() {
        let args = DiffArgs {
            left: PathBuf::new(),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_blank_title() {
        let args = DiffArgs {
            title: Some("  ".to_string()),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = DiffArgs {
            output: Some(dir.path().to_path_buf()),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_below_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let args = DiffArgs {
            output: Some(blocker.join("diff.html")),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let args = DiffArgs {
            left: dir.path().join("missing.yaml"),
            right: dir.path().join("also-missing.yaml"),
            no_validation: true,
            ..Default::default()
        };

        let err = execute_diff(args).unwrap_err();
        let diff_err = err.downcast_ref::<DiffError>().unwrap();
        assert!(matches!(diff_err, DiffError::FileNotFound(_)));
    }
}
