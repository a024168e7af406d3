use super::models::{CanonicalizeArgs, ValidateArgs};
use crate::document::{canonicalize, detect_type, CanonicalOptions, FileKind};
use crate::utils::config::{load_config, ToolConfig};
use crate::utils::error::DiffError;
use crate::validation::{validator_for, ValidationOutcome, Validator};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Load the TOML config if a path was given, otherwise use defaults
pub fn load_tool_config(path: Option<&Path>) -> Result<ToolConfig> {
    match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))
        }
        None => Ok(ToolConfig::default()),
    }
}

/// Explicit kind if given, otherwise detect from the extension
pub fn resolve_kind(path: &Path, explicit: Option<FileKind>) -> FileKind {
    explicit.unwrap_or_else(|| detect_type(path))
}

/// Read an input file as UTF-8 text
pub fn read_input(path: &Path) -> Result<String, DiffError> {
    if !path.is_file() {
        return Err(DiffError::FileNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the canonical form of a file
pub fn canonicalize_file(args: CanonicalizeArgs) -> Result<()> {
    let kind = resolve_kind(&args.file, args.file_type);
    info!("Canonicalizing {} as {}", args.file.display(), kind);

    let content = read_input(&args.file)?;
    let options = CanonicalOptions::new().with_sort_keys(args.sort_keys);
    let text = canonicalize(&content, kind, options).map_err(|source| DiffError::Parse {
        label: args.file.display().to_string(),
        kind,
        source,
    })?;

    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Run the configured linter on a single file
pub fn validate_file(args: ValidateArgs) -> Result<()> {
    let config = load_tool_config(args.config.as_deref())?;
    let kind = resolve_kind(&args.file, args.file_type);

    println!("Validating {} ({})", args.file.display(), kind);

    if !args.file.is_file() {
        return Err(DiffError::FileNotFound(args.file).into());
    }

    let Some(validator) = validator_for(kind, &config.validation) else {
        println!("  Nothing to check for plain text");
        return Ok(());
    };

    let outcome = validator
        .validate(&args.file, kind)
        .map_err(|source| DiffError::ValidationFailure {
            path: args.file.clone(),
            source,
        })?;

    match outcome {
        ValidationOutcome::Passed => println!("✓ Passed {}", validator.name()),
        ValidationOutcome::Skipped { reason } => println!("- Skipped: {}", reason),
        ValidationOutcome::Failed { diagnostics } => {
            println!("✗ Rejected by {}", validator.name());
            for line in diagnostics.lines() {
                println!("  {}", line);
            }
            anyhow::bail!("{} failed validation", args.file.display());
        }
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("config-diff v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Compare YAML, JSON and text configuration files as an HTML diff.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_kind_prefers_explicit() {
        assert_eq!(
            resolve_kind(Path::new("a.yaml"), Some(FileKind::Text)),
            FileKind::Text
        );
        assert_eq!(resolve_kind(Path::new("a.yaml"), None), FileKind::Yaml);
    }

    #[test]
    fn test_read_input_missing() {
        let err = read_input(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DiffError::FileNotFound(p) if p == PathBuf::from("/definitely/not/here.json")));
    }

    #[test]
    fn test_default_config_without_path() {
        let config = load_tool_config(None).unwrap();
        assert!(config.validation.enabled);
    }
}
