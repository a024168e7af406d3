//! Configuration and constants for the CLI.
//!
//! Compile-time defaults live here as constants. An optional TOML file
//! can override the validator commands, timeout, key ordering and the
//! HTML title; command-line flags win over both.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Indentation used by the canonical JSON and YAML forms
pub const CANONICAL_INDENT: &[u8] = b"  ";

/// File extensions recognised as YAML (compared lowercase, without the dot)
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// File extensions recognised as JSON
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Default timeout for an external validator run
pub const DEFAULT_VALIDATOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Default external linters
pub const DEFAULT_YAML_LINTER: &str = "yamllint";
pub const DEFAULT_JSON_LINTER: &str = "jsonlint";

/// Title of the generated HTML document
pub const DEFAULT_TITLE: &str = "Configuration Diff";

// Background colours for the two edit markers
pub const DELETE_BACKGROUND: &str = "#ffe6e6";
pub const INSERT_BACKGROUND: &str = "#e6ffe6";

/// Environment variable that can point at a config file
pub const CONFIG_ENV_VAR: &str = "CONFIG_DIFF_CONFIG";

/// Complete tool configuration, as read from TOML
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Validator settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Canonicalization settings
    #[serde(default)]
    pub canonical: CanonicalConfig,

    /// Rendered document settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validator settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Run external linters before diffing
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Per-run timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Linter used for YAML files
    #[serde(default = "default_yaml_linter")]
    pub yaml: LinterCommand,

    /// Linter used for JSON files
    #[serde(default = "default_json_linter")]
    pub json: LinterCommand,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_timeout_secs(),
            yaml: default_yaml_linter(),
            json: default_json_linter(),
        }
    }
}

impl ValidationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// An external command; the file path is appended after `args`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinterCommand {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl LinterCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Canonicalization settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CanonicalConfig {
    /// Sort mapping keys instead of preserving source order
    #[serde(default)]
    pub sort_keys: bool,
}

/// Rendered document settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    DEFAULT_VALIDATOR_TIMEOUT.as_secs()
}

fn default_yaml_linter() -> LinterCommand {
    LinterCommand::new(DEFAULT_YAML_LINTER)
}

fn default_json_linter() -> LinterCommand {
    LinterCommand::new(DEFAULT_JSON_LINTER)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Load the tool configuration from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If the file cannot be read
/// * `ConfigError::ParseFailed` - If the TOML is invalid
///
/// # Example
/// ```ignore
/// let config = load_config("config-diff.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ToolConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ToolConfig = toml::from_str(&contents)?;

    if config.validation.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "validation.timeout_secs must be greater than 0".to_string(),
        ));
    }

    Ok(config)
}
