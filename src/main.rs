//! config-diff CLI
//!
//! Compares two configuration files and writes an HTML diff.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use config_diff::commands::{
    canonicalize_file, display_version, execute_diff, validate_args, validate_file,
    CanonicalizeArgs, DiffArgs, ValidateArgs,
};
use config_diff::document::FileKind;
use config_diff::utils::config::CONFIG_ENV_VAR;

/// config-diff - HTML diffs of YAML, JSON and text configuration files
#[derive(Parser, Debug)]
#[command(name = "config-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two files and render an HTML diff
    Diff {
        /// Original file
        file1: PathBuf,

        /// Modified file
        file2: PathBuf,

        /// Output HTML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File type for both files (detected from the extension if omitted)
        #[arg(short = 't', long = "type", value_enum)]
        file_type: Option<FileKind>,

        /// Ignore leading/trailing whitespace on every line
        #[arg(long)]
        ignore_whitespace: bool,

        /// Skip the external syntax linters
        #[arg(long)]
        no_validation: bool,

        /// Sort mapping keys before comparing
        #[arg(long)]
        sort_keys: bool,

        /// HTML document title
        #[arg(long)]
        title: Option<String>,

        /// Print a change summary to stderr
        #[arg(long)]
        summary: bool,

        /// TOML config file
        #[arg(long, env = CONFIG_ENV_VAR)]
        config: Option<PathBuf>,
    },

    /// Print the canonical form a file is diffed in
    Canonicalize {
        /// File to canonicalize
        file: PathBuf,

        /// File type (detected from the extension if omitted)
        #[arg(short = 't', long = "type", value_enum)]
        file_type: Option<FileKind>,

        /// Sort mapping keys
        #[arg(long)]
        sort_keys: bool,
    },

    /// Run the configured linter on one file
    Validate {
        /// File to check
        file: PathBuf,

        /// File type (detected from the extension if omitted)
        #[arg(short = 't', long = "type", value_enum)]
        file_type: Option<FileKind>,

        /// TOML config file
        #[arg(long, env = CONFIG_ENV_VAR)]
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Diff {
            file1,
            file2,
            output,
            file_type,
            ignore_whitespace,
            no_validation,
            sort_keys,
            title,
            summary,
            config,
        } => {
            let args = DiffArgs {
                left: file1,
                right: file2,
                output,
                file_type,
                ignore_whitespace,
                no_validation,
                sort_keys,
                title,
                print_summary: summary,
                config,
            };

            // Validate args first
            validate_args(&args)?;

            execute_diff(args)?;
        }

        Commands::Canonicalize {
            file,
            file_type,
            sort_keys,
        } => {
            canonicalize_file(CanonicalizeArgs {
                file,
                file_type,
                sort_keys,
            })?;
        }

        Commands::Validate {
            file,
            file_type,
            config,
        } => {
            validate_file(ValidateArgs {
                file,
                file_type,
                config,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
