//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod diff;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use diff::{execute_diff, validate_args};
pub use models::{CanonicalizeArgs, DiffArgs, ValidateArgs};
pub use utils::{canonicalize_file, display_version, validate_file};
