//! Text diffing.
//!
//! This module compares two canonical texts and produces an edit script:
//! - Optional whitespace normalization of both sides
//! - Character-level Myers diff with semantic cleanup
//! - Statistics and a terminal summary of the result
//!
//! # Example
//! ```ignore
//! use config_diff::diff::{compute_diff, normalize_whitespace};
//!
//! let left = normalize_whitespace("a: 1  \n");
//! let right = normalize_whitespace("a: 2\n");
//! let script = compute_diff(&left, &right);
//! assert!(script.reconstructs(&left, &right));
//! ```

mod cleanup;
mod engine;
mod normalizer;
mod script;
mod summary;

// Public API exports
pub use engine::{compute_diff, compute_minimal_diff};
pub use normalizer::normalize_whitespace;
pub use script::{DiffStats, EditScript, Operation, Span};
pub use summary::render_terminal_summary;
