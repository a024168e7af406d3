//! Document parsing and canonicalization.
//!
//! This module handles:
//! - Classifying files as YAML, JSON or text by extension
//! - Parsing structured content into an ordered document model
//! - Re-serializing that model into a deterministic canonical text

pub mod canonical;
pub mod kind;
pub mod node;

// Re-export main types
pub use canonical::{canonicalize, parse_json, parse_yaml, CanonicalOptions};
pub use kind::{detect_type, FileKind};
pub use node::{Node, Number};
