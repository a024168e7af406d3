//! config-diff
//!
//! Compare two configuration files (YAML, JSON or plain text) and render
//! the differences as a self-contained HTML document.
//!
//! Structured files are canonicalized first, so that quoting, spacing and
//! flow-vs-block style never show up as changes; the canonical texts are
//! then diffed character by character with a semantic cleanup pass.
//!
//! ## Getting Started
//!
//! ```bash
//! config-diff diff old.yaml new.yaml -o diff.html
//! config-diff --help
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use config_diff::compare::{compare, CompareOptions, Input};
//! use config_diff::events::LogSink;
//!
//! let left = Input::detected("old.json", r#"{"a": 1}"#);
//! let right = Input::detected("new.json", r#"{"a": 2}"#);
//! let html = compare(&left, &right, &CompareOptions::new(), &LogSink)?;
//! ```

pub mod commands;
pub mod compare;
pub mod diff;
pub mod document;
pub mod events;
pub mod output;
pub mod utils;
pub mod validation;
