//! The comparison pipeline.
//!
//! Chains the four stages for two in-memory documents:
//! 1. Canonicalize each side by its kind
//! 2. Optionally normalize whitespace on both sides
//! 3. Compute the character diff with semantic cleanup
//! 4. Render the HTML document
//!
//! Every stage is a pure function of its input. Diagnostics go to the
//! caller's [`EventSink`]; the first error aborts with no output.

use crate::diff::{compute_diff, normalize_whitespace, EditScript};
use crate::document::{canonicalize, detect_type, CanonicalOptions, FileKind};
use crate::events::{DiffEvent, EventSink};
use crate::output::{render, RenderOptions};
use crate::utils::config::DEFAULT_TITLE;
use crate::utils::error::DiffError;
use std::path::Path;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Name used in messages, usually the file path
    pub label: String,

    /// Raw file content
    pub content: String,

    /// Kind used for canonicalization
    pub kind: FileKind,

    /// Whether `kind` came from the caller rather than detection
    pub explicit_kind: bool,
}

impl Input {
    /// Input with an explicitly declared kind
    pub fn new(label: impl Into<String>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            kind,
            explicit_kind: true,
        }
    }

    /// Input whose kind is detected from the label's extension
    pub fn detected(label: impl Into<String>, content: impl Into<String>) -> Self {
        let label = label.into();
        let kind = detect_type(Path::new(&label));
        Self {
            label,
            content: content.into(),
            kind,
            explicit_kind: false,
        }
    }
}

/// Comparison options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Trim every line of both canonical texts before diffing
    pub ignore_whitespace: bool,

    /// Sort mapping keys during canonicalization
    pub sort_keys: bool,

    /// Title of the rendered document
    pub title: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            sort_keys: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Everything a comparison produced
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Canonical (and possibly normalized) left text
    pub left_text: String,

    /// Canonical (and possibly normalized) right text
    pub right_text: String,

    /// Cleaned edit script between the two texts
    pub script: EditScript,

    /// Complete HTML document
    pub html: String,
}

/// Compare two documents and render the result as HTML
///
/// **Public** - main entry point of the library
///
/// # Errors
/// * `DiffError::Parse` - Either side is malformed for its kind
/// * `DiffError::InternalDiff` - The edit script failed its reconstruction check
///
/// # Example
/// ```ignore
/// let left = Input::new("a.json", r#"{"a": 1, "b": 2}"#, FileKind::Json);
/// let right = Input::new("b.json", r#"{"a": 1, "b": 3}"#, FileKind::Json);
/// let html = compare(&left, &right, &CompareOptions::new(), &LogSink)?;
/// assert!(html.contains("<ins>3</ins>"));
/// ```
pub fn compare(
    left: &Input,
    right: &Input,
    options: &CompareOptions,
    sink: &dyn EventSink,
) -> Result<String, DiffError> {
    Ok(compare_detailed(left, right, options, sink)?.html)
}

/// Like [`compare`], but also returns the intermediate texts and script
pub fn compare_detailed(
    left: &Input,
    right: &Input,
    options: &CompareOptions,
    sink: &dyn EventSink,
) -> Result<Comparison, DiffError> {
    if !left.explicit_kind && !right.explicit_kind && left.kind != right.kind {
        sink.emit(DiffEvent::TypeMismatch {
            left: left.label.clone(),
            left_kind: left.kind,
            right: right.label.clone(),
            right_kind: right.kind,
        });
    }

    let canonical = CanonicalOptions::new().with_sort_keys(options.sort_keys);
    let mut left_text = canonical_text(left, canonical, sink)?;
    let mut right_text = canonical_text(right, canonical, sink)?;

    if options.ignore_whitespace {
        left_text = normalize_whitespace(&left_text);
        right_text = normalize_whitespace(&right_text);
        sink.emit(DiffEvent::WhitespaceNormalized);
    }

    let script = compute_diff(&left_text, &right_text);
    if !script.reconstructs(&left_text, &right_text) {
        return Err(DiffError::InternalDiff(format!(
            "edit script does not reconstruct {} and {}",
            left.label, right.label
        )));
    }
    sink.emit(DiffEvent::DiffComputed {
        stats: script.stats(),
    });

    let html = render(&script, &RenderOptions::new().with_title(options.title.clone()));

    Ok(Comparison {
        left_text,
        right_text,
        script,
        html,
    })
}

fn canonical_text(
    input: &Input,
    options: CanonicalOptions,
    sink: &dyn EventSink,
) -> Result<String, DiffError> {
    let text = canonicalize(&input.content, input.kind, options).map_err(|source| {
        DiffError::Parse {
            label: input.label.clone(),
            kind: input.kind,
            source,
        }
    })?;

    sink.emit(DiffEvent::Canonicalized {
        label: input.label.clone(),
        kind: input.kind,
        chars: text.chars().count(),
    });
    Ok(text)
}
