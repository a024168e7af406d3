//! Edit script types.

use serde::{Deserialize, Serialize};

/// Kind of an edit span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Equal,
    Insert,
    Delete,
}

/// A run of text with one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub op: Operation,
    pub text: String,
}

impl Span {
    pub fn new(op: Operation, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }
}

/// Ordered spans turning the left text into the right text
///
/// Equal + Delete spans concatenate to the left text,
/// Equal + Insert spans concatenate to the right text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    spans: Vec<Span>,
}

impl EditScript {
    /// Build a script, dropping empty spans
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans: spans.into_iter().filter(|s| !s.text.is_empty()).collect(),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// True if the script contains no insertions or deletions
    pub fn is_identity(&self) -> bool {
        self.spans.iter().all(|s| s.op == Operation::Equal)
    }

    /// Reconstruct the left (original) text
    pub fn left_text(&self) -> String {
        self.collect_text(Operation::Delete)
    }

    /// Reconstruct the right (new) text
    pub fn right_text(&self) -> String {
        self.collect_text(Operation::Insert)
    }

    fn collect_text(&self, edit: Operation) -> String {
        self.spans
            .iter()
            .filter(|s| s.op == Operation::Equal || s.op == edit)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Check that the script reconstructs both inputs exactly
    pub fn reconstructs(&self, left: &str, right: &str) -> bool {
        self.left_text() == left && self.right_text() == right
    }

    /// Character and span counts
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for span in &self.spans {
            let chars = span.text.chars().count();
            match span.op {
                Operation::Equal => stats.equal_chars += chars,
                Operation::Insert => {
                    stats.inserted_chars += chars;
                    stats.insert_spans += 1;
                }
                Operation::Delete => {
                    stats.deleted_chars += chars;
                    stats.delete_spans += 1;
                }
            }
        }
        stats
    }
}

/// Summary counts of an edit script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub equal_chars: usize,
    pub inserted_chars: usize,
    pub deleted_chars: usize,
    pub insert_spans: usize,
    pub delete_spans: usize,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.insert_spans + self.delete_spans > 0
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "+{} -{} chars in {} insertion(s), {} deletion(s); {} chars unchanged",
            self.inserted_chars,
            self.deleted_chars,
            self.insert_spans,
            self.delete_spans,
            self.equal_chars
        )
    }
}
