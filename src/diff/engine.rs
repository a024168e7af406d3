//! Character-level diff engine.
//!
//! The raw edit script comes from `similar`'s Myers implementation over
//! the two char sequences. No deadline is configured, so the script is
//! minimal and the same inputs always give the same result. The ops are
//! then normalized by the merge pass and, for [`compute_diff`], made
//! readable by the semantic cleanup.

use super::cleanup::{cleanup_merge, cleanup_semantic};
use super::script::{EditScript, Operation, Span};
use similar::{Algorithm, DiffTag, TextDiff};

/// Working representation: one operation over a run of chars
pub(crate) type Chunk = (Operation, Vec<char>);

/// Compute a semantically cleaned diff between two strings
///
/// # Example
/// ```ignore
/// let script = compute_diff("port: 80", "port: 8080");
/// assert_eq!(script.right_text(), "port: 8080");
/// ```
pub fn compute_diff(left: &str, right: &str) -> EditScript {
    let mut chunks = diff_chars(left, right);
    cleanup_semantic(&mut chunks);
    to_script(chunks)
}

/// Compute the minimal diff without the semantic cleanup pass
pub fn compute_minimal_diff(left: &str, right: &str) -> EditScript {
    to_script(diff_chars(left, right))
}

/// Myers diff over chars, merged into at most one delete and one insert
/// between equalities
fn diff_chars(left: &str, right: &str) -> Vec<Chunk> {
    let a: Vec<char> = left.chars().collect();
    let b: Vec<char> = right.chars().collect();

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(left, right);

    let mut chunks = Vec::with_capacity(diff.ops().len());
    for op in diff.ops() {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => chunks.push((Operation::Equal, a[old].to_vec())),
            DiffTag::Delete => chunks.push((Operation::Delete, a[old].to_vec())),
            DiffTag::Insert => chunks.push((Operation::Insert, b[new].to_vec())),
            DiffTag::Replace => {
                chunks.push((Operation::Delete, a[old].to_vec()));
                chunks.push((Operation::Insert, b[new].to_vec()));
            }
        }
    }

    cleanup_merge(&mut chunks);
    chunks
}

fn to_script(chunks: Vec<Chunk>) -> EditScript {
    EditScript::new(
        chunks
            .into_iter()
            .map(|(op, chars)| Span::new(op, chars.into_iter().collect::<String>()))
            .collect(),
    )
}
