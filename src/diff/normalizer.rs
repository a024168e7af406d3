//! Whitespace normalization.
//!
//! Used when a comparison should ignore indentation and trailing spaces.
//! Works on canonical text, so it never changes what a document means,
//! only how much of its layout reaches the diff.

/// Strip leading and trailing whitespace from every line
///
/// Lines are split on `\n` only, so a `\r` before the break is trimmed
/// with the rest of the line. Empty lines (including a trailing one) are
/// kept, which makes the transform idempotent.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_whitespace("  a: 1  \n\tb: 2\r\n"), "a: 1\nb: 2\n");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trims_each_line() {
        assert_eq!(normalize_whitespace("  a: 1  \n\tb: 2\r\n"), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_keeps_blank_lines() {
        assert_eq!(normalize_whitespace("a\n   \n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("\n"), "\n");
    }

    #[test]
    fn test_idempotent() {
        let input = " x \r\n\t\ty:  2 \n\n  z\n";
        let once = normalize_whitespace(input);
        assert_eq!(normalize_whitespace(&once), once);
    }
}
