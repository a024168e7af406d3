//! HTML rendering of an edit script.
//!
//! The result is a single self-contained document: unchanged text in
//! `<span>`, removed text in `<del>`, added text in `<ins>`, with a small
//! inline stylesheet colouring the two edit markers.

use crate::diff::{EditScript, Operation};
use crate::utils::config::{DEFAULT_TITLE, DELETE_BACKGROUND, INSERT_BACKGROUND};

/// Rendering options
///
/// **Public** - can be customized by users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl RenderOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Render an edit script as a complete HTML document
///
/// **Public** - main entry point for HTML output
///
/// # Arguments
/// * `script` - Edit script from the diff engine
/// * `options` - Rendering options
///
/// # Returns
/// The full document, starting with `<!DOCTYPE html>`
///
/// # Example
/// ```ignore
/// let script = compute_diff("a: 1\n", "a: 2\n");
/// let html = render(&script, &RenderOptions::new());
/// assert!(html.contains("<ins>2</ins>"));
/// ```
pub fn render(script: &EditScript, options: &RenderOptions) -> String {
    let body = render_body(script);

    let mut out = String::with_capacity(body.len() + 256);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&options.title)));
    out.push_str("<style>\n");
    out.push_str(&format!("del {{ background:{}; }}\n", DELETE_BACKGROUND));
    out.push_str(&format!("ins {{ background:{}; }}\n", INSERT_BACKGROUND));
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&body);
    out.push_str("\n</body>\n</html>\n");
    out
}

/// Render only the marked-up diff fragment
///
/// **Public** - useful for embedding in another page
pub fn render_body(script: &EditScript) -> String {
    let mut out = String::new();
    for span in script.spans() {
        let tag = match span.op {
            Operation::Equal => "span",
            Operation::Insert => "ins",
            Operation::Delete => "del",
        };
        out.push_str(&format!("<{tag}>{}</{tag}>", escape_text(&span.text)));
    }
    out
}

/// Escape span text, making line feeds visible
fn escape_text(text: &str) -> String {
    escape_html(text).replace('\n', "&para;<br>")
}

/// Escape the three characters that matter in element content
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_tags() {
        let script = EditScript::new(vec![
            Span::new(Operation::Equal, "a"),
            Span::new(Operation::Delete, "b"),
            Span::new(Operation::Insert, "c"),
        ]);
        assert_eq!(
            render_body(&script),
            "<span>a</span><del>b</del><ins>c</ins>"
        );
    }

    #[test]
    fn test_escapes_markup_and_newlines() {
        let script = EditScript::new(vec![Span::new(Operation::Insert, "<a> & b\n")]);
        assert_eq!(
            render_body(&script),
            "<ins>&lt;a&gt; &amp; b&para;<br></ins>"
        );
    }

    #[test]
    fn test_document_frame() {
        let html = render(&EditScript::default(), &RenderOptions::new());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>Configuration Diff</title>"));
        assert!(html.contains("del { background:#ffe6e6; }"));
        assert!(html.contains("ins { background:#e6ffe6; }"));
        assert!(html.contains("<body>\n\n</body>"));
        assert!(!html.contains("http"));
    }

    #[test]
    fn test_custom_title_is_escaped() {
        let html = render(
            &EditScript::default(),
            &RenderOptions::new().with_title("a < b"),
        );
        assert!(html.contains("<title>a &lt; b</title>"));
    }
}
