//! Canonical text forms for diffing.
//!
//! Structured files are parsed into a [`Node`] tree and re-serialized
//! with fixed rules, so that quoting, spacing and flow-vs-block style in
//! the source never show up in the diff:
//! - JSON: pretty printed, two-space indent, source key order
//! - YAML: block style, two-space indent, source key order, merge keys applied
//! - text: returned untouched

use super::kind::FileKind;
use super::node::Node;
use crate::utils::config::CANONICAL_INDENT;
use crate::utils::error::ParseError;
use serde::Serialize;

/// Canonicalization options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalOptions {
    /// Sort mapping keys instead of keeping source order
    pub sort_keys: bool,
}

impl CanonicalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}

/// Produce the canonical text of a file's content
///
/// # Errors
/// * `ParseError::Json` - Content is not valid JSON (kind = json)
/// * `ParseError::Yaml` - Content is not valid YAML (kind = yaml)
///
/// # Example
/// ```ignore
/// let text = canonicalize(r#"{"a":1}"#, FileKind::Json, CanonicalOptions::new())?;
/// assert_eq!(text, "{\n  \"a\": 1\n}");
/// ```
pub fn canonicalize(
    content: &str,
    kind: FileKind,
    options: CanonicalOptions,
) -> Result<String, ParseError> {
    match kind {
        FileKind::Text => Ok(content.to_string()),
        FileKind::Json => {
            let node = finish(parse_json(content)?, options);
            Ok(emit_json(node)?)
        }
        FileKind::Yaml => {
            let node = finish(parse_yaml(content)?, options);
            Ok(emit_yaml(node)?)
        }
    }
}

/// Parse JSON content into the document model
pub fn parse_json(content: &str) -> Result<Node, ParseError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(Node::from(value))
}

/// Parse YAML content into the document model
///
/// Aliases are resolved by the parser; `<<` merge keys are applied here.
/// An empty (or comment-only) document is `null`.
pub fn parse_yaml(content: &str) -> Result<Node, ParseError> {
    if content.trim().is_empty() {
        return Ok(Node::Null);
    }

    let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
    value.apply_merge()?;
    Ok(Node::from(value))
}

fn finish(mut node: Node, options: CanonicalOptions) -> Node {
    if options.sort_keys {
        node.sort_keys();
    }
    node
}

fn emit_json(node: Node) -> Result<String, serde_json::Error> {
    let value = serde_json::Value::from(node);

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(CANONICAL_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn emit_yaml(node: Node) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&serde_yaml::Value::from(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn canon(content: &str, kind: FileKind) -> String {
        canonicalize(content, kind, CanonicalOptions::new()).unwrap()
    }

    #[test]
    fn test_text_is_identity() {
        let content = "  key = value  \r\n\tother\n";
        assert_eq!(canon(content, FileKind::Text), content);
    }

    #[test]
    fn test_json_pretty_two_space() {
        assert_eq!(
            canon(r#"{"a":1,"b":[true,null,"x"]}"#, FileKind::Json),
            "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null,\n    \"x\"\n  ]\n}"
        );
    }

    #[test]
    fn test_json_keeps_key_order() {
        assert_eq!(
            canon(r#"{"z": 1, "a": 2}"#, FileKind::Json),
            "{\n  \"z\": 1,\n  \"a\": 2\n}"
        );
    }

    #[test]
    fn test_json_no_type_coercion() {
        assert_eq!(
            canon(r#"[1, 1.0, "1", true]"#, FileKind::Json),
            "[\n  1,\n  1.0,\n  \"1\",\n  true\n]"
        );
    }

    #[test]
    fn test_json_big_numbers_printed_as_written() {
        assert_eq!(
            canon(
                r#"{"id": 12345678901234567890123, "neg": -98765432109876543210, "huge": 1e400}"#,
                FileKind::Json
            ),
            "{\n  \"id\": 12345678901234567890123,\n  \"neg\": -98765432109876543210,\n  \"huge\": 1e400\n}"
        );
    }

    #[test]
    fn test_json_cosmetic_differences_collapse() {
        let compact = canon(r#"{"a":{"b":[1,2]}}"#, FileKind::Json);
        let spaced = canon("{ \"a\" : { \"b\" : [ 1 , 2 ] } }\n", FileKind::Json);
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_json_malformed() {
        let result = canonicalize("{a: 1}", FileKind::Json, CanonicalOptions::new());
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_yaml_block_style() {
        assert_eq!(
            canon("server: {host: localhost, ports: [80, 443]}\n", FileKind::Yaml),
            "server:\n  host: localhost\n  ports:\n  - 80\n  - 443\n"
        );
    }

    #[test]
    fn test_yaml_keeps_key_order() {
        assert_eq!(canon("b: 1\na: 2\n", FileKind::Yaml), "b: 1\na: 2\n");
    }

    #[test]
    fn test_yaml_sort_keys() {
        let text = canonicalize(
            "b: 1\na:\n  d: 1\n  c: 2\n",
            FileKind::Yaml,
            CanonicalOptions::new().with_sort_keys(true),
        )
        .unwrap();
        assert_eq!(text, "a:\n  c: 2\n  d: 1\nb: 1\n");
    }

    #[test]
    fn test_yaml_quoting_collapses() {
        assert_eq!(
            canon("name: 'web'\n", FileKind::Yaml),
            canon("name: \"web\"\n", FileKind::Yaml)
        );
    }

    #[test]
    fn test_yaml_merge_keys_applied() {
        let text = canon(
            "base: &base\n  a: 1\nchild:\n  <<: *base\n  b: 2\n",
            FileKind::Yaml,
        );
        let node = parse_yaml(&text).unwrap();
        let child = node.get("child").unwrap();
        assert!(child.get("a").is_some());
        assert!(child.get("b").is_some());
        assert!(child.get("<<").is_none());
    }

    #[test]
    fn test_yaml_empty_document_is_null() {
        assert_eq!(canon("", FileKind::Yaml), "null\n");
    }

    #[test]
    fn test_yaml_malformed() {
        let result = canonicalize("a: [1, 2\n", FileKind::Yaml, CanonicalOptions::new());
        assert!(matches!(result, Err(ParseError::Yaml(_))));
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let yaml = "z: [1, {b: 2, a: 3}]\nx: text\n";
        assert_eq!(canon(yaml, FileKind::Yaml), canon(yaml, FileKind::Yaml));
    }
}
