use config_diff::document::{canonicalize, detect_type, parse_json, parse_yaml, CanonicalOptions, FileKind};
use pretty_assertions::assert_eq;

#[test]
fn test_type_detection_selects_parser() {
    assert_eq!(detect_type("deploy/app.yaml"), FileKind::Yaml);
    assert_eq!(detect_type("package.json"), FileKind::Json);
    assert_eq!(detect_type("nginx.conf"), FileKind::Text);
}

#[test]
fn test_equivalent_json_documents_match() {
    let compact = r#"{"service":{"name":"api","replicas":3,"tags":["a","b"]}}"#;
    let spaced = r#"
    {
        "service" : {
            "name" : "api",
            "replicas" : 3,
            "tags" : [ "a", "b" ]
        }
    }"#;

    let options = CanonicalOptions::new();
    assert_eq!(
        canonicalize(compact, FileKind::Json, options).unwrap(),
        canonicalize(spaced, FileKind::Json, options).unwrap()
    );
}

#[test]
fn test_json_and_yaml_share_order() {
    let json = parse_json(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let yaml = parse_yaml("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
    assert_eq!(json.keys(), vec!["zeta", "alpha", "mid"]);
    assert_eq!(yaml.keys(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_yaml_aliases_resolved() {
    let text = canonicalize(
        "defaults: &d\n  retries: 3\njob:\n  settings: *d\n",
        FileKind::Yaml,
        CanonicalOptions::new(),
    )
    .unwrap();
    assert_eq!(
        text,
        "defaults:\n  retries: 3\njob:\n  settings:\n    retries: 3\n"
    );
}

#[test]
fn test_yaml_multiple_documents_rejected() {
    let result = canonicalize("a: 1\n---\nb: 2\n", FileKind::Yaml, CanonicalOptions::new());
    assert!(result.is_err());
}

#[test]
fn test_sorted_json_is_recursive() {
    let text = canonicalize(
        r#"{"b": {"y": 1, "x": 2}, "a": [{"d": 1, "c": 2}]}"#,
        FileKind::Json,
        CanonicalOptions::new().with_sort_keys(true),
    )
    .unwrap();
    assert_eq!(
        text,
        "{\n  \"a\": [\n    {\n      \"c\": 2,\n      \"d\": 1\n    }\n  ],\n  \"b\": {\n    \"x\": 2,\n    \"y\": 1\n  }\n}"
    );
}

#[test]
fn test_text_passthrough() {
    let content = "# comment\nkey=value\n";
    assert_eq!(
        canonicalize(content, FileKind::Text, CanonicalOptions::new()).unwrap(),
        content
    );
}

#[test]
fn test_json_integers_beyond_64_bits_stay_integers() {
    let text = canonicalize(
        r#"{"id": 12345678901234567890123}"#,
        FileKind::Json,
        CanonicalOptions::new(),
    )
    .unwrap();
    assert_eq!(text, "{\n  \"id\": 12345678901234567890123\n}");
}
