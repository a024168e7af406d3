use config_diff::compare::{compare, compare_detailed, CompareOptions, Input};
use config_diff::document::FileKind;
use config_diff::events::{DiffEvent, NullSink, RecordingSink};
use config_diff::utils::error::{DiffError, ParseError};

#[test]
fn test_json_value_change_is_marked() {
    let left = Input::new("a.json", r#"{"a": 1, "b": 2}"#, FileKind::Json);
    let right = Input::new("b.json", r#"{"a": 1, "b": 3}"#, FileKind::Json);

    let html = compare(&left, &right, &CompareOptions::new(), &NullSink).unwrap();

    assert!(html.contains("<del>2</del>"));
    assert!(html.contains("<ins>3</ins>"));
    // The unchanged key sits inside the leading equal span
    let equal = html
        .split("<span>")
        .nth(1)
        .and_then(|rest| rest.split("</span>").next())
        .unwrap();
    assert!(equal.contains("\"a\": 1"));
}

#[test]
fn test_yaml_trailing_whitespace_ignored() {
    let left = Input::detected("a.yaml", "name: web   \nport: 80\n");
    let right = Input::detected("b.yaml", "name: web\nport: 80  \n");
    assert_eq!(left.kind, FileKind::Yaml);

    let html = compare(
        &left,
        &right,
        &CompareOptions::new().with_ignore_whitespace(true),
        &NullSink,
    )
    .unwrap();

    assert!(!html.contains("<ins>"));
    assert!(!html.contains("<del>"));
}

#[test]
fn test_trailing_whitespace_ignored() {
    let left = Input::new("a.txt", "name: web   \nport: 80\n", FileKind::Text);
    let right = Input::new("b.txt", "name: web\nport: 80  \n", FileKind::Text);

    let html = compare(
        &left,
        &right,
        &CompareOptions::new().with_ignore_whitespace(true),
        &NullSink,
    )
    .unwrap();

    assert!(!html.contains("<ins>"));
    assert!(!html.contains("<del>"));
}

#[test]
fn test_yaml_cosmetic_differences_are_equal() {
    let left = Input::new("a.yaml", "name: 'web'\nports: [80, 443]\n", FileKind::Yaml);
    let right = Input::new("b.yaml", "name: \"web\"\nports:\n  - 80\n  - 443\n", FileKind::Yaml);

    let comparison = compare_detailed(&left, &right, &CompareOptions::new(), &NullSink).unwrap();

    assert!(comparison.script.is_identity());
    assert!(!comparison.html.contains("<ins>"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let left = Input::new("a.json", "{a: 1}", FileKind::Json);
    let right = Input::new("b.json", "{\"a\": 1}", FileKind::Json);

    let err = compare(&left, &right, &CompareOptions::new(), &NullSink).unwrap_err();

    match err {
        DiffError::Parse { label, kind, source } => {
            assert_eq!(label, "a.json");
            assert_eq!(kind, FileKind::Json);
            assert!(matches!(source, ParseError::Json(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_type_mismatch_warns_once_and_proceeds() {
    let sink = RecordingSink::new();
    let left = Input::detected("a.yaml", "a: 1\n");
    let right = Input::detected("b.json", r#"{"a": 1}"#);

    let comparison = compare_detailed(&left, &right, &CompareOptions::new(), &sink).unwrap();

    assert_eq!(sink.mismatch_count(), 1);
    assert_eq!(comparison.left_text, "a: 1\n");
    assert_eq!(comparison.right_text, "{\n  \"a\": 1\n}");
    assert!(matches!(
        sink.events().first(),
        Some(DiffEvent::TypeMismatch { .. })
    ));
}

#[test]
fn test_sort_keys_hides_reordering() {
    let left = Input::new("a.json", r#"{"b": 1, "a": 2}"#, FileKind::Json);
    let right = Input::new("b.json", r#"{"a": 2, "b": 1}"#, FileKind::Json);

    let ordered = compare_detailed(&left, &right, &CompareOptions::new(), &NullSink).unwrap();
    assert!(!ordered.script.is_identity());

    let sorted = compare_detailed(
        &left,
        &right,
        &CompareOptions::new().with_sort_keys(true),
        &NullSink,
    )
    .unwrap();
    assert!(sorted.script.is_identity());
}

#[test]
fn test_identical_inputs() {
    let input = Input::new("a.conf", "key = value\n", FileKind::Text);
    let comparison = compare_detailed(&input, &input, &CompareOptions::new(), &NullSink).unwrap();

    assert!(comparison.script.is_identity());
    assert!(comparison
        .html
        .contains("<span>key = value&para;<br></span>"));
}

#[test]
fn test_custom_title() {
    let input = Input::new("a", "x", FileKind::Text);
    let html = compare(
        &input,
        &input,
        &CompareOptions::new().with_title("Release 42"),
        &NullSink,
    )
    .unwrap();
    assert!(html.contains("<title>Release 42</title>"));
}
