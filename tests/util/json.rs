//! Integration tests for JSON conversion

use trove_foundation::{ErrorKind, Value};
use trove_structural::equal;
use trove_util::{is_color, is_email, is_url, parse_json, to_json};

#[test]
fn parsed_json_compares_structurally() {
    let a = parse_json(r#"{"user": {"name": "ada", "roles": ["admin"]}}"#).unwrap();
    let b = Value::record([(
        "user",
        Value::record([("name", Value::from("ada")), ("roles", Value::seq(["admin"]))]),
    )]);
    assert!(equal(&a, &b).unwrap());
}

#[test]
fn malformed_json_raises() {
    let err = parse_json("[1, 2,,]").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 1, .. }));
}

#[test]
fn to_json_round_trips() {
    let value = Value::record([("ok", Value::Bool(true)), ("n", Value::Float(1.5))]);
    let text = to_json(&value).unwrap();
    assert!(equal(&parse_json(&text).unwrap(), &value).unwrap());
}

#[test]
fn validators_on_parsed_fields() {
    let doc = parse_json(r##"{"email": "ada@example.org", "site": "https://ada.dev", "color": "#0af"}"##).unwrap();
    let field = |k: &str| doc.as_record().and_then(|r| r.get(k)).unwrap_or_default();
    assert!(is_email(field("email").as_str().unwrap()));
    assert!(is_url(field("site").as_str().unwrap()));
    assert!(is_color(field("color").as_str().unwrap()));
}
