//! Integration tests for structural diff

use trove_foundation::Value;
use trove_structural::{EqualOptions, diff, diff_with, format_diff};

#[test]
fn diff_of_config_documents() {
    let before = Value::record([
        ("port", Value::Int(80)),
        ("hosts", Value::seq(["a", "b"])),
        ("tls", Value::record([("enabled", Value::Bool(false))])),
    ]);
    let after = Value::record([
        ("port", Value::Int(443)),
        ("hosts", Value::seq(["a"])),
        ("tls", Value::record([("enabled", Value::Bool(true)), ("cert", Value::from("x.pem"))])),
    ]);

    let d = diff(&before, &after).unwrap();
    let paths: Vec<String> = d.changes.iter().map(|c| c.path.to_string()).collect();
    assert_eq!(paths, [".port", ".hosts[1]", ".tls.enabled", ".tls.cert"]);
    assert!(d.at(".hosts[1]").unwrap().is_removed());

    let report = format_diff(&d, 10);
    assert!(report.contains("~ .port: 80 -> 443"));
    assert!(report.contains("- .hosts[1]: \"b\""));
    assert!(report.contains("+ .tls.cert: \"x.pem\""));
}

#[test]
fn loose_diff_ignores_nullish_swaps() {
    let a = Value::record([("v", Value::Null)]);
    let b = Value::record([("v", Value::Undefined)]);
    assert_eq!(diff(&a, &b).unwrap().len(), 1);
    assert!(diff_with(&a, &b, &EqualOptions::loose()).unwrap().is_empty());
}
