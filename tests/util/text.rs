//! Integration tests for string and array helpers

use trove_foundation::Value;
use trove_util::{
    camel_case, chunk, group_by, kebab_case, pascal_case, slugify, snake_case, title_case,
    truncate, unique,
};

// =============================================================================
// Strings
// =============================================================================

#[test]
fn casing_round_trip_between_styles() {
    let source = "user_account-ID value";
    assert_eq!(camel_case(source), "userAccountIdValue");
    assert_eq!(pascal_case(source), "UserAccountIdValue");
    assert_eq!(snake_case(&camel_case(source)), "user_account_id_value");
    assert_eq!(kebab_case(&pascal_case(source)), "user-account-id-value");
    assert_eq!(title_case(&snake_case(source)), "User Account Id Value");
}

#[test]
fn slugs_for_titles() {
    assert_eq!(slugify("Crème Brûlée: A History (2nd ed.)"), "creme-brulee-a-history-2nd-ed");
}

#[test]
fn truncate_respects_suffix() {
    assert_eq!(truncate("The quick brown fox", 10, "…"), "The quick…");
}

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn unique_values() {
    let items = vec![Value::from("a"), Value::from("b"), Value::from("a")];
    assert_eq!(unique(&items), vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn chunk_and_group() {
    let words = ["apple", "bean", "avocado", "beet", "carrot"];
    let groups = group_by(&words, |w| w.chars().next());
    let firsts: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
    assert_eq!(firsts, [Some('a'), Some('b'), Some('c')]);
    assert_eq!(chunk(&words, 2).len(), 3);
}
