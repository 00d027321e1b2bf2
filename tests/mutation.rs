//! Tree mutation tests.
//!
//! Exercises the container coercion rules: mutable container operations on
//! a non-container replace it with an empty container first, read-only
//! lookups never fail, and objects keep insertion order.

use jsontree::{parse, Value, NULL};

// ----------------------------------------------------------------------
// Coercion
// ----------------------------------------------------------------------

#[test]
fn coercion_discards_prior_content() {
    let mut v = Value::Number(5.0);
    v.push(1);
    assert!(v.is_array());
    assert_eq!(v.len(), 1);
    assert_eq!(v[0].as_f64(), Some(1.0));
}

#[test]
fn keyed_write_coerces_and_is_idempotent() {
    let mut v = Value::Null;
    v["slot"] = Value::Number(1.0);
    v["slot"] = Value::Number(2.0);
    assert!(v.is_object());
    assert_eq!(v.len(), 1);
    assert_eq!(v["slot"].as_f64(), Some(2.0));
}

#[test]
fn chained_coercion_builds_nested_trees() {
    let mut v = Value::Null;
    v["a"]["b"]["c"] = Value::from("deep");
    assert_eq!(v["a"]["b"]["c"].as_str(), Some("deep"));
}

#[test]
fn parsed_trees_accept_the_same_mutations() {
    let mut v = parse(r#"{"keep": 1, "replace": "old"}"#).unwrap();
    v["replace"].push(true);
    assert!(v["replace"].is_array());
    assert_eq!(v["keep"].as_f64(), Some(1.0));
}

// ----------------------------------------------------------------------
// Read-only lookups never fail
// ----------------------------------------------------------------------

#[test]
fn missing_lookups_resolve_to_shared_null() {
    let v = parse(r#"{"a": [10]}"#).unwrap();
    assert!(v["missing"].is_null());
    assert!(v["a"][99].is_null());
    assert!(v["a"][0]["not-an-object"].is_null());
    assert_eq!(v["missing"], NULL);
}

#[test]
fn option_accessors_report_misses() {
    let v = parse(r#"{"a": 1}"#).unwrap();
    assert!(v.get("a").is_some());
    assert!(v.get("b").is_none());
    assert!(v.get_index(0).is_none());
    assert!(Value::Null.get("a").is_none());
}

// ----------------------------------------------------------------------
// Object order
// ----------------------------------------------------------------------

#[test]
fn replacement_keeps_iteration_and_serialization_order() {
    let mut v = Value::Null;
    v.set("a", 1);
    v.set("b", 2);
    v.set("a", 99);
    assert_eq!(v.serialize(0), r#"{"a": 99,"b": 2}"#);
}

#[test]
fn removal_keeps_remaining_order() {
    let mut v = parse(r#"{"x": 1, "y": 2, "z": 3}"#).unwrap();
    v.remove("y");
    assert_eq!(v.serialize(0), r#"{"x": 1,"z": 3}"#);
}

// ----------------------------------------------------------------------
// Array operations
// ----------------------------------------------------------------------

#[test]
fn resize_then_write_by_index() {
    let mut v = Value::Null;
    v.resize(2);
    v[0] = Value::from("first");
    v[1] = Value::from("second");
    assert_eq!(v.serialize(0), r#"["first","second"]"#);
}

#[test]
fn array_edits_compose() {
    let mut v = parse("[1, 2, 3, 4]").unwrap();
    v.remove_range(1, 2);
    v.insert(1, 9);
    v.push(5);
    assert_eq!(v.serialize(0), "[1,9,4,5]");
    assert_eq!(v.pop(), Some(Value::Number(5.0)));
}

#[test]
fn noop_operations_leave_scalars_alone() {
    let mut v = Value::from("text");
    assert_eq!(v.pop(), None);
    v.remove_range(0, 10);
    v.clear();
    assert_eq!(v.remove("key"), None);
    assert_eq!(v, Value::from("text"));
}

#[test]
fn forced_resets() {
    let mut v = parse(r#"{"a": 1}"#).unwrap();
    v.set_empty_array();
    assert_eq!(v.serialize(2), "[]");
    v.set_empty_object();
    assert_eq!(v.serialize(2), "{}");
    v.set_null();
    assert_eq!(v.serialize(2), "null");
}
