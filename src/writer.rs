//! Tree-to-text serialization.
//!
//! A recursive pretty-printer parameterized by an indent width. Width 0
//! produces compact single-line output; any other width puts each array
//! element and object member on its own line, indented one level deeper
//! than its container. Empty containers always render as `[]` or `{}`.
//! Comments are never emitted.

use indexmap::IndexMap;
use std::fmt;

use crate::escape;
use crate::value::Value;

/// Serialize a value to text with the given indent width.
pub fn serialize(value: &Value, spacing: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, spacing, 0);
    out
}

/// Append a value's text to `dest`, indenting continuation lines relative
/// to `indent`. This is the recursion step of [`serialize`], public so
/// callers composing larger documents can splice a value in at depth.
pub fn write_value(dest: &mut String, value: &Value, spacing: usize, indent: usize) {
    match value {
        Value::Null => dest.push_str("null"),
        Value::Bool(true) => dest.push_str("true"),
        Value::Bool(false) => dest.push_str("false"),
        // Shortest decimal form that converts back to the same double.
        Value::Number(n) => dest.push_str(&n.to_string()),
        Value::String(s) => escape::escape_into(dest, s),
        Value::Array(items) => write_array(dest, items, spacing, indent),
        Value::Object(map) => write_object(dest, map, spacing, indent),
    }
}

fn write_array(dest: &mut String, items: &[Value], spacing: usize, indent: usize) {
    dest.push('[');
    if !items.is_empty() {
        let inner = indent + spacing;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                dest.push(',');
            }
            if spacing > 0 {
                dest.push('\n');
                write_indent(dest, inner);
            }
            write_value(dest, item, spacing, inner);
        }
        if spacing > 0 {
            dest.push('\n');
            write_indent(dest, indent);
        }
    }
    dest.push(']');
}

fn write_object(dest: &mut String, map: &IndexMap<String, Value>, spacing: usize, indent: usize) {
    dest.push('{');
    if !map.is_empty() {
        let inner = indent + spacing;
        for (i, (key, item)) in map.iter().enumerate() {
            if i > 0 {
                dest.push(',');
            }
            if spacing > 0 {
                dest.push('\n');
                write_indent(dest, inner);
            }
            escape::escape_into(dest, key);
            dest.push_str(": ");
            write_value(dest, item, spacing, inner);
        }
        if spacing > 0 {
            dest.push('\n');
            write_indent(dest, indent);
        }
    }
    dest.push('}');
}

fn write_indent(dest: &mut String, width: usize) {
    for _ in 0..width {
        dest.push(' ');
    }
}

impl Value {
    /// Serialize with the given indent width. Width 0 is compact.
    pub fn serialize(&self, spacing: usize) -> String {
        serialize(self, spacing)
    }

    /// Serialize with the default indent width of 2.
    pub fn to_text(&self) -> String {
        serialize(self, 2)
    }

    /// Append this value's text to an existing buffer at the given indent.
    pub fn write_to(&self, dest: &mut String, spacing: usize, indent: usize) {
        write_value(dest, self, spacing, indent);
    }
}

/// Compact single-line rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn scalars() {
        assert_eq!(Value::Null.serialize(2), "null");
        assert_eq!(Value::Bool(true).serialize(2), "true");
        assert_eq!(Value::Bool(false).serialize(2), "false");
        assert_eq!(Value::from("hi").serialize(2), r#""hi""#);
    }

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(Value::Number(42.0).serialize(0), "42");
        assert_eq!(Value::Number(-1.5).serialize(0), "-1.5");
        assert_eq!(Value::Number(0.1).serialize(0), "0.1");
        assert_eq!(
            Value::Number(9007199254740991.0).serialize(0),
            "9007199254740991"
        );
    }

    #[test]
    fn empty_containers_stay_compact_at_any_spacing() {
        assert_eq!(Value::empty_array().serialize(2), "[]");
        assert_eq!(Value::empty_object().serialize(2), "{}");
        assert_eq!(Value::empty_array().serialize(0), "[]");
        assert_eq!(Value::empty_object().serialize(0), "{}");
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let v = parse(r#"{"a": [1, 2], "b": {"c": null}}"#).unwrap();
        let compact = v.serialize(0);
        assert!(!compact.contains('\n'));
        assert_eq!(compact, r#"{"a": [1,2],"b": {"c": null}}"#);
    }

    #[test]
    fn indented_array_layout() {
        let v = parse("[1, [2], 3]").unwrap();
        assert_eq!(v.serialize(2), "[\n  1,\n  [\n    2\n  ],\n  3\n]");
    }

    #[test]
    fn indented_object_layout() {
        let v = parse(r#"{"a": 1, "b": [true]}"#).unwrap();
        assert_eq!(
            v.serialize(2),
            "{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}"
        );
    }

    #[test]
    fn keys_and_strings_are_escaped() {
        let mut v = Value::Null;
        v.set("a\"b", "line\nbreak");
        assert_eq!(v.serialize(0), "{\"a\\\"b\": \"line\\nbreak\"}");
    }

    #[test]
    fn write_to_appends_at_depth() {
        let v = parse("[1]").unwrap();
        let mut out = String::from("value: ");
        v.write_to(&mut out, 2, 4);
        assert_eq!(out, "value: [\n      1\n    ]");
    }

    #[test]
    fn display_is_compact() {
        let v = parse("[1, 2]").unwrap();
        assert_eq!(v.to_string(), "[1,2]");
    }

    #[test]
    fn to_text_uses_two_space_indent() {
        let v = parse("[null]").unwrap();
        assert_eq!(v.to_text(), "[\n  null\n]");
    }

    #[test]
    fn serialization_preserves_insertion_order() {
        let mut v = Value::Null;
        v.set("z", 1);
        v.set("a", 2);
        assert_eq!(v.serialize(0), r#"{"z": 1,"a": 2}"#);
    }
}
