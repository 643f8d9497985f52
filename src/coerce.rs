//! Loose conversions shared by every [`Accessor`](crate::Accessor).
//!
//! Each function answers one question: can this stored value be read as the
//! requested type? `None` means no. The strict `get_*` accessors turn `None`
//! into [`Error::WrongType`](crate::Error::WrongType); the `opt_*` accessors
//! turn it into their default without building an error.
//!
//! Rules:
//!
//! - booleans come from `Bool`, or from a `String` equal to `"true"` or
//!   `"false"` ignoring ASCII case;
//! - integers come from any number (Rust `as` conversion), or from a `String`
//!   holding an optionally signed run of ASCII digits that fits the width;
//! - doubles come from any number, or from a `String` in Rust float syntax
//!   after trimming surrounding whitespace and control characters. The only
//!   words accepted are `Infinity` and `NaN`, optionally signed; `inf`,
//!   `infinity` and `nan` are rejected.

use std::borrow::Cow;

use crate::{Value, number::push_number};

pub(crate) fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

pub(crate) fn to_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => Some(n.as_i32()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub(crate) fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => Some(n.as_i64()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub(crate) fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(n.as_f64()),
        Value::String(s) => parse_double(s.trim_matches(|c: char| c <= ' ')),
        _ => None,
    }
}

// `str::parse` also takes `inf`, `infinity` and `nan` in any case. Only
// `Infinity` and `NaN` are accepted as words here.
fn parse_double(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let numeric = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if numeric || unsigned == "Infinity" || unsigned == "NaN" {
        text.parse().ok()
    } else {
        None
    }
}

/// The text `opt_string` hands back for a present, non-null value.
///
/// Strings are returned as-is, everything else is rendered: booleans and
/// numbers as their JSON literals, containers as compact JSON.
pub(crate) fn to_canonical_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Null => Cow::Borrowed("null"),
        Value::Number(n) => {
            let mut out = String::new();
            push_number(&mut out, *n);
            Cow::Owned(out)
        }
        Value::Object(_) | Value::Array(_) => Cow::Owned(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JsonArray, Number};

    #[test]
    fn test_boolean_strings_ignore_case() {
        assert_eq!(to_boolean(&Value::from("TRUE")), Some(true));
        assert_eq!(to_boolean(&Value::from("False")), Some(false));
        assert_eq!(to_boolean(&Value::from("yes")), None);
        assert_eq!(to_boolean(&Value::from(1)), None);
        assert_eq!(to_boolean(&Value::Null), None);
    }

    #[test]
    fn test_integer_narrowing_follows_as_casts() {
        assert_eq!(to_i32(&Value::from(12.9)), Some(12));
        assert_eq!(to_i32(&Value::from(-12.9)), Some(-12));
        assert_eq!(to_i32(&Value::from(1e20)), Some(i32::MAX));
        assert_eq!(to_i32(&Value::from(f64::NAN)), Some(0));
        assert_eq!(to_i32(&Value::from(0x1_0000_0001_i64)), Some(1));
        assert_eq!(to_i64(&Value::from(7)), Some(7));
    }

    #[test]
    fn test_integer_strings() {
        assert_eq!(to_i32(&Value::from("42")), Some(42));
        assert_eq!(to_i32(&Value::from("+42")), Some(42));
        assert_eq!(to_i32(&Value::from("-42")), Some(-42));
        assert_eq!(to_i32(&Value::from(" 42")), None);
        assert_eq!(to_i32(&Value::from("4.2")), None);
        assert_eq!(to_i32(&Value::from("3000000000")), None);
        assert_eq!(to_i64(&Value::from("3000000000")), Some(3_000_000_000));
    }

    #[test]
    fn test_double_strings() {
        assert_eq!(to_f64(&Value::from("2.5")), Some(2.5));
        assert_eq!(to_f64(&Value::from("  1e3 ")), Some(1000.0));
        assert_eq!(to_f64(&Value::from("-.5")), Some(-0.5));
        assert!(to_f64(&Value::from("NaN")).is_some_and(f64::is_nan));
        assert_eq!(to_f64(&Value::from("Infinity")), Some(f64::INFINITY));
        assert_eq!(to_f64(&Value::from("-Infinity")), Some(f64::NEG_INFINITY));
        assert_eq!(to_f64(&Value::from("inf")), None);
        assert_eq!(to_f64(&Value::from("-infinity")), None);
        assert_eq!(to_f64(&Value::from("INFINITY")), None);
        assert_eq!(to_f64(&Value::from("nan")), None);
        assert_eq!(to_f64(&Value::from("+")), None);
        assert_eq!(to_f64(&Value::from("twelve")), None);
        assert_eq!(to_f64(&Value::from(true)), None);
    }

    #[test]
    fn test_canonical_strings() {
        assert_eq!(to_canonical_string(&Value::from("x")), "x");
        assert_eq!(to_canonical_string(&Value::from(false)), "false");
        assert_eq!(to_canonical_string(&Value::from(12)), "12");
        assert_eq!(
            to_canonical_string(&Value::Number(Number::Double(10.0))),
            "10"
        );
        let mut array = JsonArray::new();
        array.push("a").unwrap();
        array.push(1).unwrap();
        assert_eq!(to_canonical_string(&Value::from(array)), r#"["a",1]"#);
    }
}
