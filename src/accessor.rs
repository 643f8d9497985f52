//! Typed retrieval shared by [`JsonObject`] and [`JsonArray`].
//!
//! A container only supplies raw lookup ([`Accessor::opt`]) and raw output
//! ([`Accessor::write_indented`]). Everything else, the strict `get_*` family,
//! the forgiving `opt_*` family and the serialization entry points, is
//! provided here once for both addressing schemes.
//!
//! # Strict and optional accessors
//!
//! | Accessor | Missing entry | Unconvertible entry |
//! |----------|---------------|---------------------|
//! | `get_*` | [`Error::NotFound`] | [`Error::WrongType`] |
//! | `opt_*` | default | default |
//!
//! `get_boolean`, `get_int`, `get_long` and `get_double` accept strings that
//! parse as the requested type, so `"12"` reads as `12` and `"TRUE"` as
//! `true`. Anything structurally different, such as an object where a
//! number was requested, still fails.
//!
//! # Example
//!
//! ```
//! use keydex::{Accessor, ErrorKind, JsonObject};
//!
//! let doc: JsonObject = r#"{"a":"x","b":12,"c":{"d":true}}"#.parse().unwrap();
//!
//! assert_eq!(doc.get_string("a").unwrap(), "x");
//! assert_eq!(doc.get_int("b").unwrap(), 12);
//! assert!(doc.get_json_object("c").unwrap().get_boolean("d").unwrap());
//! assert_eq!(doc.get("z").unwrap_err().kind(), ErrorKind::NotFound);
//! assert!(doc.opt("z").is_none());
//! assert_eq!(doc.opt_int_or("z", 20), 20);
//! ```

use std::{borrow::Cow, fmt::Display, io::Write};

use crate::{
    Error, JsonArray, JsonObject, Kind, NULL, Result, Value, WriteConfig,
    coerce::{self, to_canonical_string},
};

/// Key- or index-addressed access to a JSON container.
pub trait Accessor {
    /// How entries are addressed: `&str` for objects, `usize` for arrays.
    type Keydex<'k>: Copy + Display;

    /// The container's own kind, used to name it in error messages.
    const KIND: Kind;

    /// Returns the raw value at `keydex`, or `None` if there is no entry.
    ///
    /// An explicit JSON `null` is returned as `Some(&NULL)`. This is the only
    /// way to tell a missing entry from a null one.
    fn opt(&self, keydex: Self::Keydex<'_>) -> Option<&Value>;

    /// Writes this container as JSON text, starting at nesting depth `indent`
    /// spaces, and hands the writer back.
    fn write_indented<W: Write>(&self, writer: W, config: &WriteConfig, indent: usize)
    -> Result<W>;

    /// Returns the value at `keydex`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if there is no entry.
    fn get(&self, keydex: Self::Keydex<'_>) -> Result<&Value> {
        match self.opt(keydex) {
            Some(value) => Ok(value),
            None => Err(Error::not_found(Self::KIND.name(), keydex)),
        }
    }

    /// Returns the entry as a boolean. `Bool` values and the strings `"true"`
    /// and `"false"` (ignoring ASCII case) are accepted.
    fn get_boolean(&self, keydex: Self::Keydex<'_>) -> Result<bool> {
        let value = self.get(keydex)?;
        coerce::to_boolean(value)
            .ok_or_else(|| wrong_type::<Self>(keydex, Kind::Boolean.name(), value))
    }

    /// Returns the entry as an `i32`, narrowing numbers with `as` and parsing
    /// strings.
    fn get_int(&self, keydex: Self::Keydex<'_>) -> Result<i32> {
        let value = self.get(keydex)?;
        coerce::to_i32(value).ok_or_else(|| wrong_type::<Self>(keydex, Kind::Integer.name(), value))
    }

    /// Returns the entry as an `i64`, converting numbers with `as` and parsing
    /// strings.
    fn get_long(&self, keydex: Self::Keydex<'_>) -> Result<i64> {
        let value = self.get(keydex)?;
        coerce::to_i64(value).ok_or_else(|| wrong_type::<Self>(keydex, Kind::Long.name(), value))
    }

    /// Returns the entry as an `f64`, widening numbers and parsing strings.
    fn get_double(&self, keydex: Self::Keydex<'_>) -> Result<f64> {
        let value = self.get(keydex)?;
        coerce::to_f64(value).ok_or_else(|| wrong_type::<Self>(keydex, Kind::Double.name(), value))
    }

    /// Returns the entry if it is an object.
    fn get_json_object(&self, keydex: Self::Keydex<'_>) -> Result<&JsonObject> {
        let value = self.get(keydex)?;
        value
            .as_object()
            .ok_or_else(|| wrong_type::<Self>(keydex, Kind::Object.name(), value))
    }

    /// Returns the entry if it is an array.
    fn get_json_array(&self, keydex: Self::Keydex<'_>) -> Result<&JsonArray> {
        let value = self.get(keydex)?;
        value
            .as_array()
            .ok_or_else(|| wrong_type::<Self>(keydex, Kind::Array.name(), value))
    }

    /// Returns the entry as a string slice.
    ///
    /// Only `String` entries qualify. Unlike [`opt_string`](Self::opt_string),
    /// numbers and booleans are *not* rendered to text; they fail with
    /// [`Error::WrongType`].
    fn get_string(&self, keydex: Self::Keydex<'_>) -> Result<&str> {
        let value = self.get(keydex)?;
        value
            .as_str()
            .ok_or_else(|| wrong_type::<Self>(keydex, Kind::String.name(), value))
    }

    /// Returns `true` if there is no entry at `keydex` or the entry is JSON
    /// `null`. Use [`opt`](Self::opt) to tell the two apart.
    fn is_null(&self, keydex: Self::Keydex<'_>) -> bool {
        self.opt(keydex).is_none_or(|value| *value == NULL)
    }

    /// Like [`get_boolean`](Self::get_boolean), but `false` on any failure.
    fn opt_boolean(&self, keydex: Self::Keydex<'_>) -> bool {
        self.opt_boolean_or(keydex, false)
    }

    /// Like [`opt_boolean`](Self::opt_boolean), with an explicit default.
    fn opt_boolean_or(&self, keydex: Self::Keydex<'_>, default: bool) -> bool {
        optional(self, keydex, Kind::Boolean, coerce::to_boolean).unwrap_or(default)
    }

    /// Like [`get_int`](Self::get_int), but `0` on any failure.
    fn opt_int(&self, keydex: Self::Keydex<'_>) -> i32 {
        self.opt_int_or(keydex, 0)
    }

    /// Like [`opt_int`](Self::opt_int), with an explicit default.
    fn opt_int_or(&self, keydex: Self::Keydex<'_>, default: i32) -> i32 {
        optional(self, keydex, Kind::Integer, coerce::to_i32).unwrap_or(default)
    }

    /// Like [`get_long`](Self::get_long), but `0` on any failure.
    fn opt_long(&self, keydex: Self::Keydex<'_>) -> i64 {
        self.opt_long_or(keydex, 0)
    }

    /// Like [`opt_long`](Self::opt_long), with an explicit default.
    fn opt_long_or(&self, keydex: Self::Keydex<'_>, default: i64) -> i64 {
        optional(self, keydex, Kind::Long, coerce::to_i64).unwrap_or(default)
    }

    /// Like [`get_double`](Self::get_double), but `NaN` on any failure.
    fn opt_double(&self, keydex: Self::Keydex<'_>) -> f64 {
        self.opt_double_or(keydex, f64::NAN)
    }

    /// Like [`opt_double`](Self::opt_double), with an explicit default.
    fn opt_double_or(&self, keydex: Self::Keydex<'_>, default: f64) -> f64 {
        optional(self, keydex, Kind::Double, coerce::to_f64).unwrap_or(default)
    }

    /// Returns the entry if it is an object, `None` otherwise.
    fn opt_json_object(&self, keydex: Self::Keydex<'_>) -> Option<&JsonObject> {
        self.opt(keydex).and_then(Value::as_object)
    }

    /// Returns the entry if it is an array, `None` otherwise.
    fn opt_json_array(&self, keydex: Self::Keydex<'_>) -> Option<&JsonArray> {
        self.opt(keydex).and_then(Value::as_array)
    }

    /// Returns the entry as text, or `""` if it is missing or `null`.
    ///
    /// This is looser than [`get_string`](Self::get_string):
    /// any present value is rendered, so `12` yields `"12"`, `true` yields
    /// `"true"` and containers yield their compact JSON text.
    fn opt_string(&self, keydex: Self::Keydex<'_>) -> Cow<'_, str> {
        self.opt_string_or(keydex, "")
    }

    /// Like [`opt_string`](Self::opt_string), but `default` replaces a
    /// missing or `null` entry.
    fn opt_string_or<'a>(&'a self, keydex: Self::Keydex<'_>, default: &'a str) -> Cow<'a, str> {
        match self.opt(keydex) {
            None | Some(Value::Null) => Cow::Borrowed(default),
            Some(value) => to_canonical_string(value),
        }
    }

    /// Writes this container as compact JSON text and returns the writer.
    fn write<W: Write>(&self, writer: W) -> Result<W> {
        self.write_indented(writer, &WriteConfig::compact(), 0)
    }

    /// Writes this container using `config` and returns the writer.
    fn write_with<W: Write>(&self, writer: W, config: &WriteConfig) -> Result<W> {
        self.write_indented(writer, config, 0)
    }

    /// Renders this container with `indent_factor` spaces per nesting level.
    ///
    /// ```
    /// use keydex::{Accessor, JsonArray};
    ///
    /// let array: JsonArray = "[1,[2]]".parse().unwrap();
    /// assert_eq!(array.to_pretty_string(1).unwrap(), "[\n 1,\n [\n  2\n ]\n]");
    /// ```
    fn to_pretty_string(&self, indent_factor: usize) -> Result<String> {
        let buf = self.write_indented(Vec::new(), &WriteConfig::pretty(indent_factor), 0)?;
        String::from_utf8(buf).map_err(|e| Error::InvalidArgument(e.to_string()))
    }
}

fn wrong_type<A: Accessor + ?Sized>(
    keydex: impl Display,
    expected: &'static str,
    value: &Value,
) -> Error {
    Error::wrong_type(A::KIND.name(), keydex, expected, value.kind().name())
}

// The `opt_*` path: no error value is built when the coercion fails.
#[inline]
fn optional<A: Accessor + ?Sized, T>(
    container: &A,
    keydex: A::Keydex<'_>,
    requested: Kind,
    coerce: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let result = container.opt(keydex).and_then(coerce);
    if result.is_none() {
        tracing::trace!(
            container = A::KIND.name(),
            %keydex,
            requested = requested.name(),
            "optional accessor falling back to default"
        );
    }
    result
}
