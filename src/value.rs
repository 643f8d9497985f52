use std::fmt;

use crate::{Accessor, JsonArray, JsonObject, Kind, Number, WriteConfig, write::write_value};

/// The JSON `null` sentinel.
///
/// A single immutable instance shared by the whole process. A container entry
/// equal to `NULL` is an explicit JSON `null`; an entry that does not exist at
/// all is reported by [`Accessor::opt`](crate::Accessor::opt) as `None`.
pub static NULL: Value = Value::Null;

/// Any value that may be stored in a [`JsonObject`] or [`JsonArray`].
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Object(JsonObject),
    Array(JsonArray),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(n) => n.kind(),
            Value::String(_) => Kind::String,
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Looks up `key` when this value is an object.
    ///
    /// Returns `None` when the entry does not exist or this value is not an
    /// object. Use [`at`](Self::at) for arrays.
    ///
    /// ```
    /// use keydex::{JsonArray, JsonObject, Value};
    ///
    /// let mut inner = JsonArray::new();
    /// inner.push(3).unwrap();
    /// let mut outer = JsonObject::new();
    /// outer.put("list", inner).unwrap();
    /// let value = Value::from(outer);
    ///
    /// assert_eq!(value.get("list").and_then(|v| v.at(0)), Some(&Value::from(3)));
    /// assert!(value.at(0).is_none());
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.opt(key)
    }

    /// Looks up `offset` when this value is an array.
    pub fn at(&self, offset: usize) -> Option<&Value> {
        self.as_array()?.opt(offset)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A bare non-finite number has no JSON text; containers never hold one.
        if let Value::Number(n) = self {
            if !n.is_finite() {
                return f.write_str("null");
            }
        }
        let mut buf = Vec::new();
        write_value(&mut buf, self, &WriteConfig::compact(), 0).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Long(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Double(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<JsonObject> for Value {
    fn from(value: JsonObject) -> Self {
        Value::Object(value)
    }
}

impl From<JsonArray> for Value {
    fn from(value: JsonArray) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_number() == Some(Number::Int(*other))
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_number() == Some(Number::Long(*other))
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(Number::Double(*other))
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Ensures a value about to be stored is representable as JSON text.
pub(crate) fn check_storable(value: Value) -> crate::Result<Value> {
    match value {
        Value::Number(n) => n.check_finite().map(Value::Number),
        other => Ok(other),
    }
}
