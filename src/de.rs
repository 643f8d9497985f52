//! [`serde::Deserialize`] for the value model, and parsing from JSON text.
//!
//! Text goes through `serde_json`'s strict tokenizer. Numbers are narrowed to
//! the smallest fitting subtype:
//!
//! | JSON number | Stored as |
//! |-------------|-----------|
//! | integer within `i32` | `Number::Int` |
//! | integer within `i64` | `Number::Long` |
//! | larger integer, fraction or exponent | `Number::Double` |
//!
//! # Quick Start
//!
//! ```
//! use keydex::{Accessor, JsonArray, JsonObject, Value};
//!
//! let object: JsonObject = r#"{"n":3000000000}"#.parse().unwrap();
//! assert_eq!(object.get_long("n").unwrap(), 3_000_000_000);
//!
//! let array: JsonArray = "[1, 2.5]".parse().unwrap();
//! assert_eq!(array.get_double(1).unwrap(), 2.5);
//!
//! let value: Value = keydex::from_str("null").unwrap();
//! assert!(value.is_null());
//!
//! assert!("".parse::<JsonObject>().is_err());
//! assert!("[]".parse::<JsonObject>().is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned, MapAccess, SeqAccess, Visitor},
};

use crate::{JsonArray, JsonObject, Number, Result, Value};

/// Parses JSON text into any deserializable type, including [`Value`],
/// [`JsonObject`] and [`JsonArray`].
///
/// # Errors
///
/// [`Error::Syntax`](crate::Error::Syntax) if the text is not valid JSON or
/// does not have the shape `T` expects.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, "rejected JSON text");
        e.into()
    })
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Value, E> {
        Ok(Value::Number(match i32::try_from(v) {
            Ok(n) => Number::Int(n),
            Err(_) => Number::Long(v),
        }))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Value, E> {
        Ok(Value::Number(match (i32::try_from(v), i64::try_from(v)) {
            (Ok(n), _) => Number::Int(n),
            (_, Ok(n)) => Number::Long(n),
            _ => Number::Double(v as f64),
        }))
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> std::result::Result<Value, E> {
        Number::Float(v)
            .check_finite()
            .map(Value::Number)
            .map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
        Number::Double(v)
            .check_finite()
            .map(Value::Number)
            .map_err(E::custom)
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> std::result::Result<Value, A::Error> {
        ArrayVisitor.visit_seq(seq).map(Value::Array)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Value, A::Error> {
        ObjectVisitor.visit_map(map).map(Value::Object)
    }
}

struct ObjectVisitor;

impl<'de> Visitor<'de> for ObjectVisitor {
    type Value = JsonObject;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<JsonObject, A::Error> {
        let mut object = JsonObject::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            object.put(key, value).map_err(de::Error::custom)?;
        }
        Ok(object)
    }
}

struct ArrayVisitor;

impl<'de> Visitor<'de> for ArrayVisitor {
    type Value = JsonArray;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<JsonArray, A::Error> {
        let mut array = JsonArray::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            array.push(value).map_err(de::Error::custom)?;
        }
        Ok(array)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ObjectVisitor)
    }
}

impl<'de> Deserialize<'de> for JsonArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(ArrayVisitor)
    }
}

impl FromStr for Value {
    type Err = crate::Error;

    fn from_str(text: &str) -> Result<Self> {
        from_str(text)
    }
}

impl FromStr for JsonObject {
    type Err = crate::Error;

    fn from_str(text: &str) -> Result<Self> {
        from_str(text)
    }
}

impl FromStr for JsonArray {
    type Err = crate::Error;

    fn from_str(text: &str) -> Result<Self> {
        from_str(text)
    }
}
