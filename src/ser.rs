//! [`serde::Serialize`] for the value model.
//!
//! | Value | serde data model |
//! |-------|------------------|
//! | `Null` | unit |
//! | `Bool` | `bool` |
//! | `Number(Int)` / `Number(Long)` | `i32` / `i64` |
//! | `Number(Float)` / `Number(Double)` | `f32` / `f64` |
//! | `String` | `str` |
//! | `Object` | map, in insertion order |
//! | `Array` | seq |
//!
//! ```
//! use keydex::JsonObject;
//!
//! let object: JsonObject = r#"{"b":1,"a":[true,null]}"#.parse().unwrap();
//! assert_eq!(serde_json::to_string(&object).unwrap(), r#"{"b":1,"a":[true,null]}"#);
//! ```

use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};

use crate::{JsonArray, JsonObject, Number, Value};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(n) => serializer.serialize_i32(n),
            Number::Long(n) => serializer.serialize_i64(n),
            Number::Float(n) => serializer.serialize_f32(n),
            Number::Double(n) => serializer.serialize_f64(n),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(o) => o.serialize(serializer),
            Value::Array(a) => a.serialize(serializer),
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}
