use std::{fmt, io::Write};

use indexmap::IndexMap;

use crate::{
    Accessor, Error, Kind, Result, Value, WriteConfig, value::check_storable, write::write_object,
};

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// Typed reads go through the [`Accessor`] trait. Equality ignores key order.
///
/// # Example
///
/// ```
/// use keydex::{Accessor, JsonObject, NULL};
///
/// let mut object = JsonObject::new();
/// object.put("name", "keydex").unwrap();
/// object.put("nothing", NULL.clone()).unwrap();
///
/// assert_eq!(object.get_string("name").unwrap(), "keydex");
/// assert_eq!(object.opt("nothing"), Some(&NULL));
/// assert!(object.is_null("nothing"));
/// assert!(object.is_null("missing"));
/// assert_eq!(object.to_string(), r#"{"name":"keydex","nothing":null}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonObject {
    map: IndexMap<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds an object from key/value pairs, keeping their order. A repeated
    /// key keeps its first position and its last value.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if a value is a non-finite number.
    pub fn from_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let entries = entries.into_iter();
        let mut object = Self::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            object.put(key, value)?;
        }
        Ok(object)
    }

    /// Builds an object holding copies of the listed entries of `other`.
    /// Names that `other` does not contain are skipped.
    pub fn from_keys(other: &JsonObject, names: &[&str]) -> Self {
        let mut object = Self::with_capacity(names.len());
        for name in names {
            if let Some(value) = other.map.get(*name) {
                object.map.insert((*name).to_owned(), value.clone());
            }
        }
        object
    }

    /// Inserts or replaces the value at `key`, returning the previous value.
    ///
    /// A replaced key keeps its original position.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is a non-finite number.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        let value = check_storable(value.into())?;
        Ok(self.map.insert(key.into(), value))
    }

    /// Like [`put`](Self::put), but does nothing when `value` is `None`.
    pub fn put_opt<V: Into<Value>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Result<Option<Value>> {
        match value {
            Some(value) => self.put(key, value),
            None => Ok(None),
        }
    }

    /// Removes the entry at `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.shift_remove(key)
    }

    /// Adds one to the number at `key`.
    ///
    /// A missing key is created holding the integer `1`. Integers gain `1`
    /// and floating numbers gain `1.0`, each keeping its subtype.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if the entry is not a number.
    ///
    /// ```
    /// use keydex::{Accessor, JsonObject, Number, Value};
    ///
    /// let mut counters = JsonObject::new();
    /// counters.increment("hits").unwrap();
    /// counters.increment("hits").unwrap();
    /// assert_eq!(counters.get("hits").unwrap(), &Value::Number(Number::Int(2)));
    /// ```
    pub fn increment(&mut self, key: &str) -> Result<()> {
        match self.map.get_mut(key) {
            None => {
                tracing::trace!(key, "increment creating counter");
                self.map.insert(key.to_owned(), Value::from(1));
                Ok(())
            }
            Some(Value::Number(n)) => {
                *n = n.incremented();
                Ok(())
            }
            Some(other) => Err(Error::wrong_type(
                Kind::Object.name(),
                key,
                "Number",
                other.kind().name(),
            )),
        }
    }

    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.map.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the keys in insertion order, or `None` for an empty object.
    pub fn names(&self) -> Option<Vec<&str>> {
        if self.is_empty() {
            None
        } else {
            Some(self.keys().collect())
        }
    }
}

impl Accessor for JsonObject {
    type Keydex<'k> = &'k str;

    const KIND: Kind = Kind::Object;

    #[inline]
    fn opt(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    fn write_indented<W: Write>(
        &self,
        mut writer: W,
        config: &WriteConfig,
        indent: usize,
    ) -> Result<W> {
        write_object(&mut writer, self, config, indent)?;
        Ok(writer)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.write(Vec::new()).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
