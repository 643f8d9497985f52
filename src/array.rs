use std::{fmt, io::Write, slice};

use crate::{
    Accessor, Error, Kind, NULL, Result, Value, WriteConfig, value::check_storable,
    write::write_array,
};

/// An ordered sequence of [`Value`]s addressed by `usize` offset.
///
/// Typed reads go through the [`Accessor`] trait.
///
/// # Example
///
/// ```
/// use keydex::{Accessor, JsonArray};
///
/// let mut array = JsonArray::new();
/// array.push("12").unwrap();
/// array.put(2, true).unwrap();
///
/// assert_eq!(array.get_int(0).unwrap(), 12);
/// assert!(array.is_null(1));
/// assert!(array.get_boolean(2).unwrap());
/// assert!(array.opt(3).is_none());
/// assert_eq!(array.to_string(), r#"["12",null,true]"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonArray {
    values: Vec<Value>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Builds an array from values, in order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if a value is
    /// a non-finite number.
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Result<Self> {
        let values = values.into_iter();
        let mut array = Self::with_capacity(values.size_hint().0);
        for value in values {
            array.push(value)?;
        }
        Ok(array)
    }

    /// Appends `value`.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.values.push(check_storable(value.into())?);
        Ok(())
    }

    /// Stores `value` at `index`. When `index` is past the end, the gap is
    /// filled with `null`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is a non-finite number, or if
    /// the padded array cannot be allocated.
    ///
    /// ```
    /// use keydex::JsonArray;
    ///
    /// let mut array = JsonArray::new();
    /// array.put(1, 7).unwrap();
    /// assert_eq!(array.to_string(), "[null,7]");
    /// ```
    pub fn put(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let value = check_storable(value.into())?;
        if index < self.values.len() {
            self.values[index] = value;
        } else {
            let additional = index
                .checked_add(1)
                .map(|end| end - self.values.len())
                .ok_or_else(|| unallocatable(index))?;
            self.values
                .try_reserve(additional)
                .map_err(|_| unallocatable(index))?;
            self.values.resize(index, NULL.clone());
            self.values.push(value);
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }
}

fn unallocatable(index: usize) -> Error {
    Error::InvalidArgument(format!("JsonArray[{index}] cannot be allocated."))
}

impl Accessor for JsonArray {
    type Keydex<'k> = usize;

    const KIND: Kind = Kind::Array;

    #[inline]
    fn opt(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    fn write_indented<W: Write>(
        &self,
        mut writer: W,
        config: &WriteConfig,
        indent: usize,
    ) -> Result<W> {
        write_array(&mut writer, self, config, indent)?;
        Ok(writer)
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.write(Vec::new()).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
