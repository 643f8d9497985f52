use std::fmt;

/// The runtime type of a [`Value`](crate::Value).
///
/// Every value stored in a container has exactly one kind. Numbers keep their
/// subtype (`Integer`, `Long`, `Float`, `Double`) so that operations such as
/// [`JsonObject::increment`](crate::JsonObject::increment) can preserve it.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Kind {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    Long = 3,
    Float = 4,
    Double = 5,
    String = 6,
    Object = 7,
    Array = 8,
}

impl Kind {
    /// Returns the name used for this kind in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use keydex::Kind;
    ///
    /// assert_eq!(Kind::Integer.name(), "Integer");
    /// assert_eq!(Kind::Object.name(), "JsonObject");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::Object => "JsonObject",
            Self::Array => "JsonArray",
        }
    }

    /// Returns `true` for the four numeric kinds.
    ///
    /// ```
    /// use keydex::Kind;
    ///
    /// assert!(Kind::Long.is_number());
    /// assert!(Kind::Float.is_number());
    /// assert!(!Kind::String.is_number());
    /// ```
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` for `Object` and `Array`.
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
