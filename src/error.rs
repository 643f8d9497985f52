//! Error types for accessor, parsing and writing operations.
//!
//! This module contains the [`Error`] type which represents every failure the
//! crate can report, and [`ErrorKind`], the reason tag callers usually match on.
//!
//! # Example
//!
//! ```
//! use keydex::{Accessor, ErrorKind, JsonObject, Result};
//!
//! fn port(config: &JsonObject) -> Result<i32> {
//!     match config.get_int("port") {
//!         Ok(port) => Ok(port),
//!         Err(e) if e.kind() == ErrorKind::NotFound => Ok(8080),
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! let mut config = JsonObject::new();
//! assert_eq!(port(&config).unwrap(), 8080);
//!
//! config.put("port", "oops").unwrap();
//! assert_eq!(port(&config).unwrap_err().kind(), ErrorKind::WrongType);
//! ```

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{de, ser};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The reason tag of an [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    NotFound,
    WrongType,
    InvalidArgument,
    Syntax,
    Io,
}

/// This type represents all possible errors that can occur when reading,
/// coercing, parsing or writing JSON values.
///
/// # Variants
///
/// - [`NotFound`](Error::NotFound) - a required accessor found no entry
/// - [`WrongType`](Error::WrongType) - the entry cannot be converted to the requested type
/// - [`InvalidArgument`](Error::InvalidArgument) - a malformed call
/// - [`Syntax`](Error::Syntax) - the parser rejected the input text
/// - [`IO`](Error::IO) - the sink failed while writing
#[derive(Debug)]
pub enum Error {
    /// No entry exists at the key or index.
    NotFound {
        /// Name of the container kind, e.g. `JsonObject`.
        container: &'static str,
        keydex: String,
    },

    /// The entry exists but its runtime type, or its parsed string form, does
    /// not satisfy the requested conversion.
    WrongType {
        container: &'static str,
        keydex: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A malformed call, such as stringifying a missing or non-finite number.
    InvalidArgument(String),

    /// The input text is not valid JSON, or its root has the wrong shape.
    Syntax(String),

    /// An I/O error occurred.
    ///
    /// This happens when writing to a [`std::io::Write`] implementation that
    /// encounters an error.
    IO(std::io::Error),
}

impl Error {
    pub(crate) fn not_found(container: &'static str, keydex: impl Display) -> Self {
        Error::NotFound {
            container,
            keydex: keydex.to_string(),
        }
    }

    pub(crate) fn wrong_type(
        container: &'static str,
        keydex: impl Display,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Error::WrongType {
            container,
            keydex: keydex.to_string(),
            expected,
            actual,
        }
    }

    /// Returns the reason tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::WrongType { .. } => ErrorKind::WrongType,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::IO(_) => ErrorKind::Io,
        }
    }
}

#[cfg(feature = "serde")]
impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Syntax(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            Error::IO(error.into())
        } else {
            Error::Syntax(error.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound { container, keydex } => {
                write!(formatter, "{container}[{keydex}] not found.")
            }
            Error::WrongType {
                container,
                keydex,
                expected,
                actual,
            } => write!(
                formatter,
                "{container}[{keydex}] is not a {expected}, it is a {actual}."
            ),
            Error::InvalidArgument(message) => formatter.write_str(message),
            Error::Syntax(message) => write!(formatter, "syntax error: {message}"),
            Error::IO(error) => formatter.write_str(&error.to_string()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}
