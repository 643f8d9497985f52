//! Typed key/index accessors over JSON object and array containers.
//!
//! [`JsonObject`] (addressed by `&str`) and [`JsonArray`] (addressed by
//! `usize`) share one [`Accessor`] trait. It provides strict `get_*` readers
//! that fail with [`Error::NotFound`] or [`Error::WrongType`], forgiving `opt_*`
//! readers that fall back to a default, and JSON text output.
//!
//! JSON `null` is the [`NULL`] sentinel. It is a stored value, unlike a missing
//! entry, which [`Accessor::opt`] reports as `None`.
//!
//! ```
//! use keydex::{Accessor, JsonObject, NULL};
//!
//! let doc: JsonObject = r#"{"id":"7","tags":["a"],"parent":null}"#.parse().unwrap();
//!
//! assert_eq!(doc.get_int("id").unwrap(), 7);
//! assert_eq!(doc.get_json_array("tags").unwrap().get_string(0).unwrap(), "a");
//! assert_eq!(doc.opt("parent"), Some(&NULL));
//! assert_eq!(doc.opt("missing"), None);
//! assert!(doc.is_null("parent") && doc.is_null("missing"));
//! assert_eq!(doc.to_string(), r#"{"id":"7","tags":["a"],"parent":null}"#);
//! ```

mod accessor;
mod array;
mod coerce;
#[cfg(feature = "serde")]
mod de;
mod error;
mod kind;
mod number;
mod object;
#[cfg(feature = "serde")]
mod ser;
mod value;
mod write;

pub use accessor::*;
pub use array::*;
#[cfg(feature = "serde")]
pub use de::from_str;
pub use error::*;
pub use kind::*;
pub use number::{Number, number_to_string};
pub use object::*;
pub use value::{NULL, Value};
pub use write::WriteConfig;
