use crate::{Error, Kind, Result};

/// A JSON number, keeping the subtype it was created with.
///
/// Equality is numeric: `Int(10) == Long(10) == Double(10.0)`. Integral
/// subtypes are compared exactly as `i64`. A pair involving `Float` is compared
/// at `f32` precision, so `Float(0.1) == Double(0.1)`; any other pair is
/// compared as `f64`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Number {
    pub const fn kind(self) -> Kind {
        match self {
            Number::Int(_) => Kind::Integer,
            Number::Long(_) => Kind::Long,
            Number::Float(_) => Kind::Float,
            Number::Double(_) => Kind::Double,
        }
    }

    /// Converts with `as` semantics: wrapping for integer narrowing,
    /// saturating for float to int, `NaN` to zero.
    #[inline]
    pub fn as_i32(self) -> i32 {
        match self {
            Number::Int(n) => n,
            Number::Long(n) => n as i32,
            Number::Float(n) => n as i32,
            Number::Double(n) => n as i32,
        }
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        match self {
            Number::Int(n) => n as i64,
            Number::Long(n) => n,
            Number::Float(n) => n as i64,
            Number::Double(n) => n as i64,
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Long(n) => n as f64,
            Number::Float(n) => n as f64,
            Number::Double(n) => n,
        }
    }

    pub const fn is_integral(self) -> bool {
        matches!(self, Number::Int(_) | Number::Long(_))
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) | Number::Long(_) => true,
            Number::Float(n) => n.is_finite(),
            Number::Double(n) => n.is_finite(),
        }
    }

    /// Returns this number plus one, in the same subtype.
    ///
    /// ```
    /// use keydex::Number;
    ///
    /// assert!(matches!(Number::Int(7).incremented(), Number::Int(8)));
    /// assert!(matches!(Number::Long(7).incremented(), Number::Long(8)));
    /// ```
    pub fn incremented(self) -> Number {
        match self {
            Number::Int(n) => Number::Int(n.wrapping_add(1)),
            Number::Long(n) => Number::Long(n.wrapping_add(1)),
            Number::Float(n) => Number::Float(n + 1.0),
            Number::Double(n) => Number::Double(n + 1.0),
        }
    }

    pub(crate) fn check_finite(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::InvalidArgument(
                "JSON does not allow non-finite numbers.".to_owned(),
            ))
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            _ if self.is_integral() && other.is_integral() => self.as_i64() == other.as_i64(),
            (Number::Float(_), _) | (_, Number::Float(_)) => {
                self.as_f64() as f32 == other.as_f64() as f32
            }
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Long(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

/// Produces the canonical JSON text of a number.
///
/// Integers print in decimal. Floating numbers print in their shortest
/// round-trip decimal form, and an integral floating value drops its
/// fraction, so `10.0` becomes `"10"`.
///
/// # Errors
///
/// [`InvalidArgument`](Error::InvalidArgument) when `number` is `None` or is
/// not finite.
///
/// # Example
///
/// ```
/// use keydex::{number_to_string, ErrorKind, Number};
///
/// assert_eq!(number_to_string(Some(Number::Double(10.0))).unwrap(), "10");
/// assert_eq!(number_to_string(Some(Number::Double(0.25))).unwrap(), "0.25");
/// assert_eq!(
///     number_to_string(None).unwrap_err().kind(),
///     ErrorKind::InvalidArgument
/// );
/// ```
pub fn number_to_string(number: Option<Number>) -> Result<String> {
    let Some(number) = number else {
        return Err(Error::InvalidArgument("Null pointer".to_owned()));
    };
    let number = number.check_finite()?;
    let mut out = String::new();
    push_number(&mut out, number);
    Ok(out)
}

/// Appends the text of a finite number.
pub(crate) fn push_number(out: &mut String, number: Number) {
    match number {
        Number::Int(n) => out.push_str(itoa::Buffer::new().format(n)),
        Number::Long(n) => out.push_str(itoa::Buffer::new().format(n)),
        Number::Float(n) => push_trimmed(out, ryu::Buffer::new().format_finite(n)),
        Number::Double(n) => push_trimmed(out, ryu::Buffer::new().format_finite(n)),
    }
}

// Strips trailing zeros and a dangling point from plain decimals; exponent
// forms are left alone.
fn push_trimmed(out: &mut String, text: &str) {
    if text.contains('.') && !text.contains(['e', 'E']) {
        let text = text.trim_end_matches('0');
        out.push_str(text.strip_suffix('.').unwrap_or(text));
    } else {
        out.push_str(text);
    }
}
