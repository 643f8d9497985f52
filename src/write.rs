use std::io::Write;

use crate::{JsonArray, JsonObject, Result, Value, number::push_number};

/// Options controlling JSON text output.
///
/// The default is compact output: no whitespace at all, and `</` written as
/// `<\/` so the text can be embedded in an HTML `<script>` element.
///
/// # Example
///
/// ```
/// use keydex::{Accessor, JsonObject, WriteConfig};
///
/// let mut object = JsonObject::new();
/// object.put("a", 1).unwrap();
///
/// let text = object.write_with(Vec::new(), &WriteConfig::pretty(2)).unwrap();
/// assert_eq!(String::from_utf8(text).unwrap(), "{\n  \"a\": 1\n}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteConfig {
    /// Spaces added per nesting level. Zero means compact output.
    pub indent_factor: usize,
    /// Write `/` as `\/` when it follows `<`.
    pub escape_slash: bool,
}

impl WriteConfig {
    pub const fn compact() -> Self {
        Self {
            indent_factor: 0,
            escape_slash: true,
        }
    }

    pub const fn pretty(indent_factor: usize) -> Self {
        Self {
            indent_factor,
            escape_slash: true,
        }
    }

    pub const fn with_escape_slash(mut self, escape_slash: bool) -> Self {
        self.escape_slash = escape_slash;
        self
    }

    #[inline]
    const fn is_pretty(&self) -> bool {
        self.indent_factor > 0
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self::compact()
    }
}

pub(crate) fn write_value<W: Write>(
    writer: &mut W,
    value: &Value,
    config: &WriteConfig,
    indent: usize,
) -> Result<()> {
    match value {
        Value::Null => writer.write_all(b"null")?,
        Value::Bool(true) => writer.write_all(b"true")?,
        Value::Bool(false) => writer.write_all(b"false")?,
        Value::Number(n) => {
            let mut text = String::new();
            push_number(&mut text, n.check_finite()?);
            writer.write_all(text.as_bytes())?;
        }
        Value::String(s) => write_quoted(writer, s, config)?,
        Value::Object(o) => write_object(writer, o, config, indent)?,
        Value::Array(a) => write_array(writer, a, config, indent)?,
    }
    Ok(())
}

pub(crate) fn write_object<W: Write>(
    writer: &mut W,
    object: &JsonObject,
    config: &WriteConfig,
    indent: usize,
) -> Result<()> {
    writer.write_all(b"{")?;
    let inner = indent + config.indent_factor;
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_newline(writer, config, inner)?;
        write_quoted(writer, key, config)?;
        let colon: &[u8] = if config.is_pretty() { b": " } else { b":" };
        writer.write_all(colon)?;
        write_value(writer, value, config, inner)?;
    }
    if !object.is_empty() {
        write_newline(writer, config, indent)?;
    }
    writer.write_all(b"}")?;
    Ok(())
}

pub(crate) fn write_array<W: Write>(
    writer: &mut W,
    array: &JsonArray,
    config: &WriteConfig,
    indent: usize,
) -> Result<()> {
    writer.write_all(b"[")?;
    let inner = indent + config.indent_factor;
    for (i, value) in array.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_newline(writer, config, inner)?;
        write_value(writer, value, config, inner)?;
    }
    if !array.is_empty() {
        write_newline(writer, config, indent)?;
    }
    writer.write_all(b"]")?;
    Ok(())
}

fn write_newline<W: Write>(writer: &mut W, config: &WriteConfig, indent: usize) -> Result<()> {
    if config.is_pretty() {
        writer.write_all(b"\n")?;
        for _ in 0..indent {
            writer.write_all(b" ")?;
        }
    }
    Ok(())
}

fn write_quoted<W: Write>(writer: &mut W, s: &str, config: &WriteConfig) -> Result<()> {
    let mut out = String::with_capacity(s.len() + 2);
    quote(&mut out, s, config.escape_slash);
    writer.write_all(out.as_bytes())?;
    Ok(())
}

/// Appends `s` as a quoted JSON string.
pub(crate) fn quote(out: &mut String, s: &str, escape_slash: bool) {
    out.push('"');
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '/' => {
                if escape_slash && prev == '<' {
                    out.push('\\');
                }
                out.push('/');
            }
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if needs_unicode_escape(c) => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
        prev = c;
    }
    out.push('"');
}

#[inline]
fn needs_unicode_escape(c: char) -> bool {
    c < ' ' || ('\u{80}'..'\u{a0}').contains(&c) || ('\u{2000}'..'\u{2100}').contains(&c)
}
