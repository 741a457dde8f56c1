//! Indented rendering of JSON text and values.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{Error, FormatOptions};

/// The indent used when none is given: three spaces.
pub const DEFAULT_INDENT: &str = "   ";

/// Reindents JSON text.
///
/// Tokens are copied as written, so keys keep their order and numbers keep
/// their spelling. An empty `indent` means [`DEFAULT_INDENT`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] if `src` is not a single well-formed JSON value.
///
/// # Examples
///
/// ```
/// let out = jsontree::pretty(r#"{"z":1.50,"a":[]}"#, "  ").unwrap();
/// assert_eq!(out, "{\n  \"z\": 1.50,\n  \"a\": []\n}");
/// ```
pub fn pretty(src: &str, indent: &str) -> Result<String, Error> {
    serde_json::from_str::<serde::de::IgnoredAny>(src).map_err(|err| {
        tracing::debug!(error = %err, "cannot reindent malformed input");
        Error::Syntax(err)
    })?;
    let indent = if indent.is_empty() { DEFAULT_INDENT } else { indent };
    Ok(reindent(src, indent))
}

/// Reindents JSON text held in bytes. See [`pretty`].
///
/// # Errors
///
/// Returns [`Error::Utf8`] if `bytes` is not UTF-8, and otherwise the errors
/// of [`pretty`].
pub fn pretty_bytes(bytes: &[u8], indent: &str) -> Result<String, Error> {
    pretty(core::str::from_utf8(bytes)?, indent)
}

/// Encodes a value as indented JSON text.
///
/// `indent` is used verbatim; an empty indent still breaks lines.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the value's `Serialize` implementation fails,
/// for instance on a map with non-string keys.
pub fn format_value<T: Serialize + ?Sized>(value: &T, indent: &str) -> Result<String, Error> {
    let mut buf = Vec::with_capacity(128);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser).map_err(Error::Syntax)?;
    String::from_utf8(buf).map_err(|err| Error::Utf8(err.utf8_error()))
}

/// Encodes a value as indented JSON text using `options`.
///
/// # Errors
///
/// See [`format_value`].
pub fn format_value_with<T: Serialize + ?Sized>(
    value: &T,
    options: &FormatOptions,
) -> Result<String, Error> {
    format_value(value, &options.indent)
}

const fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn newline(out: &mut String, indent: &str, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(indent);
    }
}

/// Rewrites the whitespace of text already known to be well-formed.
fn reindent(src: &str, indent: &str) -> String {
    let mut out = String::with_capacity(src.len() + src.len() / 2);
    let mut depth = 0usize;
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    out.push(c);
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                out.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '{' | '[' => {
                let close = if c == '{' { '}' } else { ']' };
                while chars.next_if(|c| is_ws(*c)).is_some() {}
                out.push(c);
                if chars.next_if_eq(&close).is_some() {
                    out.push(close);
                } else {
                    depth += 1;
                    newline(&mut out, indent, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, indent, depth);
                out.push(c);
            }
            ',' => {
                out.push(',');
                newline(&mut out, indent, depth);
            }
            ':' => out.push_str(": "),
            c if is_ws(c) => {}
            c => out.push(c),
        }
    }
    out
}
