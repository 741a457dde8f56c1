//! Loading entry points: decode input with `serde_json`, then build the tree.
//!
//! Text and byte inputs are borrowed and handed straight to the decoder, so
//! no intermediate copy of the input is made.
//!
//! The decoder bounds nesting: arrays and objects may be nested at most
//! [`MAX_DEPTH`] levels deep, and deeper input is a decode error even when it
//! is otherwise well-formed.

use std::{fs::File, io, io::BufReader, path::Path};

use serde::Deserialize;
use serde_json::de::{IoRead, Read as JsonRead, StreamDeserializer};

use crate::{Document, Error, LoadOptions, value::Value};

/// The deepest container nesting the loaders accept.
///
/// This is the recursion limit of `serde_json`'s decoder: the container that
/// would open level `MAX_DEPTH + 1` fails with a "recursion limit exceeded"
/// decode error. [`pretty`](crate::pretty) does not build values and has no
/// such limit.
pub const MAX_DEPTH: usize = 127;

/// Loads a document from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Decode`]
/// if its contents are not a JSON document or nest deeper than
/// [`MAX_DEPTH`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    load_file_with(path, LoadOptions::default())
}

/// Loads a document from a file with explicit options.
///
/// # Errors
///
/// See [`load_file`].
pub fn load_file_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<Document, Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading document from file");
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    load_reader_with(BufReader::new(file), options)
}

/// Loads a document from a byte stream.
///
/// The reader is not buffered here; wrap it in a [`BufReader`] if it is
/// expensive to read from in small pieces.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the stream is not a JSON document, nests
/// deeper than [`MAX_DEPTH`], or cannot be read.
pub fn load_reader<R: io::Read>(reader: R) -> Result<Document, Error> {
    load_reader_with(reader, LoadOptions::default())
}

/// Loads a document from a byte stream with explicit options.
///
/// # Errors
///
/// See [`load_reader`].
pub fn load_reader_with<R: io::Read>(reader: R, options: LoadOptions) -> Result<Document, Error> {
    tracing::debug!("loading document from reader");
    decode(serde_json::Deserializer::from_reader(reader), options)
}

/// Loads a document from text.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `s` is not a JSON document or nests deeper
/// than [`MAX_DEPTH`].
///
/// # Examples
///
/// ```
/// let doc = jsontree::load_str(r#"{"b":1,"a":[true,null]}"#).unwrap();
/// assert_eq!(doc.root().get_count(), 2);
///
/// let err = jsontree::load_str(r#"{"a":"#).unwrap_err();
/// assert!(err.is_eof());
/// ```
pub fn load_str(s: &str) -> Result<Document, Error> {
    load_str_with(s, LoadOptions::default())
}

/// Loads a document from text with explicit options.
///
/// # Errors
///
/// See [`load_str`].
pub fn load_str_with(s: &str, options: LoadOptions) -> Result<Document, Error> {
    tracing::debug!(bytes = s.len(), "loading document from str");
    decode(serde_json::Deserializer::from_str(s), options)
}

/// Loads a document from bytes holding JSON text.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `bytes` is not a JSON document or nests
/// deeper than [`MAX_DEPTH`].
pub fn load(bytes: &[u8]) -> Result<Document, Error> {
    load_with(bytes, LoadOptions::default())
}

/// Loads a document from bytes with explicit options.
///
/// # Errors
///
/// See [`load`].
pub fn load_with(bytes: &[u8], options: LoadOptions) -> Result<Document, Error> {
    tracing::debug!(bytes = bytes.len(), "loading document from bytes");
    decode(serde_json::Deserializer::from_slice(bytes), options)
}

/// Reads every JSON value in a stream, one document per value.
///
/// Values may be separated by any amount of whitespace, so this reads both
/// concatenated JSON and JSON Lines. Each value is subject to [`MAX_DEPTH`].
/// Iteration stops after the first error.
///
/// # Examples
///
/// ```
/// let input = "{\"n\":1}\n{\"n\":2}\n[3]\n";
/// let docs: Vec<_> = jsontree::load_all_reader(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(docs.len(), 3);
/// assert_eq!(docs[1].root().member("n").unwrap().get_int(), 2);
/// ```
pub fn load_all_reader<R: io::Read>(reader: R) -> Documents<R> {
    Documents {
        inner: serde_json::Deserializer::from_reader(reader).into_iter(),
        failed: false,
    }
}

/// Iterator returned by [`load_all_reader`].
pub struct Documents<R: io::Read> {
    inner: StreamDeserializer<'static, IoRead<R>, Value>,
    failed: bool,
}

impl<R: io::Read> Iterator for Documents<R> {
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.inner.next()? {
            Ok(value) => Some(Ok(Document::from_value(value))),
            Err(err) => {
                self.failed = true;
                Some(Err(decode_error(err)))
            }
        }
    }
}

impl<R: io::Read> core::iter::FusedIterator for Documents<R> {}

fn decode<'de, R: JsonRead<'de>>(
    mut de: serde_json::Deserializer<R>,
    options: LoadOptions,
) -> Result<Document, Error> {
    let value = Value::deserialize(&mut de).map_err(decode_error)?;
    if !options.allow_trailing_data {
        de.end().map_err(decode_error)?;
    }
    Ok(Document::from_value(value))
}

fn decode_error(err: serde_json::Error) -> Error {
    tracing::debug!(
        error = %err,
        line = err.line(),
        column = err.column(),
        "failed to decode document"
    );
    Error::Decode(err)
}
