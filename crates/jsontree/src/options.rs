use crate::format::DEFAULT_INDENT;

/// Configuration options for loading a [`Document`](crate::Document).
///
/// # Examples
///
/// ```rust
/// use jsontree::{LoadOptions, load_str_with};
///
/// let options = LoadOptions {
///     allow_trailing_data: true,
/// };
/// let doc = load_str_with(r#"{"a":1} and then some"#, options).unwrap();
/// assert_eq!(doc.root().get_count(), 1);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Whether to ignore input that follows the first complete JSON value.
    ///
    /// By default, anything other than whitespace after the first value is
    /// a decode error. When `true`, decoding stops after the first value and
    /// the rest of the input is never read.
    ///
    /// Use [`load_all_reader`](crate::load_all_reader) instead to read every
    /// value from a stream of concatenated documents.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_data: bool,
}

/// Configuration options for the indented encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// The string written once per nesting level at the start of each line.
    ///
    /// # Default
    ///
    /// [`DEFAULT_INDENT`] (three spaces)
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_owned(),
        }
    }
}
