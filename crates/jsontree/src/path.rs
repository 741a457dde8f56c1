//! Node path strings.
//!
//! Every node in a [`Document`](crate::Document) carries a path derived from
//! its position: `/` for the root, `<parent>/<key>` for object members (the
//! root's own members are `/<key>`), and `<parent>[<index>]` for array
//! elements. Keys are not escaped, so a key containing `/`, `[` or `]` can
//! produce a path that reads as a different position; component slices
//! ([`Path`]) have no such ambiguity.

use core::fmt;

use crate::Error;

/// The path of the document root.
pub const ROOT: &str = "/";

/// A path to a JSON value as a sequence of components.
pub type Path = Vec<PathItem>;

/// One step from a node to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathItem {
    /// An object member name.
    Key(String),
    /// An array position.
    Index(usize),
}

impl PathItem {
    /// Returns the index if this component is an index, otherwise `None`.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        if let Self::Index(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns the key if this component is a key, otherwise `None`.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        if let Self::Key(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl From<&str> for PathItem {
    fn from(s: &str) -> Self {
        Self::Key(s.to_owned())
    }
}

impl From<String> for PathItem {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<usize> for PathItem {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl fmt::Display for PathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, "/{k}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

#[doc(hidden)]
pub trait PathItemFrom<T> {
    fn from_path_component(value: T) -> PathItem;
}

macro_rules! impl_unsigned_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathItemFrom<$t> for PathItem {
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn from_path_component(value: $t) -> Self {
                    PathItem::Index(value as usize)
                }
            }
        )+
    };
}
impl_unsigned_as_path_component!(u8, u16, u32, u64, usize);

// Negative literals clamp to index 0.
macro_rules! impl_signed_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathItemFrom<$t> for PathItem {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                fn from_path_component(value: $t) -> Self {
                    PathItem::Index(value.max(0) as usize)
                }
            }
        )+
    };
}
impl_signed_as_path_component!(i8, i16, i32, i64, isize);

impl PathItemFrom<&str> for PathItem {
    fn from_path_component(value: &str) -> Self {
        PathItem::Key(value.to_owned())
    }
}

impl PathItemFrom<String> for PathItem {
    fn from_path_component(value: String) -> Self {
        PathItem::Key(value)
    }
}

/// Path of a member of the root object.
#[must_use]
pub fn root_member(key: &str) -> String {
    format!("{ROOT}{key}")
}

/// Path of the member `key` of the object at `parent`.
///
/// `parent` must not be the root; use [`root_member`] there so the separator
/// is not doubled.
#[must_use]
pub fn member(parent: &str, key: &str) -> String {
    let mut out = String::with_capacity(parent.len() + key.len() + 1);
    out.push_str(parent);
    out.push('/');
    out.push_str(key);
    out
}

/// Path of the element `index` of the array at `parent`.
#[must_use]
pub fn element(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Renders component form back into a path string.
///
/// ```
/// use jsontree::path;
///
/// assert_eq!(path::render(&jsontree::path!["a", 0, "b"]), "/a[0]/b");
/// assert_eq!(path::render(&[]), "/");
/// ```
#[must_use]
pub fn render(items: &[PathItem]) -> String {
    let mut out = String::from(ROOT);
    for (depth, item) in items.iter().enumerate() {
        out = match item {
            PathItem::Key(k) if depth == 0 => root_member(k),
            PathItem::Key(k) => member(&out, k),
            PathItem::Index(i) => element(&out, *i),
        };
    }
    out
}

/// Parses a path string into components.
///
/// `""` and `"/"` both name the root. A key segment runs from a `/` to the
/// next `/` or `[`; an index segment is a decimal number in brackets.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the string does not start with `/`, has
/// an unterminated or non-numeric index, or has text after a closing `]`
/// that does not start a new segment.
///
/// ```
/// use jsontree::path::{self, PathItem};
///
/// let items = path::parse("/users[2]/name").unwrap();
/// assert_eq!(
///     items,
///     vec![
///         PathItem::Key("users".into()),
///         PathItem::Index(2),
///         PathItem::Key("name".into()),
///     ]
/// );
/// ```
pub fn parse(s: &str) -> Result<Path, Error> {
    let invalid = |reason: &'static str| Error::InvalidPath {
        path: s.to_owned(),
        reason,
    };

    let mut items = Path::new();
    if s.is_empty() || s == ROOT {
        return Ok(items);
    }
    if !s.starts_with('/') {
        return Err(invalid("path must start with '/'"));
    }

    // Elements of a root array are written `/[i]`: the root slash is not a
    // key separator there.
    let mut rest = if s.starts_with("/[") { &s[1..] } else { s };
    while let Some(first) = rest.chars().next() {
        match first {
            '/' => {
                let segment = &rest[1..];
                let end = segment.find(['/', '[']).unwrap_or(segment.len());
                items.push(PathItem::Key(segment[..end].to_owned()));
                rest = &segment[end..];
            }
            '[' => {
                let close = rest.find(']').ok_or_else(|| invalid("unterminated index"))?;
                let digits = &rest[1..close];
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid("index must be a non-negative integer"));
                }
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| invalid("index out of range"))?;
                items.push(PathItem::Index(index));
                rest = &rest[close + 1..];
            }
            _ => return Err(invalid("expected '/' or '[' after an index")),
        }
    }
    Ok(items)
}
