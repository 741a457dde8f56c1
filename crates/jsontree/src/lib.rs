//! A read-only document model for JSON.
//!
//! Input is decoded once with `serde_json` into a [`Value`], and every value
//! in it becomes a [`Node`] in a [`Document`]. Nodes know their [`NodeType`],
//! a path string such as `/users[0]/name`, their nesting level and their
//! neighbours, and offer typed getters that fall back to a default when the
//! node holds something else.
//!
//! Object members are ordered by ascending byte order of their keys, array
//! elements by position.
//!
//! ```rust
//! use jsontree::NodeType;
//!
//! let doc = jsontree::load_str(r#"{"users":[{"name":"ada"},{"name":"bob"}]}"#)?;
//! let users = doc.root().member("users").unwrap();
//! assert_eq!(users.kind(), NodeType::Array);
//!
//! let names: Vec<&str> = users
//!     .children()
//!     .filter_map(|user| user.member("name"))
//!     .map(|name| name.get_str())
//!     .collect();
//! assert_eq!(names, ["ada", "bob"]);
//!
//! let bob = doc.find("/users[1]/name")?.unwrap();
//! assert_eq!(bob.level(), 3);
//! assert_eq!(bob.get_int_or(-1), -1);
//! # Ok::<(), jsontree::Error>(())
//! ```

mod builder;
mod document;
mod error;
pub mod format;
mod kind;
mod load;
mod node;
mod options;
pub mod path;
mod value;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use error::{Error, Result};
pub use format::{DEFAULT_INDENT, format_value, format_value_with, pretty, pretty_bytes};
pub use kind::NodeType;
pub use load::{
    Documents, MAX_DEPTH, load, load_all_reader, load_file, load_file_with, load_reader, load_reader_with,
    load_str, load_str_with, load_with,
};
pub use node::{Members, Node, NodeId, Nodes};
pub use options::{FormatOptions, LoadOptions};
pub use path::{Path, PathItem};
pub use value::{Array, Map, Value};

#[doc(hidden)]
pub use std::vec;

/// Builds a [`Path`] from a list of keys and indices.
///
/// ```rust
/// use jsontree::{PathItem, path};
///
/// let p = path!["users", 0, "name"];
/// assert_eq!(
///     p,
///     vec![
///         PathItem::Key("users".into()),
///         PathItem::Index(0),
///         PathItem::Key("name".into()),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::path::PathItemFrom;
        $crate::vec![$($crate::PathItem::from_path_component($elem)),*]
    }};
}
