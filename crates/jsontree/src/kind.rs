use core::fmt;

use crate::Value;

/// The kind of JSON value a [`Node`](crate::Node) wraps.
///
/// The tag is assigned once, when the document is built, and mirrors the
/// active variant of the node's raw [`Value`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeType {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean,
    /// A number, held as an `f64`.
    Number,
    /// A string.
    String,
    /// An ordered list of values.
    Array,
    /// A string-keyed map of values.
    Object,
}

impl NodeType {
    /// The type name used when rendering a node, e.g. `"Boolean"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }

    /// Returns `true` for the two container kinds.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl From<&Value> for NodeType {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
