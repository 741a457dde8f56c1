use core::str::FromStr;

use crate::{
    Error, Node,
    builder::TreeBuilder,
    node::{NodeData, NodeId},
    path::{self, PathItem},
    value::Value,
};

/// A read-only document model over one decoded JSON value.
///
/// The document owns the decoded [`Value`] and one arena record per value in
/// it. It is built once and never changes, so it can be shared freely between
/// threads.
///
/// # Examples
///
/// ```
/// use jsontree::{Document, NodeType};
///
/// let doc: Document = r#"{"b":1,"a":[true,null]}"#.parse().unwrap();
/// let root = doc.root();
///
/// let a = root.first_child().unwrap();
/// assert_eq!(a.key(), Some("a"));
/// assert_eq!(a.path(), "/a");
/// assert_eq!(a.next_sibling().unwrap().key(), Some("b"));
///
/// let first = a.index(0).unwrap();
/// assert_eq!(first.path(), "/a[0]");
/// assert_eq!(first.kind(), NodeType::Boolean);
/// assert!(first.get_bool());
/// ```
#[derive(Clone, Debug)]
pub struct Document {
    value: Value,
    nodes: Vec<NodeData>,
}

impl Document {
    /// Builds the document model for an already-decoded value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let nodes = TreeBuilder::build(&value);
        Self { value, nodes }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node::new(self, NodeId::ROOT)
    }

    /// The decoded value the document was built from.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Gives back the decoded value, dropping the node arena.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The total number of nodes, counting the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The deepest level of any node; 0 when the root has no children.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.level).max().unwrap_or(0)
    }

    /// The node with the given id, if it belongs to this document.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then(|| Node::new(self, id))
    }

    /// Every node, in pre-order.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = Node<'_>> + ExactSizeIterator {
        (0..self.nodes.len()).map(|i| Node::new(self, NodeId(i)))
    }

    /// Looks a node up by its path string, e.g. `"/a[0]"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` cannot be parsed. A
    /// well-formed path that names no node is `Ok(None)`.
    pub fn find(&self, path: &str) -> Result<Option<Node<'_>>, Error> {
        Ok(self.find_path(&path::parse(path)?))
    }

    /// Looks a node up by path components. Unlike [`Document::find`], keys
    /// may contain any characters.
    #[must_use]
    pub fn find_path(&self, items: &[PathItem]) -> Option<Node<'_>> {
        items.iter().try_fold(self.root(), |node, item| match item {
            PathItem::Key(key) => node.member(key),
            PathItem::Index(i) => node.index(isize::try_from(*i).ok()?),
        })
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::load_str(s)
    }
}
