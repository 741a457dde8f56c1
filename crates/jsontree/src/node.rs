//! Nodes of a [`Document`] and the typed accessors over them.
//!
//! A [`Node`] is a cheap, copyable handle: a reference to the owning
//! [`Document`] plus the [`NodeId`] of an arena record. All navigation
//! (parent, children, siblings) returns further handles into the same
//! document, so nodes can never outlive the tree they belong to.
//!
//! Every accessor is total. Asking a node for the wrong kind of value, or for
//! an element that is out of range, returns the documented zero value or the
//! caller's default instead of failing.

use core::{fmt, ops::Range};

use crate::{
    Document, NodeType,
    format::{self, DEFAULT_INDENT},
    value::{Map, Value},
};

static NULL: Value = Value::Null;

/// Identifies a node within its [`Document`].
///
/// Ids are assigned in pre-order: the root is `NodeId(0)`, every node comes
/// before its descendants, and siblings appear in sibling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The id of the document root.
    pub const ROOT: NodeId = NodeId(0);

    /// The position of this node in the document's pre-order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena record for one node. Links are ids into the same arena; only
/// `children` is an owning list.
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeType,
    pub(crate) path: String,
    pub(crate) key: Option<String>,
    pub(crate) index: Option<usize>,
    pub(crate) level: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl NodeData {
    pub(crate) fn new(path: String, level: usize) -> Self {
        Self {
            kind: NodeType::Null,
            path,
            key: None,
            index: None,
            level,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            children: Vec::new(),
        }
    }
}

/// A borrowed view of one node in a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("path", &self.path())
            .finish()
    }
}

/// Renders `<TypeName>:<path>`, e.g. `Boolean:/a[0]`.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.path())
    }
}

impl<'a> Node<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    fn data(&self) -> &'a NodeData {
        self.doc.data(self.id)
    }

    fn link(&self, id: Option<NodeId>) -> Option<Node<'a>> {
        id.map(|id| Node::new(self.doc, id))
    }

    // -------  identity  ----------

    /// The document this node belongs to.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// This node's id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The kind of value this node wraps.
    #[must_use]
    pub fn kind(&self) -> NodeType {
        self.data().kind
    }

    /// The node's path from the document root, e.g. `/a[0]`.
    #[must_use]
    pub fn path(&self) -> &'a str {
        &self.data().path
    }

    /// The member name, for nodes that are members of an object.
    #[must_use]
    pub fn key(&self) -> Option<&'a str> {
        self.data().key.as_deref()
    }

    /// The position in the parent array, for nodes that are array elements.
    #[must_use]
    pub fn array_index(&self) -> Option<usize> {
        self.data().index
    }

    /// Depth from the root; the root is at level 0.
    #[must_use]
    pub fn level(&self) -> usize {
        self.data().level
    }

    /// Returns `true` for the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    /// The decoded value this node wraps.
    ///
    /// The value is the one the parent's raw value holds at this node's
    /// position, so a container's raw value includes its whole subtree.
    ///
    /// Nodes store no pointer into the value; it is found again from the root
    /// on each call, one array lookup or map lookup per level. A call costs
    /// O(level * log k) for members of objects with k keys, and so does every
    /// typed getter built on it.
    #[must_use]
    pub fn raw_value(&self) -> &'a Value {
        let data = self.data();
        let Some(parent) = data.parent else {
            return self.doc.value();
        };
        let found = match Node::new(self.doc, parent).raw_value() {
            Value::Array(items) => data.index.and_then(|i| items.get(i)),
            Value::Object(members) => data.key.as_deref().and_then(|k| members.get(k)),
            _ => None,
        };
        found.unwrap_or(&NULL)
    }

    // -------  navigation  ----------

    /// The containing node; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Node<'a>> {
        self.link(self.data().parent)
    }

    /// The first child in sibling order.
    #[must_use]
    pub fn first_child(&self) -> Option<Node<'a>> {
        self.link(self.data().first_child)
    }

    /// The last child in sibling order.
    #[must_use]
    pub fn last_child(&self) -> Option<Node<'a>> {
        self.link(self.data().last_child)
    }

    /// The previous node under the same parent.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Node<'a>> {
        self.link(self.data().prev_sibling)
    }

    /// The next node under the same parent. Object members follow ascending
    /// key order; array elements follow index order.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.link(self.data().next_sibling)
    }

    /// All children in sibling order; empty for scalars.
    #[must_use]
    pub fn children(&self) -> Nodes<'a> {
        Nodes::new(self.doc, &self.data().children)
    }

    /// The parent, grandparent, and so on up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a>> + use<'a> {
        core::iter::successors(self.parent(), Node::parent)
    }

    /// Element nodes in index order, if this node is an array.
    #[must_use]
    pub fn array(&self) -> Option<Nodes<'a>> {
        (self.kind() == NodeType::Array).then(|| self.children())
    }

    /// Member nodes in ascending key order, if this node is an object.
    #[must_use]
    pub fn object(&self) -> Option<Members<'a>> {
        (self.kind() == NodeType::Object).then(|| Members {
            inner: self.children(),
        })
    }

    /// The member named `key`, if this node is an object that has one.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<Node<'a>> {
        if self.kind() != NodeType::Object {
            return None;
        }
        let children = &self.data().children;
        // Members are stored in key order.
        children
            .binary_search_by(|&id| {
                let member_key = self.doc.data(id).key.as_deref().unwrap_or_default();
                member_key.cmp(key)
            })
            .ok()
            .map(|pos| Node::new(self.doc, children[pos]))
    }

    /// The element nodes covering `[start, end)`, if this node is an array.
    ///
    /// The range is clamped rather than rejected: it is empty when
    /// `start >= end`, when `start` is at or past the end, or when
    /// `end <= 0`; a negative `start` counts from 0 and an `end` past the
    /// length stops at the length. Non-arrays return `None`, which is
    /// distinct from `Some` of an empty range.
    #[must_use]
    pub fn slice(&self, start: isize, end: isize) -> Option<Nodes<'a>> {
        if self.kind() != NodeType::Array {
            return None;
        }
        let children = &self.data().children;
        Some(Nodes::new(
            self.doc,
            &children[clamp_range(start, end, children.len())],
        ))
    }

    /// The element node at `i`, if this node is an array with more than `i`
    /// elements. A negative `i` is out of range, as it is for
    /// [`Node::slice`].
    #[must_use]
    pub fn index(&self, i: isize) -> Option<Node<'a>> {
        if self.kind() != NodeType::Array {
            return None;
        }
        let i = usize::try_from(i).ok()?;
        self.link(self.data().children.get(i).copied())
    }

    // -------  typed values  ----------

    /// The boolean value, or `false` if this is not a boolean.
    #[must_use]
    pub fn get_bool(&self) -> bool {
        self.get_bool_or(false)
    }

    /// The boolean value, or `default` if this is not a boolean.
    #[must_use]
    pub fn get_bool_or(&self, default: bool) -> bool {
        self.raw_value().as_bool().unwrap_or(default)
    }

    /// The numeric value, or `0.0` if this is not a number.
    #[must_use]
    pub fn get_f64(&self) -> f64 {
        self.get_f64_or(0.0)
    }

    /// The numeric value, or `default` if this is not a number.
    #[must_use]
    pub fn get_f64_or(&self, default: f64) -> f64 {
        self.raw_value().as_f64().unwrap_or(default)
    }

    /// The numeric value truncated toward zero, or `0` if this is not a
    /// number.
    #[must_use]
    pub fn get_int(&self) -> i64 {
        self.get_int_or(0)
    }

    /// The numeric value truncated toward zero, or `default` if this is not
    /// a number.
    ///
    /// Values beyond the `i64` range saturate; NaN becomes 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_int_or(&self, default: i64) -> i64 {
        self.raw_value().as_f64().map_or(default, |n| n as i64)
    }

    /// The string value, or `""` if this is not a string.
    #[must_use]
    pub fn get_str(&self) -> &'a str {
        self.get_str_or("")
    }

    /// The string value, or `default` if this is not a string.
    #[must_use]
    pub fn get_str_or<'b>(&self, default: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.raw_value().as_str().unwrap_or(default)
    }

    /// The raw elements, if this is an array.
    #[must_use]
    pub fn get_array(&self) -> Option<&'a [Value]> {
        self.raw_value().as_array().map(Vec::as_slice)
    }

    /// The raw elements, or `default` if this is not an array.
    #[must_use]
    pub fn get_array_or<'b>(&self, default: &'b [Value]) -> &'b [Value]
    where
        'a: 'b,
    {
        self.get_array().unwrap_or(default)
    }

    /// The raw elements covering `[start, end)`, if this is an array.
    ///
    /// Clamps the range the same way as [`Node::slice`].
    #[must_use]
    pub fn get_slice(&self, start: isize, end: isize) -> Option<&'a [Value]> {
        self.get_array()
            .map(|items| &items[clamp_range(start, end, items.len())])
    }

    /// The raw elements covering `[start, end)`, or `default` if this is
    /// not an array. An out-of-range request on an array is an empty slice,
    /// not the default.
    #[must_use]
    pub fn get_slice_or<'b>(&self, start: isize, end: isize, default: &'b [Value]) -> &'b [Value]
    where
        'a: 'b,
    {
        self.get_slice(start, end).unwrap_or(default)
    }

    /// The raw element at `i`, if this is an array with more than `i`
    /// elements. A negative `i` is out of range.
    #[must_use]
    pub fn get_index(&self, i: isize) -> Option<&'a Value> {
        let i = usize::try_from(i).ok()?;
        self.get_array().and_then(|items| items.get(i))
    }

    /// The raw element at `i`, or `default` if there is none.
    #[must_use]
    pub fn get_index_or<'b>(&self, i: isize, default: &'b Value) -> &'b Value
    where
        'a: 'b,
    {
        self.get_index(i).unwrap_or(default)
    }

    /// The raw members, if this is an object.
    #[must_use]
    pub fn get_object(&self) -> Option<&'a Map> {
        self.raw_value().as_object()
    }

    /// The raw members, or `default` if this is not an object.
    #[must_use]
    pub fn get_object_or<'b>(&self, default: &'b Map) -> &'b Map
    where
        'a: 'b,
    {
        self.get_object().unwrap_or(default)
    }

    /// The raw value of member `key`, if this is an object that has it.
    #[must_use]
    pub fn get_object_value(&self, key: &str) -> Option<&'a Value> {
        self.get_object().and_then(|members| members.get(key))
    }

    /// The raw value of member `key`, or `default` if this is not an object
    /// or the key is absent.
    #[must_use]
    pub fn get_object_value_or<'b>(&self, key: &str, default: &'b Value) -> &'b Value
    where
        'a: 'b,
    {
        self.get_object_value(key).unwrap_or(default)
    }

    /// The number of elements or members; `0` for scalars.
    #[must_use]
    pub fn get_count(&self) -> usize {
        match self.raw_value() {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }

    // -------  rendering  ----------

    /// Renders the node's raw value as JSON text.
    ///
    /// Scalars always render compactly. With `pretty`, containers use the
    /// indented encoder with [`DEFAULT_INDENT`].
    #[must_use]
    pub fn to_json_text(&self, pretty: bool) -> String {
        let raw = self.raw_value();
        if pretty && self.kind().is_container() {
            format::format_value(raw, DEFAULT_INDENT).unwrap_or_else(|_| raw.to_string())
        } else {
            raw.to_string()
        }
    }
}

/// The index range selected by `[start, end)` over `len` elements.
fn clamp_range(start: isize, end: isize, len: usize) -> Range<usize> {
    let len_signed = isize::try_from(len).unwrap_or(isize::MAX);
    if start >= end || start >= len_signed || end <= 0 {
        return 0..0;
    }
    let start = usize::try_from(start.max(0)).unwrap_or(0);
    let end = usize::try_from(end.min(len_signed)).unwrap_or(0);
    start..end
}

/// An iterator over a run of sibling nodes.
#[derive(Clone)]
pub struct Nodes<'a> {
    doc: &'a Document,
    ids: core::slice::Iter<'a, NodeId>,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(doc: &'a Document, ids: &'a [NodeId]) -> Self {
        Self {
            doc,
            ids: ids.iter(),
        }
    }

    /// The remaining node ids.
    #[must_use]
    pub fn ids(&self) -> &'a [NodeId] {
        self.ids.as_slice()
    }
}

impl fmt::Debug for Nodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| Node::new(self.doc, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Nodes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| Node::new(self.doc, id))
    }
}

impl ExactSizeIterator for Nodes<'_> {}

impl core::iter::FusedIterator for Nodes<'_> {}

/// An iterator over the members of an object node as `(key, node)` pairs, in
/// ascending key order.
#[derive(Clone, Debug)]
pub struct Members<'a> {
    inner: Nodes<'a>,
}

impl<'a> Iterator for Members<'a> {
    type Item = (&'a str, Node<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|node| (node.key().unwrap_or_default(), node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|node| (node.key().unwrap_or_default(), node))
    }
}

impl ExactSizeIterator for Members<'_> {}
