use crate::{
    NodeType,
    node::{NodeData, NodeId},
    path,
    value::Value,
};

/// Builds the node arena for a decoded value in one pre-order pass.
pub(crate) struct TreeBuilder {
    nodes: Vec<NodeData>,
    max_level: usize,
}

impl TreeBuilder {
    pub(crate) fn build(root: &Value) -> Vec<NodeData> {
        let mut builder = Self {
            nodes: Vec::with_capacity(count_values(root)),
            max_level: 0,
        };
        builder.nodes.push(NodeData::new(path::ROOT.to_owned(), 0));
        builder.populate(NodeId::ROOT, root);

        tracing::trace!(
            nodes = builder.nodes.len(),
            depth = builder.max_level,
            "built document tree"
        );
        #[cfg(any(test, feature = "fuzzing"))]
        check_links(&builder.nodes);
        builder.nodes
    }

    fn populate(&mut self, id: NodeId, value: &Value) {
        self.nodes[id.0].kind = NodeType::from(value);
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    let path = path::element(&self.nodes[id.0].path, i);
                    let child = self.attach(id, path, None, Some(i));
                    self.populate(child, item);
                }
            }
            Value::Object(members) => {
                // Map iteration is ascending byte order of the keys, which is
                // the sibling order.
                for (key, member) in members {
                    let parent = &self.nodes[id.0];
                    let path = if parent.level == 0 {
                        path::root_member(key)
                    } else {
                        path::member(&parent.path, key)
                    };
                    let child = self.attach(id, path, Some(key.clone()), None);
                    self.populate(child, member);
                }
            }
            Value::Null | Value::Boolean(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    /// Allocates a child of `parent` and appends it after the current last
    /// child.
    fn attach(
        &mut self,
        parent: NodeId,
        path: String,
        key: Option<String>,
        index: Option<usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let level = self.nodes[parent.0].level + 1;
        let prev = self.nodes[parent.0].last_child;

        let mut data = NodeData::new(path, level);
        data.key = key;
        data.index = index;
        data.parent = Some(parent);
        data.prev_sibling = prev;
        self.nodes.push(data);

        match prev {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        let parent = &mut self.nodes[parent.0];
        parent.last_child = Some(id);
        parent.children.push(id);

        self.max_level = self.max_level.max(level);
        id
    }
}

fn count_values(value: &Value) -> usize {
    1 + match value {
        Value::Array(items) => items.iter().map(count_values).sum(),
        Value::Object(members) => members.values().map(count_values).sum(),
        _ => 0,
    }
}

/// Panics if the arena's links disagree with each other.
#[cfg(any(test, feature = "fuzzing"))]
fn check_links(nodes: &[NodeData]) {
    let at = |id: NodeId| &nodes[id.0];
    for (i, node) in nodes.iter().enumerate() {
        let id = NodeId(i);
        assert_eq!(node.first_child, node.children.first().copied(), "first child of {}", node.path);
        assert_eq!(node.last_child, node.children.last().copied(), "last child of {}", node.path);
        assert_eq!(node.parent.is_none(), i == 0, "parent of {}", node.path);
        for (pos, &child) in node.children.iter().enumerate() {
            let data = at(child);
            assert!(child.0 > i, "{} allocated before its parent", data.path);
            assert_eq!(data.parent, Some(id), "parent of {}", data.path);
            assert_eq!(data.level, node.level + 1, "level of {}", data.path);
            let prev = pos.checked_sub(1).map(|p| node.children[p]);
            assert_eq!(data.prev_sibling, prev, "previous sibling of {}", data.path);
            assert_eq!(data.next_sibling, node.children.get(pos + 1).copied(), "next sibling of {}", data.path);
        }
        let keys: Vec<&str> = node.children.iter().filter_map(|&c| at(c).key.as_deref()).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "members of {} out of order", node.path);
    }
}
