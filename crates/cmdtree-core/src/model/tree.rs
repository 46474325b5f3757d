use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::path::CommandPath;
use crate::errors::{CompileError, Result};

/// Index of a node inside a [`CommandTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
struct Node {
    segment: Option<String>,
    parent: Option<NodeId>,
    // BTreeMap keeps siblings in lexicographic key order
    children: BTreeMap<String, NodeId>,
}

/// CommandTree - desired configuration as nested command segments
///
/// Nodes live in one arena vector and refer to each other by index. Node 0
/// is a synthetic root without a segment; every other node is one command
/// segment. A node with no children is a leaf, i.e. one terminal
/// configuration statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandTree {
    nodes: Vec<Node>,
}

impl CommandTree {
    /// Create an empty tree (root only)
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                segment: None,
                parent: None,
                children: BTreeMap::new(),
            }],
        }
    }

    /// Decode a tree from its nested-mapping form
    ///
    /// Every value must be a mapping; an empty mapping marks a leaf.
    ///
    /// # Errors
    /// * `MalformedRoot` - If `value` itself is not a mapping
    /// * `MalformedNode` - If any nested value is not a mapping
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| CompileError::MalformedRoot {
            found: value_kind(value).to_string(),
        })?;

        let mut tree = Self::new();
        let mut trail = Vec::new();
        tree.load_children(Self::ROOT, map, &mut trail)?;
        Ok(tree)
    }

    /// Build a tree containing every given path
    ///
    /// A path that is a strict prefix of another ends up as an internal node,
    /// not a leaf.
    ///
    /// # Errors
    /// * `EmptyPath` - If any path has no segments
    pub fn from_paths<I, P, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            let segments: Vec<S> = path.into_iter().collect();
            tree.insert(&segments)?;
        }
        Ok(tree)
    }

    /// The synthetic root node
    pub const ROOT: NodeId = NodeId(0);

    /// Insert a path, creating missing nodes, and return the final node
    ///
    /// # Errors
    /// * `EmptyPath` - If `segments` is empty
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S]) -> Result<NodeId> {
        if segments.is_empty() {
            return Err(CompileError::EmptyPath {
                op: "CommandTree::insert".to_string(),
            });
        }

        let mut current = Self::ROOT;
        for segment in segments {
            current = self.child_or_insert(current, segment.as_ref());
        }
        Ok(current)
    }

    /// Children of `id` in ascending key order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.nodes[id.0]
            .children
            .iter()
            .map(|(segment, child)| (segment.as_str(), *child))
    }

    /// Command segment of `id`; `None` for the root
    pub fn segment(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].segment.as_deref()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// A non-root node without children
    pub fn is_leaf(&self, id: NodeId) -> bool {
        id != Self::ROOT && self.nodes[id.0].children.is_empty()
    }

    /// True when the tree holds no commands at all
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Number of command nodes, excluding the root
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Root-to-node path of `id`, following parent indices upward
    ///
    /// Returns `None` for the root, which has no segment.
    pub fn path_to(&self, id: NodeId) -> Option<CommandPath> {
        let mut segments = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            if let Some(segment) = &node.segment {
                segments.push(segment.clone());
            }
            current = node.parent;
        }

        segments.reverse();
        CommandPath::new(segments).ok()
    }

    /// Render back into the nested-mapping form
    pub fn to_value(&self) -> Value {
        self.node_value(Self::ROOT)
    }

    fn node_value(&self, id: NodeId) -> Value {
        let map: Map<String, Value> = self
            .children(id)
            .map(|(segment, child)| (segment.to_string(), self.node_value(child)))
            .collect();
        Value::Object(map)
    }

    fn child_or_insert(&mut self, parent: NodeId, segment: &str) -> NodeId {
        if let Some(existing) = self.nodes[parent.0].children.get(segment) {
            return *existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            segment: Some(segment.to_string()),
            parent: Some(parent),
            children: BTreeMap::new(),
        });
        self.nodes[parent.0].children.insert(segment.to_string(), id);
        id
    }

    fn load_children(
        &mut self,
        parent: NodeId,
        map: &Map<String, Value>,
        trail: &mut Vec<String>,
    ) -> Result<()> {
        for (segment, value) in map {
            trail.push(segment.clone());

            let children = value.as_object().ok_or_else(|| CompileError::MalformedNode {
                path: trail.clone(),
                found: value_kind(value).to_string(),
            })?;

            let id = self.child_or_insert(parent, segment);
            self.load_children(id, children, trail)?;

            trail.pop();
        }
        Ok(())
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_builds_arena() {
        let tree = CommandTree::from_value(&json!({
            "router bgp 65000": {
                "neighbor 10.0.0.2 remote-as 65001": {},
                "network 10.1.0.0/24": {}
            },
            "hostname r1": {}
        }))
        .unwrap();

        assert_eq!(tree.node_count(), 4);
        let top: Vec<&str> = tree.children(CommandTree::ROOT).map(|(s, _)| s).collect();
        assert_eq!(top, vec!["hostname r1", "router bgp 65000"]);
    }

    #[test]
    fn test_empty_mapping_is_empty_tree() {
        let tree = CommandTree::from_value(&json!({})).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_list_node_is_malformed() {
        let result = CommandTree::from_value(&json!({
            "ip prefix-list PL-A": ["seq 10 permit 10.0.0.1/32"]
        }));

        match result {
            Err(CompileError::MalformedNode { path, found }) => {
                assert_eq!(path, vec!["ip prefix-list PL-A"]);
                assert_eq!(found, "list");
            }
            other => panic!("expected MalformedNode, got {:?}", other),
        }
    }

    #[test]
    fn test_null_leaf_is_malformed() {
        let result = CommandTree::from_value(&json!({"a": {"b": null}}));
        assert!(matches!(
            result,
            Err(CompileError::MalformedNode { ref path, .. }) if path == &["a", "b"]
        ));
    }

    #[test]
    fn test_non_mapping_root_rejected() {
        let result = CommandTree::from_value(&json!("hostname r1"));
        assert!(matches!(result, Err(CompileError::MalformedRoot { .. })));
    }

    #[test]
    fn test_path_to_follows_parents() {
        let mut tree = CommandTree::new();
        let leaf = tree
            .insert(&["interface Ethernet1", "description uplink"])
            .unwrap();

        let path = tree.path_to(leaf).unwrap();
        assert_eq!(path.segments(), ["interface Ethernet1", "description uplink"]);
        assert!(tree.is_leaf(leaf));
        assert!(tree.path_to(CommandTree::ROOT).is_none());
    }

    #[test]
    fn test_insert_reuses_shared_prefix() {
        let tree = CommandTree::from_paths([["a", "b"], ["a", "c"]]).unwrap();
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_insert_empty_rejected() {
        let mut tree = CommandTree::new();
        let empty: [&str; 0] = [];
        assert!(matches!(
            tree.insert(&empty),
            Err(CompileError::EmptyPath { .. })
        ));
    }

    #[test]
    fn test_to_value_round_trip() {
        let value = json!({"a": {"b": {}, "c": {"d": {}}}, "e": {}});
        let tree = CommandTree::from_value(&value).unwrap();
        assert_eq!(tree.to_value(), value);
    }
}
