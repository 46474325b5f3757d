use serde_json::Value;

use crate::errors::Result;
use crate::model::{CommandPath, CommandTree, NodeId};

/// Flatten a command tree into its leaf paths
///
/// Depth-first, visiting siblings in ascending key order. A child without
/// children is emitted as the accumulated path plus its key; any other child
/// is descended into. Since no leaf path is a prefix of another, pre-order by
/// sorted key is the same as segment-wise path order.
///
/// # Arguments
/// * `tree` - The command tree to flatten
///
/// # Returns
/// Every root-to-leaf path exactly once; empty for an empty tree
pub fn walk(tree: &CommandTree) -> Vec<CommandPath> {
    let mut paths = Vec::new();
    let mut prefix = Vec::new();
    walk_node(tree, CommandTree::ROOT, &mut prefix, &mut paths);
    paths
}

/// Decode a nested-mapping tree and flatten it
///
/// # Errors
/// * `MalformedRoot` / `MalformedNode` - If any node is not a mapping
pub fn walk_value(value: &Value) -> Result<Vec<CommandPath>> {
    let tree = CommandTree::from_value(value)?;
    Ok(walk(&tree))
}

fn walk_node(
    tree: &CommandTree,
    node: NodeId,
    prefix: &mut Vec<String>,
    out: &mut Vec<CommandPath>,
) {
    for (segment, child) in tree.children(node) {
        prefix.push(segment.to_string());

        if tree.is_leaf(child) {
            // prefix holds at least the segment just pushed
            out.push(CommandPath::from_nonempty(prefix.clone()));
        } else {
            walk_node(tree, child, prefix, out);
        }

        prefix.pop();
    }
}
