use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first postorder over operand edges: a node is appended only after all
/// of its operands, so operands always precede their consumers and `root` is
/// last. Each reachable node appears exactly once, however many consumers
/// share it. Nodes in independent subgraphs have no ordering requirement.
///
/// The traversal keeps an explicit stack of `(node, next operand)` frames
/// instead of recursing, so its depth is bounded by memory rather than by the
/// thread stack. The order is recomputed on every call.
///
/// # Errors
/// `UnknownNode` if `root` is not held by `graph`.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, MinigradError> {
    graph.node(root)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<NodeId> = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        // Operands are always older than their consumer, so they are in the arena.
        let operands = graph.nodes[id.index()].operands;
        if let Some(&operand) = operands.as_slice().get(next) {
            frame.1 += 1;
            if visited.insert(operand) {
                stack.push((operand, 0));
            }
        } else {
            sorted.push(id);
            stack.pop();
        }
    }

    log::trace!("topological_sort from {}: {} nodes", root, sorted.len());
    Ok(sorted)
}
