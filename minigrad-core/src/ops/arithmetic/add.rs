use crate::autograd::OpKind;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Operands};

// --- Forward Operation ---

/// Adds two nodes: `out = a + b`.
///
/// Local rule: `d out / d a = d out / d b = 1`.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
    let value = graph.value(a)? + graph.value(b)?;
    Ok(graph.push(Node::from_op(value, OpKind::Add, Operands::binary(a, b))))
}

/// Sums a sequence of nodes by chaining `add_op` from left to right.
///
/// An empty slice yields a fresh `0.0` leaf, and a single node is returned
/// unchanged.
pub fn sum_op(graph: &mut Graph, ids: &[NodeId]) -> Result<NodeId, MinigradError> {
    let Some((&first, rest)) = ids.split_first() else {
        return Ok(graph.leaf(0.0));
    };
    graph.node(first)?;
    rest.iter().try_fold(first, |acc, &id| add_op(graph, acc, id))
}

impl Graph {
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
        add_op(self, a, b)
    }

    pub fn sum(&mut self, ids: &[NodeId]) -> Result<NodeId, MinigradError> {
        sum_op(self, ids)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
