use super::mul::mul_op;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Negates a node, defined as `a * (-1)`.
///
/// Creates a `-1.0` leaf and reuses the multiplication rule; there is no
/// separate negation gradient.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, MinigradError> {
    graph.node(a)?;
    let minus_one = graph.leaf(-1.0);
    mul_op(graph, a, minus_one)
}

impl Graph {
    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, MinigradError> {
        neg_op(self, a)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
