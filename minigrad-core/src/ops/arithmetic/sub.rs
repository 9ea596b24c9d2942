use super::add::add_op;
use super::neg::neg_op;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Subtracts two nodes, defined as `a + (-b)`.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
    graph.node(a)?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

impl Graph {
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
        sub_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
