use super::mul::mul_op;
use super::pow::pow_op;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Divides two nodes, defined as `a * b^(-1)`.
///
/// Division has no gradient rule of its own. Dividing by a node whose value is
/// `0.0` produces infinities or NaN that propagate through the forward and
/// backward passes unchecked.
pub fn div_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
    graph.node(a)?;
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, reciprocal)
}

impl Graph {
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
        div_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
