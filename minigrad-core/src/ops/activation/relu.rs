use crate::autograd::OpKind;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Operands};

/// Applies the Rectified Linear Unit: `out = max(0, a)`.
///
/// The sub-gradient at exactly `0` is taken to be `0`, so the gradient passed
/// back is the upstream gradient when `a > 0` and nothing otherwise.
pub fn relu_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, MinigradError> {
    let x = graph.value(a)?;
    let value = if x > 0.0 { x } else { 0.0 };
    Ok(graph.push(Node::from_op(value, OpKind::Relu, Operands::unary(a))))
}

impl Graph {
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, MinigradError> {
        relu_op(self, a)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
