use crate::autograd::OpKind;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Operands};

/// Multiplies two nodes: `out = a * b`.
///
/// Local rule: `d out / d a = b`, `d out / d b = a`.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
    let value = graph.value(a)? * graph.value(b)?;
    Ok(graph.push(Node::from_op(value, OpKind::Mul, Operands::binary(a, b))))
}

impl Graph {
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, MinigradError> {
        mul_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
