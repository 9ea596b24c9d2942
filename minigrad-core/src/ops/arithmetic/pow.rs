use crate::autograd::OpKind;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Operands};

/// Raises a node to a constant power: `out = a ^ exponent`.
///
/// The exponent is a plain `f64`, not a node, and is carried as the payload of
/// [`OpKind::Pow`]. Local rule: `d out / d a = exponent * a ^ (exponent - 1)`.
///
/// A negative base with a non-integral exponent yields NaN, and `0 ^ k` with
/// `k < 0` yields infinity, as `f64::powf` does. Neither case is checked.
pub fn pow_op(graph: &mut Graph, a: NodeId, exponent: f64) -> Result<NodeId, MinigradError> {
    let value = graph.value(a)?.powf(exponent);
    Ok(graph.push(Node::from_op(value, OpKind::Pow(exponent), Operands::unary(a))))
}

impl Graph {
    pub fn pow(&mut self, a: NodeId, exponent: f64) -> Result<NodeId, MinigradError> {
        pow_op(self, a, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
