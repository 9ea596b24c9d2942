use crate::autograd::OpKind;
use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Operands};

/// Applies the hyperbolic tangent.
///
/// The forward value is computed as `(e^a - e^-a) / (e^a + e^-a)`. For
/// `|a|` large enough that `e^a` overflows the result is NaN; callers feeding
/// unbounded pre-activations should keep that in mind.
///
/// Local rule: `d out / d a = 1 - out^2`, using the stored output.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, MinigradError> {
    let x = graph.value(a)?;
    let (ep, en) = (x.exp(), (-x).exp());
    let value = (ep - en) / (ep + en);
    Ok(graph.push(Node::from_op(value, OpKind::Tanh, Operands::unary(a))))
}

impl Graph {
    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, MinigradError> {
        tanh_op(self, a)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
