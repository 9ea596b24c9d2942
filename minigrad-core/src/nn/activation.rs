use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;
use std::fmt;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity: the pre-activation is returned as is, no node is added.
    Linear,
    #[default]
    Relu,
    Tanh,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, x: NodeId) -> Result<NodeId, MinigradError> {
        match self {
            Activation::Linear => graph.node(x).map(|_| x),
            Activation::Relu => graph.relu(x),
            Activation::Tanh => graph.tanh(x),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Linear => "Linear",
            Activation::Relu => "ReLU",
            Activation::Tanh => "Tanh",
        };
        f.write_str(name)
    }
}
