use crate::error::MinigradError;
use crate::graph::Graph;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;
use std::fmt;

/// A single neuron: `act(b + Σ wᵢ·xᵢ)`.
///
/// Weights and bias are leaves of the graph passed to [`Neuron::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights drawn uniformly from `[-1, 1)` and
    /// a zero bias.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        let weights = init::uniform(rng, n_in, -1.0, 1.0)?;
        Ok(Self::from_values(graph, &weights, 0.0, activation))
    }

    /// Creates a neuron with explicit initial weights and bias.
    pub fn from_values(graph: &mut Graph, weights: &[f64], bias: f64, activation: Activation) -> Self {
        let weights = weights.iter().map(|&w| graph.leaf(w)).collect();
        let bias = graph.leaf(bias);
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn n_in(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Evaluates the neuron and returns its single output node.
    pub fn call(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, MinigradError> {
        if inputs.len() != self.weights.len() {
            return Err(MinigradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            act = graph.add(act, wx)?;
        }
        self.activation.apply(graph, act)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MinigradError> {
        Ok(vec![self.call(graph, inputs)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation, self.n_in())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
