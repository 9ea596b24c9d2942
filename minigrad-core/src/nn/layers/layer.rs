use crate::error::MinigradError;
use crate::graph::Graph;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `n_out` independent neurons over the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_in: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        n_out: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        let neurons = (0..n_out)
            .map(|_| Neuron::new(graph, n_in, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_in })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InputSizeMismatch` if the neurons do not all take `n_in` inputs.
    pub fn from_neurons(n_in: usize, neurons: Vec<Neuron>) -> Result<Self, MinigradError> {
        if let Some(bad) = neurons.iter().find(|n| n.n_in() != n_in) {
            return Err(MinigradError::InputSizeMismatch {
                expected: n_in,
                actual: bad.n_in(),
            });
        }
        Ok(Layer { neurons, n_in })
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }

    pub fn n_out(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MinigradError> {
        if inputs.len() != self.n_in {
            return Err(MinigradError::InputSizeMismatch {
                expected: self.n_in,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.call(graph, inputs)).collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
