use crate::error::MinigradError;
use crate::graph::Graph;
use crate::nn::activation::Activation;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: a stack of [`Layer`]s fed one into the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with `n_in` inputs and one layer per entry of
    /// `layer_sizes`. Hidden layers use ReLU, the last layer is linear.
    ///
    /// `Mlp::new(graph, 2, &[16, 16, 1], rng)` maps 2 inputs to a single score.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        Self::with_activations(graph, n_in, layer_sizes, Activation::Relu, Activation::Linear, rng)
    }

    /// Same as [`Mlp::new`] with explicit hidden and output activations.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `layer_sizes` is empty or contains a zero.
    pub fn with_activations<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        layer_sizes: &[usize],
        hidden: Activation,
        output: Activation,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        if layer_sizes.is_empty() {
            return Err(MinigradError::InvalidHyperparameter {
                name: "layer_sizes".to_string(),
                value: 0.0,
            });
        }
        if let Some(&size) = layer_sizes.iter().find(|&&size| size == 0) {
            return Err(MinigradError::InvalidHyperparameter {
                name: "layer size".to_string(),
                value: size as f64,
            });
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut prev = n_in;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let activation = if i + 1 == layer_sizes.len() { output } else { hidden };
            layers.push(Layer::new(graph, prev, size, activation, rng)?);
            prev = size;
        }
        log::debug!(
            "created MLP {} -> {:?} with {} parameters",
            n_in,
            layer_sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_in(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_in)
    }

    pub fn n_out(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_out)
    }

    /// Evaluates the network and returns its first output, the score used by
    /// single-output classifiers.
    pub fn score(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, MinigradError> {
        let outputs = self.forward(graph, inputs)?;
        outputs
            .first()
            .copied()
            .ok_or(MinigradError::InputSizeMismatch { expected: 1, actual: 0 })
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MinigradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
