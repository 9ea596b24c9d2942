use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step, updating every managed parameter
    /// in place from its accumulated gradient.
    fn step(&mut self, graph: &mut Graph) -> Result<(), MinigradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), MinigradError> {
        graph.zero_grad_of(self.params())
    }

    /// The parameters managed by the optimizer.
    fn params(&self) -> &[NodeId];

    fn learning_rate(&self) -> f64;

    /// # Errors
    /// `InvalidHyperparameter` if `lr` is not strictly positive and finite.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), MinigradError>;
}
