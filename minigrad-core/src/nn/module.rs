use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// The base trait for all neural network modules (neurons, layers, MLPs).
///
/// A module owns no nodes itself. Its parameters are leaves of the graph it
/// was created on, and `forward` appends the nodes of one evaluation to that
/// same graph.
pub trait Module: std::fmt::Debug {
    /// Evaluates the module on `inputs`, recording the computation in `graph`.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `inputs` does not match the module's input
    /// arity, `UnknownNode` if an input or a parameter is not held by `graph`.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, MinigradError>;

    /// All learnable parameters, including those of sub-modules, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Direct sub-modules. Empty for modules that contain no other module.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradients of this module's parameters.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), MinigradError> {
        graph.zero_grad_of(&self.parameters())
    }
}
