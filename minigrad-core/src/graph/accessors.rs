use super::Graph;
use crate::error::MinigradError;
use crate::node::{Node, NodeId};

impl Graph {
    /// Returns the node behind `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, MinigradError> {
        self.nodes.get(id.index()).ok_or(MinigradError::UnknownNode {
            id,
            len: self.nodes.len(),
        })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, MinigradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .ok_or(MinigradError::UnknownNode { id, len })
    }

    /// Forward value of `id`.
    pub fn value(&self, id: NodeId) -> Result<f64, MinigradError> {
        Ok(self.node(id)?.value)
    }

    /// Gradient currently accumulated on `id`.
    ///
    /// Only meaningful after a backward pass that started from zeroed gradients.
    pub fn grad(&self, id: NodeId) -> Result<f64, MinigradError> {
        Ok(self.node(id)?.grad)
    }

    /// Overwrites the value of `id`.
    ///
    /// Intended for parameter updates between optimization steps. Nodes
    /// already built on top of `id` keep the value they were created with.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), MinigradError> {
        self.node_mut(id)?.value = value;
        Ok(())
    }

    /// Overwrites the gradient of `id`, typically to zero it.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), MinigradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    /// Values of several nodes, in the order of `ids`.
    pub fn values(&self, ids: &[NodeId]) -> Result<Vec<f64>, MinigradError> {
        ids.iter().map(|&id| self.value(id)).collect()
    }

    /// Gradients of several nodes, in the order of `ids`.
    pub fn grads(&self, ids: &[NodeId]) -> Result<Vec<f64>, MinigradError> {
        ids.iter().map(|&id| self.grad(id)).collect()
    }
}
