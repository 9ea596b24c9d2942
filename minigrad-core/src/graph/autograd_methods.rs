use super::Graph;
use crate::autograd::graph::topological_sort;
use crate::error::MinigradError;
use crate::node::NodeId;

impl Graph {
    /// Nodes reachable from `root`, every node after all of its operands and
    /// `root` last. See [`topological_sort`].
    pub fn topological_sort(&self, root: NodeId) -> Result<Vec<NodeId>, MinigradError> {
        topological_sort(self, root)
    }

    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root`'s gradient with `1.0` (assignment), then visits the nodes
    /// reachable from `root` in reverse topological order and lets each
    /// non-leaf node add its contribution to its operands' gradients. On return
    /// every reachable node holds `d root / d node`.
    ///
    /// # Preconditions
    /// Gradients of the reachable nodes must be zero. Freshly created nodes
    /// are; long-lived parameters must be reset with [`Graph::zero_grad`] or
    /// [`Graph::zero_grad_of`] between passes. Running `backward` twice
    /// without zeroing adds the second pass on top of the first.
    ///
    /// # Errors
    /// `UnknownNode` if `root` is not held by this graph. NaN and infinities
    /// propagate as ordinary values.
    pub fn backward(&mut self, root: NodeId) -> Result<(), MinigradError> {
        let sorted = topological_sort(self, root)?;

        self.nodes[root.index()].grad = 1.0;

        for &id in sorted.iter().rev() {
            let node = &self.nodes[id.index()];
            if node.is_leaf() {
                continue;
            }
            let operands = node.operands;
            debug_assert_eq!(operands.len(), node.op.arity(), "{} built with the wrong operand count", id);
            let mut inputs = [0.0; 2];
            for (slot, operand) in inputs.iter_mut().zip(operands.as_slice()) {
                *slot = self.nodes[operand.index()].value;
            }
            let contributions = node
                .op
                .backward(node.grad, &inputs[..operands.len()], node.value);

            for (operand, contribution) in operands.as_slice().iter().zip(contributions) {
                self.nodes[operand.index()].grad += contribution;
            }
        }

        log::debug!("backward from {}: visited {} nodes", root, sorted.len());
        Ok(())
    }

    /// Resets the gradient of every node in the graph.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Resets the gradient of the given nodes only.
    pub fn zero_grad_of(&mut self, ids: &[NodeId]) -> Result<(), MinigradError> {
        for &id in ids {
            self.set_grad(id, 0.0)?;
        }
        Ok(())
    }
}
