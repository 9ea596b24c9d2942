//! The graph arena.
//!
//! A [`Graph`] owns every [`Node`] created through it. Operation constructors
//! (see [`crate::ops`]) compute the forward value and append a node linked to
//! its operands, so the graph is recorded as a side effect of evaluation.
//! Nodes are addressed by [`NodeId`]; an id can be an operand of any number of
//! later nodes without any ownership bookkeeping.
//!
//! The arena is torn down as a unit when the `Graph` is dropped, or partially
//! with [`Graph::rewind`], which discards every node created after a
//! [`Checkpoint`]. A training loop creates its parameters first, takes a
//! checkpoint, and rewinds after each forward/backward cycle.

mod accessors;
mod autograd_methods;

use crate::node::{Node, NodeId};

/// Arena owning all nodes of a computation graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
}

/// Marker of the arena length at a point in time. See [`Graph::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Number of nodes that survive a rewind to this checkpoint.
    pub fn len(&self) -> usize {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph able to hold `capacity` nodes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a leaf node (input, constant or parameter) with a zero gradient.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Alias of [`Graph::leaf`] for values that are not meant to be trained.
    pub fn constant(&mut self, value: f64) -> NodeId {
        self.leaf(value)
    }

    /// Number of nodes currently held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Ids handed out after the checkpoint must not be used afterwards: they
    /// are reported as `UnknownNode` until the arena grows past them again, at
    /// which point they name the new nodes. Nodes kept by the rewind only ever
    /// reference older nodes, so the surviving graph stays consistent.
    ///
    /// # Errors
    /// `InvalidCheckpoint` if the graph holds fewer nodes than the checkpoint
    /// (it was taken on another graph, or after a deeper rewind).
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), crate::MinigradError> {
        if checkpoint.0 > self.nodes.len() {
            return Err(crate::MinigradError::InvalidCheckpoint {
                checkpoint: checkpoint.0,
                len: self.nodes.len(),
            });
        }
        let dropped = self.nodes.len() - checkpoint.0;
        self.nodes.truncate(checkpoint.0);
        log::trace!("rewind: dropped {} nodes, {} kept", dropped, self.nodes.len());
        Ok(())
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
