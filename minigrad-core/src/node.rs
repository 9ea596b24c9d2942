use crate::autograd::OpKind;
use std::fmt;

/// Stable identifier of a [`Node`] inside a [`Graph`](crate::Graph).
///
/// A `NodeId` is the node's index in the graph arena. Ids are handed out in
/// creation order, so every operand id is strictly smaller than the id of the
/// node consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The operands of a node: zero, one or two ids, in operand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    ids: [NodeId; 2],
    len: u8,
}

impl Operands {
    pub(crate) fn none() -> Self {
        Operands { ids: [NodeId(0); 2], len: 0 }
    }

    pub(crate) fn unary(a: NodeId) -> Self {
        Operands { ids: [a, NodeId(0)], len: 1 }
    }

    pub(crate) fn binary(a: NodeId, b: NodeId) -> Self {
        Operands { ids: [a, b], len: 2 }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids[..self.len()]
    }
}

/// A single scalar in the computation graph.
///
/// Holds the forward value, the gradient accumulator and the provenance of the
/// value (the operation that produced it and its operands). A node has no
/// behavior of its own; the [`Graph`](crate::Graph) owning it drives both the
/// forward construction and the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: OpKind,
    pub(crate) operands: Operands,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            op: OpKind::Leaf,
            operands: Operands::none(),
        }
    }

    pub(crate) fn from_op(value: f64, op: OpKind, operands: Operands) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            operands,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> OpKind {
        self.op
    }

    pub fn operands(&self) -> &[NodeId] {
        self.operands.as_slice()
    }

    /// Arity of the operation that produced this node (0 for leaves).
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:.4}, grad={:.4}, op={})", self.value, self.grad, self.op)
    }
}
