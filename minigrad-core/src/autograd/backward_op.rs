use std::fmt;

/// Tag selecting the local gradient rule of a node.
///
/// Every node in a [`Graph`](crate::Graph) records the operation that produced
/// it. During the backward pass the tag is dispatched through a single `match`
/// in [`OpKind::backward`], so adding a kind without a rule is a compile error.
///
/// `neg`, `sub` and `div` are built by composing `Mul`, `Add` and `Pow`, which
/// is why they have no kind of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    /// Input or parameter: no operands, no rule.
    Leaf,
    Add,
    Mul,
    /// Power with a constant (non-differentiable) exponent.
    Pow(f64),
    Relu,
    Tanh,
}

impl OpKind {
    /// Computes the contribution of this node's gradient to each operand.
    ///
    /// Mathematically, for `out = f(x_1, .., x_n)` this returns
    /// `dL/dout * dout/dx_i` for each operand `i`.
    ///
    /// # Arguments
    /// * `upstream`: the gradient currently accumulated on the node (`dL/dout`).
    /// * `inputs`: the forward values of the operands, in operand order.
    /// * `output`: the node's own forward value. `Tanh` reads it instead of
    ///   recomputing the activation from its input.
    ///
    /// The returned array is indexed like `inputs`; entries past
    /// `inputs.len()` are zero and must be ignored.
    pub fn backward(&self, upstream: f64, inputs: &[f64], output: f64) -> [f64; 2] {
        match *self {
            OpKind::Leaf => [0.0, 0.0],
            OpKind::Add => [upstream, upstream],
            OpKind::Mul => [inputs[1] * upstream, inputs[0] * upstream],
            OpKind::Pow(exponent) => [exponent * inputs[0].powf(exponent - 1.0) * upstream, 0.0],
            // The sub-gradient at exactly 0 is 0.
            OpKind::Relu => [if inputs[0] > 0.0 { upstream } else { 0.0 }, 0.0],
            OpKind::Tanh => [(1.0 - output * output) * upstream, 0.0],
        }
    }

    /// Number of operands a node of this kind is built from.
    pub fn arity(&self) -> usize {
        match self {
            OpKind::Leaf => 0,
            OpKind::Pow(_) | OpKind::Relu | OpKind::Tanh => 1,
            OpKind::Add | OpKind::Mul => 2,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => write!(f, "leaf"),
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(exponent) => write!(f, "**{}", exponent),
            OpKind::Relu => write!(f, "ReLU"),
            OpKind::Tanh => write!(f, "tanh"),
        }
    }
}
