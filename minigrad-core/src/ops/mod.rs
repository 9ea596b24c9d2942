//! # Operations
//!
//! One constructor per differentiable scalar operation. Each constructor
//! computes the forward value from its operands' values and records a new
//! node in the [`Graph`](crate::Graph), so calling it both evaluates and
//! builds the graph.
//!
//! Every operation is available as a free function (`add_op`, `relu_op`, ...)
//! and as a method on `Graph` (`graph.add(a, b)`, `graph.relu(a)`, ...).

pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op, sum_op};
