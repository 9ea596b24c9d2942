//! # Activation Functions
//!
//! Scalar non-linearities used by the neurons in [`crate::nn`].
//!
//! - [`relu_op`]: rectified linear unit, `max(0, x)`.
//! - [`tanh_op`]: hyperbolic tangent.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
