//! Loss functions for binary classification with a scalar score.

pub mod margin;

pub use margin::{hinge_loss, l2_penalty, signed_label, LossOutput, MarginLoss, Reduction};
