//! Optimizers for training models built on the graph.
//!
//! An optimizer remembers the ids of the parameter leaves it updates and reads
//! their gradients from the [`Graph`](crate::Graph) passed to
//! [`Optimizer::step`].

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod sgd;

pub use lr_scheduler::{LinearLr, LrScheduler, StepLr};
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;

use crate::error::MinigradError;

/// Rejects learning rates that are not strictly positive and finite.
pub(crate) fn validate_lr(lr: f64) -> Result<(), MinigradError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(MinigradError::InvalidHyperparameter {
            name: "lr".to_string(),
            value: lr,
        })
    }
}
