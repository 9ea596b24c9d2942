//! Learning rate schedulers.
//!
//! A scheduler owns the optimizer it drives and rewrites its learning rate on
//! every [`LrScheduler::step`], which is expected once per epoch.

use crate::error::MinigradError;
use crate::optim::optimizer_trait::Optimizer;

/// Adjusts an optimizer's learning rate over the course of training.
pub trait LrScheduler<O: Optimizer> {
    /// Advances the schedule by one step and updates the optimizer.
    fn step(&mut self) -> Result<(), MinigradError>;

    /// The learning rate most recently applied to the optimizer.
    fn last_lr(&self) -> f64;

    fn optimizer(&self) -> &O;

    fn optimizer_mut(&mut self) -> &mut O;

    /// Number of steps taken so far.
    fn last_epoch(&self) -> usize;
}

/// Decays the learning rate linearly from its initial value to
/// `initial * end_factor` over `total_steps` steps, then holds it:
///
/// ```text
/// lr_t = initial * (1 - (1 - end_factor) * min(t, total_steps) / total_steps)
/// ```
///
/// `LinearLr::new(sgd, 0.1, 100)` on an initial rate of `1.0` gives the
/// classic `1.0 - 0.9 * epoch / 100` schedule.
#[derive(Debug)]
pub struct LinearLr<O: Optimizer> {
    optimizer: O,
    base_lr: f64,
    end_factor: f64,
    total_steps: usize,
    last_epoch: usize,
}

impl<O: Optimizer> LinearLr<O> {
    /// # Errors
    /// `InvalidHyperparameter` if `total_steps` is zero or `end_factor` is not
    /// strictly positive and finite.
    pub fn new(optimizer: O, end_factor: f64, total_steps: usize) -> Result<Self, MinigradError> {
        if total_steps == 0 {
            return Err(MinigradError::InvalidHyperparameter {
                name: "total_steps".to_string(),
                value: 0.0,
            });
        }
        if !(end_factor.is_finite() && end_factor > 0.0) {
            return Err(MinigradError::InvalidHyperparameter {
                name: "end_factor".to_string(),
                value: end_factor,
            });
        }
        let base_lr = optimizer.learning_rate();
        Ok(LinearLr {
            optimizer,
            base_lr,
            end_factor,
            total_steps,
            last_epoch: 0,
        })
    }

    pub fn into_inner(self) -> O {
        self.optimizer
    }
}

impl<O: Optimizer> LrScheduler<O> for LinearLr<O> {
    fn step(&mut self) -> Result<(), MinigradError> {
        self.last_epoch += 1;
        let t = self.last_epoch.min(self.total_steps) as f64;
        let factor = 1.0 - (1.0 - self.end_factor) * t / self.total_steps as f64;
        self.optimizer.set_learning_rate(self.base_lr * factor)
    }

    fn last_lr(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    fn last_epoch(&self) -> usize {
        self.last_epoch
    }
}

/// Multiplies the learning rate by `gamma` every `step_size` steps.
///
/// The rate never leaves `[f64::MIN_POSITIVE, f64::MAX]`: a long decay
/// settles at the smallest normal positive rate instead of underflowing.
#[derive(Debug)]
pub struct StepLr<O: Optimizer> {
    optimizer: O,
    step_size: usize,
    gamma: f64,
    last_epoch: usize,
}

impl<O: Optimizer> StepLr<O> {
    /// # Errors
    /// `InvalidHyperparameter` if `step_size` is zero or `gamma` is not
    /// strictly positive and finite.
    pub fn new(optimizer: O, step_size: usize, gamma: f64) -> Result<Self, MinigradError> {
        if step_size == 0 {
            return Err(MinigradError::InvalidHyperparameter {
                name: "step_size".to_string(),
                value: 0.0,
            });
        }
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(MinigradError::InvalidHyperparameter {
                name: "gamma".to_string(),
                value: gamma,
            });
        }
        Ok(StepLr {
            optimizer,
            step_size,
            gamma,
            last_epoch: 0,
        })
    }

    pub fn into_inner(self) -> O {
        self.optimizer
    }
}

impl<O: Optimizer> LrScheduler<O> for StepLr<O> {
    fn step(&mut self) -> Result<(), MinigradError> {
        self.last_epoch += 1;
        if self.last_epoch % self.step_size == 0 {
            let lr = (self.optimizer.learning_rate() * self.gamma).clamp(f64::MIN_POSITIVE, f64::MAX);
            self.optimizer.set_learning_rate(lr)?;
        }
        Ok(())
    }

    fn last_lr(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    fn last_epoch(&self) -> usize {
        self.last_epoch
    }
}

#[cfg(test)]
#[path = "lr_scheduler_test.rs"]
mod tests;
