use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::validate_lr;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay. For each parameter `p` with gradient
/// `g` a step computes
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (only when momentum != 0, v starts at 0)
/// p = p - lr * v
/// ```
///
/// With both momentum and weight decay at zero this is plain `p -= lr * g`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    velocities: Vec<f64>,
}

impl Sgd {
    /// Creates a plain SGD optimizer over `params`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `lr` is not strictly positive and finite.
    pub fn new(params: Vec<NodeId>, lr: f64) -> Result<Self, MinigradError> {
        validate_lr(lr)?;
        let velocities = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            velocities,
        })
    }

    /// Sets the momentum factor, in `[0, 1)`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, MinigradError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(MinigradError::InvalidHyperparameter {
                name: "momentum".to_string(),
                value: momentum,
            });
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// Sets the weight decay (L2 penalty) factor, non-negative.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, MinigradError> {
        if !(weight_decay.is_finite() && weight_decay >= 0.0) {
            return Err(MinigradError::InvalidHyperparameter {
                name: "weight_decay".to_string(),
                value: weight_decay,
            });
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), MinigradError> {
        for (&param, velocity) in self.params.iter().zip(self.velocities.iter_mut()) {
            let value = graph.value(param)?;
            let mut d_p = graph.grad(param)?;
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * value;
            }
            if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + d_p;
                d_p = *velocity;
            }
            graph.set_value(param, value - self.lr * d_p)?;
        }
        log::trace!("sgd step: {} params, lr {}", self.params.len(), self.lr);
        Ok(())
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), MinigradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
