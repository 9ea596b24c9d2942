use crate::error::MinigradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Maps a `{0, 1}` class label to the `{-1, +1}` target used by the hinge loss.
///
/// Any positive class is treated as `+1`.
pub fn signed_label(class: i64) -> f64 {
    if class > 0 {
        1.0
    } else {
        -1.0
    }
}

/// Hinge (max-margin) loss of a single score: `relu(1 - y * score)`.
///
/// `target` is expected to be `-1.0` or `+1.0`. The loss is zero once the
/// score is on the right side of the margin.
pub fn hinge_loss(graph: &mut Graph, score: NodeId, target: f64) -> Result<NodeId, MinigradError> {
    let y = graph.constant(target);
    let margin = graph.mul(y, score)?;
    let neg_margin = graph.neg(margin)?;
    let one = graph.constant(1.0);
    let shifted = graph.add(neg_margin, one)?;
    graph.relu(shifted)
}

/// L2 regularization term `alpha * Σ p²`, recorded in the graph so that its
/// gradient `2 * alpha * p` reaches every parameter.
pub fn l2_penalty(graph: &mut Graph, params: &[NodeId], alpha: f64) -> Result<NodeId, MinigradError> {
    let squares = params
        .iter()
        .map(|&p| graph.pow(p, 2.0))
        .collect::<Result<Vec<_>, _>>()?;
    let total = graph.sum(&squares)?;
    let alpha = graph.constant(alpha);
    graph.mul(total, alpha)
}

/// How per-example losses are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

/// Result of [`MarginLoss::forward`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossOutput {
    /// Scalar loss node; call `backward` on it.
    pub loss: NodeId,
    /// Fraction of examples whose score has the sign of their target, in `[0, 1]`.
    pub accuracy: f64,
}

/// Max-margin loss over a batch with L2 regularization:
/// `reduce(hinge(scoreᵢ, yᵢ)) + alpha * Σ p²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginLoss {
    pub alpha: f64,
    pub reduction: Reduction,
}

impl Default for MarginLoss {
    fn default() -> Self {
        MarginLoss {
            alpha: 1e-4,
            reduction: Reduction::Mean,
        }
    }
}

impl MarginLoss {
    pub fn new(alpha: f64, reduction: Reduction) -> Self {
        MarginLoss { alpha, reduction }
    }

    /// Builds the batch loss.
    ///
    /// `targets` holds one `±1` target per score. A score counts as correct
    /// when `score > 0` for a `+1` target, or `score <= 0` for a `-1` target.
    ///
    /// # Errors
    /// `EmptyBatch` if there are no scores, `InputSizeMismatch` if `targets`
    /// and `scores` differ in length.
    pub fn forward(
        &self,
        graph: &mut Graph,
        scores: &[NodeId],
        targets: &[f64],
        params: &[NodeId],
    ) -> Result<LossOutput, MinigradError> {
        if scores.is_empty() {
            return Err(MinigradError::EmptyBatch);
        }
        if scores.len() != targets.len() {
            return Err(MinigradError::InputSizeMismatch {
                expected: scores.len(),
                actual: targets.len(),
            });
        }

        let mut losses = Vec::with_capacity(scores.len());
        let mut correct = 0usize;
        for (&score, &target) in scores.iter().zip(targets) {
            losses.push(hinge_loss(graph, score, target)?);
            if (graph.value(score)? > 0.0) == (target > 0.0) {
                correct += 1;
            }
        }

        let mut data_loss = graph.sum(&losses)?;
        if self.reduction == Reduction::Mean {
            let scale = graph.constant(1.0 / scores.len() as f64);
            data_loss = graph.mul(data_loss, scale)?;
        }
        let reg_loss = l2_penalty(graph, params, self.alpha)?;
        let loss = graph.add(data_loss, reg_loss)?;

        Ok(LossOutput {
            loss,
            accuracy: correct as f64 / scores.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "margin_test.rs"]
mod tests;
