use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_signed_label() {
    assert_eq!(signed_label(1), 1.0);
    assert_eq!(signed_label(0), -1.0);
    assert_eq!(signed_label(-1), -1.0);
}

#[test]
fn test_hinge_loss_values_and_gradients() -> Result<(), MinigradError> {
    // (score, target, loss, d loss / d score)
    let cases = [
        (0.5, 1.0, 0.5, -1.0),
        (2.0, 1.0, 0.0, 0.0),
        (0.5, -1.0, 1.5, 1.0),
        (-3.0, -1.0, 0.0, 0.0),
    ];
    for &(s, y, expected, expected_grad) in &cases {
        let mut graph = Graph::new();
        let score = graph.leaf(s);
        let loss = hinge_loss(&mut graph, score, y)?;
        assert_relative_eq!(graph.value(loss)?, expected);
        graph.backward(loss)?;
        assert_relative_eq!(graph.grad(score)?, expected_grad);
    }
    Ok(())
}

#[test]
fn test_l2_penalty() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(-4.0);
    let reg = l2_penalty(&mut graph, &[a, b], 0.1)?;
    assert_relative_eq!(graph.value(reg)?, 2.5, epsilon = 1e-12);
    graph.backward(reg)?;
    assert_relative_eq!(graph.grad(a)?, 0.6, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(b)?, -0.8, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_l2_penalty_matches_finite_differences() {
    let result = check_grad(
        |graph, inputs| l2_penalty(graph, inputs, 0.5),
        &[0.3, -1.2, 2.0],
        1e-5,
        1e-6,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_margin_loss_mean_and_accuracy() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let w = graph.leaf(1.0);
    let s0 = graph.leaf(0.5);
    let s1 = graph.leaf(0.5);
    let criterion = MarginLoss::new(0.0, Reduction::Mean);
    let out = criterion.forward(&mut graph, &[s0, s1], &[1.0, -1.0], &[w])?;
    // (0.5 + 1.5) / 2
    assert_relative_eq!(graph.value(out.loss)?, 1.0, epsilon = 1e-12);
    assert_relative_eq!(out.accuracy, 0.5);

    graph.backward(out.loss)?;
    assert_relative_eq!(graph.grad(s0)?, -0.5, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(s1)?, 0.5, epsilon = 1e-12);
    assert_eq!(graph.grad(w)?, 0.0);
    Ok(())
}

#[test]
fn test_margin_loss_sum_with_regularization() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let w = graph.leaf(2.0);
    let s0 = graph.leaf(-0.5);
    let criterion = MarginLoss::new(0.01, Reduction::Sum);
    let out = criterion.forward(&mut graph, &[s0], &[-1.0], &[w])?;
    // hinge = relu(1 - 0.5) = 0.5, reg = 0.01 * 4
    assert_relative_eq!(graph.value(out.loss)?, 0.54, epsilon = 1e-12);
    assert_relative_eq!(out.accuracy, 1.0);

    graph.backward(out.loss)?;
    assert_relative_eq!(graph.grad(w)?, 0.04, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_margin_loss_rejects_bad_batches() {
    let mut graph = Graph::new();
    let s = graph.leaf(1.0);
    let criterion = MarginLoss::default();
    assert_eq!(criterion.forward(&mut graph, &[], &[], &[]), Err(MinigradError::EmptyBatch));
    assert_eq!(
        criterion.forward(&mut graph, &[s], &[1.0, -1.0], &[]),
        Err(MinigradError::InputSizeMismatch { expected: 1, actual: 2 })
    );
}
