use minigrad_core::nn::init::seeded_rng;
use minigrad_core::nn::{hinge_loss, signed_label, Activation, MarginLoss, Mlp, Module, Reduction};
use minigrad_core::optim::{LinearLr, LrScheduler, Optimizer, Sgd};
use minigrad_core::{Graph, MinigradError};

mod common;
use common::{init_logger, separable_points};

fn epoch_loss(
    graph: &mut Graph,
    model: &Mlp,
    criterion: &MarginLoss,
    data: &[([f64; 2], i64)],
) -> Result<(f64, f64), MinigradError> {
    let checkpoint = graph.checkpoint();
    let mut scores = Vec::with_capacity(data.len());
    let mut targets = Vec::with_capacity(data.len());
    for (x, label) in data {
        let inputs = [graph.constant(x[0]), graph.constant(x[1])];
        scores.push(model.score(graph, &inputs)?);
        targets.push(signed_label(*label));
    }
    let out = criterion.forward(graph, &scores, &targets, &model.parameters())?;
    graph.backward(out.loss)?;
    let loss = graph.value(out.loss)?;
    graph.rewind(checkpoint)?;
    Ok((loss, out.accuracy))
}

#[test]
fn test_mlp_learns_a_separable_problem() -> Result<(), MinigradError> {
    init_logger();
    let data = separable_points(60);
    let mut graph = Graph::new();
    let model = Mlp::with_activations(&mut graph, 2, &[8, 1], Activation::Tanh, Activation::Linear, &mut seeded_rng(1337))?;
    let n_params = graph.len();
    let criterion = MarginLoss::new(1e-4, Reduction::Mean);
    let mut optimizer = Sgd::new(model.parameters(), 0.1)?;

    let mut history = Vec::new();
    for _ in 0..300 {
        optimizer.zero_grad(&mut graph)?;
        history.push(epoch_loss(&mut graph, &model, &criterion, &data)?);
        optimizer.step(&mut graph)?;
    }

    assert_eq!(graph.len(), n_params);
    let (first_loss, _) = history[0];
    let (last_loss, last_accuracy) = history[history.len() - 1];
    assert!(last_loss < first_loss, "loss went from {} to {}", first_loss, last_loss);
    assert!(last_accuracy >= 0.9, "accuracy {}", last_accuracy);
    Ok(())
}

#[test]
fn test_per_example_accumulation_matches_batched_sum() -> Result<(), MinigradError> {
    // Backpropagating each example on its own and rewinding in between must
    // leave the same parameter gradients as one graph over the whole batch.
    let data = separable_points(12);
    let mut graph = Graph::new();
    let model = Mlp::new(&mut graph, 2, &[4, 1], &mut seeded_rng(3))?;
    let params = model.parameters();
    let checkpoint = graph.checkpoint();

    for (x, label) in &data {
        let inputs = [graph.constant(x[0]), graph.constant(x[1])];
        let score = model.score(&mut graph, &inputs)?;
        let loss = hinge_loss(&mut graph, score, signed_label(*label))?;
        graph.backward(loss)?;
        graph.rewind(checkpoint)?;
    }
    let accumulated = graph.grads(&params)?;

    model.zero_grad(&mut graph)?;
    let mut scores = Vec::new();
    let mut targets = Vec::new();
    for (x, label) in &data {
        let inputs = [graph.constant(x[0]), graph.constant(x[1])];
        scores.push(model.score(&mut graph, &inputs)?);
        targets.push(signed_label(*label));
    }
    let out = MarginLoss::new(0.0, Reduction::Sum).forward(&mut graph, &scores, &targets, &params)?;
    graph.backward(out.loss)?;
    let batched = graph.grads(&params)?;

    for (a, b) in accumulated.iter().zip(&batched) {
        approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_linear_schedule_drives_sgd() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let w = graph.leaf(1.0);
    let sgd = Sgd::new(vec![w], 1.0)?;
    let mut scheduler = LinearLr::new(sgd, 0.1, 10)?;
    for _ in 0..10 {
        graph.set_grad(w, 0.0)?;
        scheduler.optimizer_mut().step(&mut graph)?;
        scheduler.step()?;
    }
    approx::assert_relative_eq!(scheduler.last_lr(), 0.1, epsilon = 1e-12);
    assert_eq!(graph.value(w)?, 1.0);
    Ok(())
}
