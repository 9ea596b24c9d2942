//! The training loop.
//!
//! Model parameters are the first nodes of the trainer's graph. Every example
//! is evaluated on top of them, backpropagated so its gradient accumulates on
//! the parameters, and discarded with a rewind to the parameter checkpoint. A
//! batch ends with the L2 penalty's gradient and one optimizer step.

use crate::config::TrainConfig;
use minigrad_core::nn::init::seeded_rng;
use minigrad_core::nn::{hinge_loss, l2_penalty, signed_label, Activation, Mlp, Module};
use minigrad_core::optim::{LinearLr, LrScheduler, Optimizer, Sgd};
use minigrad_core::{Checkpoint, Graph, MinigradError, NodeId};
use minigrad_data::{CsvDataset, DataLoader, Dataset, LabeledPoint, RandomSampler, Sampler, SequentialSampler};
use rand::Rng;

/// Summary of one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochStats {
    pub epoch: usize,
    /// `(Σ hinge + alpha · Σ p²) / n`, with the penalty taken before the last step.
    pub loss: f64,
    /// Percentage of examples classified correctly during the epoch.
    pub accuracy: f64,
    /// Learning rate used for the epoch's steps.
    pub learning_rate: f64,
}

#[derive(Debug)]
enum Schedule {
    Constant(Sgd),
    Linear(LinearLr<Sgd>),
}

impl Schedule {
    fn optimizer(&self) -> &Sgd {
        match self {
            Schedule::Constant(sgd) => sgd,
            Schedule::Linear(scheduler) => scheduler.optimizer(),
        }
    }

    fn optimizer_mut(&mut self) -> &mut Sgd {
        match self {
            Schedule::Constant(sgd) => sgd,
            Schedule::Linear(scheduler) => scheduler.optimizer_mut(),
        }
    }

    fn advance(&mut self) -> Result<(), MinigradError> {
        match self {
            Schedule::Constant(_) => Ok(()),
            Schedule::Linear(scheduler) => scheduler.step(),
        }
    }
}

/// An MLP classifier together with the graph holding its parameters.
#[derive(Debug)]
pub struct Trainer {
    graph: Graph,
    model: Mlp,
    params: Vec<NodeId>,
    checkpoint: Checkpoint,
    schedule: Schedule,
    alpha: f64,
}

impl Trainer {
    /// Builds the model for `n_features` inputs, initialized from `seed`.
    pub fn new(config: &TrainConfig, n_features: usize, seed: u64) -> Result<Self, MinigradError> {
        config.validate()?;
        let mut graph = Graph::new();
        let mut rng = seeded_rng(seed);
        let model = Mlp::with_activations(
            &mut graph,
            n_features,
            &config.layer_sizes(),
            config.hidden_activation,
            Activation::Linear,
            &mut rng,
        )?;
        let params = model.parameters();
        let checkpoint = graph.checkpoint();

        let sgd = Sgd::new(params.clone(), config.learning_rate)?;
        let schedule = if config.lr_decay {
            Schedule::Linear(LinearLr::new(sgd, 0.1, config.epochs)?)
        } else {
            Schedule::Constant(sgd)
        };

        log::info!("model: {} parameters", params.len());
        log::debug!("{}", model);
        Ok(Trainer {
            graph,
            model,
            params,
            checkpoint,
            schedule,
            alpha: config.alpha,
        })
    }

    pub fn model(&self) -> &Mlp {
        &self.model
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn learning_rate(&self) -> f64 {
        self.schedule.optimizer().learning_rate()
    }

    /// Runs one pass over `loader`, stepping the optimizer after each batch.
    ///
    /// # Errors
    /// `EmptyBatch` if the loader yields no examples.
    pub fn train_epoch<D, S>(&mut self, loader: &DataLoader<D, S>, epoch: usize) -> Result<EpochStats, MinigradError>
    where
        D: Dataset<Item = LabeledPoint>,
        S: Sampler,
    {
        let learning_rate = self.learning_rate();
        let mut seen = 0usize;
        let mut correct = 0usize;
        let mut data_loss = 0.0;
        let mut reg_loss = 0.0;

        for batch in loader {
            let batch = batch?;
            self.schedule.optimizer().zero_grad(&mut self.graph)?;

            for point in &batch {
                let (loss, is_correct) = self.accumulate_example(point)?;
                data_loss += loss;
                correct += usize::from(is_correct);
            }
            seen += batch.len();

            let reg = l2_penalty(&mut self.graph, &self.params, self.alpha)?;
            reg_loss = self.graph.value(reg)?;
            self.graph.backward(reg)?;
            self.graph.rewind(self.checkpoint)?;

            self.schedule.optimizer_mut().step(&mut self.graph)?;
        }

        if seen == 0 {
            return Err(MinigradError::EmptyBatch);
        }
        self.schedule.advance()?;

        Ok(EpochStats {
            epoch,
            loss: (data_loss + reg_loss) / seen as f64,
            accuracy: correct as f64 / seen as f64 * 100.0,
            learning_rate,
        })
    }

    /// Forward and backward pass for one example. Returns its hinge loss and
    /// whether the score had the right sign.
    fn accumulate_example(&mut self, point: &LabeledPoint) -> Result<(f64, bool), MinigradError> {
        let outcome = self.backprop_example(point);
        self.graph.rewind(self.checkpoint)?;
        outcome
    }

    fn backprop_example(&mut self, point: &LabeledPoint) -> Result<(f64, bool), MinigradError> {
        let graph = &mut self.graph;
        let inputs: Vec<NodeId> = point.features.iter().map(|&x| graph.constant(x)).collect();
        let score = self.model.score(graph, &inputs)?;
        let loss = hinge_loss(graph, score, signed_label(point.label))?;

        let loss_value = graph.value(loss)?;
        let is_correct = (graph.value(score)? > 0.0) == (point.label > 0);
        graph.backward(loss)?;
        Ok((loss_value, is_correct))
    }

    /// Score of a single feature vector; positive means class 1.
    pub fn predict(&mut self, features: &[f64]) -> Result<f64, MinigradError> {
        let inputs: Vec<NodeId> = features.iter().map(|&x| self.graph.constant(x)).collect();
        let score = self.model.score(&mut self.graph, &inputs);
        let value = score.and_then(|s| self.graph.value(s));
        self.graph.rewind(self.checkpoint)?;
        value
    }
}

/// Trains a model on `dataset` as described by `config` and returns the
/// per-epoch statistics.
pub fn run(config: &TrainConfig, dataset: CsvDataset) -> Result<Vec<EpochStats>, MinigradError> {
    config.validate()?;
    if dataset.is_empty() {
        return Err(MinigradError::EmptyBatch);
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);

    // Initialization and shuffling draw from separate streams.
    let mut seeds = seeded_rng(seed);
    let init_seed: u64 = seeds.gen();
    let shuffle_seed: u64 = seeds.gen();

    let mut trainer = Trainer::new(config, dataset.n_features(), init_seed)?;
    match config.batch_size {
        None => {
            let sampler = match config.limit {
                Some(limit) => SequentialSampler::with_limit(limit),
                None => SequentialSampler::new(),
            };
            let batch_size = sampler.len(dataset.len());
            let loader = DataLoader::new(dataset, batch_size, sampler, false)?;
            train_all(&mut trainer, &loader, config.epochs)
        }
        Some(batch_size) => {
            let num_samples = config.limit.map(|limit| limit.min(dataset.len()));
            let sampler = RandomSampler::new(false, num_samples).with_seed(shuffle_seed);
            let loader = DataLoader::new(dataset, batch_size, sampler, false)?;
            train_all(&mut trainer, &loader, config.epochs)
        }
    }
}

fn train_all<D, S>(trainer: &mut Trainer, loader: &DataLoader<D, S>, epochs: usize) -> Result<Vec<EpochStats>, MinigradError>
where
    D: Dataset<Item = LabeledPoint>,
    S: Sampler,
{
    let mut history = Vec::with_capacity(epochs);
    for epoch in 0..epochs {
        let stats = trainer.train_epoch(loader, epoch)?;
        log::info!("step {} loss {:.6}, accuracy {:.2}%", stats.epoch, stats.loss, stats.accuracy);
        history.push(stats);
    }
    Ok(history)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
