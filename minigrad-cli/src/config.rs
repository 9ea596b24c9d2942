use clap::{Parser, ValueEnum};
use minigrad_core::nn::Activation;
use minigrad_core::MinigradError;
use std::path::PathBuf;

/// Settings of one training run.
///
/// The defaults reproduce the reference setup: a 2 → 16 → 16 → 1 ReLU network
/// trained full-batch for 100 epochs with a constant learning rate of 0.01 and
/// an L2 factor of 1e-4.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub data_path: PathBuf,
    /// Feature columns per CSV record, the label column excluded.
    pub n_features: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    pub hidden: Vec<usize>,
    pub hidden_activation: Activation,
    pub alpha: f64,
    /// `None` draws a fresh seed, which is logged.
    pub seed: Option<u64>,
    /// `None` means one batch holding the whole dataset.
    pub batch_size: Option<usize>,
    /// Decay the learning rate linearly to a tenth of its value over the run.
    pub lr_decay: bool,
    /// Examples seen per epoch: the first `limit` records when training
    /// full-batch, a fresh random subset of that size with mini-batches.
    pub limit: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            data_path: PathBuf::from("data/moons_dataset.csv"),
            n_features: 2,
            epochs: 100,
            learning_rate: 0.01,
            hidden: vec![16, 16],
            hidden_activation: Activation::Relu,
            alpha: 1e-4,
            seed: None,
            batch_size: None,
            lr_decay: false,
            limit: None,
        }
    }
}

impl TrainConfig {
    /// Layer sizes of the MLP: the hidden layers followed by the single score.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = self.hidden.clone();
        sizes.push(1);
        sizes
    }

    /// # Errors
    /// `InvalidHyperparameter` naming the first setting out of range.
    pub fn validate(&self) -> Result<(), MinigradError> {
        let invalid = |name: &str, value: f64| -> Result<(), MinigradError> {
            Err(MinigradError::InvalidHyperparameter {
                name: name.to_string(),
                value,
            })
        };
        if self.epochs == 0 {
            return invalid("epochs", 0.0);
        }
        if self.n_features == 0 {
            return invalid("n_features", 0.0);
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return invalid("lr", self.learning_rate);
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return invalid("alpha", self.alpha);
        }
        if self.batch_size == Some(0) {
            return invalid("batch_size", 0.0);
        }
        if self.limit == Some(0) {
            return invalid("limit", 0.0);
        }
        if let Some(&size) = self.hidden.iter().find(|&&size| size == 0) {
            return invalid("hidden", size as f64);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivationArg {
    Relu,
    Tanh,
}

impl From<ActivationArg> for Activation {
    fn from(arg: ActivationArg) -> Self {
        match arg {
            ActivationArg::Relu => Activation::Relu,
            ActivationArg::Tanh => Activation::Tanh,
        }
    }
}

/// Command-line arguments. Every option left out keeps the value of
/// [`TrainConfig::default`].
#[derive(Parser, Debug)]
#[command(name = "minigrad-train")]
#[command(about = "Train an MLP classifier on labeled 2-D points with a max-margin loss", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file with a header row and `x0,x1,...,label` records
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Number of feature columns
    #[arg(long)]
    pub features: Option<usize>,

    /// Number of passes over the dataset
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Learning rate (initial value when --lr-decay is set)
    #[arg(long)]
    pub lr: Option<f64>,

    /// Hidden layer sizes, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub hidden: Option<Vec<usize>>,

    /// Activation of the hidden layers
    #[arg(long, value_enum)]
    pub activation: Option<ActivationArg>,

    /// L2 regularization factor
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Seed for weight initialization and shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mini-batch size; the whole dataset by default
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Decay the learning rate linearly to 10% of its initial value
    #[arg(long)]
    pub lr_decay: bool,

    /// Train on at most N examples per epoch
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl Cli {
    pub fn into_config(self) -> TrainConfig {
        let defaults = TrainConfig::default();
        TrainConfig {
            data_path: self.data.unwrap_or(defaults.data_path),
            n_features: self.features.unwrap_or(defaults.n_features),
            epochs: self.epochs.unwrap_or(defaults.epochs),
            learning_rate: self.lr.unwrap_or(defaults.learning_rate),
            hidden: self.hidden.unwrap_or(defaults.hidden),
            hidden_activation: self.activation.map_or(defaults.hidden_activation, Activation::from),
            alpha: self.alpha.unwrap_or(defaults.alpha),
            seed: self.seed.or(defaults.seed),
            batch_size: self.batch_size.or(defaults.batch_size),
            lr_decay: self.lr_decay || defaults.lr_decay,
            limit: self.limit.or(defaults.limit),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
