//! Training driver behind the `minigrad-train` binary.

pub mod config;
pub mod trainer;

pub use config::{Cli, TrainConfig};
pub use trainer::{run, EpochStats, Trainer};
