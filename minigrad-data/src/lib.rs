//! # minigrad-data
//!
//! Loading and batching of training examples for `minigrad-core` models.
//!
//! - [`datasets`]: the [`Dataset`] trait, an in-memory [`VecDataset`] and a
//!   [`CsvDataset`] of labeled points.
//! - [`samplers`]: index orders for one pass over a dataset.
//! - [`dataloader`]: groups sampled items into batches.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{CsvDataset, Dataset, LabeledPoint, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
