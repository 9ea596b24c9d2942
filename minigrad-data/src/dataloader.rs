//! # DataLoader
//!
//! Groups the items of a [`Dataset`] into batches, in the order chosen by a
//! [`Sampler`]. A loader can be iterated any number of times; each call to
//! [`DataLoader::iter`] asks the sampler for a fresh pass.
//!
//! ```rust
//! use minigrad_data::dataloader::DataLoader;
//! use minigrad_data::datasets::VecDataset;
//! use minigrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false)?;
//! let batches = loader.iter().collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! # Ok::<(), minigrad_core::MinigradError>(())
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use minigrad_core::MinigradError;

/// Batches a dataset according to a sampler.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new `DataLoader`.
    ///
    /// * `batch_size`: maximum number of items per batch.
    /// * `drop_last`: if `true`, a final batch smaller than `batch_size` is skipped.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, MinigradError> {
        if batch_size == 0 {
            return Err(MinigradError::InvalidHyperparameter {
                name: "batch_size".to_string(),
                value: 0.0,
            });
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one pass yields.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            (n + self.batch_size - 1) / self.batch_size
        }
    }

    /// Starts a new pass over the dataset.
    pub fn iter(&self) -> Batches<'_, D> {
        Batches {
            dataset: &self.dataset,
            indices: self.sampler.iter(self.dataset.len()),
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

impl<'a, D: Dataset, S: Sampler> IntoIterator for &'a DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, MinigradError>;
    type IntoIter = Batches<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over a [`DataLoader`].
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

impl<'a, D: Dataset> Iterator for Batches<'a, D> {
    type Item = Result<Vec<D::Item>, MinigradError>;

    /// Returns the next batch, `Some(Err(_))` if the dataset failed to
    /// produce an item, or `None` at the end of the pass.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
