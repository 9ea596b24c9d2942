use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// A sampler that randomly samples indices from a dataset.
///
/// Without a seed every pass draws from the thread-local generator. With a
/// seed, one generator is seeded once and advanced by every pass, so a run is
/// reproducible while each epoch still sees a different order.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: Option<Mutex<StdRng>>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// * `replacement`: if `true`, an index can be selected multiple times.
    /// * `num_samples`: the number of indices per pass, defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    fn draw<R: Rng>(&self, rng: &mut R, dataset_len: usize, num_samples: usize) -> Vec<usize> {
        if self.replacement {
            (0..num_samples).map(|_| rng.gen_range(0..dataset_len)).collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(num_samples);
            indices
        }
    }
}

impl Clone for RandomSampler {
    fn clone(&self) -> Self {
        RandomSampler {
            replacement: self.replacement,
            num_samples: self.num_samples,
            rng: self.rng.as_ref().map(|rng| Mutex::new(lock(rng).clone())),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let num_samples = self.len(dataset_len);
        if num_samples == 0 {
            match self.num_samples {
                Some(requested) if !self.replacement && requested > dataset_len => {
                    log::warn!(
                        "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding nothing",
                        requested,
                        dataset_len
                    );
                }
                _ => {}
            }
            return Box::new(std::iter::empty());
        }

        let indices = match &self.rng {
            Some(rng) => self.draw(&mut *lock(rng), dataset_len, num_samples),
            None => self.draw(&mut rand::thread_rng(), dataset_len, num_samples),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 {
            return 0;
        }
        let requested = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && requested > dataset_len {
            0
        } else {
            requested
        }
    }
}

/// Recovers the generator from a poisoned lock; its state is still valid.
fn lock(rng: &Mutex<StdRng>) -> std::sync::MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
