use super::traits::Sampler;

/// Visits indices in dataset order, optionally stopping after the first
/// `limit` of them. Full-batch training uses it so that gradients are
/// accumulated in file order on every epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSampler {
    limit: Option<usize>,
}

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler { limit: None }
    }

    /// Restricts each pass to the first `limit` indices.
    pub fn with_limit(limit: usize) -> Self {
        SequentialSampler { limit: Some(limit) }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        Box::new(0..self.len(dataset_len))
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.limit.map_or(dataset_len, |limit| limit.min(dataset_len))
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
