//! Parameter initialization.
//!
//! Every initializer takes the random number generator explicitly; there is
//! no process-wide seed. Use [`seeded_rng`] for reproducible runs.

use crate::error::MinigradError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Draws `n` values uniformly from `[low, high)`.
///
/// # Errors
/// `InvalidHyperparameter` unless `low < high` and both bounds are finite.
pub fn uniform<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Result<Vec<f64>, MinigradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(MinigradError::InvalidHyperparameter {
            name: "uniform range".to_string(),
            value: high - low,
        });
    }
    let dist = Uniform::new(low, high);
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

/// Draws `n` values from a normal distribution.
///
/// # Errors
/// `InvalidHyperparameter` if `std` is negative or not finite, or if `mean`
/// is not finite.
pub fn normal<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std: f64,
) -> Result<Vec<f64>, MinigradError> {
    let invalid_std = || MinigradError::InvalidHyperparameter {
        name: "std".to_string(),
        value: std,
    };
    // `Normal::new` accepts a negative std and mirrors the distribution.
    if !(std.is_finite() && std >= 0.0) {
        return Err(invalid_std());
    }
    if !mean.is_finite() {
        return Err(MinigradError::InvalidHyperparameter {
            name: "mean".to_string(),
            value: mean,
        });
    }
    let dist = Normal::new(mean, std).map_err(|_| invalid_std())?;
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

/// Deterministic generator for reproducible initialization.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
