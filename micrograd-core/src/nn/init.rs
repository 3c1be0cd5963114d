use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A reproducible random number generator.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Weighting that draws each weight uniformly from `[low, high]`.
///
/// # Panics
/// If `low > high`.
pub fn uniform<R: Rng>(low: f64, high: f64, mut rng: R) -> impl FnMut() -> f64 {
    let dist = Uniform::new_inclusive(low, high);
    move || dist.sample(&mut rng)
}

/// Weighting that always returns `value`.
pub fn constant(value: f64) -> impl FnMut() -> f64 {
    move || value
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
