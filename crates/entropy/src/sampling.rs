//! Distribution sampling over a [`Stream`].
//!
//! Every function takes the stream explicitly so the caller can see exactly
//! where randomness is consumed. Functions document how many draws they take
//! when that matters for stream stability.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector3;
use rand::Rng;

use crate::stream::Stream;

/// Uniform sample in `[min, max)`. One draw.
pub fn sample_uniform(rng: &mut Stream, min: f64, max: f64) -> f64 {
    min + rng.next_f64() * (max - min)
}

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform
///
/// Always consumes two draws.
///
/// # Arguments
/// * `rng` - Random stream
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
pub fn sample_gaussian(rng: &mut Stream, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the logarithm finite
    let u1 = 1.0 - rng.next_f64();
    let u2 = rng.next_f64();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Log-normal sample: `exp(N(mu, sigma))`.
pub fn sample_log_normal(rng: &mut Stream, mu: f64, sigma: f64) -> f64 {
    sample_gaussian(rng, mu, sigma).exp()
}

/// Log-uniform sample within `[min, max)`; both bounds must be positive.
pub fn sample_log_uniform(rng: &mut Stream, min: f64, max: f64) -> f64 {
    let log_min = min.ln();
    let log_max = max.ln();
    (log_min + rng.next_f64() * (log_max - log_min)).exp()
}

/// Number of failures before the first success with success probability `p`.
///
/// One draw. `p >= 1` always yields 0; `p` must be positive.
///
/// # Example
/// ```
/// use entropy::{Stream, sample_geometric};
///
/// let mut rng = Stream::seeded(1_u64);
/// assert_eq!(sample_geometric(&mut rng, 1.0), 0);
/// ```
pub fn sample_geometric(rng: &mut Stream, p: f64) -> usize {
    let u = rng.next_f64();
    if p >= 1.0 {
        return 0;
    }
    let k = ((1.0 - u).ln() / (1.0 - p).ln()).floor();
    // float-to-int casts saturate
    k as usize
}

/// Pick an index with probability proportional to `weights`. One draw.
///
/// Falls back to the last index when rounding leaves the roll past the
/// cumulative total.
pub fn sample_categorical(rng: &mut Stream, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let roll = rng.next_f64() * total;
    let mut cumulative = 0.0;

    for (i, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return i;
        }
    }

    weights.len().saturating_sub(1)
}

/// Bernoulli trial. Always consumes one draw, even for `p` of 0 or 1.
pub fn sample_bernoulli(rng: &mut Stream, p: f64) -> bool {
    rng.next_f64() < p
}

/// Uniform angle in degrees, `[0, 360)`.
pub fn sample_angle_degrees(rng: &mut Stream) -> f64 {
    rng.next_f64() * 360.0
}

/// Unit vector uniformly distributed on the sphere. Two draws.
pub fn sample_unit_vector(rng: &mut Stream) -> Vector3<f64> {
    sample_direction(rng, PI / 2.0)
}

/// Unit vector uniform on the spherical band within `max_inclination`
/// radians of the x–z plane (y is up). Two draws.
///
/// Uniformity on the band comes from drawing `sin(elevation)` uniformly.
pub fn sample_direction(rng: &mut Stream, max_inclination: f64) -> Vector3<f64> {
    let azimuth = rng.next_f64() * TAU;
    let limit = max_inclination.clamp(0.0, PI / 2.0).sin();
    let height = sample_uniform(rng, -limit, limit);
    let planar = (1.0 - height * height).max(0.0).sqrt();
    Vector3::new(planar * azimuth.cos(), height, planar * azimuth.sin())
}

/// Isotropic Gaussian offset with per-axis standard deviation `sigma`.
pub fn sample_gaussian_vector(rng: &mut Stream, sigma: f64) -> Vector3<f64> {
    Vector3::new(
        sample_gaussian(rng, 0.0, sigma),
        sample_gaussian(rng, 0.0, sigma),
        sample_gaussian(rng, 0.0, sigma),
    )
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(rng: &mut Stream, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Choose `k` distinct indices from `0..n`, returned in ascending order.
///
/// When `k >= n` every index is returned without consuming randomness.
pub fn choose_ordered_subset(rng: &mut Stream, n: usize, k: usize) -> Vec<usize> {
    if k >= n {
        return (0..n).collect();
    }

    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.random_range(i..n);
        indices.swap(i, j);
    }

    let mut chosen = indices[..k].to_vec();
    chosen.sort_unstable();
    chosen
}
