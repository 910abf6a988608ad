//! Deterministic random streams for procedural generation.
//!
//! A [`Stream`] is a ChaCha-backed generator that can be *forked*: a child
//! stream is derived from the parent's current state and a label without
//! advancing the parent. Generators that fork with distinct labels draw from
//! unrelated sequences, so enabling, disabling or reconfiguring one of them
//! never shifts the values another one sees.
//!
//! ```
//! use entropy::{Seed, Stream};
//!
//! let root = Stream::seeded(Seed::from("Kepler-452"));
//! let mut belts = root.fork("belts");
//! let mut rings = root.fork("rings");
//!
//! let a = belts.next_f64();
//! let b = rings.next_f64();
//! assert!((0.0..1.0).contains(&a));
//! assert!((0.0..1.0).contains(&b));
//! ```

pub mod sampling;
pub mod seed;
pub mod stream;

#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod seed_test;

pub use seed::Seed;
pub use stream::Stream;

// Re-export sampling functions
pub use sampling::{
    choose_ordered_subset, sample_angle_degrees, sample_bernoulli, sample_categorical,
    sample_direction, sample_gaussian, sample_gaussian_vector, sample_geometric,
    sample_log_normal, sample_log_uniform, sample_uniform, sample_unit_vector, shuffle,
};
