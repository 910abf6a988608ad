//! Deterministic, seed-driven procedural universe generation.
//!
//! A universe is grown in phases:
//!
//! 1. **Topology**: a stochastic grammar expands each system into stars,
//!    planets and moons
//! 2. **Properties**: mass, radius, color and orbit for every drafted body
//! 3. **Hierarchy**: the heaviest star becomes the system center
//! 4. **Features**: belts, rings, comets and Trojans per system; rogue bodies
//!    and nebulae per universe
//! 5. **Grouping**: multi-system runs arrange systems into nested clusters
//!
//! Each phase draws from its own forked [`Stream`], so switching a feature on
//! or off never changes what the other phases produce.
//!
//! # Example
//!
//! ```
//! use universe_generator::{GenerationConfig, generate_systems, validate};
//!
//! let config = GenerationConfig::full();
//! let universe = generate_systems(5, &config, "Kepler-452").unwrap();
//!
//! assert_eq!(universe.roots.len(), 5);
//! assert!(validate(&universe).is_valid());
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod generation;
pub mod grouping;
pub mod hierarchy;
pub mod naming;
pub mod properties;
pub mod topology;

#[cfg(test)]
mod grouping_test;
#[cfg(test)]
mod properties_test;
#[cfg(test)]
mod topology_test;

pub use config::{
    BeltConfig, ColorConfig, CometConfig, CountRange, GenerationConfig, GroupingConfig, Interval,
    LagrangeConfig, MassConfig, NebulaConfig, OrbitConfig, PaletteStop, RingConfig, RogueConfig,
    SpectralBand, TopologyConfig, TrajectoryMode,
};
pub use error::ConfigError;
pub use generation::{MAX_SYSTEMS, generate_system, generate_systems};

// Re-export the types callers need to consume the output
pub use entropy::{Seed, Stream};
pub use scene::{GeneratedUniverse, ValidationReport, Violation, validate};
