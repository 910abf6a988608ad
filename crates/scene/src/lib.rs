//! Generated universe snapshot types
//!
//! This crate defines the engine's output: a flat, ID-indexed table of bodies
//! plus belts, spatial groups and nebulae. Downstream renderers, editors and
//! storage layers read this snapshot; nothing here mutates it after it is
//! built.

pub mod belt;
pub mod body;
pub mod builder;
pub mod color;
pub mod group;
pub mod ids;
pub mod metadata;
pub mod nebula;
pub mod orbit;
pub mod universe;
pub mod validation;

// Re-export main types at crate root
pub use belt::{Belt, BeltKind, BeltPopulation};
pub use body::{Body, BodyKind};
pub use builder::{NewBody, UniverseBuilder};
pub use color::Color;
pub use group::{Group, GroupChild};
pub use ids::{BeltId, BodyId, GroupId, NebulaId};
pub use metadata::{
    BodyMetadata, CometTail, LagrangeAnchor, LagrangePoint, RingSystem, RogueTrajectory,
    TrajectoryKind,
};
pub use nebula::{Nebula, NebulaKind};
pub use orbit::{Orbit, kepler_speed};
pub use universe::{GeneratedUniverse, UniverseStats};
pub use validation::{ValidationReport, Violation, validate};

#[cfg(test)]
mod universe_test;
