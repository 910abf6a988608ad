//! Feature post-processors.
//!
//! Each processor runs after the core hierarchy of a system is committed,
//! draws only from its own forked stream, and only appends bodies, belts or
//! nebulae (or fills an empty metadata slot). Rogues and nebulae run once per
//! universe; the others run once per system, in system order.

pub mod belts;
pub mod comets;
pub mod lagrange;
pub mod nebulae;
pub mod rings;
pub mod rogues;

#[cfg(test)]
mod comets_test;
#[cfg(test)]
mod lagrange_test;
#[cfg(test)]
mod rings_test;
#[cfg(test)]
mod rogues_test;

use scene::{BodyId, UniverseBuilder};

pub use belts::place_belts;
pub use comets::place_comets;
pub use lagrange::place_trojans;
pub use nebulae::{Cluster, place_nebulae};
pub use rings::place_rings;
pub use rogues::place_rogues;

/// A committed system as the per-system processors see it.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemView {
    /// Position of the system in generation order
    pub index: usize,
    /// Catalog designation shared by every body of the system
    pub catalog: String,
    pub root: BodyId,
    /// Top-level stellar bodies, the root first when it is one
    pub stars: Vec<BodyId>,
    /// Planets of each star in sibling (and therefore distance) order
    pub planets: Vec<(BodyId, Vec<BodyId>)>,
    /// Every body committed from the draft
    pub bodies: Vec<BodyId>,
}

impl SystemView {
    /// Planets of every star, host by host.
    pub fn all_planets(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.planets.iter().flat_map(|(_, planets)| planets.iter().copied())
    }

    pub fn planets_of(&self, star: BodyId) -> &[BodyId] {
        self.planets
            .iter()
            .find(|(host, _)| *host == star)
            .map(|(_, planets)| planets.as_slice())
            .unwrap_or(&[])
    }

    /// Distance of the root star's outermost planet.
    pub fn outermost_planet_distance(&self, builder: &UniverseBuilder) -> Option<f64> {
        self.planets_of(self.root)
            .iter()
            .filter_map(|&id| builder.body(id))
            .map(|body| body.orbit.distance)
            .max_by(f64::total_cmp)
    }

    /// Farthest reach of the core hierarchy from the root, summing
    /// apoapsides along each ancestor chain.
    pub fn extent(&self, builder: &UniverseBuilder) -> f64 {
        self.bodies
            .iter()
            .map(|&id| {
                let mut reach = 0.0;
                let mut current = builder.body(id);
                while let Some(body) = current {
                    if body.id == self.root {
                        break;
                    }
                    reach += body.orbit.apoapsis();
                    current = body.parent.and_then(|p| builder.body(p));
                }
                reach
            })
            .fold(0.0, f64::max)
    }
}
