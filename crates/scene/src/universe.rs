//! The immutable generation result.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::belt::{Belt, BeltPopulation};
use crate::body::{Body, BodyKind};
use crate::group::Group;
use crate::ids::{BeltId, BodyId, GroupId, NebulaId};
use crate::metadata::BodyMetadata;
use crate::nebula::Nebula;

/// Aggregate counts over a [`GeneratedUniverse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseStats {
    pub systems: usize,
    pub bodies: usize,
    pub stars: usize,
    pub black_holes: usize,
    pub planets: usize,
    pub moons: usize,
    pub asteroids: usize,
    pub comets: usize,
    pub rogue_planets: usize,
    pub trojans: usize,
    pub ringed_planets: usize,
    pub belts: usize,
    pub belt_particles: usize,
    pub groups: usize,
    pub nebulae: usize,
}

impl UniverseStats {
    /// Count everything in the given tables.
    pub fn tally(
        bodies: &[Body],
        roots: &[BodyId],
        belts: &[Belt],
        groups: &[Group],
        nebulae: &[Nebula],
    ) -> Self {
        let mut stats = Self {
            systems: roots.len(),
            bodies: bodies.len(),
            belts: belts.len(),
            groups: groups.len(),
            nebulae: nebulae.len(),
            ..Self::default()
        };

        for body in bodies {
            match body.kind {
                BodyKind::Star => stats.stars += 1,
                BodyKind::BlackHole => stats.black_holes += 1,
                BodyKind::Planet => stats.planets += 1,
                BodyKind::Moon => stats.moons += 1,
                BodyKind::Asteroid => stats.asteroids += 1,
                BodyKind::Comet => stats.comets += 1,
                BodyKind::RoguePlanet => stats.rogue_planets += 1,
            }
            match body.metadata {
                Some(BodyMetadata::Rings(_)) => stats.ringed_planets += 1,
                Some(BodyMetadata::Lagrange(_)) => stats.trojans += 1,
                _ => {}
            }
        }

        stats.belt_particles = belts
            .iter()
            .map(|belt| match belt.population {
                BeltPopulation::Particles { count } => count as usize,
                BeltPopulation::Members { .. } => 0,
            })
            .sum();

        stats
    }
}

/// Complete output of one generation call.
///
/// Every table is indexed by its identifier: `bodies[i].id == BodyId(i)` and
/// likewise for belts, groups and nebulae.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedUniverse {
    /// Resolved 64-bit seed
    pub seed: u64,
    pub bodies: Vec<Body>,
    /// System roots in generation order
    pub roots: Vec<BodyId>,
    pub rogues: Vec<BodyId>,
    pub belts: Vec<Belt>,
    pub groups: Vec<Group>,
    pub root_groups: Vec<GroupId>,
    pub nebulae: Vec<Nebula>,
    pub stats: UniverseStats,
}

impl GeneratedUniverse {
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn belt(&self, id: BeltId) -> Option<&Belt> {
        self.belts.get(id.index())
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.index())
    }

    pub fn nebula(&self, id: NebulaId) -> Option<&Nebula> {
        self.nebulae.get(id.index())
    }

    /// Bodies of a given kind, in identifier order.
    pub fn bodies_of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(move |body| body.kind == kind)
    }

    /// Root of the system containing `id`; a rogue is its own root.
    ///
    /// Returns `None` for unknown identifiers or a cyclic parent chain.
    pub fn system_root(&self, id: BodyId) -> Option<BodyId> {
        let mut current = self.body(id)?;
        for _ in 0..=self.bodies.len() {
            match current.parent {
                None => return Some(current.id),
                Some(parent) => current = self.body(parent)?,
            }
        }
        None
    }

    /// Every body below `id` in depth-first order.
    pub fn descendants(&self, id: BodyId) -> Vec<BodyId> {
        let mut found = Vec::new();
        let mut stack: Vec<BodyId> = match self.body(id) {
            Some(body) => body.children.iter().rev().copied().collect(),
            None => return found,
        };

        while let Some(next) = stack.pop() {
            if found.len() > self.bodies.len() {
                break;
            }
            found.push(next);
            if let Some(body) = self.body(next) {
                stack.extend(body.children.iter().rev().copied());
            }
        }
        found
    }

    /// Belts hosted by any body of the system rooted at `root`.
    pub fn belts_of_system(&self, root: BodyId) -> impl Iterator<Item = &Belt> + '_ {
        self.belts
            .iter()
            .filter(move |belt| self.system_root(belt.host) == Some(root))
    }

    /// Position of `id` relative to its parent after elapsed time `t`.
    ///
    /// Rogues report their trajectory position; roots sit at their system
    /// origin.
    pub fn position_at(&self, id: BodyId, t: f64) -> Option<Vector3<f64>> {
        let body = self.body(id)?;
        if let Some(BodyMetadata::RogueTrajectory(trajectory)) = &body.metadata {
            return Some(trajectory.position_at(t).coords);
        }
        Some(body.orbit.position_at(t))
    }

    /// Absolute position of `id` after elapsed time `t`, including every
    /// ancestor's motion and the system's group placement.
    pub fn world_position_at(&self, id: BodyId, t: f64) -> Option<Point3<f64>> {
        let mut offset = Vector3::zeros();
        let mut current = self.body(id)?;

        for _ in 0..=self.bodies.len() {
            offset += self.position_at(current.id, t)?;
            match current.parent {
                Some(parent) => current = self.body(parent)?,
                None => return Some(self.system_origin(current.id) + offset),
            }
        }
        None
    }

    /// Where the system rooted at `root` is placed in the universe.
    ///
    /// Systems outside any group sit at the origin.
    pub fn system_origin(&self, root: BodyId) -> Point3<f64> {
        self.groups
            .iter()
            .find_map(|group| {
                group
                    .systems()
                    .find(|(member, _)| *member == root)
                    .map(|(_, offset)| group.placement + offset)
            })
            .unwrap_or_else(Point3::origin)
    }
}
