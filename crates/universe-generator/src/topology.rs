//! Stochastic grammar expansion.
//!
//! A system expands to one to three stars, each star to a geometric number of
//! planets, and each planet (and, below `maxDepth`, each moon) to a geometric
//! number of moons. The result is a bare skeleton on a flat draft arena:
//! links, kind, depth and sibling ordinal. Physical properties are filled in
//! later.

use entropy::{Stream, sample_bernoulli, sample_categorical, sample_geometric};
use scene::{BodyKind, Color, Orbit};

use crate::config::TopologyConfig;

/// A body of a system that has not been committed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBody {
    pub kind: BodyKind,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Stars are 0, planets 1, moons 2, sub-moons 3 and 4
    pub depth: u8,
    /// Position among siblings at generation time
    pub ordinal: usize,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub orbit: Orbit,
}

/// Draft arena for one system. Re-parenting is an index update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemDraft {
    pub bodies: Vec<DraftBody>,
    /// Index of the system center once the hierarchy is resolved
    pub root: usize,
}

impl SystemDraft {
    pub fn push(&mut self, kind: BodyKind, parent: Option<usize>, depth: u8, ordinal: usize) -> usize {
        let index = self.bodies.len();
        self.bodies.push(DraftBody {
            kind,
            parent,
            children: Vec::new(),
            depth,
            ordinal,
            mass: 0.0,
            radius: 0.0,
            color: Color::BLACK,
            orbit: Orbit::fixed(),
        });
        if let Some(p) = parent {
            self.bodies[p].children.push(index);
        }
        index
    }

    /// Bodies without a parent, in generation order.
    pub fn top_level(&self) -> Vec<usize> {
        (0..self.bodies.len())
            .filter(|&i| self.bodies[i].parent.is_none())
            .collect()
    }

    pub fn count(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Expand one system skeleton.
///
/// `rng` drives every count; `black_holes` only decides whether each star
/// collapses, so toggling black holes never shifts the counts.
pub fn expand_system(
    config: &TopologyConfig,
    rng: &mut Stream,
    black_holes: &mut Stream,
) -> SystemDraft {
    let mut draft = SystemDraft::default();
    let star_count = sample_categorical(rng, &config.star_count_weights) + 1;

    for ordinal in 0..star_count {
        let kind = if sample_bernoulli(black_holes, config.black_hole_probability) {
            BodyKind::BlackHole
        } else {
            BodyKind::Star
        };
        draft.push(kind, None, 0, ordinal);
    }

    for star in 0..star_count {
        expand_satellites(&mut draft, star, config, rng);
    }

    draft
}

fn expand_satellites(
    draft: &mut SystemDraft,
    parent: usize,
    config: &TopologyConfig,
    rng: &mut Stream,
) {
    let depth = draft.bodies[parent].depth + 1;
    if depth > config.max_depth {
        return;
    }

    let (kind, count) = if depth == 1 {
        (
            BodyKind::Planet,
            sample_geometric(rng, config.planet_geometric_p).min(config.max_planets_per_star),
        )
    } else {
        (
            BodyKind::Moon,
            sample_geometric(rng, config.moon_geometric_p).min(config.max_moons_per_body),
        )
    };

    for ordinal in 0..count {
        let child = draft.push(kind, Some(parent), depth, ordinal);
        expand_satellites(draft, child, config, rng);
    }
}
