use serde::{Deserialize, Serialize};

use crate::ids::{BeltId, BodyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BeltKind {
    /// Rocky belt in a gap between adjacent planets
    Asteroid,
    /// Icy belt beyond the outermost planet
    Kuiper,
}

/// How a belt's population is materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BeltPopulation {
    /// Every member is a committed asteroid body
    Members { ids: Vec<BodyId> },
    /// Too many members to commit; renderers instance `count` particles
    Particles { count: u32 },
}

impl BeltPopulation {
    pub fn len(&self) -> usize {
        match self {
            Self::Members { ids } => ids.len(),
            Self::Particles { count } => *count as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn members(&self) -> &[BodyId] {
        match self {
            Self::Members { ids } => ids,
            Self::Particles { .. } => &[],
        }
    }
}

/// Torus-shaped population orbiting `host`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Belt {
    pub id: BeltId,
    pub name: String,
    pub kind: BeltKind,
    pub host: BodyId,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub thickness: f64,
    pub population: BeltPopulation,
}

impl Belt {
    pub fn contains_radius(&self, radius: f64) -> bool {
        (self.inner_radius..=self.outer_radius).contains(&radius)
    }

    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}
