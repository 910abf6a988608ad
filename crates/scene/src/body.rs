use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::ids::BodyId;
use crate::metadata::BodyMetadata;
use crate::orbit::Orbit;

/// Kind of astronomical body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    Star,
    BlackHole,
    Planet,
    Moon,
    Asteroid,
    Comet,
    RoguePlanet,
}

impl BodyKind {
    /// Stars and black holes can anchor a system.
    pub fn is_stellar(self) -> bool {
        matches!(self, Self::Star | Self::BlackHole)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::BlackHole => "black hole",
            Self::Planet => "planet",
            Self::Moon => "moon",
            Self::Asteroid => "asteroid",
            Self::Comet => "comet",
            Self::RoguePlanet => "rogue planet",
        }
    }
}

/// A single generated body.
///
/// `parent` is the body this one orbits; it is `None` for system roots and
/// rogues. `children` lists every body whose `parent` is this one, in
/// generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,
    pub orbit: Orbit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BodyMetadata>,
}

impl Body {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
