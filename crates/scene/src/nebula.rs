use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::ids::NebulaId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NebulaKind {
    Emission,
    Reflection,
    Dark,
    Remnant,
}

impl NebulaKind {
    pub const ALL: [Self; 4] = [Self::Emission, Self::Reflection, Self::Dark, Self::Remnant];

    /// Characteristic tint before per-nebula variation
    pub fn base_color(self) -> Color {
        match self {
            Self::Emission => Color::new(220, 70, 110),
            Self::Reflection => Color::new(90, 140, 230),
            Self::Dark => Color::new(30, 24, 28),
            Self::Remnant => Color::new(120, 210, 180),
        }
    }
}

/// Volumetric cloud region placed away from clusters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nebula {
    pub id: NebulaId,
    pub name: String,
    pub kind: NebulaKind,
    pub center: Point3<f64>,
    pub radius: f64,
    pub density: f64,
    pub color: Color,
    /// Seed for render-side noise fields
    pub noise_seed: u64,
}
