//! Feature-specific payloads attached to bodies.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::ids::BodyId;
use crate::orbit::kepler_speed;

/// Optional payload a feature post-processor attaches to a body.
///
/// A body carries at most one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BodyMetadata {
    Rings(RingSystem),
    CometTail(CometTail),
    RogueTrajectory(RogueTrajectory),
    Lagrange(LagrangeAnchor),
}

impl BodyMetadata {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rings(_) => "rings",
            Self::CometTail(_) => "cometTail",
            Self::RogueTrajectory(_) => "rogueTrajectory",
            Self::Lagrange(_) => "lagrange",
        }
    }
}

/// Planetary ring descriptor. Radii are absolute scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSystem {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub opacity: f64,
    pub density: f64,
    pub albedo: f64,
    /// Degrees from the planet's orbital plane
    pub tilt: f64,
    pub band_count: u32,
}

/// Visual tail of a comet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CometTail {
    pub length: f64,
    pub width: f64,
    pub opacity: f64,
    pub color: Color,
    pub perihelion: f64,
    pub aphelion: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrajectoryKind {
    Linear,
    Curved,
}

/// Free-flight path of a rogue body.
///
/// A linear trajectory drifts from `origin` along `direction`. A curved one
/// is the circle of radius `1 / curvature` tangent to `direction` at
/// `origin`, turning in the plane spanned by `direction` and the galactic up
/// axis (or the x axis when `direction` is vertical).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RogueTrajectory {
    pub origin: Point3<f64>,
    /// Unit velocity direction
    pub direction: Vector3<f64>,
    /// Drift speed of a linear path
    pub speed: f64,
    /// Inverse turning radius; zero for a straight drift
    pub curvature: f64,
    pub mode: TrajectoryKind,
    /// Angular speed along a curved path; zero when linear
    pub angular_speed: f64,
}

impl RogueTrajectory {
    pub fn linear(origin: Point3<f64>, direction: Vector3<f64>, speed: f64) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            speed,
            curvature: 0.0,
            mode: TrajectoryKind::Linear,
            angular_speed: 0.0,
        }
    }

    /// Closed circular path; angular speed follows the bound-orbit law
    /// `k / sqrt(radius)`.
    pub fn curved(
        origin: Point3<f64>,
        direction: Vector3<f64>,
        speed: f64,
        curvature: f64,
        kepler_constant: f64,
    ) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            speed,
            curvature,
            mode: TrajectoryKind::Curved,
            angular_speed: kepler_speed(kepler_constant, curvature.recip()),
        }
    }

    pub fn turning_radius(&self) -> Option<f64> {
        (self.mode == TrajectoryKind::Curved && self.curvature > 0.0)
            .then(|| self.curvature.recip())
    }

    /// Center of the circular path, if curved.
    pub fn center(&self) -> Option<Point3<f64>> {
        let radius = self.turning_radius()?;
        Some(self.origin + self.inward() * radius)
    }

    /// Position after elapsed time `t`.
    pub fn position_at(&self, t: f64) -> Point3<f64> {
        match self.turning_radius() {
            None => self.origin + self.direction * (self.speed * t),
            Some(radius) => {
                let inward = self.inward();
                let theta = self.angular_speed * t;
                let center = self.origin + inward * radius;
                center + (-inward * theta.cos() + self.direction * theta.sin()) * radius
            }
        }
    }

    /// Unit vector from the origin toward the turning center.
    fn inward(&self) -> Vector3<f64> {
        let up = if self.direction.cross(&Vector3::y()).norm() > 1e-9 {
            Vector3::y()
        } else {
            Vector3::x()
        };
        let normal = self.direction.cross(&up).normalize();
        normal.cross(&self.direction).normalize()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LagrangePoint {
    L4,
    L5,
}

impl LagrangePoint {
    /// Phase offset from the host, in degrees
    pub fn phase_offset(self) -> f64 {
        match self {
            Self::L4 => 60.0,
            Self::L5 => -60.0,
        }
    }
}

/// Marks a Trojan body and the planet whose L4/L5 point it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LagrangeAnchor {
    pub point: LagrangePoint,
    pub host: BodyId,
}
