//! Closed-form orbital motion.
//!
//! Orbits are evaluated analytically from elapsed time; nothing is integrated.
//! The reference plane is x–z with y up. Phase is the mean anomaly at `t = 0`
//! in degrees and `angular_speed` is the mean motion in radians per time unit.

use std::f64::consts::TAU;

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Orbital parameters of a body relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    /// Semi-major axis (scene units)
    pub distance: f64,

    /// Mean motion (radians per time unit)
    pub angular_speed: f64,

    /// Mean anomaly at `t = 0` (degrees)
    pub phase: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,

    /// Tilt of the orbital plane about the x axis (degrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclination: Option<f64>,

    /// Constant displacement along y, used for belt members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

impl Orbit {
    /// A circular orbit in the reference plane.
    pub fn circular(distance: f64, angular_speed: f64, phase: f64) -> Self {
        Self {
            distance,
            angular_speed,
            phase,
            eccentricity: None,
            inclination: None,
            offset: None,
        }
    }

    /// The zero orbit held by roots and rogues.
    pub fn fixed() -> Self {
        Self::circular(0.0, 0.0, 0.0)
    }

    pub fn is_fixed(&self) -> bool {
        self.distance == 0.0 && self.angular_speed == 0.0
    }

    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = Some(eccentricity);
        self
    }

    pub fn with_inclination(mut self, degrees: f64) -> Self {
        self.inclination = Some(degrees);
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Time for one revolution, or `None` for a stationary body.
    pub fn period(&self) -> Option<f64> {
        (self.angular_speed > 0.0).then(|| TAU / self.angular_speed)
    }

    /// Closest approach to the parent.
    pub fn periapsis(&self) -> f64 {
        self.distance * (1.0 - self.eccentricity.unwrap_or(0.0))
    }

    /// Farthest distance from the parent.
    pub fn apoapsis(&self) -> f64 {
        self.distance * (1.0 + self.eccentricity.unwrap_or(0.0))
    }

    /// Position relative to the parent after elapsed time `t`.
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        let e = self.eccentricity.unwrap_or(0.0);
        let mean_anomaly = self.phase.to_radians() + self.angular_speed * t;

        let (radius, true_anomaly) = if e == 0.0 {
            (self.distance, mean_anomaly)
        } else {
            let ecc_anomaly = solve_kepler(mean_anomaly, e);
            let cos_nu = (ecc_anomaly.cos() - e) / (1.0 - e * ecc_anomaly.cos());
            let sin_nu = ((1.0 - e * e).sqrt() * ecc_anomaly.sin()) / (1.0 - e * ecc_anomaly.cos());
            (
                self.distance * (1.0 - e * ecc_anomaly.cos()),
                sin_nu.atan2(cos_nu),
            )
        };

        let planar = Vector3::new(
            radius * true_anomaly.cos(),
            self.offset.unwrap_or(0.0),
            radius * true_anomaly.sin(),
        );

        match self.inclination {
            Some(degrees) if degrees != 0.0 => {
                Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians()) * planar
            }
            _ => planar,
        }
    }
}

/// Mean motion for a circular orbit at `distance` around a unit central
/// mass scaled by `k`. Zero distance gives zero speed.
pub fn kepler_speed(k: f64, distance: f64) -> f64 {
    if distance > 0.0 {
        k / distance.sqrt()
    } else {
        0.0
    }
}

/// Newton-Raphson solution of `M = E - e sin(E)` for the eccentric anomaly.
fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mean_anomaly = mean_anomaly.rem_euclid(TAU);
    let mut ecc_anomaly = if eccentricity > 0.8 {
        std::f64::consts::PI
    } else {
        mean_anomaly
    };

    for _ in 0..50 {
        let f = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        let f_prime = 1.0 - eccentricity * ecc_anomaly.cos();
        let delta = f / f_prime;
        ecc_anomaly -= delta;

        if delta.abs() < 1e-12 {
            break;
        }
    }

    ecc_anomaly
}
