//! Trojan companions at L4/L5.
//!
//! A Trojan shares its host planet's parent and angular speed and sits 60°
//! ahead (L4) or behind (L5), scattered by the configured libration.

use entropy::{Stream, sample_bernoulli, sample_categorical, sample_log_uniform, sample_uniform};
use rand::Rng;
use scene::{
    BodyId, BodyKind, BodyMetadata, LagrangeAnchor, LagrangePoint, NewBody, Orbit,
    UniverseBuilder,
};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::features::SystemView;
use crate::properties::radius_for_mass;

/// L4 only, L5 only, or both, equally likely
const POINT_WEIGHTS: [f64; 3] = [1.0, 1.0, 1.0];

/// Populate Lagrange points of the planets orbiting each star of `system`.
///
/// Every planet costs one Bernoulli draw whether or not it receives Trojans.
pub fn place_trojans(
    builder: &mut UniverseBuilder,
    system: &SystemView,
    config: &GenerationConfig,
    rng: &mut Stream,
) -> Vec<BodyId> {
    let lagrange = &config.lagrange;
    if !lagrange.enable_lagrange {
        return Vec::new();
    }

    let planets: Vec<BodyId> = system.all_planets().collect();
    let mut created = Vec::new();

    for host_id in planets {
        if !sample_bernoulli(rng, lagrange.probability) {
            continue;
        }
        let Some(host) = builder.body(host_id).cloned() else {
            continue;
        };

        let points: &[LagrangePoint] = match sample_categorical(rng, &POINT_WEIGHTS) {
            0 => &[LagrangePoint::L4],
            1 => &[LagrangePoint::L5],
            _ => &[LagrangePoint::L4, LagrangePoint::L5],
        };

        for &point in points {
            let count = rng.random_range(1..=lagrange.max_per_point);
            for k in 0..count {
                let spread = lagrange.libration_fraction;
                let distance = host.orbit.distance * (1.0 + sample_uniform(rng, -spread, spread));
                let phase = host.orbit.phase
                    + point.phase_offset()
                    + sample_uniform(rng, -lagrange.libration_deg, lagrange.libration_deg);
                let mass = host.mass
                    * sample_log_uniform(rng, lagrange.mass_ratio.min, lagrange.mass_ratio.max);

                let mut orbit =
                    Orbit::circular(distance, host.orbit.angular_speed, phase.rem_euclid(360.0));
                orbit.inclination = host.orbit.inclination;

                created.push(builder.push_body(NewBody {
                    name: format!("{} {:?}-{}", host.name, point, k + 1),
                    kind: BodyKind::Asteroid,
                    mass,
                    radius: radius_for_mass(mass, &config.mass),
                    color: host.color,
                    parent: host.parent,
                    orbit,
                    metadata: Some(BodyMetadata::Lagrange(LagrangeAnchor {
                        point,
                        host: host_id,
                    })),
                }));
            }
        }
    }

    debug!(system = system.index, trojans = created.len(), "trojans placed");
    created
}
