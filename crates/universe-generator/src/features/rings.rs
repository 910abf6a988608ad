//! Planetary rings.

use entropy::{Stream, sample_bernoulli};
use rand::Rng;
use scene::{BodyId, BodyMetadata, RingSystem, UniverseBuilder};
use tracing::debug;

use crate::config::{GenerationConfig, RingConfig};
use crate::features::SystemView;

/// Chance that a planet of `mass` at `distance` carries rings.
///
/// `base + massBias * m/(m + massReference) + distanceBias * d/(d + distanceReference)`,
/// clamped to `[0, 1]`.
pub fn ring_probability(mass: f64, distance: f64, config: &RingConfig) -> f64 {
    let mass_term = config.mass_bias * mass / (mass + config.mass_reference);
    let distance_term = config.distance_bias * distance / (distance + config.distance_reference);
    (config.base_probability + mass_term + distance_term).clamp(0.0, 1.0)
}

/// Give rings to eligible planets of `system`.
///
/// Every planet without metadata costs exactly one Bernoulli draw, whatever
/// its probability, so the stream stays aligned across configurations.
pub fn place_rings(
    builder: &mut UniverseBuilder,
    system: &SystemView,
    config: &GenerationConfig,
    rng: &mut Stream,
) -> Vec<BodyId> {
    let rings = &config.rings;
    if !rings.enable_rings {
        return Vec::new();
    }

    let mut ringed = Vec::new();
    for planet in system.all_planets() {
        let Some(body) = builder.body(planet) else {
            continue;
        };
        if body.metadata.is_some() {
            continue;
        }
        let (mass, distance, radius) = (body.mass, body.orbit.distance, body.radius);

        if !sample_bernoulli(rng, ring_probability(mass, distance, rings)) {
            continue;
        }

        let descriptor = RingSystem {
            inner_radius: rings.inner_factor.sample(rng) * radius,
            outer_radius: rings.outer_factor.sample(rng) * radius,
            opacity: rings.opacity.sample(rng),
            density: rings.density.sample(rng),
            albedo: rings.albedo.sample(rng),
            tilt: rings.tilt_deg.sample(rng),
            band_count: rng.random_range(rings.band_count.min..=rings.band_count.max),
        };
        if builder.attach_metadata(planet, BodyMetadata::Rings(descriptor)) {
            ringed.push(planet);
        }
    }

    debug!(system = system.index, rings = ringed.len(), "rings placed");
    ringed
}
