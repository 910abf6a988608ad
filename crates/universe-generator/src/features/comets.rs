//! Long-period comets around the system root.

use entropy::{Stream, sample_angle_degrees, sample_geometric, sample_log_uniform, sample_uniform};
use scene::{
    BodyId, BodyKind, BodyMetadata, Color, CometTail, NewBody, Orbit, UniverseBuilder,
    kepler_speed,
};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::features::SystemView;
use crate::properties::radius_for_mass;

/// Pale blue of an ion tail
const TAIL_COLOR: Color = Color::new(170, 210, 255);

/// Add a geometric number of comets, capped by `maxPerSystem`.
///
/// Semi-major axes scale with the root star's outermost planet, or with the
/// planet base distance when the root has no planets.
pub fn place_comets(
    builder: &mut UniverseBuilder,
    system: &SystemView,
    config: &GenerationConfig,
    rng: &mut Stream,
) -> Vec<BodyId> {
    let comets = &config.comets;
    if !comets.enable_comets {
        return Vec::new();
    }

    let count = sample_geometric(rng, comets.geometric_p).min(comets.max_per_system);
    let reference = system
        .outermost_planet_distance(builder)
        .unwrap_or(config.orbits.planet_base_distance);

    builder.reserve_bodies(count);
    let mut created = Vec::with_capacity(count);

    for n in 0..count {
        let semi_major = comets.semi_major_factor.sample(rng) * reference;
        let eccentricity = comets.eccentricity.sample(rng);
        let inclination = sample_uniform(rng, 0.0, comets.max_inclination_deg);
        let phase = sample_angle_degrees(rng);
        let mass = sample_log_uniform(rng, comets.mass.min, comets.mass.max);
        let length = comets.tail_length.sample(rng);
        let width = length * comets.tail_width_fraction.sample(rng);
        let opacity = comets.tail_opacity.sample(rng);

        let orbit = Orbit::circular(
            semi_major,
            kepler_speed(config.orbits.kepler_constant, semi_major),
            phase,
        )
        .with_eccentricity(eccentricity)
        .with_inclination(inclination);

        let tail = CometTail {
            length,
            width,
            opacity,
            color: TAIL_COLOR,
            perihelion: orbit.periapsis(),
            aphelion: orbit.apoapsis(),
        };

        created.push(builder.push_body(NewBody {
            name: format!("C/{}-{}", system.catalog, n + 1),
            kind: BodyKind::Comet,
            mass,
            radius: radius_for_mass(mass, &config.mass),
            color: Color::WHITE,
            parent: Some(system.root),
            orbit,
            metadata: Some(BodyMetadata::CometTail(tail)),
        }));
    }

    debug!(system = system.index, comets = created.len(), "comets placed");
    created
}
