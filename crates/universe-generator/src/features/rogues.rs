//! Rogue planets and black holes drifting between systems.

use entropy::{Stream, sample_bernoulli, sample_direction, sample_geometric, sample_unit_vector};
use nalgebra::Point3;
use scene::{
    BodyId, BodyKind, BodyMetadata, Color, NewBody, Orbit, RogueTrajectory, UniverseBuilder,
};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::naming::catalog_name;
use crate::properties::{palette_color, radius_for_mass, sample_mass};

/// Sample rogue bodies independent of any system.
///
/// Rogues start at a uniform direction and a distance within the radial
/// band, drift within ±`maxInclinationDeg` of the galactic plane, and either
/// travel in a straight line or follow a closed circle.
pub fn place_rogues(
    builder: &mut UniverseBuilder,
    config: &GenerationConfig,
    rng: &mut Stream,
) -> Vec<BodyId> {
    let rogues = &config.rogues;
    if !rogues.enable_rogues {
        return Vec::new();
    }

    let count = rogues.count.clamp(sample_geometric(rng, rogues.geometric_p));
    let curved_fraction = rogues.trajectory_mode.curved_fraction();
    builder.reserve_bodies(count);
    let mut created = Vec::with_capacity(count);

    for _ in 0..count {
        let catalog = catalog_name(rng);
        let origin = Point3::from(sample_unit_vector(rng) * rogues.radial_band.sample(rng));
        let direction = sample_direction(rng, rogues.max_inclination_deg.to_radians());
        let speed = rogues.speed.sample(rng);
        let curved = sample_bernoulli(rng, curved_fraction);
        let curvature = rogues.curvature.sample(rng);
        let black_hole = sample_bernoulli(rng, rogues.black_hole_fraction);

        let kind = if black_hole {
            BodyKind::BlackHole
        } else {
            BodyKind::RoguePlanet
        };
        let mass = sample_mass(rng, kind, &config.mass);
        let color = if black_hole {
            Color::BLACK
        } else {
            palette_color(rng, mass, &config.colors)
        };

        let trajectory = if curved {
            RogueTrajectory::curved(
                origin,
                direction,
                speed,
                curvature,
                config.orbits.kepler_constant,
            )
        } else {
            RogueTrajectory::linear(origin, direction, speed)
        };

        let id = builder.push_body(NewBody {
            name: if black_hole {
                format!("BH {}", catalog)
            } else {
                format!("Rogue {}", catalog)
            },
            kind,
            mass,
            radius: radius_for_mass(mass, &config.mass),
            color,
            parent: None,
            orbit: Orbit::fixed(),
            metadata: Some(BodyMetadata::RogueTrajectory(trajectory)),
        });
        builder.mark_rogue(id);
        created.push(id);
    }

    debug!(rogues = created.len(), "rogues placed");
    created
}
