//! Asteroid and Kuiper belts.
//!
//! Asteroid belts sit strictly inside the gap between two adjacent planets
//! of the same star. A Kuiper belt lies beyond the root star's outermost
//! planet. Small belts commit every member as an asteroid body; large ones
//! only record a particle count for render-side instancing.

use entropy::{
    Stream, choose_ordered_subset, sample_angle_degrees, sample_gaussian, sample_geometric,
    sample_log_uniform, sample_uniform,
};
use scene::{
    Belt, BeltId, BeltKind, BeltPopulation, BodyId, BodyKind, NewBody, Orbit, UniverseBuilder,
    kepler_speed,
};
use tracing::debug;

use crate::config::{BeltConfig, GenerationConfig};
use crate::features::SystemView;
use crate::naming::moon_numeral;
use crate::properties::{palette_color, radius_for_mass};

/// Radial band a belt will occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltBand {
    pub host: BodyId,
    pub kind: BeltKind,
    pub inner: f64,
    pub outer: f64,
}

/// Bands between every pair of adjacent planets, host by host, inner gap
/// first. A margin of `gap_margin` of the gap width is kept clear on each
/// side.
pub fn gap_candidates(
    builder: &UniverseBuilder,
    system: &SystemView,
    gap_margin: f64,
) -> Vec<BeltBand> {
    let mut bands = Vec::new();

    for (host, planets) in &system.planets {
        let mut distances: Vec<f64> = planets
            .iter()
            .filter_map(|&id| builder.body(id))
            .map(|body| body.orbit.distance)
            .collect();
        distances.sort_by(f64::total_cmp);

        for pair in distances.windows(2) {
            let width = pair[1] - pair[0];
            bands.push(BeltBand {
                host: *host,
                kind: BeltKind::Asteroid,
                inner: pair[0] + gap_margin * width,
                outer: pair[1] - gap_margin * width,
            });
        }
    }

    bands
}

/// Region beyond the root star's outermost planet, if it has any.
pub fn kuiper_band(
    builder: &UniverseBuilder,
    system: &SystemView,
    config: &BeltConfig,
) -> Option<BeltBand> {
    let outermost = system.outermost_planet_distance(builder)?;
    Some(BeltBand {
        host: system.root,
        kind: BeltKind::Kuiper,
        inner: outermost * config.kuiper_inner_factor,
        outer: outermost * config.kuiper_outer_factor,
    })
}

/// Place up to `maxBeltsPerSystem` belts around `system`.
///
/// Returns the identifiers of the belts created.
pub fn place_belts(
    builder: &mut UniverseBuilder,
    system: &SystemView,
    config: &GenerationConfig,
    rng: &mut Stream,
) -> Vec<BeltId> {
    let belts = &config.belts;
    let cap = belts.max_belts_per_system;
    if cap == 0 || !(belts.enable_asteroid_belts || belts.enable_kuiper_belts) {
        return Vec::new();
    }

    let mut bands = Vec::new();
    if belts.enable_asteroid_belts {
        let gaps = gap_candidates(builder, system, belts.gap_margin);
        if gaps.len() > cap {
            bands.extend(
                choose_ordered_subset(rng, gaps.len(), cap)
                    .into_iter()
                    .map(|i| gaps[i]),
            );
        } else {
            bands.extend(gaps);
        }
    }

    if belts.enable_kuiper_belts && bands.len() < cap {
        bands.extend(kuiper_band(builder, system, belts));
    }

    let created: Vec<BeltId> = bands
        .iter()
        .enumerate()
        .map(|(n, band)| materialize(builder, system, band, n, config, rng))
        .collect();

    debug!(
        system = system.index,
        belts = created.len(),
        "belts placed"
    );
    created
}

fn materialize(
    builder: &mut UniverseBuilder,
    system: &SystemView,
    band: &BeltBand,
    n: usize,
    config: &GenerationConfig,
    rng: &mut Stream,
) -> BeltId {
    let belts = &config.belts;
    let count = belts
        .member_count
        .clamp(sample_geometric(rng, belts.member_geometric_p));
    let thickness = belts.thickness_fraction.sample(rng) * (band.outer - band.inner);
    let name = match band.kind {
        BeltKind::Asteroid => format!("{} Belt {}", system.catalog, moon_numeral(n)),
        BeltKind::Kuiper => format!("{} Kuiper Belt", system.catalog),
    };

    let population = if count > belts.particle_threshold as usize {
        BeltPopulation::Particles {
            count: count as u32,
        }
    } else {
        builder.reserve_bodies(count);
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let radius = sample_uniform(rng, band.inner, band.outer);
            let angle = sample_angle_degrees(rng);
            let offset = sample_gaussian(rng, 0.0, thickness);
            let mass = sample_log_uniform(rng, belts.member_mass.min, belts.member_mass.max);
            let color = palette_color(rng, mass, &config.colors);

            ids.push(builder.push_body(NewBody {
                name: format!("{} {}", name, i + 1),
                kind: BodyKind::Asteroid,
                mass,
                radius: radius_for_mass(mass, &config.mass),
                color,
                parent: Some(band.host),
                orbit: Orbit::circular(
                    radius,
                    kepler_speed(config.orbits.kepler_constant, radius),
                    angle,
                )
                .with_offset(offset),
                metadata: None,
            }));
        }
        BeltPopulation::Members { ids }
    };

    builder.push_belt(Belt {
        id: BeltId(0),
        name,
        kind: band.kind,
        host: band.host,
        inner_radius: band.inner,
        outer_radius: band.outer,
        thickness,
        population,
    })
}
