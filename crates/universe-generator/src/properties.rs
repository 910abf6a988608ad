//! Physical and visual properties of drafted bodies.
//!
//! Mass, color and orbit each draw from their own stream, so reconfiguring
//! one never shifts another's samples.

use entropy::{Stream, sample_angle_degrees, sample_log_normal, sample_uniform};
use scene::{BodyKind, Color, Orbit, kepler_speed};

use crate::config::{ColorConfig, MassConfig, OrbitConfig};
use crate::topology::SystemDraft;

// =============================================================================
// Mass and radius
// =============================================================================

/// Kind-specific mass multiplier. Non-primary kinds borrow the closest
/// primary scale.
pub fn mass_multiplier(kind: BodyKind, config: &MassConfig) -> f64 {
    match kind {
        BodyKind::Star => config.star_multiplier,
        BodyKind::BlackHole => config.black_hole_multiplier,
        BodyKind::Planet | BodyKind::RoguePlanet => config.planet_multiplier,
        BodyKind::Moon | BodyKind::Asteroid | BodyKind::Comet => config.moon_multiplier,
    }
}

/// `exp(N(logMean, logStd)) * multiplier(kind)`. Two draws.
pub fn sample_mass(rng: &mut Stream, kind: BodyKind, config: &MassConfig) -> f64 {
    sample_log_normal(rng, config.log_mean, config.log_std) * mass_multiplier(kind, config)
}

pub fn radius_for_mass(mass: f64, config: &MassConfig) -> f64 {
    mass.powf(config.radius_exponent)
}

/// One mass sample per body, in draft order.
pub fn assign_masses(draft: &mut SystemDraft, config: &MassConfig, rng: &mut Stream) {
    for body in &mut draft.bodies {
        body.mass = sample_mass(rng, body.kind, config);
        body.radius = radius_for_mass(body.mass, config);
    }
}

// =============================================================================
// Color
// =============================================================================

/// Blackbody color of the first band whose threshold `mass` meets.
pub fn star_color(mass: f64, config: &ColorConfig) -> Color {
    config
        .spectral_bands
        .iter()
        .find(|band| mass >= band.min_mass)
        .or(config.spectral_bands.last())
        .map(|band| Color::from_temperature(band.temperature))
        .unwrap_or(Color::WHITE)
}

/// Spectral class letter for `mass`, if any band is configured.
pub fn spectral_class(mass: f64, config: &ColorConfig) -> Option<char> {
    config
        .spectral_bands
        .iter()
        .find(|band| mass >= band.min_mass)
        .or(config.spectral_bands.last())
        .map(|band| band.class)
}

/// Palette color interpolated by mass, without variation.
pub fn palette_base(mass: f64, config: &ColorConfig) -> Color {
    let stops = &config.palette;
    let Some(first) = stops.first() else {
        return Color::WHITE;
    };
    if mass <= first.mass {
        return first.color;
    }

    for pair in stops.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if mass <= high.mass {
            let t = (mass - low.mass) / (high.mass - low.mass);
            return low.color.lerp(high.color, t);
        }
    }

    stops.last().map_or(first.color, |stop| stop.color)
}

/// Palette color plus per-channel uniform variation. Three draws.
pub fn palette_color(rng: &mut Stream, mass: f64, config: &ColorConfig) -> Color {
    let v = config.variation;
    let dr = sample_uniform(rng, -v, v);
    let dg = sample_uniform(rng, -v, v);
    let db = sample_uniform(rng, -v, v);
    palette_base(mass, config).offset(dr, dg, db)
}

/// Stars take their band color, black holes are black, everything else
/// samples the palette.
pub fn assign_colors(draft: &mut SystemDraft, config: &ColorConfig, rng: &mut Stream) {
    for body in &mut draft.bodies {
        body.color = match body.kind {
            BodyKind::Star => star_color(body.mass, config),
            BodyKind::BlackHole => Color::BLACK,
            _ => palette_color(rng, body.mass, config),
        };
    }
}

// =============================================================================
// Orbits
// =============================================================================

/// Spacing base and growth for a body at `depth` (1 = planet).
fn spacing(depth: u8, config: &OrbitConfig) -> (f64, f64) {
    if depth <= 1 {
        (config.planet_base_distance, config.planet_growth)
    } else {
        let scale = config.nested_moon_scale.powi(depth as i32 - 2);
        (config.moon_base_distance * scale, config.moon_growth)
    }
}

/// Distance of the `ordinal`-th sibling: `base * growth^n` plus jitter below
/// the gap to the next slot, so sibling order matches distance order. One draw.
pub fn sibling_distance(
    rng: &mut Stream,
    depth: u8,
    ordinal: usize,
    config: &OrbitConfig,
) -> f64 {
    let (base, growth) = spacing(depth, config);
    let slot = base * growth.powi(ordinal as i32);
    let max_jitter = config.distance_jitter_fraction * base * (growth - 1.0);
    slot + sample_uniform(rng, 0.0, max_jitter)
}

/// Orbits for every drafted body.
///
/// Top-level stars of a multi-star system are co-orbital at the companion
/// distance with evenly spaced phases and consume no randomness. Satellites
/// draw distance jitter, phase and (when enabled) inclination.
pub fn assign_orbits(draft: &mut SystemDraft, config: &OrbitConfig, rng: &mut Stream) {
    let top_level = draft.top_level();
    let stars = top_level.len();

    for (i, &star) in top_level.iter().enumerate() {
        draft.bodies[star].orbit = if stars > 1 {
            Orbit::circular(
                config.companion_distance,
                kepler_speed(config.kepler_constant, config.companion_distance),
                360.0 / stars as f64 * i as f64,
            )
        } else {
            Orbit::fixed()
        };
    }

    for body in draft.bodies.iter_mut().filter(|b| b.parent.is_some()) {
        let distance = sibling_distance(rng, body.depth, body.ordinal, config);
        let phase = sample_angle_degrees(rng);
        let mut orbit = Orbit::circular(
            distance,
            kepler_speed(config.kepler_constant, distance),
            phase,
        );
        if config.max_inclination_deg > 0.0 {
            orbit = orbit.with_inclination(sample_uniform(rng, 0.0, config.max_inclination_deg));
        }
        body.orbit = orbit;
    }
}
