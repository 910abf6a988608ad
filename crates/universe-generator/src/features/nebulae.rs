//! Nebula placement.
//!
//! Nebulae are scattered around the galactic origin by rejection sampling
//! against the placed clusters and earlier nebulae. When every attempt is
//! rejected the last candidate is pushed radially beyond all of them.

use entropy::{Stream, sample_categorical, sample_geometric, sample_uniform, sample_unit_vector};
use nalgebra::{Point3, Vector3};
use rand::RngCore;
use scene::{Nebula, NebulaId, NebulaKind, UniverseBuilder};
use tracing::{debug, trace};

use crate::config::{GenerationConfig, NebulaConfig};
use crate::naming::catalog_name;

/// A region nebulae must keep clear of: a lone system around the origin or a
/// placed group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub center: Point3<f64>,
    pub extent: f64,
}

/// Where a nebula ended up and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Point3<f64>,
    pub attempts: u32,
    pub fallback: bool,
}

/// Place a geometric number of nebulae clear of `clusters`.
pub fn place_nebulae(
    builder: &mut UniverseBuilder,
    clusters: &[Cluster],
    config: &GenerationConfig,
    rng: &mut Stream,
) -> Vec<NebulaId> {
    let nebulae = &config.nebulae;
    if !nebulae.enable_nebulae {
        return Vec::new();
    }

    let count = nebulae.count.clamp(sample_geometric(rng, nebulae.geometric_p));
    let mut placed: Vec<(Point3<f64>, f64)> = Vec::with_capacity(count);
    let mut created = Vec::with_capacity(count);

    for _ in 0..count {
        let kind = NebulaKind::ALL[sample_categorical(rng, &nebulae.kind_weights)];
        let radius = nebulae.radius.sample(rng);
        let density = nebulae.density.sample(rng);
        let v = nebulae.color_variation;
        let color = kind.base_color().offset(
            sample_uniform(rng, -v, v),
            sample_uniform(rng, -v, v),
            sample_uniform(rng, -v, v),
        );
        let noise_seed = rng.next_u64();
        let name = format!("{} Nebula", catalog_name(rng));

        let placement = find_placement(rng, radius, clusters, &placed, nebulae);
        if placement.fallback {
            debug!(attempts = placement.attempts, "nebula placed by radial fallback");
        }
        placed.push((placement.center, radius));

        created.push(builder.push_nebula(Nebula {
            id: NebulaId(0),
            name,
            kind,
            center: placement.center,
            radius,
            density,
            color,
            noise_seed,
        }));
    }

    debug!(nebulae = created.len(), "nebulae placed");
    created
}

/// Rejection-sample a center for a nebula of `radius`.
pub fn find_placement(
    rng: &mut Stream,
    radius: f64,
    clusters: &[Cluster],
    placed: &[(Point3<f64>, f64)],
    config: &NebulaConfig,
) -> Placement {
    let clearance = config.clearance;
    let is_clear = |candidate: &Point3<f64>| {
        clusters
            .iter()
            .all(|c| (candidate - c.center).norm() >= c.extent + radius + clearance)
            && placed
                .iter()
                .all(|(center, r)| (candidate - center).norm() >= r + radius + clearance)
    };

    let mut candidate = Point3::origin();
    for attempt in 1..=config.max_attempts {
        candidate = Point3::from(sample_unit_vector(rng) * config.placement_radius.sample(rng));
        if is_clear(&candidate) {
            return Placement {
                center: candidate,
                attempts: attempt,
                fallback: false,
            };
        }
        trace!(attempt, "nebula candidate rejected");
    }

    // Beyond the farthest obstacle, every obstacle is cleared by the
    // triangle inequality
    let reach = clusters
        .iter()
        .map(|c| c.center.coords.norm() + c.extent)
        .chain(placed.iter().map(|(center, r)| center.coords.norm() + r))
        .fold(0.0, f64::max);
    let direction = candidate
        .coords
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::x);

    Placement {
        center: Point3::from(direction * (reach + radius + clearance)),
        attempts: config.max_attempts,
        fallback: true,
    }
}
