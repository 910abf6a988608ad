//! Switching one feature on or off must never move another feature's samples.

use std::collections::BTreeMap;

use scene::{BodyKind, BodyMetadata};
use universe_generator::{GeneratedUniverse, GenerationConfig, generate_systems};

const SEEDS: [u64; 4] = [3, 42, 2024, 90210];

fn generate(config: &GenerationConfig, seed: u64) -> GeneratedUniverse {
    generate_systems(5, config, seed).unwrap()
}

/// Stars, planets and moons of every system, keyed by name.
fn core_bodies(universe: &GeneratedUniverse) -> BTreeMap<String, (f64, f64, [u8; 3])> {
    universe
        .bodies
        .iter()
        .filter(|b| !universe.rogues.contains(&b.id))
        .filter(|b| {
            matches!(
                b.kind,
                BodyKind::Star | BodyKind::BlackHole | BodyKind::Planet | BodyKind::Moon
            )
        })
        .map(|b| {
            (
                b.name.clone(),
                (b.mass, b.orbit.distance, [b.color.r, b.color.g, b.color.b]),
            )
        })
        .collect()
}

fn rings(universe: &GeneratedUniverse) -> BTreeMap<String, BodyMetadata> {
    universe
        .bodies
        .iter()
        .filter_map(|b| match &b.metadata {
            Some(meta @ BodyMetadata::Rings(_)) => Some((b.name.clone(), meta.clone())),
            _ => None,
        })
        .collect()
}

fn trojans(universe: &GeneratedUniverse) -> BTreeMap<String, (f64, f64)> {
    universe
        .bodies
        .iter()
        .filter(|b| matches!(b.metadata, Some(BodyMetadata::Lagrange(_))))
        .map(|b| (b.name.clone(), (b.mass, b.orbit.phase)))
        .collect()
}

#[test]
fn belts_do_not_move_rings_or_core() {
    let mut without = GenerationConfig::default();
    without.lagrange.enable_lagrange = true;
    let mut with = without.clone();
    with.belts.enable_asteroid_belts = true;
    with.belts.enable_kuiper_belts = true;

    for seed in SEEDS {
        let a = generate(&without, seed);
        let b = generate(&with, seed);
        assert_eq!(core_bodies(&a), core_bodies(&b));
        assert_eq!(rings(&a), rings(&b));
        assert_eq!(trojans(&a), trojans(&b));
    }
}

#[test]
fn comets_do_not_move_trojans() {
    let mut without = GenerationConfig::default();
    without.lagrange.enable_lagrange = true;
    let mut with = without.clone();
    with.comets.enable_comets = true;
    with.comets.geometric_p = 0.1;

    for seed in SEEDS {
        let a = generate(&without, seed);
        let b = generate(&with, seed);
        assert_eq!(trojans(&a), trojans(&b));
        assert_eq!(rings(&a), rings(&b));
    }
}

#[test]
fn reparameterized_comets_leave_belts_alone() {
    let mut base = GenerationConfig::full();
    base.rogues.enable_rogues = false;
    base.nebulae.enable_nebulae = false;
    let mut tweaked = base.clone();
    tweaked.comets.geometric_p = 0.05;
    tweaked.comets.eccentricity.max = 0.6;

    for seed in SEEDS {
        let a = generate(&base, seed);
        let b = generate(&tweaked, seed);
        let bands = |u: &GeneratedUniverse| {
            u.belts
                .iter()
                .map(|belt| {
                    (
                        belt.name.clone(),
                        belt.inner_radius,
                        belt.outer_radius,
                        belt.population.len(),
                    )
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(bands(&a), bands(&b));
        assert_eq!(core_bodies(&a), core_bodies(&b));
    }
}

#[test]
fn black_holes_do_not_change_counts() {
    let base = GenerationConfig::minimal();
    let mut collapsed = base.clone();
    collapsed.topology.black_hole_probability = 0.5;

    for seed in SEEDS {
        let a = generate(&base, seed);
        let b = generate(&collapsed, seed);
        assert_eq!(a.bodies.len(), b.bodies.len());
        assert_eq!(a.stats.planets, b.stats.planets);
        assert_eq!(a.stats.moons, b.stats.moons);
        assert_eq!(a.stats.stars, b.stats.stars + b.stats.black_holes);
    }
}

#[test]
fn rogues_and_nebulae_leave_systems_alone() {
    let base = GenerationConfig::default();
    let mut extra = base.clone();
    extra.rogues.enable_rogues = true;
    extra.nebulae.enable_nebulae = true;

    for seed in SEEDS {
        let a = generate(&base, seed);
        let b = generate(&extra, seed);
        assert_eq!(core_bodies(&a), core_bodies(&b));
        assert_eq!(a.groups, b.groups);
    }
}
