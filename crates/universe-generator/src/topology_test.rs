use entropy::Stream;
use scene::BodyKind;

use crate::config::TopologyConfig;
use crate::topology::*;

fn expand(config: &TopologyConfig, seed: u64) -> SystemDraft {
    let root = Stream::seeded(seed);
    expand_system(
        config,
        &mut root.fork("topology"),
        &mut root.fork("topology/black-holes"),
    )
}

#[test]
fn star_count_follows_weights() {
    let config = TopologyConfig {
        star_count_weights: vec![0.0, 0.0, 1.0],
        ..TopologyConfig::default()
    };
    for seed in 0..20 {
        let draft = expand(&config, seed);
        assert_eq!(draft.top_level().len(), 3);
        assert_eq!(draft.count(BodyKind::Star), 3);
    }
}

#[test]
fn depth_is_bounded() {
    let config = TopologyConfig {
        max_depth: 1,
        planet_geometric_p: 0.1,
        ..TopologyConfig::default()
    };
    for seed in 0..20 {
        let draft = expand(&config, seed);
        assert_eq!(draft.count(BodyKind::Moon), 0);
        assert!(draft.bodies.iter().all(|b| b.depth <= 1));
    }

    let deep = TopologyConfig {
        max_depth: 4,
        moon_geometric_p: 0.2,
        ..TopologyConfig::default()
    };
    for seed in 0..20 {
        assert!(expand(&deep, seed).bodies.iter().all(|b| b.depth <= 4));
    }
}

#[test]
fn counts_are_capped() {
    let config = TopologyConfig {
        planet_geometric_p: 0.01,
        moon_geometric_p: 0.01,
        max_planets_per_star: 3,
        max_moons_per_body: 2,
        ..TopologyConfig::default()
    };
    for seed in 0..20 {
        let draft = expand(&config, seed);
        for body in &draft.bodies {
            let limit = if body.depth == 0 { 3 } else { 2 };
            assert!(body.children.len() <= limit);
        }
    }
}

#[test]
fn links_are_consistent() {
    let config = TopologyConfig {
        max_depth: 3,
        ..TopologyConfig::default()
    };
    let draft = expand(&config, 77);

    for (i, body) in draft.bodies.iter().enumerate() {
        for (ordinal, &child) in body.children.iter().enumerate() {
            assert_eq!(draft.bodies[child].parent, Some(i));
            assert_eq!(draft.bodies[child].depth, body.depth + 1);
            assert_eq!(draft.bodies[child].ordinal, ordinal);
        }
        match body.depth {
            0 => assert!(body.kind.is_stellar()),
            1 => assert_eq!(body.kind, BodyKind::Planet),
            _ => assert_eq!(body.kind, BodyKind::Moon),
        }
    }
}

#[test]
fn black_holes_do_not_shift_counts() {
    let base = TopologyConfig::default();
    let collapsed = TopologyConfig {
        black_hole_probability: 1.0,
        ..TopologyConfig::default()
    };

    for seed in 0..20 {
        let a = expand(&base, seed);
        let b = expand(&collapsed, seed);
        assert_eq!(a.len(), b.len());
        assert_eq!(b.count(BodyKind::Star), 0);
        assert_eq!(a.count(BodyKind::Star), b.count(BodyKind::BlackHole));
        for (x, y) in a.bodies.iter().zip(&b.bodies) {
            assert_eq!(x.parent, y.parent);
            assert_eq!(x.depth, y.depth);
        }
    }
}

#[test]
fn expansion_is_deterministic() {
    let config = TopologyConfig::default();
    assert_eq!(expand(&config, 5), expand(&config, 5));
}
