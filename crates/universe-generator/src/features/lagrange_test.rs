use entropy::Stream;
use scene::{BodyKind, BodyMetadata, LagrangePoint};

use crate::config::GenerationConfig;
use crate::features::belts_test::star_with_planets;
use crate::features::lagrange::*;

fn lagrange_config(probability: f64) -> GenerationConfig {
    let mut config = GenerationConfig::minimal();
    config.lagrange.enable_lagrange = true;
    config.lagrange.probability = probability;
    config
}

#[test]
fn trojans_share_the_host_orbit() {
    let config = lagrange_config(1.0);
    let (mut builder, view) = star_with_planets(&[4.0, 8.0]);
    let created = place_trojans(&mut builder, &view, &config, &mut Stream::seeded(6_u64));
    assert!(!created.is_empty());

    for id in created {
        let trojan = builder.body(id).unwrap().clone();
        assert_eq!(trojan.kind, BodyKind::Asteroid);

        let Some(BodyMetadata::Lagrange(anchor)) = trojan.metadata else {
            panic!("trojan without anchor");
        };
        let host = builder.body(anchor.host).unwrap();
        assert_eq!(trojan.parent, host.parent);
        assert_eq!(trojan.orbit.angular_speed, host.orbit.angular_speed);

        let spread = config.lagrange.libration_fraction * host.orbit.distance;
        assert!((trojan.orbit.distance - host.orbit.distance).abs() <= spread + 1e-12);

        let lead = (trojan.orbit.phase - host.orbit.phase).rem_euclid(360.0);
        let expected = match anchor.point {
            LagrangePoint::L4 => 60.0,
            LagrangePoint::L5 => 300.0,
        };
        assert!((lead - expected).abs() <= config.lagrange.libration_deg + 1e-9);
        assert!(trojan.name.starts_with(&host.name));
    }
}

#[test]
fn per_point_count_is_capped() {
    let mut config = lagrange_config(1.0);
    config.lagrange.max_per_point = 2;

    for seed in 0..10_u64 {
        let (mut builder, view) = star_with_planets(&[4.0]);
        let created = place_trojans(&mut builder, &view, &config, &mut Stream::seeded(seed));
        assert!((1..=4).contains(&created.len()));
    }
}

#[test]
fn zero_probability_places_nothing() {
    let config = lagrange_config(0.0);
    let (mut builder, view) = star_with_planets(&[4.0, 8.0, 16.0]);
    let mut rng = Stream::seeded(2_u64);
    assert!(place_trojans(&mut builder, &view, &config, &mut rng).is_empty());
    // One Bernoulli draw per planet regardless
    assert!(rng.words_consumed() > 0);
}
