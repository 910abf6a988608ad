use approx::assert_relative_eq;
use entropy::Stream;
use scene::{BodyMetadata, LagrangeAnchor, LagrangePoint};

use crate::config::{GenerationConfig, RingConfig};
use crate::features::belts_test::star_with_planets;
use crate::features::rings::*;

#[test]
fn probability_blends_mass_and_distance() {
    let config = RingConfig::default();
    let p = ring_probability(config.mass_reference, config.distance_reference, &config);
    assert_relative_eq!(p, 0.1 + 0.25 + 0.1, epsilon = 1e-12);

    let eager = RingConfig {
        base_probability: 0.9,
        mass_bias: 1.0,
        ..RingConfig::default()
    };
    assert_relative_eq!(ring_probability(1.0, 100.0, &eager), 1.0);
}

#[test]
fn certain_rings_are_well_formed() {
    let mut config = GenerationConfig::minimal();
    config.rings.enable_rings = true;
    config.rings.base_probability = 1.0;

    let (mut builder, view) = star_with_planets(&[4.0, 8.0, 16.0]);
    let ringed = place_rings(&mut builder, &view, &config, &mut Stream::seeded(4_u64));
    assert_eq!(ringed.len(), 3);

    for id in ringed {
        let planet = builder.body(id).unwrap();
        let Some(BodyMetadata::Rings(rings)) = &planet.metadata else {
            panic!("expected rings on {}", planet.name);
        };
        assert!(rings.inner_radius < rings.outer_radius);
        assert!(rings.inner_radius >= 1.3 * planet.radius);
        assert!((1..=6).contains(&rings.band_count));
        assert!((0.0..=30.0).contains(&rings.tilt));
    }
}

#[test]
fn occupied_metadata_is_skipped() {
    let mut config = GenerationConfig::minimal();
    config.rings.enable_rings = true;
    config.rings.base_probability = 1.0;

    let (mut builder, view) = star_with_planets(&[4.0, 8.0]);
    let first = view.planets[0].1[0];
    builder.attach_metadata(
        first,
        BodyMetadata::Lagrange(LagrangeAnchor {
            point: LagrangePoint::L4,
            host: view.root,
        }),
    );

    let ringed = place_rings(&mut builder, &view, &config, &mut Stream::seeded(4_u64));
    assert_eq!(ringed, vec![view.planets[0].1[1]]);
}

#[test]
fn disabled_rings_draw_nothing() {
    let config = GenerationConfig::minimal();
    let (mut builder, view) = star_with_planets(&[4.0, 8.0]);
    let mut rng = Stream::seeded(4_u64);
    assert!(place_rings(&mut builder, &view, &config, &mut rng).is_empty());
    assert_eq!(rng.words_consumed(), 0);
}
