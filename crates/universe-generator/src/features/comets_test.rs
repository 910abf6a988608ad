use entropy::Stream;
use scene::{BodyKind, BodyMetadata};

use crate::config::GenerationConfig;
use crate::features::belts_test::star_with_planets;
use crate::features::comets::*;

fn comet_config() -> GenerationConfig {
    let mut config = GenerationConfig::minimal();
    config.comets.enable_comets = true;
    config.comets.geometric_p = 0.05;
    config.comets.max_per_system = 4;
    config
}

#[test]
fn comets_orbit_the_root_on_eccentric_paths() {
    let config = comet_config();
    let mut total = 0;

    for seed in 0..10_u64 {
        let (mut builder, view) = star_with_planets(&[4.0, 8.0, 16.0]);
        let created = place_comets(&mut builder, &view, &config, &mut Stream::seeded(seed));
        assert!(created.len() <= 4);
        total += created.len();

        for id in created {
            let comet = builder.body(id).unwrap();
            assert_eq!(comet.kind, BodyKind::Comet);
            assert_eq!(comet.parent, Some(view.root));
            assert!(comet.name.starts_with("C/KV-0001-"));

            let e = comet.orbit.eccentricity.unwrap();
            assert!((0.5..0.95).contains(&e));
            assert!((1.2 * 16.0..4.0 * 16.0).contains(&comet.orbit.distance));

            let Some(BodyMetadata::CometTail(tail)) = &comet.metadata else {
                panic!("comet without tail");
            };
            assert!(tail.perihelion < tail.aphelion);
            assert!(tail.width < tail.length);
        }
    }
    assert!(total > 0);
}

#[test]
fn planetless_systems_use_base_distance() {
    let config = comet_config();
    let base = config.orbits.planet_base_distance;

    for seed in 0..10_u64 {
        let (mut builder, view) = star_with_planets(&[]);
        for id in place_comets(&mut builder, &view, &config, &mut Stream::seeded(seed)) {
            let distance = builder.body(id).unwrap().orbit.distance;
            assert!((1.2 * base..4.0 * base).contains(&distance));
        }
    }
}

#[test]
fn certain_success_means_no_comets() {
    let mut config = comet_config();
    config.comets.geometric_p = 1.0;
    let (mut builder, view) = star_with_planets(&[4.0]);
    assert!(place_comets(&mut builder, &view, &config, &mut Stream::seeded(1_u64)).is_empty());
}
