use approx::assert_relative_eq;
use entropy::Stream;
use scene::{BodyKind, Color};

use crate::config::{ColorConfig, MassConfig, OrbitConfig, TopologyConfig};
use crate::properties::*;
use crate::topology::{SystemDraft, expand_system};

fn draft(seed: u64) -> SystemDraft {
    let root = Stream::seeded(seed);
    let config = TopologyConfig {
        star_count_weights: vec![0.0, 1.0, 0.0],
        planet_geometric_p: 0.15,
        ..TopologyConfig::default()
    };
    expand_system(
        &config,
        &mut root.fork("topology"),
        &mut root.fork("topology/black-holes"),
    )
}

#[test]
fn masses_scale_by_kind() {
    let config = MassConfig {
        log_std: 0.0,
        ..MassConfig::default()
    };
    let mut rng = Stream::seeded(1_u64);

    assert_relative_eq!(sample_mass(&mut rng, BodyKind::Star, &config), 1.0);
    assert_relative_eq!(sample_mass(&mut rng, BodyKind::BlackHole, &config), 8.0);
    assert_relative_eq!(sample_mass(&mut rng, BodyKind::Planet, &config), 1e-3);
    assert_relative_eq!(sample_mass(&mut rng, BodyKind::Moon, &config), 2e-5);
}

#[test]
fn radius_follows_power_law() {
    let config = MassConfig::default();
    assert_relative_eq!(radius_for_mass(1.0, &config), 1.0);
    assert_relative_eq!(
        radius_for_mass(8.0, &config),
        8.0_f64.powf(0.45),
        epsilon = 1e-12
    );
}

#[test]
fn every_body_gets_a_positive_mass() {
    let mut d = draft(3);
    assign_masses(&mut d, &MassConfig::default(), &mut Stream::seeded(3_u64));
    for body in &d.bodies {
        assert!(body.mass > 0.0);
        assert_relative_eq!(body.radius, radius_for_mass(body.mass, &MassConfig::default()));
    }
}

#[test]
fn spectral_bands_pick_first_match() {
    let config = ColorConfig::default();
    assert_eq!(spectral_class(20.0, &config), Some('O'));
    assert_eq!(spectral_class(1.0, &config), Some('G'));
    assert_eq!(spectral_class(0.1, &config), Some('M'));
    assert_eq!(star_color(1.0, &config), Color::from_temperature(5600.0));
}

#[test]
fn palette_interpolates_between_stops() {
    let config = ColorConfig::default();
    assert_eq!(palette_base(0.0, &config), config.palette[0].color);
    assert_eq!(palette_base(1.0, &config), config.palette[3].color);

    let low = config.palette[1];
    let high = config.palette[2];
    let mid = palette_base((low.mass + high.mass) / 2.0, &config);
    assert_eq!(mid, low.color.lerp(high.color, 0.5));
}

#[test]
fn colors_by_kind() {
    let mut d = draft(11);
    d.bodies[0].kind = BodyKind::BlackHole;
    assign_masses(&mut d, &MassConfig::default(), &mut Stream::seeded(11_u64));
    assign_colors(&mut d, &ColorConfig::default(), &mut Stream::seeded(12_u64));

    assert_eq!(d.bodies[0].color, Color::BLACK);
    assert_eq!(
        d.bodies[1].color,
        star_color(d.bodies[1].mass, &ColorConfig::default())
    );
}

#[test]
fn sibling_order_matches_distance_order() {
    let config = OrbitConfig::default();
    let mut rng = Stream::seeded(8_u64);
    for depth in 1..=4 {
        let mut previous = 0.0;
        for ordinal in 0..10 {
            let distance = sibling_distance(&mut rng, depth, ordinal, &config);
            assert!(distance > previous);
            previous = distance;
        }
    }
}

#[test]
fn multi_star_top_level_is_co_orbital() {
    let config = OrbitConfig::default();
    let mut d = draft(21);
    assign_orbits(&mut d, &config, &mut Stream::seeded(21_u64));

    let stars = d.top_level();
    assert_eq!(stars.len(), 2);
    assert_relative_eq!(d.bodies[stars[0]].orbit.distance, config.companion_distance);
    assert_relative_eq!(d.bodies[stars[1]].orbit.distance, config.companion_distance);
    assert_relative_eq!(d.bodies[stars[0]].orbit.phase, 0.0);
    assert_relative_eq!(d.bodies[stars[1]].orbit.phase, 180.0);

    for body in d.bodies.iter().filter(|b| b.parent.is_some()) {
        assert!(body.orbit.distance > 0.0);
        assert!((0.0..360.0).contains(&body.orbit.phase));
        let tilt = body.orbit.inclination.unwrap_or(0.0);
        assert!((0.0..=config.max_inclination_deg).contains(&tilt));
    }
}
