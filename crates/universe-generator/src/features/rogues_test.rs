use entropy::Stream;
use scene::{BodyKind, BodyMetadata, Color, TrajectoryKind, UniverseBuilder};

use crate::config::{CountRange, GenerationConfig, TrajectoryMode};
use crate::features::rogues::*;

fn rogue_config(count: u32) -> GenerationConfig {
    let mut config = GenerationConfig::minimal();
    config.rogues.enable_rogues = true;
    config.rogues.count = CountRange::new(count, count);
    config
}

#[test]
fn rogues_are_parentless_and_listed() {
    let config = rogue_config(5);
    let mut builder = UniverseBuilder::new(0);
    let created = place_rogues(&mut builder, &config, &mut Stream::seeded(10_u64));

    assert_eq!(created.len(), 5);
    assert_eq!(builder.rogues(), created.as_slice());
    let max_height = config.rogues.max_inclination_deg.to_radians().sin();

    for id in created {
        let rogue = builder.body(id).unwrap();
        assert!(rogue.parent.is_none());
        assert!(matches!(rogue.kind, BodyKind::RoguePlanet | BodyKind::BlackHole));

        let Some(BodyMetadata::RogueTrajectory(path)) = &rogue.metadata else {
            panic!("rogue without trajectory");
        };
        let distance = path.origin.coords.norm();
        assert!((150.0 - 1e-9..=400.0 + 1e-9).contains(&distance));
        assert!((path.direction.norm() - 1.0).abs() < 1e-9);
        assert!(path.direction.y.abs() <= max_height + 1e-12);
    }
}

#[test]
fn linear_mode_never_curves() {
    let mut config = rogue_config(8);
    config.rogues.trajectory_mode = TrajectoryMode::AllLinear;

    let mut builder = UniverseBuilder::new(0);
    place_rogues(&mut builder, &config, &mut Stream::seeded(3_u64));

    for body in builder.bodies() {
        let Some(BodyMetadata::RogueTrajectory(path)) = &body.metadata else {
            panic!("rogue without trajectory");
        };
        assert_eq!(path.mode, TrajectoryKind::Linear);
    }
}

#[test]
fn black_hole_fraction_one() {
    let mut config = rogue_config(4);
    config.rogues.black_hole_fraction = 1.0;

    let mut builder = UniverseBuilder::new(0);
    place_rogues(&mut builder, &config, &mut Stream::seeded(3_u64));

    for body in builder.bodies() {
        assert_eq!(body.kind, BodyKind::BlackHole);
        assert_eq!(body.color, Color::BLACK);
        assert!(body.name.starts_with("BH "));
    }
}

#[test]
fn disabled_rogues() {
    let config = GenerationConfig::minimal();
    let mut builder = UniverseBuilder::new(0);
    assert!(place_rogues(&mut builder, &config, &mut Stream::seeded(3_u64)).is_empty());
    assert!(builder.rogues().is_empty());
}
