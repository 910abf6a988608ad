use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::builder_test::{body, small_system};
use crate::*;

#[test]
fn system_root_walks_to_the_top() {
    let universe = small_system().build();
    assert_eq!(universe.system_root(BodyId(3)), Some(BodyId(0)));
    assert_eq!(universe.system_root(BodyId(0)), Some(BodyId(0)));
    assert_eq!(universe.system_root(BodyId(40)), None);
}

#[test]
fn descendants_are_depth_first() {
    let universe = small_system().build();
    assert_eq!(
        universe.descendants(BodyId(0)),
        vec![BodyId(1), BodyId(3), BodyId(2)]
    );
    assert!(universe.descendants(BodyId(3)).is_empty());
}

#[test]
fn world_position_sums_ancestors() {
    let universe = small_system().build();
    let t = 2.5;

    let planet = universe.position_at(BodyId(1), t).unwrap();
    let moon = universe.position_at(BodyId(3), t).unwrap();
    let world = universe.world_position_at(BodyId(3), t).unwrap();

    assert_relative_eq!(world.coords, planet + moon, epsilon = 1e-12);
    assert_relative_eq!(
        universe.world_position_at(BodyId(0), t).unwrap(),
        Point3::origin()
    );
}

#[test]
fn grouped_systems_are_displaced() {
    let mut builder = small_system();
    builder.push_group(Group {
        id: GroupId(0),
        name: "Cluster Alpha".to_string(),
        parent: None,
        children: vec![GroupChild::System {
            root: BodyId(0),
            offset: Vector3::new(1.0, 2.0, 3.0),
        }],
        placement: Point3::new(100.0, 0.0, -50.0),
    });
    let universe = builder.build();

    assert_eq!(universe.root_groups, vec![GroupId(0)]);
    assert_relative_eq!(
        universe.world_position_at(BodyId(0), 10.0).unwrap(),
        Point3::new(101.0, 2.0, -47.0)
    );

    let planet = universe.position_at(BodyId(2), 10.0).unwrap();
    assert_relative_eq!(
        universe.world_position_at(BodyId(2), 10.0).unwrap(),
        Point3::new(101.0, 2.0, -47.0) + planet,
        epsilon = 1e-12
    );
}

#[test]
fn rogues_follow_their_trajectory() {
    let mut builder = small_system();
    let mut rogue = body("Drifter", BodyKind::RoguePlanet, 0.001, None);
    let trajectory = RogueTrajectory::linear(
        Point3::new(200.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        0.1,
    );
    rogue.metadata = Some(BodyMetadata::RogueTrajectory(trajectory));
    let id = builder.push_body(rogue);
    builder.mark_rogue(id);
    let universe = builder.build();

    assert_relative_eq!(
        universe.world_position_at(id, 100.0).unwrap(),
        Point3::new(190.0, 0.0, 0.0),
        epsilon = 1e-9
    );
    assert_eq!(universe.stats.rogue_planets, 1);
}

#[test]
fn belts_are_found_by_system() {
    let mut builder = small_system();
    let other = builder.push_body(body("Vega", BodyKind::Star, 2.0, None));
    builder.mark_root(other);
    for host in [BodyId(0), other] {
        builder.push_belt(Belt {
            id: BeltId(0),
            name: "Belt".to_string(),
            kind: BeltKind::Asteroid,
            host,
            inner_radius: 1.0,
            outer_radius: 2.0,
            thickness: 0.1,
            population: BeltPopulation::Particles { count: 500 },
        });
    }
    let universe = builder.build();

    let belts: Vec<BeltId> = universe
        .belts_of_system(other)
        .map(|belt| belt.id)
        .collect();
    assert_eq!(belts, vec![BeltId(1)]);
}

#[test]
fn json_round_trip_preserves_snapshot() {
    let universe = small_system().build();
    let json = serde_json::to_string(&universe).unwrap();
    assert!(json.contains("\"rootGroups\""));
    assert!(json.contains("\"angularSpeed\""));

    let back: GeneratedUniverse = serde_json::from_str(&json).unwrap();
    assert_eq!(back.roots, universe.roots);
    assert_eq!(back.stats, universe.stats);
    for (a, b) in back.bodies.iter().zip(&universe.bodies) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.parent, b.parent);
        assert_eq!(a.children, b.children);
        assert_relative_eq!(a.mass, b.mass, max_relative = 1e-12);
        assert_relative_eq!(a.orbit.angular_speed, b.orbit.angular_speed, max_relative = 1e-12);
    }
}
