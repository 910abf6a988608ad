use std::collections::HashSet;

use entropy::Stream;
use scene::{BodyId, GroupId, UniverseBuilder};

use crate::config::{CountRange, GroupingConfig};
use crate::grouping::*;

fn roots(n: u32) -> Vec<BodyId> {
    (0..n).map(BodyId).collect()
}

#[test]
fn forest_rejects_bad_nestings() {
    let mut forest = GroupForest::new(4);
    assert_eq!(forest.try_nest(1, 1, 3), Err(NestRejection::SelfReference));

    forest.try_nest(1, 0, 3).unwrap();
    assert_eq!(forest.try_nest(1, 2, 3), Err(NestRejection::AlreadyNested));
    assert_eq!(forest.try_nest(0, 1, 3), Err(NestRejection::Cycle));

    forest.try_nest(2, 1, 3).unwrap();
    assert_eq!(forest.depth(2), 3);
    assert_eq!(forest.height(0), 3);
    assert_eq!(forest.try_nest(3, 2, 3), Err(NestRejection::TooDeep));
    assert_eq!(forest.try_nest(0, 3, 3), Err(NestRejection::TooDeep));
}

#[test]
fn breadth_first_visits_parents_first() {
    let mut forest = GroupForest::new(4);
    forest.try_nest(0, 3, 3).unwrap();
    forest.try_nest(2, 0, 3).unwrap();

    let order = forest.breadth_first();
    assert_eq!(order, vec![1, 3, 0, 2]);
}

#[test]
fn every_system_lands_in_exactly_one_group() {
    let config = GroupingConfig::default();
    for seed in 0..20_u64 {
        let systems = roots(12);
        let mut builder = UniverseBuilder::new(seed);
        let created = group_systems(&mut builder, &systems, &config, &mut Stream::seeded(seed));

        assert!(created.len() >= 3);
        let top_level = builder.groups().iter().filter(|g| g.parent.is_none()).count();
        assert!((3..=7).contains(&top_level));
        let mut seen = HashSet::new();
        for group in builder.groups() {
            assert!(group.systems().count() > 0);
            for (root, _) in group.systems() {
                assert!(seen.insert(root));
            }
        }
        assert_eq!(seen.len(), systems.len());
    }
}

#[test]
fn group_count_is_capped_by_systems() {
    let config = GroupingConfig::default();
    let mut builder = UniverseBuilder::new(0);
    let created = group_systems(&mut builder, &roots(2), &config, &mut Stream::seeded(1_u64));
    assert_eq!(created.len(), 2);

    let mut builder = UniverseBuilder::new(0);
    assert!(group_systems(&mut builder, &[], &config, &mut Stream::seeded(1_u64)).is_empty());
}

#[test]
fn nesting_respects_depth_and_links() {
    let config = GroupingConfig {
        top_level_groups: CountRange::new(6, 6),
        nesting_probability: 1.0,
        max_depth: 2,
        ..GroupingConfig::default()
    };

    for seed in 0..20_u64 {
        let mut builder = UniverseBuilder::new(seed);
        group_systems(&mut builder, &roots(30), &config, &mut Stream::seeded(seed));
        let groups = builder.groups();

        for group in groups {
            let mut depth = 1;
            let mut parent = group.parent;
            while let Some(id) = parent {
                depth += 1;
                let up = &groups[id.index()];
                assert!(up.subgroups().any(|child| child == group.id));
                parent = up.parent;
            }
            assert!(depth <= 2);
        }
    }
}

#[test]
fn flat_when_nesting_disabled() {
    let config = GroupingConfig {
        nesting_probability: 0.0,
        ..GroupingConfig::default()
    };
    let mut builder = UniverseBuilder::new(0);
    group_systems(&mut builder, &roots(10), &config, &mut Stream::seeded(5_u64));

    for (i, group) in builder.groups().iter().enumerate() {
        assert_eq!(group.id, GroupId::from_index(i));
        assert!(group.parent.is_none());
        assert_eq!(group.subgroups().count(), 0);
    }
    assert!(builder.groups()[0].name.starts_with("Cluster Alpha"));
}

#[test]
fn spawned_groups_hang_below_their_parent() {
    let mut forest = GroupForest::new(2);
    let child = forest.try_spawn(0, 3).unwrap();
    let grandchild = forest.try_spawn(child, 3).unwrap();

    assert_eq!((child, grandchild), (2, 3));
    assert_eq!(forest.parents[grandchild], Some(child));
    assert_eq!(forest.top_level(), 2);
    assert_eq!(forest.try_spawn(grandchild, 3), Err(NestRejection::TooDeep));
    assert_eq!(forest.len(), 4);
}

#[test]
fn nesting_never_changes_the_top_level_count() {
    let config = GroupingConfig {
        top_level_groups: CountRange::new(4, 4),
        nesting_probability: 1.0,
        max_depth: 4,
        ..GroupingConfig::default()
    };

    for seed in 0..50_u64 {
        let mut builder = UniverseBuilder::new(seed);
        let created = group_systems(&mut builder, &roots(20), &config, &mut Stream::seeded(seed));

        let top_level = builder.groups().iter().filter(|g| g.parent.is_none()).count();
        assert_eq!(top_level, 4, "seed {}", seed);
        assert!(created.len() > 4, "seed {}", seed);
        for group in builder.groups() {
            assert!(group.systems().count() > 0);
        }
    }
}
