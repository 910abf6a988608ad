//! Structural validation of a [`GeneratedUniverse`].
//!
//! The validator only reports. It never repairs, reorders or drops anything,
//! and it collects every violation rather than stopping at the first.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::belt::BeltPopulation;
use crate::ids::{BeltId, BodyId, GroupId};
use crate::metadata::BodyMetadata;
use crate::universe::{GeneratedUniverse, UniverseStats};

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Violation {
    #[error("{table} entry at position {position} carries id {id}")]
    IdMismatch {
        table: &'static str,
        position: usize,
        id: u32,
    },

    #[error("{body} references missing parent {parent}")]
    DanglingParent { body: BodyId, parent: BodyId },

    #[error("{body} lists missing child {child}")]
    DanglingChild { body: BodyId, child: BodyId },

    #[error("{body} lists {child} as a child, but {child} names parent {actual:?}")]
    ChildParentMismatch {
        body: BodyId,
        child: BodyId,
        actual: Option<BodyId>,
    },

    #[error("{child} names {parent} as parent but is missing from its child list")]
    MissingChildLink { parent: BodyId, child: BodyId },

    #[error("{body} lists child {child} more than once")]
    DuplicateChild { body: BodyId, child: BodyId },

    #[error("parent chain through {body} is cyclic")]
    ParentCycle { body: BodyId },

    #[error("{list} list references missing body {body}")]
    DanglingListEntry { list: &'static str, body: BodyId },

    #[error("{body} is listed more than once among roots and rogues")]
    DuplicateRoot { body: BodyId },

    #[error("root {body} has parent {parent}")]
    RootHasParent { body: BodyId, parent: BodyId },

    #[error("rogue {body} has parent {parent}")]
    RogueHasParent { body: BodyId, parent: BodyId },

    #[error("root {root} (mass {root_mass}) is outweighed by {child} (mass {child_mass})")]
    CenterOutweighed {
        root: BodyId,
        root_mass: f64,
        child: BodyId,
        child_mass: f64,
    },

    #[error("{body} has no parent but is neither a root nor a rogue")]
    UnanchoredBody { body: BodyId },

    #[error("{belt} is hosted by missing body {host}")]
    DanglingBeltHost { belt: BeltId, host: BodyId },

    #[error("{belt} has inner radius {inner} beyond outer radius {outer}")]
    BeltBandInverted { belt: BeltId, inner: f64, outer: f64 },

    #[error("{belt} lists missing member {member}")]
    DanglingBeltMember { belt: BeltId, member: BodyId },

    #[error("{member} of {belt} orbits at {radius}, outside [{inner}, {outer}]")]
    BeltMemberOutsideBand {
        belt: BeltId,
        member: BodyId,
        radius: f64,
        inner: f64,
        outer: f64,
    },

    #[error("{group} contains missing group {member}")]
    DanglingGroupMember { group: GroupId, member: GroupId },

    #[error("{group} contains {root}, which is not a system root")]
    DanglingGroupSystem { group: GroupId, root: BodyId },

    #[error("{group} names missing parent {parent}")]
    DanglingGroupParent { group: GroupId, parent: GroupId },

    #[error("{group} contains {member}, but {member} names parent {actual:?}")]
    GroupParentMismatch {
        group: GroupId,
        member: GroupId,
        actual: Option<GroupId>,
    },

    #[error("{group} names {parent} as parent but is missing from its members")]
    MissingGroupLink { parent: GroupId, group: GroupId },

    #[error("containment chain through {group} is cyclic")]
    GroupCycle { group: GroupId },

    #[error("root group list {listed:?} does not match parentless groups {actual:?}")]
    RootGroupMismatch {
        listed: Vec<GroupId>,
        actual: Vec<GroupId>,
    },

    #[error("system {root} appears in {count} groups")]
    SystemInMultipleGroups { root: BodyId, count: usize },

    #[error("{body} is anchored to missing Lagrange host {host}")]
    LagrangeHostMissing { body: BodyId, host: BodyId },

    #[error("recorded stats {recorded:?} differ from tables {actual:?}")]
    StatsMismatch {
        recorded: Box<UniverseStats>,
        actual: Box<UniverseStats>,
    },
}

/// Every violation found in one universe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }
}

/// Check every structural invariant of `universe`.
pub fn validate(universe: &GeneratedUniverse) -> ValidationReport {
    let mut violations = Vec::new();

    check_ids(universe, &mut violations);
    check_parent_links(universe, &mut violations);
    check_parent_cycles(universe, &mut violations);
    check_roots(universe, &mut violations);
    check_belts(universe, &mut violations);
    check_groups(universe, &mut violations);
    check_metadata(universe, &mut violations);

    let actual = UniverseStats::tally(
        &universe.bodies,
        &universe.roots,
        &universe.belts,
        &universe.groups,
        &universe.nebulae,
    );
    if actual != universe.stats {
        violations.push(Violation::StatsMismatch {
            recorded: Box::new(universe.stats),
            actual: Box::new(actual),
        });
    }

    ValidationReport { violations }
}

// ===== Referential integrity =====

fn check_ids(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    let tables = [
        ("bodies", universe.bodies.iter().map(|b| b.id.0).collect::<Vec<_>>()),
        ("belts", universe.belts.iter().map(|b| b.id.0).collect()),
        ("groups", universe.groups.iter().map(|g| g.id.0).collect()),
        ("nebulae", universe.nebulae.iter().map(|n| n.id.0).collect()),
    ];

    for (table, ids) in tables {
        for (position, id) in ids.into_iter().enumerate() {
            if id as usize != position {
                out.push(Violation::IdMismatch {
                    table,
                    position,
                    id,
                });
            }
        }
    }
}

fn check_parent_links(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    for body in &universe.bodies {
        let mut seen = HashSet::new();
        for &child in &body.children {
            if !seen.insert(child) {
                out.push(Violation::DuplicateChild {
                    body: body.id,
                    child,
                });
                continue;
            }
            match universe.body(child) {
                None => out.push(Violation::DanglingChild {
                    body: body.id,
                    child,
                }),
                Some(c) if c.parent != Some(body.id) => out.push(Violation::ChildParentMismatch {
                    body: body.id,
                    child,
                    actual: c.parent,
                }),
                Some(_) => {}
            }
        }

        if let Some(parent) = body.parent {
            match universe.body(parent) {
                None => out.push(Violation::DanglingParent {
                    body: body.id,
                    parent,
                }),
                Some(p) if !p.children.contains(&body.id) => out.push(Violation::MissingChildLink {
                    parent,
                    child: body.id,
                }),
                Some(_) => {}
            }
        }
    }
}

fn check_parent_cycles(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    let parents: Vec<Option<usize>> = universe
        .bodies
        .iter()
        .map(|b| b.parent.map(BodyId::index))
        .collect();

    for index in find_cycles(&parents) {
        out.push(Violation::ParentCycle {
            body: BodyId::from_index(index),
        });
    }
}

fn check_roots(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    let mut anchored = HashSet::new();

    for (list, ids) in [("roots", &universe.roots), ("rogues", &universe.rogues)] {
        for &id in ids {
            if !anchored.insert(id) {
                out.push(Violation::DuplicateRoot { body: id });
            }

            let Some(body) = universe.body(id) else {
                out.push(Violation::DanglingListEntry { list, body: id });
                continue;
            };

            if let Some(parent) = body.parent {
                out.push(if list == "roots" {
                    Violation::RootHasParent { body: id, parent }
                } else {
                    Violation::RogueHasParent { body: id, parent }
                });
            }
        }
    }

    // The system center outweighs everything that orbits it directly
    for &root_id in &universe.roots {
        let Some(root) = universe.body(root_id) else {
            continue;
        };
        for child in root.children.iter().filter_map(|&c| universe.body(c)) {
            if child.mass > root.mass {
                out.push(Violation::CenterOutweighed {
                    root: root_id,
                    root_mass: root.mass,
                    child: child.id,
                    child_mass: child.mass,
                });
            }
        }
    }

    for body in &universe.bodies {
        if body.parent.is_none() && !anchored.contains(&body.id) {
            out.push(Violation::UnanchoredBody { body: body.id });
        }
    }
}

// ===== Features =====

fn check_belts(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    for belt in &universe.belts {
        if universe.body(belt.host).is_none() {
            out.push(Violation::DanglingBeltHost {
                belt: belt.id,
                host: belt.host,
            });
        }

        if belt.inner_radius > belt.outer_radius {
            out.push(Violation::BeltBandInverted {
                belt: belt.id,
                inner: belt.inner_radius,
                outer: belt.outer_radius,
            });
        }

        if let BeltPopulation::Members { ids } = &belt.population {
            for &member in ids {
                match universe.body(member) {
                    None => out.push(Violation::DanglingBeltMember {
                        belt: belt.id,
                        member,
                    }),
                    Some(body) if !belt.contains_radius(body.orbit.distance) => {
                        out.push(Violation::BeltMemberOutsideBand {
                            belt: belt.id,
                            member,
                            radius: body.orbit.distance,
                            inner: belt.inner_radius,
                            outer: belt.outer_radius,
                        })
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

fn check_metadata(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    for body in &universe.bodies {
        if let Some(BodyMetadata::Lagrange(anchor)) = &body.metadata {
            if universe.body(anchor.host).is_none() {
                out.push(Violation::LagrangeHostMissing {
                    body: body.id,
                    host: anchor.host,
                });
            }
        }
    }
}

// ===== Groups =====

fn check_groups(universe: &GeneratedUniverse, out: &mut Vec<Violation>) {
    let roots: HashSet<BodyId> = universe.roots.iter().copied().collect();
    let mut memberships: HashMap<BodyId, usize> = HashMap::new();

    for group in &universe.groups {
        for root in group.systems().map(|(root, _)| root) {
            if !roots.contains(&root) {
                out.push(Violation::DanglingGroupSystem {
                    group: group.id,
                    root,
                });
            }
            *memberships.entry(root).or_default() += 1;
        }

        for member in group.subgroups() {
            match universe.group(member) {
                None => out.push(Violation::DanglingGroupMember {
                    group: group.id,
                    member,
                }),
                Some(g) if g.parent != Some(group.id) => {
                    out.push(Violation::GroupParentMismatch {
                        group: group.id,
                        member,
                        actual: g.parent,
                    })
                }
                Some(_) => {}
            }
        }

        if let Some(parent) = group.parent {
            match universe.group(parent) {
                None => out.push(Violation::DanglingGroupParent {
                    group: group.id,
                    parent,
                }),
                Some(p) if !p.subgroups().any(|g| g == group.id) => {
                    out.push(Violation::MissingGroupLink {
                        parent,
                        group: group.id,
                    })
                }
                Some(_) => {}
            }
        }
    }

    let mut shared: Vec<(BodyId, usize)> = memberships
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .collect();
    shared.sort_unstable();
    for (root, count) in shared {
        out.push(Violation::SystemInMultipleGroups { root, count });
    }

    let parents: Vec<Option<usize>> = universe
        .groups
        .iter()
        .map(|g| g.parent.map(GroupId::index))
        .collect();
    for index in find_cycles(&parents) {
        out.push(Violation::GroupCycle {
            group: GroupId::from_index(index),
        });
    }

    let mut listed = universe.root_groups.clone();
    listed.sort_unstable();
    let actual: Vec<GroupId> = universe
        .groups
        .iter()
        .filter(|g| g.parent.is_none())
        .map(|g| g.id)
        .collect();
    if listed != actual {
        out.push(Violation::RootGroupMismatch { listed, actual });
    }
}

/// Report one node per cycle in a parent-pointer forest.
///
/// Out-of-range parents end a chain; they are reported elsewhere.
fn find_cycles(parents: &[Option<usize>]) -> Vec<usize> {
    const UNVISITED: u8 = 0;
    const ON_PATH: u8 = 1;
    const DONE: u8 = 2;

    let mut state = vec![UNVISITED; parents.len()];
    let mut cycles = Vec::new();

    for start in 0..parents.len() {
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(node) = current.filter(|&n| n < parents.len()) {
            match state[node] {
                DONE => break,
                ON_PATH => {
                    cycles.push(node);
                    break;
                }
                _ => {
                    state[node] = ON_PATH;
                    path.push(node);
                    current = parents[node];
                }
            }
        }

        for node in path {
            state[node] = DONE;
        }
    }

    cycles
}
