//! Spatial grouping of systems.
//!
//! Systems are shuffled and dealt round-robin into a handful of top-level
//! groups. A nesting pass then splits subgroups off those groups, and off the
//! subgroups in turn, so the number of top-level groups never changes. Every
//! nesting goes through the forest, which refuses cycles and chains deeper
//! than the limit. Finally groups are placed in 3D, nested groups close to
//! their parent.

use std::collections::VecDeque;

use entropy::{Stream, sample_bernoulli, sample_gaussian_vector, shuffle};
use nalgebra::{Point3, Vector3};
use rand::Rng;
use scene::{BodyId, Group, GroupChild, GroupId, UniverseBuilder};
use tracing::{debug, trace};

use crate::config::GroupingConfig;
use crate::naming::greek_name;

/// Why a proposed nesting was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestRejection {
    /// The group was offered itself as parent
    SelfReference,
    /// The group already has a parent
    AlreadyNested,
    /// The proposed parent lies below the group
    Cycle,
    /// The combined chain would exceed `maxDepth`
    TooDeep,
}

/// Containment forest over the groups under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupForest {
    pub parents: Vec<Option<usize>>,
    pub subgroups: Vec<Vec<usize>>,
}

impl GroupForest {
    /// A forest of `k` unrelated top-level groups.
    pub fn new(k: usize) -> Self {
        Self {
            parents: vec![None; k],
            subgroups: vec![Vec::new(); k],
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn top_level(&self) -> usize {
        self.parents.iter().filter(|p| p.is_none()).count()
    }

    /// Add a new group beneath `parent`, or refuse if it would sit deeper
    /// than `max_depth`. The forest is left untouched on refusal.
    pub fn try_spawn(&mut self, parent: usize, max_depth: usize) -> Result<usize, NestRejection> {
        if self.depth(parent) >= max_depth {
            return Err(NestRejection::TooDeep);
        }
        let group = self.parents.len();
        self.parents.push(None);
        self.subgroups.push(Vec::new());
        self.try_nest(group, parent, max_depth)?;
        Ok(group)
    }

    /// Levels from the top, counting the group itself (top-level is 1).
    pub fn depth(&self, group: usize) -> usize {
        let mut depth = 1;
        let mut current = group;
        while let Some(parent) = self.parents[current] {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Levels in the subtree rooted at `group`, counting the group itself.
    pub fn height(&self, group: usize) -> usize {
        1 + self.subgroups[group]
            .iter()
            .map(|&child| self.height(child))
            .max()
            .unwrap_or(0)
    }

    pub fn is_ancestor(&self, ancestor: usize, group: usize) -> bool {
        let mut current = self.parents[group];
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parents[parent];
        }
        false
    }

    /// Hang `group` under `parent` unless that breaks the forest.
    pub fn try_nest(
        &mut self,
        group: usize,
        parent: usize,
        max_depth: usize,
    ) -> Result<(), NestRejection> {
        if group == parent {
            return Err(NestRejection::SelfReference);
        }
        if self.parents[group].is_some() {
            return Err(NestRejection::AlreadyNested);
        }
        if self.is_ancestor(group, parent) {
            return Err(NestRejection::Cycle);
        }
        if self.depth(parent) + self.height(group) > max_depth {
            return Err(NestRejection::TooDeep);
        }

        self.parents[group] = Some(parent);
        self.subgroups[parent].push(group);
        Ok(())
    }

    /// Groups ordered parents-first: top-level groups by index, then their
    /// subgroups breadth-first.
    pub fn breadth_first(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.parents.len());
        let mut queue: VecDeque<usize> = (0..self.parents.len())
            .filter(|&g| self.parents[g].is_none())
            .collect();
        while let Some(group) = queue.pop_front() {
            order.push(group);
            queue.extend(self.subgroups[group].iter().copied());
        }
        order
    }
}

/// Group `roots` and append the groups to `builder`.
///
/// Returns the identifiers of the created groups.
pub fn group_systems(
    builder: &mut UniverseBuilder,
    roots: &[BodyId],
    config: &GroupingConfig,
    rng: &mut Stream,
) -> Vec<GroupId> {
    if roots.is_empty() {
        return Vec::new();
    }

    let k = config.top_level_groups.sample(rng).clamp(1, roots.len());

    let mut order: Vec<usize> = (0..roots.len()).collect();
    shuffle(rng, &mut order);
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, system) in order.into_iter().enumerate() {
        members[i % k].push(system);
    }

    // Each split moves a non-empty tail of the members into a new subgroup
    // and leaves at least one system behind.
    let mut forest = GroupForest::new(k);
    let mut queue: VecDeque<usize> = (0..k).collect();
    while let Some(group) = queue.pop_front() {
        if members[group].len() < 2 || !sample_bernoulli(rng, config.nesting_probability) {
            continue;
        }
        let child = match forest.try_spawn(group, config.max_depth as usize) {
            Ok(child) => child,
            Err(reason) => {
                trace!(group, ?reason, "nesting rejected");
                continue;
            }
        };
        let moved = rng.random_range(1..members[group].len());
        let keep = members[group].len() - moved;
        let split = members[group].split_off(keep);
        members.push(split);
        queue.push_back(child);
        queue.push_back(group);
    }

    let mut placements = vec![Point3::origin(); forest.len()];
    for group in forest.breadth_first() {
        placements[group] = match forest.parents[group] {
            Some(parent) => {
                let sigma = config.placement_sigma * config.nested_sigma_scale;
                placements[parent] + sample_gaussian_vector(rng, sigma)
            }
            None => Point3::origin() + sample_gaussian_vector(rng, config.placement_sigma),
        };
    }

    let offsets: Vec<Vec<Vector3<f64>>> = members
        .iter()
        .map(|systems| {
            systems
                .iter()
                .map(|_| sample_gaussian_vector(rng, config.system_offset_sigma))
                .collect()
        })
        .collect();

    let base = builder.next_group_id().index();
    let created: Vec<GroupId> = (0..forest.len())
        .map(|group| {
            let systems = members[group]
                .iter()
                .zip(&offsets[group])
                .map(|(&system, &offset)| GroupChild::System {
                    root: roots[system],
                    offset,
                });
            let nested = forest.subgroups[group].iter().map(|&child| GroupChild::Group {
                id: GroupId::from_index(base + child),
            });

            builder.push_group(Group {
                id: GroupId::from_index(base + group),
                name: format!("Cluster {}", greek_name(base + group)),
                parent: forest.parents[group].map(|p| GroupId::from_index(base + p)),
                children: systems.chain(nested).collect(),
                placement: placements[group],
            })
        })
        .collect();

    debug!(
        groups = forest.len(),
        top_level = forest.top_level(),
        nested = forest.len() - forest.top_level(),
        "systems grouped"
    );
    created
}
