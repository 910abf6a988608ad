//! Append-only assembly of a [`GeneratedUniverse`].
//!
//! Pipeline phases only ever add entities. The two in-place updates are the
//! parent's child list, extended when a child is pushed, and an empty
//! metadata slot, which a feature may fill once.

use crate::belt::Belt;
use crate::body::{Body, BodyKind};
use crate::color::Color;
use crate::group::Group;
use crate::ids::{BeltId, BodyId, GroupId, NebulaId};
use crate::metadata::BodyMetadata;
use crate::nebula::Nebula;
use crate::orbit::Orbit;
use crate::universe::{GeneratedUniverse, UniverseStats};

/// A body before it receives an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBody {
    pub name: String,
    pub kind: BodyKind,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub parent: Option<BodyId>,
    pub orbit: Orbit,
    pub metadata: Option<BodyMetadata>,
}

#[derive(Debug, Clone, Default)]
pub struct UniverseBuilder {
    seed: u64,
    bodies: Vec<Body>,
    roots: Vec<BodyId>,
    rogues: Vec<BodyId>,
    belts: Vec<Belt>,
    groups: Vec<Group>,
    nebulae: Vec<Nebula>,
}

impl UniverseBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Pre-size the body table for `additional` more bodies.
    pub fn reserve_bodies(&mut self, additional: usize) {
        self.bodies.reserve(additional);
    }

    /// Append a body and link it into its parent's child list.
    ///
    /// An unknown parent is recorded as given and left for the validator.
    pub fn push_body(&mut self, body: NewBody) -> BodyId {
        let id = BodyId::from_index(self.bodies.len());

        if let Some(parent) = body.parent.and_then(|p| self.bodies.get_mut(p.index())) {
            parent.children.push(id);
        }

        self.bodies.push(Body {
            id,
            name: body.name,
            kind: body.kind,
            mass: body.mass,
            radius: body.radius,
            color: body.color,
            parent: body.parent,
            children: Vec::new(),
            orbit: body.orbit,
            metadata: body.metadata,
        });
        id
    }

    /// Fill an empty metadata slot. Returns `false` if the body is unknown or
    /// already carries metadata.
    pub fn attach_metadata(&mut self, id: BodyId, metadata: BodyMetadata) -> bool {
        match self.bodies.get_mut(id.index()) {
            Some(body) if body.metadata.is_none() => {
                body.metadata = Some(metadata);
                true
            }
            _ => false,
        }
    }

    pub fn mark_root(&mut self, id: BodyId) {
        self.roots.push(id);
    }

    pub fn mark_rogue(&mut self, id: BodyId) {
        self.rogues.push(id);
    }

    /// Append a belt, assigning the next identifier.
    pub fn push_belt(&mut self, mut belt: Belt) -> BeltId {
        let id = BeltId::from_index(self.belts.len());
        belt.id = id;
        self.belts.push(belt);
        id
    }

    /// Identifier the next pushed group will receive.
    pub fn next_group_id(&self) -> GroupId {
        GroupId::from_index(self.groups.len())
    }

    /// Append a group, assigning the next identifier.
    pub fn push_group(&mut self, mut group: Group) -> GroupId {
        let id = self.next_group_id();
        group.id = id;
        self.groups.push(group);
        id
    }

    /// Append a nebula, assigning the next identifier.
    pub fn push_nebula(&mut self, mut nebula: Nebula) -> NebulaId {
        let id = NebulaId::from_index(self.nebulae.len());
        nebula.id = id;
        self.nebulae.push(nebula);
        id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn roots(&self) -> &[BodyId] {
        &self.roots
    }

    pub fn rogues(&self) -> &[BodyId] {
        &self.rogues
    }

    pub fn belts(&self) -> &[Belt] {
        &self.belts
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn nebulae(&self) -> &[Nebula] {
        &self.nebulae
    }

    /// Freeze the tables and compute aggregate counts.
    pub fn build(self) -> GeneratedUniverse {
        let stats = UniverseStats::tally(
            &self.bodies,
            &self.roots,
            &self.belts,
            &self.groups,
            &self.nebulae,
        );
        let root_groups = self
            .groups
            .iter()
            .filter(|group| group.parent.is_none())
            .map(|group| group.id)
            .collect();

        GeneratedUniverse {
            seed: self.seed,
            bodies: self.bodies,
            roots: self.roots,
            rogues: self.rogues,
            belts: self.belts,
            groups: self.groups,
            root_groups,
            nebulae: self.nebulae,
            stats,
        }
    }
}
