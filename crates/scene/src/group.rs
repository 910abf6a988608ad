use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::ids::{BodyId, GroupId};

/// Member of a [`Group`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GroupChild {
    /// A whole system, identified by its root body, displaced from the
    /// group's placement by `offset`
    System { root: BodyId, offset: Vector3<f64> },
    /// A nested group
    Group { id: GroupId },
}

/// A named spatial cluster of systems and nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub parent: Option<GroupId>,
    pub children: Vec<GroupChild>,
    /// Absolute position of the group's center
    pub placement: Point3<f64>,
}

impl Group {
    pub fn systems(&self) -> impl Iterator<Item = (BodyId, Vector3<f64>)> + '_ {
        self.children.iter().filter_map(|child| match child {
            GroupChild::System { root, offset } => Some((*root, *offset)),
            GroupChild::Group { .. } => None,
        })
    }

    pub fn subgroups(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.children.iter().filter_map(|child| match child {
            GroupChild::Group { id } => Some(*id),
            GroupChild::System { .. } => None,
        })
    }
}
