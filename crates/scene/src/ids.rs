//! Dense arena identifiers.
//!
//! Every table in a [`GeneratedUniverse`](crate::GeneratedUniverse) is a
//! `Vec` whose position equals the entity's identifier, so lookups and
//! re-parenting are index operations.

use serde::{Deserialize, Serialize};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Position of the entity in its table.
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Identifier for the entity stored at `index`.
            ///
            /// Tables are bounded well below `u32::MAX` by the generation
            /// limits, so the narrowing is lossless in practice.
            pub fn from_index(index: usize) -> Self {
                Self(index as u32)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    };
}

arena_id!(
    /// Identifier of a [`Body`](crate::Body).
    BodyId,
    "body"
);
arena_id!(
    /// Identifier of a [`Belt`](crate::Belt).
    BeltId,
    "belt"
);
arena_id!(
    /// Identifier of a [`Group`](crate::Group).
    GroupId,
    "group"
);
arena_id!(
    /// Identifier of a [`Nebula`](crate::Nebula).
    NebulaId,
    "nebula"
);
