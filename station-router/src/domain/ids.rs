//! Typed identifiers for station entities.
//!
//! Identity is caller-assigned: the station builder checks uniqueness within
//! one station, the types themselves only keep the four id spaces apart.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Returns the raw numeric id.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Point`](super::Point), a vertex of the station graph.
    PointId
);
entity_id!(
    /// Identifier of a [`Segment`](super::Segment), a weighted edge.
    SegmentId
);
entity_id!(
    /// Identifier of a [`Path`](super::Path).
    PathId
);
entity_id!(
    /// Identifier of a [`Park`](super::Park).
    ParkId
);
