//! Station construction errors.
//!
//! These errors describe station data that cannot form a consistent graph.
//! They are raised once, when the station is built.

use std::fmt;

use super::{InvalidLength, SegmentId};

/// The kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Point,
    Segment,
    Path,
    Park,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Point => "point",
            EntityKind::Segment => "segment",
            EntityKind::Path => "path",
            EntityKind::Park => "park",
        })
    }
}

/// Errors raised while building a [`Station`](super::Station).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    /// Two entities of the same kind share an id
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: EntityKind, id: u32 },

    /// An entity refers to an id that is not part of the station
    #[error("{kind} {id} refers to unknown {target} {target_id}")]
    InvalidReference {
        kind: EntityKind,
        id: u32,
        target: EntityKind,
        target_id: u32,
    },

    /// A segment was given an unusable length
    #[error("segment {segment}: {source}")]
    InvalidLength {
        segment: SegmentId,
        #[source]
        source: InvalidLength,
    },
}
