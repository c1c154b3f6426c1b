//! Domain types for the station graph.
//!
//! A [`Station`] is the aggregate root: an index-based store of points,
//! segments, paths and parks that reference one another by id. Stations are
//! validated when built and never mutated afterwards, so everything derived
//! from them (such as the adjacency list) is always current.

mod entities;
mod error;
mod ids;
mod length;
mod station;

pub use entities::{Park, Path, Point, Segment};
pub use error::{EntityKind, StationError};
pub use ids::{ParkId, PathId, PointId, SegmentId};
pub use length::{InvalidLength, Length};
pub use station::{Station, StationBuilder};
