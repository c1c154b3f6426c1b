//! Station graph entities: points, segments, paths and parks.
//!
//! Entities reference each other by id rather than by pointer. Equality and
//! hashing are by id alone, so two values describing the same point always
//! match as map keys no matter where they were constructed.

use std::hash::{Hash, Hasher};

use super::{InvalidLength, Length, ParkId, PathId, PointId, SegmentId};

/// A vertex of the station graph: a physical location on the station.
#[derive(Debug, Clone)]
pub struct Point {
    id: PointId,
    name: String,
}

impl Point {
    /// Create a new point.
    pub fn new(id: PointId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A weighted edge between two points.
///
/// Start and end record how the segment was defined. Routing treats a
/// segment as traversable in both directions at the same cost.
#[derive(Debug, Clone)]
pub struct Segment {
    id: SegmentId,
    name: String,
    start: PointId,
    end: PointId,
    length: Length,
}

impl Segment {
    /// Create a new segment, validating its length.
    pub fn new(
        id: SegmentId,
        name: impl Into<String>,
        start: PointId,
        end: PointId,
        length: f64,
    ) -> Result<Self, InvalidLength> {
        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
            length: Length::new(length)?,
        })
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> PointId {
        self.start
    }

    pub fn end(&self) -> PointId {
        self.end
    }

    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns true if `point` is either end of this segment.
    pub fn touches(&self, point: PointId) -> bool {
        self.start == point || self.end == point
    }

    /// Returns the endpoint opposite to `point`.
    ///
    /// Returns `None` if the segment does not touch `point`. A loop segment
    /// (start equals end) returns `point` itself.
    pub fn other_end(&self, point: PointId) -> Option<PointId> {
        if self.start == point {
            Some(self.end)
        } else if self.end == point {
            Some(self.start)
        } else {
            None
        }
    }

    /// Returns true if this segment joins `a` and `b`, in either direction.
    pub fn connects(&self, a: PointId, b: PointId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}

/// A named, ordered composition of segments.
///
/// Segments may be shared between any number of paths.
#[derive(Debug, Clone)]
pub struct Path {
    id: PathId,
    name: String,
    segments: Vec<SegmentId>,
}

impl Path {
    pub fn new(id: PathId, name: impl Into<String>, segments: Vec<SegmentId>) -> Self {
        Self {
            id,
            name: name.into(),
            segments,
        }
    }

    pub fn id(&self) -> PathId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The segments of this path, in order.
    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }
}

/// A named grouping of paths, e.g. a yard.
///
/// Paths may belong to several parks at once.
#[derive(Debug, Clone)]
pub struct Park {
    id: ParkId,
    name: String,
    paths: Vec<PathId>,
}

impl Park {
    pub fn new(id: ParkId, name: impl Into<String>, paths: Vec<PathId>) -> Self {
        Self {
            id,
            name: name.into(),
            paths,
        }
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paths(&self) -> &[PathId] {
        &self.paths
    }

    /// Returns true if the park contains at least one path.
    pub fn has_paths(&self) -> bool {
        !self.paths.is_empty()
    }
}

macro_rules! identity_by_id {
    ($($ty:ty),*) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.id == other.id
                }
            }

            impl Eq for $ty {}

            impl Hash for $ty {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.id.hash(state);
                }
            }
        )*
    };
}

identity_by_id!(Point, Segment, Path, Park);
