//! Adjacency list construction.

use std::collections::HashMap;

use crate::domain::{PointId, Segment, SegmentId};

/// Mapping from each point to every segment that touches it.
///
/// A segment is listed under both of its endpoints, so the list is an
/// undirected view of the station even though segments record a start and
/// an end. Within one point, segments appear in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyList {
    entries: HashMap<PointId, Vec<SegmentId>>,
}

impl AdjacencyList {
    /// Segments touching `point`; empty if the point is not on any segment.
    pub fn segments_at(&self, point: PointId) -> &[SegmentId] {
        self.entries.get(&point).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `point` is the endpoint of at least one segment.
    pub fn contains(&self, point: PointId) -> bool {
        self.entries.contains_key(&point)
    }

    /// All points in the list, sorted by id.
    pub fn points(&self) -> Vec<PointId> {
        let mut points: Vec<PointId> = self.entries.keys().copied().collect();
        points.sort_unstable();
        points
    }

    /// Number of points in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the adjacency list for a collection of segments.
///
/// Both endpoints of every segment become keys, and the segment is appended
/// to each endpoint's entry. A loop segment is therefore listed twice under
/// its single point.
pub fn build_adjacency<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> AdjacencyList {
    let mut entries: HashMap<PointId, Vec<SegmentId>> = HashMap::new();

    for segment in segments {
        entries.entry(segment.start()).or_default().push(segment.id());
        entries.entry(segment.end()).or_default().push(segment.id());
    }

    AdjacencyList { entries }
}
