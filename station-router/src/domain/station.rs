//! The station aggregate and its builder.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use tracing::debug;

use super::{
    EntityKind, Park, ParkId, Path, PathId, Point, PointId, Segment, SegmentId, StationError,
};
use crate::graph::{AdjacencyList, build_adjacency};

/// A railway station: points, segments, paths and parks.
///
/// Entities live in insertion-ordered vectors with an id → index map per
/// kind. Every id a segment, path or park refers to is guaranteed to resolve,
/// because [`StationBuilder::build`] rejects dangling references.
#[derive(Debug, Clone, Default)]
pub struct Station {
    points: Vec<Point>,
    segments: Vec<Segment>,
    paths: Vec<Path>,
    parks: Vec<Park>,
    point_index: HashMap<PointId, usize>,
    segment_index: HashMap<SegmentId, usize>,
    path_index: HashMap<PathId, usize>,
    park_index: HashMap<ParkId, usize>,
}

impl Station {
    /// Start building a station.
    pub fn builder() -> StationBuilder {
        StationBuilder::new()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All paths registered on the station, in insertion order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.point_index.get(&id).map(|&idx| &self.points[idx])
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segment_index.get(&id).map(|&idx| &self.segments[idx])
    }

    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.path_index.get(&id).map(|&idx| &self.paths[idx])
    }

    pub fn park(&self, id: ParkId) -> Option<&Park> {
        self.park_index.get(&id).map(|&idx| &self.parks[idx])
    }

    /// The segments of `path`, in path order.
    pub fn path_segments<'a>(
        &'a self,
        path: &'a Path,
    ) -> impl Iterator<Item = &'a Segment> + 'a {
        path.segments().iter().filter_map(|id| self.segment(*id))
    }

    /// The paths of `park`, in park order.
    pub fn park_paths<'a>(
        &'a self,
        park: &'a Park,
    ) -> impl Iterator<Item = &'a Path> + 'a {
        park.paths().iter().filter_map(|id| self.path(*id))
    }

    /// Paths that do not belong to any park.
    pub fn free_paths(&self) -> Vec<&Path> {
        self.paths
            .iter()
            .filter(|path| {
                !self
                    .parks
                    .iter()
                    .any(|park| park.paths().contains(&path.id()))
            })
            .collect()
    }

    /// Derive the adjacency list from the current segment collection.
    ///
    /// Recomputed on every call; nothing is cached on the station.
    pub fn adjacency(&self) -> AdjacencyList {
        build_adjacency(&self.segments)
    }
}

/// Segment definition awaiting validation.
#[derive(Debug)]
struct SegmentDef {
    id: SegmentId,
    name: String,
    start: PointId,
    end: PointId,
    length: f64,
}

/// Builder for creating stations.
///
/// Provides a fluent API for declaring entities; all validation happens in
/// [`build`](StationBuilder::build).
///
/// # Example
///
/// ```
/// use station_router::domain::{PointId, Station};
///
/// let station = Station::builder()
///     .point(1, "A")
///     .point(2, "B")
///     .segment(1, "A-B", 1, 2, 10.0)
///     .path(1, "Main", [1])
///     .park(1, "Yard", [1])
///     .build()
///     .unwrap();
///
/// assert_eq!(station.segments().len(), 1);
/// assert_eq!(station.point(PointId(2)).unwrap().name(), "B");
/// ```
#[derive(Debug, Default)]
pub struct StationBuilder {
    points: Vec<Point>,
    segments: Vec<SegmentDef>,
    paths: Vec<Path>,
    parks: Vec<Park>,
}

impl StationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point.
    pub fn point(mut self, id: impl Into<PointId>, name: impl Into<String>) -> Self {
        self.points.push(Point::new(id.into(), name));
        self
    }

    /// Add a segment from `start` to `end`.
    pub fn segment(
        mut self,
        id: impl Into<SegmentId>,
        name: impl Into<String>,
        start: impl Into<PointId>,
        end: impl Into<PointId>,
        length: f64,
    ) -> Self {
        self.segments.push(SegmentDef {
            id: id.into(),
            name: name.into(),
            start: start.into(),
            end: end.into(),
            length,
        });
        self
    }

    /// Add a path made of the given segments, in order.
    pub fn path<S: Into<SegmentId>>(
        mut self,
        id: impl Into<PathId>,
        name: impl Into<String>,
        segments: impl IntoIterator<Item = S>,
    ) -> Self {
        let segments = segments.into_iter().map(Into::into).collect();
        self.paths.push(Path::new(id.into(), name, segments));
        self
    }

    /// Add a park made of the given paths.
    pub fn park<P: Into<PathId>>(
        mut self,
        id: impl Into<ParkId>,
        name: impl Into<String>,
        paths: impl IntoIterator<Item = P>,
    ) -> Self {
        let paths = paths.into_iter().map(Into::into).collect();
        self.parks.push(Park::new(id.into(), name, paths));
        self
    }

    /// Validate all definitions and build the station.
    pub fn build(self) -> Result<Station, StationError> {
        let mut station = Station::default();

        for (idx, point) in self.points.iter().enumerate() {
            insert_unique(&mut station.point_index, point.id(), idx, EntityKind::Point)?;
        }
        station.points = self.points;

        for (idx, def) in self.segments.into_iter().enumerate() {
            insert_unique(&mut station.segment_index, def.id, idx, EntityKind::Segment)?;
            for endpoint in [def.start, def.end] {
                if !station.point_index.contains_key(&endpoint) {
                    return Err(StationError::InvalidReference {
                        kind: EntityKind::Segment,
                        id: def.id.get(),
                        target: EntityKind::Point,
                        target_id: endpoint.get(),
                    });
                }
            }
            let segment = Segment::new(def.id, def.name, def.start, def.end, def.length)
                .map_err(|source| StationError::InvalidLength {
                    segment: def.id,
                    source,
                })?;
            station.segments.push(segment);
        }

        for (idx, path) in self.paths.iter().enumerate() {
            insert_unique(&mut station.path_index, path.id(), idx, EntityKind::Path)?;
            if let Some(missing) = path
                .segments()
                .iter()
                .find(|id| !station.segment_index.contains_key(*id))
            {
                return Err(StationError::InvalidReference {
                    kind: EntityKind::Path,
                    id: path.id().get(),
                    target: EntityKind::Segment,
                    target_id: missing.get(),
                });
            }
        }
        station.paths = self.paths;

        for (idx, park) in self.parks.iter().enumerate() {
            insert_unique(&mut station.park_index, park.id(), idx, EntityKind::Park)?;
            if let Some(missing) = park
                .paths()
                .iter()
                .find(|id| !station.path_index.contains_key(*id))
            {
                return Err(StationError::InvalidReference {
                    kind: EntityKind::Park,
                    id: park.id().get(),
                    target: EntityKind::Path,
                    target_id: missing.get(),
                });
            }
        }
        station.parks = self.parks;

        debug!(
            points = station.points.len(),
            segments = station.segments.len(),
            paths = station.paths.len(),
            parks = station.parks.len(),
            "station built"
        );

        Ok(station)
    }
}

/// Record `id → idx`, rejecting ids already present.
fn insert_unique<K>(
    index: &mut HashMap<K, usize>,
    id: K,
    idx: usize,
    kind: EntityKind,
) -> Result<(), StationError>
where
    K: Copy + Eq + Hash + Into<u32>,
{
    match index.entry(id) {
        Entry::Occupied(_) => Err(StationError::DuplicateId {
            kind,
            id: id.into(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(idx);
            Ok(())
        }
    }
}
