//! Data transfer objects for web requests and responses.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Park, ParkId, Path, PathId, Point, PointId, Segment, SegmentId, Station,
};
use crate::graph::Route;

/// Query for a shortest route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start point id
    pub from: u32,

    /// End point id
    pub to: u32,
}

/// A point in responses.
#[derive(Debug, Serialize)]
pub struct PointResult {
    pub id: PointId,
    pub name: String,
}

impl PointResult {
    pub fn from_point(point: &Point) -> Self {
        Self {
            id: point.id(),
            name: point.name().to_string(),
        }
    }
}

/// A segment in responses.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub id: SegmentId,
    pub name: String,
    pub start: PointId,
    pub end: PointId,
    pub length: f64,
}

impl SegmentResult {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            id: segment.id(),
            name: segment.name().to_string(),
            start: segment.start(),
            end: segment.end(),
            length: segment.length().get(),
        }
    }
}

/// Response for a shortest route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: PointId,
    pub to: PointId,

    /// Segments to traverse, in order
    pub segments: Vec<SegmentResult>,

    /// Points visited, start and end included
    pub points: Vec<PointResult>,

    /// Total route length
    pub length: f64,
}

impl RouteResponse {
    pub fn from_route(station: &Station, route: &Route) -> Self {
        let segments = route
            .segments()
            .iter()
            .filter_map(|id| station.segment(*id))
            .map(SegmentResult::from_segment)
            .collect();

        let points = route
            .points(station)
            .into_iter()
            .filter_map(|id| station.point(id))
            .map(PointResult::from_point)
            .collect();

        Self {
            from: route.start(),
            to: route.end(),
            segments,
            points,
            length: route.length(),
        }
    }
}

/// A path in responses.
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub id: PathId,
    pub name: String,

    /// Ids of the path's segments, in order
    pub segments: Vec<SegmentId>,
}

impl PathResult {
    pub fn from_path(path: &Path) -> Self {
        Self {
            id: path.id(),
            name: path.name().to_string(),
            segments: path.segments().to_vec(),
        }
    }
}

/// Response listing paths.
#[derive(Debug, Serialize)]
pub struct PathsResponse {
    pub paths: Vec<PathResult>,
}

/// Response for the vertices of one path.
#[derive(Debug, Serialize)]
pub struct PathVerticesResponse {
    pub path: PathResult,
    pub vertices: Vec<PointResult>,
}

impl PathVerticesResponse {
    pub fn new(station: &Station, path: &Path, vertices: &BTreeSet<PointId>) -> Self {
        Self {
            path: PathResult::from_path(path),
            vertices: point_results(station, vertices),
        }
    }
}

/// A park in responses.
#[derive(Debug, Serialize)]
pub struct ParkResult {
    pub id: ParkId,
    pub name: String,

    /// Ids of the paths in the park
    pub paths: Vec<PathId>,
}

impl ParkResult {
    pub fn from_park(park: &Park) -> Self {
        Self {
            id: park.id(),
            name: park.name().to_string(),
            paths: park.paths().to_vec(),
        }
    }
}

/// Response listing parks.
#[derive(Debug, Serialize)]
pub struct ParksResponse {
    pub parks: Vec<ParkResult>,
}

/// Response for the vertices of one park.
#[derive(Debug, Serialize)]
pub struct ParkVerticesResponse {
    pub park: ParkResult,
    pub vertices: Vec<PointResult>,
}

impl ParkVerticesResponse {
    pub fn new(station: &Station, park: &Park, vertices: &BTreeSet<PointId>) -> Self {
        Self {
            park: ParkResult::from_park(park),
            vertices: point_results(station, vertices),
        }
    }
}

fn point_results(station: &Station, vertices: &BTreeSet<PointId>) -> Vec<PointResult> {
    vertices
        .iter()
        .filter_map(|id| station.point(*id))
        .map(PointResult::from_point)
        .collect()
}

/// Response listing segments.
#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub segments: Vec<SegmentResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
