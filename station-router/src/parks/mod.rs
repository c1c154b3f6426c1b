//! Membership queries over paths and parks.
//!
//! These queries read the station's path and park collections directly and
//! do not depend on the adjacency list.

use std::collections::BTreeSet;

use crate::domain::{Park, ParkId, Path, PathId, PointId, Station};

/// Error from a park or path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No park with this id exists on the station
    #[error("park {0} not found")]
    ParkNotFound(ParkId),

    /// No path with this id exists on the station
    #[error("path {0} not found")]
    PathNotFound(PathId),
}

/// A park together with its resolved paths.
#[derive(Debug, Clone)]
pub struct ParkFill<'a> {
    pub park: &'a Park,
    pub paths: Vec<&'a Path>,
}

/// Every point touched by a segment of the given path.
pub fn vertex_set_of_path(
    station: &Station,
    path: PathId,
) -> Result<BTreeSet<PointId>, QueryError> {
    let path = station.path(path).ok_or(QueryError::PathNotFound(path))?;
    Ok(path_vertices(station, path).collect())
}

/// Every point touched by a segment of any path in the given park.
///
/// Points shared between segments or paths appear once.
///
/// # Example
///
/// ```
/// use station_router::domain::{ParkId, PointId, Station};
/// use station_router::parks::vertex_set_of_park;
///
/// let station = Station::builder()
///     .point(1, "A")
///     .point(2, "B")
///     .point(3, "C")
///     .segment(1, "A-B", 1, 2, 1.0)
///     .segment(2, "B-C", 2, 3, 1.0)
///     .path(1, "p", [1, 2])
///     .park(1, "Yard", [1])
///     .build()
///     .unwrap();
///
/// let vertices = vertex_set_of_park(&station, ParkId(1)).unwrap();
/// assert_eq!(vertices.into_iter().collect::<Vec<_>>(), [PointId(1), PointId(2), PointId(3)]);
/// assert!(vertex_set_of_park(&station, ParkId(2)).is_err());
/// ```
pub fn vertex_set_of_park(
    station: &Station,
    park: ParkId,
) -> Result<BTreeSet<PointId>, QueryError> {
    let park = station.park(park).ok_or(QueryError::ParkNotFound(park))?;
    Ok(station
        .park_paths(park)
        .flat_map(|path| path_vertices(station, path))
        .collect())
}

/// Parks containing at least one path, in station order.
pub fn parks_with_at_least_one_path(station: &Station) -> Vec<&Park> {
    station.parks().iter().filter(|park| park.has_paths()).collect()
}

/// Every park with its paths resolved, in station order.
///
/// Parks without paths are included with an empty path list.
pub fn fill_report(station: &Station) -> Vec<ParkFill<'_>> {
    station
        .parks()
        .iter()
        .map(|park| ParkFill {
            park,
            paths: station.park_paths(park).collect(),
        })
        .collect()
}

fn path_vertices<'a>(
    station: &'a Station,
    path: &'a Path,
) -> impl Iterator<Item = PointId> + 'a {
    station
        .path_segments(path)
        .flat_map(|segment| [segment.start(), segment.end()])
}
