//! Demo station data.
//!
//! A small four-point ring with overlapping paths and parks, used by the
//! interactive menu and the HTTP server when no other data is supplied.

use crate::domain::{Station, StationError};

/// Build the demo station.
///
/// Points 1 to 4 are joined in a ring:
///
/// | Segment | From | To | Length |
/// |---------|------|----|--------|
/// | 1       | 1    | 2  | 10     |
/// | 2       | 2    | 3  | 15     |
/// | 3       | 3    | 4  | 12     |
/// | 4       | 4    | 1  | 8      |
///
/// Paths 1 to 4 each cover two consecutive segments and are grouped into
/// three parks. Paths 5 and 6 belong to no park.
pub fn demo_station() -> Result<Station, StationError> {
    Station::builder()
        .point(1, "Point1")
        .point(2, "Point2")
        .point(3, "Point3")
        .point(4, "Point4")
        .segment(1, "Segment1", 1, 2, 10.0)
        .segment(2, "Segment2", 2, 3, 15.0)
        .segment(3, "Segment3", 3, 4, 12.0)
        .segment(4, "Segment4", 4, 1, 8.0)
        .path(1, "Path1", [1, 2])
        .path(2, "Path2", [2, 3])
        .path(3, "Path3", [3, 4])
        .path(4, "Path4", [4, 1])
        .path(5, "PathWithoutPark1", [1, 3])
        .path(6, "PathWithoutPark2", [2, 4])
        .park(1, "Park1", [1, 2])
        .park(2, "Park2", [3, 4])
        .park(3, "Park3", [2, 3])
        .build()
}
