//! Shortest routes between points.

use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use super::adjacency::AdjacencyList;
use super::state::State;
use crate::domain::{PointId, SegmentId, Station};

/// Tolerance when checking a reconstructed step against the distance table.
const EPSILON: f64 = 1e-9;

/// Error from a shortest-path query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Both points exist but no sequence of segments joins them
    #[error("no route from point {start} to point {end}")]
    NotFound { start: PointId, end: PointId },

    /// The point is not an endpoint of any segment on the station
    #[error("point {0} is not on any segment of this station")]
    InvalidReference(PointId),

    /// The points are connected but every route between them sums past
    /// the largest representable length
    #[error("route from point {start} to point {end} is too long to measure")]
    LengthOverflow { start: PointId, end: PointId },

    /// The predecessor chain disagrees with the distance table
    #[error("route reconstruction failed at point {point}")]
    ReconstructionFault { point: PointId },
}

/// A shortest route: the segments to traverse, in order, and their total length.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    start: PointId,
    end: PointId,
    segments: Vec<SegmentId>,
    length: f64,
}

impl Route {
    pub fn start(&self) -> PointId {
        self.start
    }

    pub fn end(&self) -> PointId {
        self.end
    }

    /// Segments from start to end.
    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    /// Total route length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns true for the route from a point to itself.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The points visited, start and end included.
    ///
    /// Segments may be traversed against their defined direction, so each
    /// step follows whichever end is opposite the current point.
    pub fn points(&self, station: &Station) -> Vec<PointId> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        let mut current = self.start;
        points.push(current);
        for id in &self.segments {
            let Some(next) = station.segment(*id).and_then(|s| s.other_end(current)) else {
                break;
            };
            points.push(next);
            current = next;
        }
        points
    }
}

/// Find the shortest route from `start` to `end`.
///
/// Runs Dijkstra's algorithm with a binary heap over an adjacency list
/// freshly derived from the station's segments, stopping as soon as `end`
/// is settled. Segments are traversable in both directions.
///
/// When several segments offer the same best distance to a point, the one
/// seen first wins: points are expanded in order of distance then id, and a
/// point's segments in station definition order. The returned route always
/// uses exactly the segments that produced the final distance.
///
/// # Example
///
/// ```
/// use station_router::domain::{PointId, SegmentId, Station};
/// use station_router::graph::shortest_path;
///
/// let station = Station::builder()
///     .point(1, "A")
///     .point(2, "B")
///     .point(3, "C")
///     .segment(1, "A-B", 1, 2, 4.0)
///     .segment(2, "B-C", 2, 3, 4.0)
///     .segment(3, "A-C", 1, 3, 10.0)
///     .build()
///     .unwrap();
///
/// let route = shortest_path(&station, PointId(1), PointId(3)).unwrap();
/// assert_eq!(route.segments(), [SegmentId(1), SegmentId(2)]);
/// assert_eq!(route.length(), 8.0);
/// ```
pub fn shortest_path(
    station: &Station,
    start: PointId,
    end: PointId,
) -> Result<Route, RouteError> {
    let adjacency = station.adjacency();

    for point in [start, end] {
        if !adjacency.contains(point) {
            return Err(RouteError::InvalidReference(point));
        }
    }

    let mut distances: HashMap<PointId, f64> = adjacency
        .points()
        .into_iter()
        .map(|point| (point, f64::INFINITY))
        .collect();
    let mut previous: HashMap<PointId, (PointId, SegmentId)> = HashMap::new();
    let mut settled: HashSet<PointId> = HashSet::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start, 0.0);
    heap.push(State {
        cost: 0.0,
        point: start,
    });

    while let Some(State { cost, point }) = heap.pop() {
        // Stale entry for a point already finalised
        if !settled.insert(point) {
            continue;
        }

        trace!(point = %point, cost, "settled point");

        if point == end {
            break;
        }

        for &segment_id in adjacency.segments_at(point) {
            let Some(segment) = station.segment(segment_id) else {
                continue;
            };
            let Some(next) = segment.other_end(point) else {
                continue;
            };
            if settled.contains(&next) {
                continue;
            }

            let alt = cost + segment.length().get();
            let best = distances.entry(next).or_insert(f64::INFINITY);
            if alt < *best {
                *best = alt;
                previous.insert(next, (point, segment_id));
                heap.push(State {
                    cost: alt,
                    point: next,
                });
            }
        }
    }

    let length = distances.get(&end).copied().unwrap_or(f64::INFINITY);
    if length.is_infinite() {
        // Sums past f64::MAX never relax, so connected points can look unreached
        if connected(station, &adjacency, start, end) {
            debug!(start = %start, end = %end, "route length overflowed");
            return Err(RouteError::LengthOverflow { start, end });
        }
        debug!(start = %start, end = %end, "no route");
        return Err(RouteError::NotFound { start, end });
    }

    let segments = reconstruct(station, &distances, &previous, start, end)?;

    debug!(
        start = %start,
        end = %end,
        hops = segments.len(),
        length,
        "route found"
    );

    Ok(Route {
        start,
        end,
        segments,
        length,
    })
}

/// Whether any sequence of segments joins `start` to `end`, ignoring length.
fn connected(
    station: &Station,
    adjacency: &AdjacencyList,
    start: PointId,
    end: PointId,
) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(point) = queue.pop_front() {
        if point == end {
            return true;
        }
        for &segment_id in adjacency.segments_at(point) {
            let next = station
                .segment(segment_id)
                .and_then(|segment| segment.other_end(point));
            if let Some(next) = next {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    false
}

/// Walk the predecessor chain back from `end` and return the segments in
/// start → end order.
///
/// Every step must use a segment joining the two points whose length
/// accounts for the distance difference between them.
fn reconstruct(
    station: &Station,
    distances: &HashMap<PointId, f64>,
    previous: &HashMap<PointId, (PointId, SegmentId)>,
    start: PointId,
    end: PointId,
) -> Result<Vec<SegmentId>, RouteError> {
    let mut segments = Vec::new();
    let mut current = end;

    while current != start {
        let fault = RouteError::ReconstructionFault { point: current };

        // A chain longer than the distance table must contain a cycle
        if segments.len() > distances.len() {
            return Err(fault);
        }

        let &(prev, segment_id) = previous.get(&current).ok_or_else(|| fault.clone())?;
        let segment = station.segment(segment_id).ok_or_else(|| fault.clone())?;
        if !segment.connects(prev, current) {
            return Err(fault);
        }

        let (Some(&before), Some(&after)) = (distances.get(&prev), distances.get(&current)) else {
            return Err(fault);
        };
        let expected = before + segment.length().get();
        if (expected - after).abs() > EPSILON * after.abs().max(1.0) {
            return Err(fault);
        }

        segments.push(segment_id);
        current = prev;
    }

    segments.reverse();
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::demo_station;

    fn p(id: u32) -> PointId {
        PointId(id)
    }

    fn s(id: u32) -> SegmentId {
        SegmentId(id)
    }

    fn summed_length(station: &Station, route: &Route) -> f64 {
        route
            .segments()
            .iter()
            .map(|id| station.segment(*id).unwrap().length().get())
            .sum()
    }

    #[test]
    fn ring_shortcut_taken_against_segment_direction() {
        // Ring 1-2 (10), 2-3 (15), 3-4 (12), 4-1 (8): from 1 to 4 the
        // single segment 4->1 is used backwards.
        let station = demo_station().unwrap();
        let route = shortest_path(&station, p(1), p(4)).unwrap();

        assert_eq!(route.segments(), [s(4)]);
        assert_eq!(route.length(), 8.0);
        assert_eq!(route.points(&station), [p(1), p(4)]);
    }

    #[test]
    fn hand_computed_distances_on_demo_station() {
        let station = demo_station().unwrap();

        let route = shortest_path(&station, p(1), p(3)).unwrap();
        assert_eq!(route.segments(), [s(4), s(3)]);
        assert_eq!(route.length(), 20.0);
        assert_eq!(route.points(&station), [p(1), p(4), p(3)]);

        let route = shortest_path(&station, p(2), p(4)).unwrap();
        assert_eq!(route.segments(), [s(1), s(4)]);
        assert_eq!(route.length(), 18.0);

        let route = shortest_path(&station, p(1), p(2)).unwrap();
        assert_eq!(route.segments(), [s(1)]);
        assert_eq!(route.length(), 10.0);
    }

    #[test]
    fn route_length_matches_summed_segments() {
        let station = demo_station().unwrap();
        for start in 1..=4 {
            for end in 1..=4 {
                let route = shortest_path(&station, p(start), p(end)).unwrap();
                assert!((summed_length(&station, &route) - route.length()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn same_start_and_end_is_empty_route() {
        let station = demo_station().unwrap();
        let route = shortest_path(&station, p(3), p(3)).unwrap();

        assert!(route.is_empty());
        assert_eq!(route.length(), 0.0);
        assert_eq!(route.start(), p(3));
        assert_eq!(route.end(), p(3));
        assert_eq!(route.points(&station), [p(3)]);
    }

    #[test]
    fn disconnected_components_not_found() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "C")
            .point(4, "D")
            .segment(1, "A-B", 1, 2, 1.0)
            .segment(2, "C-D", 3, 4, 1.0)
            .build()
            .unwrap();

        assert_eq!(
            shortest_path(&station, p(1), p(4)),
            Err(RouteError::NotFound {
                start: p(1),
                end: p(4)
            })
        );
    }

    #[test]
    fn unknown_points_are_invalid_references() {
        let station = demo_station().unwrap();
        assert_eq!(
            shortest_path(&station, p(99), p(1)),
            Err(RouteError::InvalidReference(p(99)))
        );
        assert_eq!(
            shortest_path(&station, p(1), p(42)),
            Err(RouteError::InvalidReference(p(42)))
        );
    }

    #[test]
    fn isolated_point_is_invalid_reference() {
        // Declared on the station but not on any segment
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "lonely")
            .segment(1, "A-B", 1, 2, 1.0)
            .build()
            .unwrap();

        assert_eq!(
            shortest_path(&station, p(3), p(3)),
            Err(RouteError::InvalidReference(p(3)))
        );
    }

    #[test]
    fn zero_length_route_between_distinct_points() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .segment(1, "A-B", 1, 2, 0.0)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(2)).unwrap();
        assert_eq!(route.segments(), [s(1)]);
        assert_eq!(route.length(), 0.0);
        assert!(!route.is_empty());
    }

    #[test]
    fn huge_finite_lengths_still_route() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "C")
            .segment(1, "A-B", 1, 2, 1e300)
            .segment(2, "B-C", 2, 3, 1e300)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(3)).unwrap();
        assert_eq!(route.segments(), [s(1), s(2)]);
        assert_eq!(route.length(), 2e300);
    }

    #[test]
    fn overflowing_route_is_not_reported_as_missing() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "C")
            .segment(1, "A-B", 1, 2, 1e308)
            .segment(2, "B-C", 2, 3, 1e308)
            .build()
            .unwrap();

        // The first hop alone is still measurable
        assert_eq!(shortest_path(&station, p(1), p(2)).unwrap().length(), 1e308);
        assert_eq!(
            shortest_path(&station, p(1), p(3)),
            Err(RouteError::LengthOverflow {
                start: p(1),
                end: p(3)
            })
        );
    }

    #[test]
    fn overflow_elsewhere_does_not_hide_missing_route() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "C")
            .point(4, "D")
            .point(5, "E")
            .segment(1, "A-B", 1, 2, 1e308)
            .segment(2, "B-C", 2, 3, 1e308)
            .segment(3, "D-E", 4, 5, 1.0)
            .build()
            .unwrap();

        assert_eq!(
            shortest_path(&station, p(1), p(5)),
            Err(RouteError::NotFound {
                start: p(1),
                end: p(5)
            })
        );
    }

    #[test]
    fn parallel_segments_pick_shortest() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .segment(1, "long", 1, 2, 9.0)
            .segment(2, "short", 2, 1, 3.0)
            .segment(3, "medium", 1, 2, 5.0)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(2)).unwrap();
        assert_eq!(route.segments(), [s(2)]);
        assert_eq!(route.length(), 3.0);
    }

    #[test]
    fn parallel_segments_equal_length_first_defined_wins() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .segment(5, "first", 1, 2, 4.0)
            .segment(6, "second", 1, 2, 4.0)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(2)).unwrap();
        assert_eq!(route.segments(), [s(5)]);
    }

    #[test]
    fn prefers_many_short_hops_over_one_long() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "C")
            .point(4, "D")
            .segment(1, "A-D", 1, 4, 10.0)
            .segment(2, "A-B", 1, 2, 2.0)
            .segment(3, "B-C", 2, 3, 2.0)
            .segment(4, "C-D", 3, 4, 2.0)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(4)).unwrap();
        assert_eq!(route.segments(), [s(2), s(3), s(4)]);
        assert_eq!(route.length(), 6.0);
        assert_eq!(route.points(&station), [p(1), p(2), p(3), p(4)]);
    }

    #[test]
    fn loop_segment_is_ignored() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .segment(1, "loop", 1, 1, 1.0)
            .segment(2, "A-B", 1, 2, 7.0)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(2)).unwrap();
        assert_eq!(route.segments(), [s(2)]);
    }

    #[test]
    fn reconstruction_with_missing_predecessor_is_fault() {
        let station = demo_station().unwrap();
        let distances = HashMap::from([(p(1), 0.0), (p(2), 10.0)]);
        let previous = HashMap::new();

        assert_eq!(
            reconstruct(&station, &distances, &previous, p(1), p(2)),
            Err(RouteError::ReconstructionFault { point: p(2) })
        );
    }

    #[test]
    fn reconstruction_with_inconsistent_distance_is_fault() {
        let station = demo_station().unwrap();
        // Segment 1 is 10 long, but the table claims 11
        let distances = HashMap::from([(p(1), 0.0), (p(2), 11.0)]);
        let previous = HashMap::from([(p(2), (p(1), s(1)))]);

        assert_eq!(
            reconstruct(&station, &distances, &previous, p(1), p(2)),
            Err(RouteError::ReconstructionFault { point: p(2) })
        );
    }

    #[test]
    fn reconstruction_with_wrong_segment_is_fault() {
        let station = demo_station().unwrap();
        // Segment 3 joins 3 and 4, not 1 and 2
        let distances = HashMap::from([(p(1), 0.0), (p(2), 12.0)]);
        let previous = HashMap::from([(p(2), (p(1), s(3)))]);

        assert_eq!(
            reconstruct(&station, &distances, &previous, p(1), p(2)),
            Err(RouteError::ReconstructionFault { point: p(2) })
        );
    }

    #[test]
    fn reconstruction_cycle_is_fault() {
        let station = demo_station().unwrap();
        let distances = HashMap::from([(p(1), 0.0), (p(2), 0.0), (p(3), 0.0)]);
        let previous = HashMap::from([(p(2), (p(3), s(2))), (p(3), (p(2), s(2)))]);

        assert!(matches!(
            reconstruct(&station, &distances, &previous, p(1), p(2)),
            Err(RouteError::ReconstructionFault { .. })
        ));
    }

    #[test]
    fn reconstruction_tolerates_rounding() {
        let station = Station::builder()
            .point(1, "A")
            .point(2, "B")
            .point(3, "C")
            .segment(1, "A-B", 1, 2, 0.1)
            .segment(2, "B-C", 2, 3, 0.2)
            .build()
            .unwrap();

        let route = shortest_path(&station, p(1), p(3)).unwrap();
        assert_eq!(route.segments(), [s(1), s(2)]);
        assert!((route.length() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn error_display() {
        let err = RouteError::NotFound {
            start: p(1),
            end: p(2),
        };
        assert_eq!(err.to_string(), "no route from point 1 to point 2");

        let err = RouteError::InvalidReference(p(9));
        assert_eq!(
            err.to_string(),
            "point 9 is not on any segment of this station"
        );

        let err = RouteError::LengthOverflow {
            start: p(1),
            end: p(3),
        };
        assert_eq!(
            err.to_string(),
            "route from point 1 to point 3 is too long to measure"
        );

        let err = RouteError::ReconstructionFault { point: p(3) };
        assert_eq!(err.to_string(), "route reconstruction failed at point 3");
    }
}
