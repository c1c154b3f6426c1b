//! Plain-text reports over station queries.
//!
//! Every function returns the finished text without a trailing newline;
//! callers decide where it goes.

use std::collections::BTreeSet;

use crate::domain::{PointId, Station};
use crate::graph::Route;
use crate::parks::fill_report;

/// One line per park, each followed by its paths.
pub fn format_fill(station: &Station) -> String {
    let fill = fill_report(station);
    if fill.is_empty() {
        return "No parks on this station.".to_string();
    }

    let mut lines = Vec::new();
    for entry in fill {
        lines.push(format!("Park {} {}", entry.park.id(), entry.park.name()));
        for path in entry.paths {
            lines.push(format!("  Path {} {}", path.id(), path.name()));
        }
    }
    lines.join("\n")
}

/// Numbered list of parks.
pub fn format_parks(station: &Station) -> String {
    if station.parks().is_empty() {
        return "No parks on this station.".to_string();
    }
    station
        .parks()
        .iter()
        .map(|park| format!("Park {}. {}", park.id(), park.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered list of segments.
pub fn format_segments(station: &Station) -> String {
    if station.segments().is_empty() {
        return "No segments on this station.".to_string();
    }
    station
        .segments()
        .iter()
        .map(|segment| format!("Segment {}. {}", segment.id(), segment.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading naming the park, then one `id, name` line per vertex.
pub fn format_park_vertices(
    station: &Station,
    park_name: &str,
    vertices: &BTreeSet<PointId>,
) -> String {
    let mut lines = vec![format!("Vertices of park '{park_name}':")];
    for id in vertices {
        let name = station.point(*id).map(|p| p.name()).unwrap_or("?");
        lines.push(format!("{id}, {name}"));
    }
    lines.join("\n")
}

/// Segment names joined by arrows, then the route length.
pub fn format_route(station: &Station, route: &Route) -> String {
    let hops = if route.is_empty() {
        "(already there)".to_string()
    } else {
        route
            .segments()
            .iter()
            .map(|id| match station.segment(*id) {
                Some(segment) => segment.name().to_string(),
                None => id.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    };
    format!("Shortest route: {hops}\nRoute length: {}", route.length())
}
