//! Interactive numbered menu.
//!
//! Reads choices and ids line by line from any `BufRead` and writes the
//! reports to any `Write`, so the binary can drive it from stdin/stdout and
//! tests from in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, error};

use crate::domain::{Park, ParkId, PointId, Station};
use crate::graph::{RouteError, shortest_path};
use crate::parks::{QueryError, vertex_set_of_park};
use crate::report;

/// The menu text shown before every choice.
pub const MENU: &str = "\
Choose an operation:
1. Show park fills.
2. Find the shortest route between points.
3. List parks.
4. List the vertices of a park.
5. List station segments.
6. Quit.
";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FillReport,
    ShortestPath,
    ListParks,
    ParkVertices,
    ListSegments,
    Quit,
}

impl MenuChoice {
    /// Parse a menu number, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::FillReport),
            "2" => Some(MenuChoice::ShortestPath),
            "3" => Some(MenuChoice::ListParks),
            "4" => Some(MenuChoice::ParkVertices),
            "5" => Some(MenuChoice::ListSegments),
            "6" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Run the menu until the user quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    station: &Station,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        write!(output, "{MENU}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "Invalid choice. Please pick an existing operation.")?;
            continue;
        };
        debug!(?choice, "menu selection");

        let text = match choice {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::FillReport => report::format_fill(station),
            MenuChoice::ShortestPath => {
                let Some(start) = prompt_id(&mut input, &mut output, "Enter start point (id): ")?
                else {
                    continue;
                };
                let Some(end) = prompt_id(&mut input, &mut output, "Enter end point (id): ")?
                else {
                    continue;
                };
                route_report(station, PointId(start), PointId(end))
            }
            MenuChoice::ListParks => report::format_parks(station),
            MenuChoice::ParkVertices => {
                let Some(park) = prompt_id(&mut input, &mut output, "Enter park (id): ")? else {
                    continue;
                };
                park_vertices_report(station, ParkId(park))
            }
            MenuChoice::ListSegments => report::format_segments(station),
        };

        writeln!(output, "{text}")?;
    }
}

/// Print `prompt` and read one numeric id.
///
/// Returns `None` after telling the user when the answer is not a number.
fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<u32>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let id = line.trim().parse().ok();
    if id.is_none() {
        writeln!(output, "Invalid number.")?;
    }
    Ok(id)
}

fn route_report(station: &Station, start: PointId, end: PointId) -> String {
    match shortest_path(station, start, end) {
        Ok(route) => report::format_route(station, &route),
        Err(RouteError::InvalidReference(_)) => "Invalid point ids.".to_string(),
        Err(RouteError::NotFound { .. }) => "No route exists.".to_string(),
        Err(RouteError::LengthOverflow { .. }) => {
            "Route length exceeds the measurable range.".to_string()
        }
        Err(err @ RouteError::ReconstructionFault { .. }) => {
            error!(error = %err, start = %start, end = %end, "shortest path failed");
            format!("Internal error: {err}")
        }
    }
}

fn park_vertices_report(station: &Station, park: ParkId) -> String {
    match vertex_set_of_park(station, park) {
        Ok(vertices) => {
            let name = station.park(park).map(Park::name).unwrap_or_default();
            report::format_park_vertices(station, name, &vertices)
        }
        Err(QueryError::ParkNotFound(id)) => format!("Park {id} not found."),
        Err(err) => err.to_string(),
    }
}
