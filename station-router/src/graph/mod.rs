//! Routing over the station graph.
//!
//! The adjacency list is derived from a station's segments on demand and
//! the shortest-path engine runs Dijkstra's algorithm over it. Segments are
//! traversed in both directions at the same cost.

mod adjacency;
mod dijkstra;
mod state;

pub use adjacency::{AdjacencyList, build_adjacency};
pub use dijkstra::{Route, RouteError, shortest_path};
