use std::cmp::Ordering;

use crate::domain::PointId;

/// Frontier entry for Dijkstra's algorithm.
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: f64,
    pub(super) point: PointId,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap), ties broken
// towards the smaller point id so the settle order is deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.point.cmp(&self.point))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
