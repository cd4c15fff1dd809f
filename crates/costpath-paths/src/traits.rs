use costpath_core::{Bounds, Coordinate};

use crate::error::SearchError;

/// Minimal pathfinding interface: bounds and neighbor enumeration.
pub trait Pather {
    /// Rectangle covering every coordinate the pather can yield.
    fn bounds(&self) -> Bounds;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// [`SearchError::NoNeighbors`] marks a dead end; searches keep going.
    fn neighbors(&self, p: Coordinate, buf: &mut Vec<Coordinate>) -> Result<(), SearchError>;
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost charged for standing on `p` at the start of a search, or `None`
    /// if `p` is not a vertex.
    fn origin_cost(&self, p: Coordinate) -> Option<i64>;

    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Coordinate, to: Coordinate) -> i64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coordinate, to: Coordinate) -> i64;
}
