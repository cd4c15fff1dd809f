//! Graph construction from a [`CostGrid`].
//!
//! Each passable cell becomes a [`Vertex`]; each vertex gets a directed edge
//! to every passable cardinal neighbor. Both directions of an adjacency are
//! materialized by their own scan, so the graph is symmetric.

use costpath_core::{Bounds, Coordinate, Cost, CostGrid};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Flat charge for every step, on top of the entered cell's cost.
pub const STEP_COST: i64 = 1;

/// A passable cell and its traversal cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub coordinate: Coordinate,
    pub cost: Cost,
}

/// Adjacency structure over the passable cells of a grid.
///
/// Storage is dense over [`Bounds`]: a vertex slot per cell (empty for
/// impassable cells) and an adjacency list per slot.
#[derive(Debug, Clone)]
pub struct Graph {
    bounds: Bounds,
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Vec<Coordinate>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph able to hold vertices inside `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            vertices: vec![None; bounds.len()],
            edges: vec![Vec::new(); bounds.len()],
            edge_count: 0,
        }
    }

    /// Build the 4-connected graph of `grid`.
    pub fn build(grid: &CostGrid) -> Self {
        let mut graph = Self::new(grid.bounds());

        for (p, cost) in grid.iter() {
            if cost.is_passable() {
                let added = graph.add_vertex(p, cost);
                debug_assert!(added.is_ok(), "{added:?}");
            }
        }

        let mut nb = Neighbors::new();
        for p in grid.bounds() {
            if !grid.is_passable(p) {
                continue;
            }
            for &n in nb.cardinal(p, |n| grid.is_passable(n)) {
                let added = graph.add_edge(p, n);
                debug_assert!(added.is_ok(), "{added:?}");
            }
        }

        log::debug!(
            "built graph over {}: {} vertices, {} edges",
            grid.bounds(),
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// The rectangle the graph is defined over.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Add a vertex. Impassable costs and out-of-bounds coordinates are
    /// rejected with [`SearchError::UnknownVertex`].
    pub fn add_vertex(&mut self, coordinate: Coordinate, cost: Cost) -> Result<(), SearchError> {
        let idx = self
            .bounds
            .index(coordinate)
            .filter(|_| cost.is_passable())
            .ok_or(SearchError::UnknownVertex(coordinate))?;
        let slot = &mut self.vertices[idx];
        if slot.is_some() {
            return Err(SearchError::DuplicateVertex(coordinate));
        }
        *slot = Some(Vertex { coordinate, cost });
        Ok(())
    }

    /// Get the vertex at `p`, if any.
    pub fn vertex(&self, p: Coordinate) -> Option<Vertex> {
        self.bounds.index(p).and_then(|i| self.vertices[i])
    }

    /// Add the directed edge `from -> to`. Both ends must be vertices.
    pub fn add_edge(&mut self, from: Coordinate, to: Coordinate) -> Result<(), SearchError> {
        debug_assert_ne!(from, to, "self-loops are not allowed");
        let fi = self.vertex_index(from)?;
        self.vertex_index(to)?;
        let list = &mut self.edges[fi];
        if list.contains(&to) {
            return Err(SearchError::DuplicateEdge { from, to });
        }
        list.push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Coordinates reachable in one step from `p`.
    ///
    /// Fails with [`SearchError::NoNeighbors`] when `p` has no adjacency
    /// entry, e.g. a cell walled in on all four sides.
    pub fn neighbors_of(&self, p: Coordinate) -> Result<&[Coordinate], SearchError> {
        let idx = self.vertex_index(p)?;
        let list = &self.edges[idx];
        if list.is_empty() {
            return Err(SearchError::NoNeighbors(p));
        }
        Ok(list.as_slice())
    }

    /// Iterate over all vertices in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().flatten().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_some()).count()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex_index(&self, p: Coordinate) -> Result<usize, SearchError> {
        self.bounds
            .index(p)
            .filter(|&i| self.vertices[i].is_some())
            .ok_or(SearchError::UnknownVertex(p))
    }
}

impl Pather for Graph {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn neighbors(&self, p: Coordinate, buf: &mut Vec<Coordinate>) -> Result<(), SearchError> {
        buf.extend_from_slice(self.neighbors_of(p)?);
        Ok(())
    }
}

impl WeightedPather for Graph {
    fn origin_cost(&self, p: Coordinate) -> Option<i64> {
        self.vertex(p).map(|v| i64::from(v.cost.value()))
    }

    fn cost(&self, _from: Coordinate, to: Coordinate) -> i64 {
        self.vertex(to)
            .map_or(i64::MAX, |v| i64::from(v.cost.value()) + STEP_COST)
    }
}

impl AstarPather for Graph {
    fn estimate(&self, from: Coordinate, to: Coordinate) -> i64 {
        manhattan(from, to)
    }
}
