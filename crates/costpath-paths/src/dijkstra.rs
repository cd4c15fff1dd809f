use std::collections::BinaryHeap;

use costpath_core::{Bounds, Coordinate};

use crate::error::SearchError;
use crate::record::NodeRef;
use crate::traits::WeightedPather;

/// Cheapest known cost from a single source to every reachable coordinate.
#[derive(Debug, Clone)]
pub struct CostMap {
    bounds: Bounds,
    costs: Vec<Option<i64>>,
}

impl CostMap {
    /// Cost to reach `p`, or `None` if it is unreachable or outside the map.
    pub fn at(&self, p: Coordinate) -> Option<i64> {
        self.bounds.index(p).and_then(|i| self.costs[i])
    }

    /// Number of reachable coordinates, the source included.
    pub fn reachable(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }
}

/// Compute an exhaustive single-source Dijkstra cost map.
///
/// Costs follow the same accounting as [`astar`](crate::astar): the source
/// starts at its own cell cost and each step adds
/// [`WeightedPather::cost`]. There is no heuristic and no early exit.
pub fn dijkstra_costs<P: WeightedPather>(
    pather: &P,
    source: Coordinate,
) -> Result<CostMap, SearchError> {
    let bounds = pather.bounds();
    let source_cost = pather
        .origin_cost(source)
        .ok_or(SearchError::UnknownVertex(source))?;
    let si = bounds
        .index(source)
        .ok_or(SearchError::UnknownVertex(source))?;

    let mut costs = vec![None; bounds.len()];
    costs[si] = Some(source_cost);

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: si,
        g: source_cost,
        f: source_cost,
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if costs[ci].is_some_and(|known| current.g > known) {
            continue;
        }
        let cp = bounds.coordinate(ci);

        nbuf.clear();
        match pather.neighbors(cp, &mut nbuf) {
            Ok(()) => {}
            Err(SearchError::NoNeighbors(_)) => continue,
            Err(err) => return Err(err),
        }

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let tentative = current.g.saturating_add(pather.cost(cp, np));
            if costs[ni].is_some_and(|known| tentative >= known) {
                continue;
            }
            costs[ni] = Some(tentative);
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                g: tentative,
                f: tentative,
                seq,
            });
        }
    }

    Ok(CostMap { bounds, costs })
}
