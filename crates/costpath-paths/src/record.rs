use costpath_core::{Bounds, Coordinate};

/// Best known cost of a visited coordinate and the step that achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    /// Cumulative cost from the start, including the start cell's own cost.
    pub cost: i64,
    /// `None` only for the start.
    pub predecessor: Option<Coordinate>,
}

// ---------------------------------------------------------------------------
// Internal frontier entry for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Reference into the record, ordered by `f` for use in `BinaryHeap`.
///
/// `g` is the cost the entry was pushed with; once the record holds a lower
/// cost for `idx` the entry is stale. `seq` breaks `f` ties in insertion
/// order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: i64,
    pub(crate) f: i64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchRecord
// ---------------------------------------------------------------------------

/// Per-coordinate best cost and predecessor, produced by a search.
///
/// Entries are only ever added or improved while the search runs; callers
/// get read-only access.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    bounds: Bounds,
    visits: Vec<Option<Visit>>,
    len: usize,
}

impl SearchRecord {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            visits: vec![None; bounds.len()],
            len: 0,
        }
    }

    /// Store `visit` for the coordinate at flat index `idx`.
    pub(crate) fn set(&mut self, idx: usize, visit: Visit) {
        let slot = &mut self.visits[idx];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(visit);
    }

    #[inline]
    pub(crate) fn at_index(&self, idx: usize) -> Option<Visit> {
        self.visits[idx]
    }

    /// The record entry for `p`, if it was visited.
    pub fn get(&self, p: Coordinate) -> Option<Visit> {
        self.bounds.index(p).and_then(|i| self.visits[i])
    }

    /// Best known cumulative cost of `p`.
    pub fn cost(&self, p: Coordinate) -> Option<i64> {
        self.get(p).map(|v| v.cost)
    }

    pub fn contains(&self, p: Coordinate) -> bool {
        self.get(p).is_some()
    }

    /// Number of visited coordinates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Iterate over visited coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Visit)> + '_ {
        self.visits
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (self.bounds.coordinate(i), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn set_counts_new_entries_only() {
        let mut r = SearchRecord::new(Bounds::new(3, 3));
        assert!(r.is_empty());
        let p = Coordinate::new(1, 2);
        let idx = r.bounds().index(p).unwrap();
        r.set(idx, Visit { cost: 9, predecessor: None });
        r.set(
            idx,
            Visit {
                cost: 4,
                predecessor: Some(Coordinate::new(1, 1)),
            },
        );
        assert_eq!(r.len(), 1);
        assert_eq!(r.cost(p), Some(4));
        assert_eq!(r.get(p).and_then(|v| v.predecessor), Some(Coordinate::new(1, 1)));
        assert!(!r.contains(Coordinate::new(0, 0)));
        assert_eq!(r.iter().map(|(c, _)| c).collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn heap_pops_lowest_f_then_oldest() {
        let mut open = BinaryHeap::new();
        open.push(NodeRef { idx: 0, g: 0, f: 5, seq: 0 });
        open.push(NodeRef { idx: 1, g: 0, f: 3, seq: 1 });
        open.push(NodeRef { idx: 2, g: 0, f: 3, seq: 2 });
        open.push(NodeRef { idx: 3, g: 0, f: 4, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| open.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
