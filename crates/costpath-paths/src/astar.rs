use std::collections::BinaryHeap;

use costpath_core::Coordinate;

use crate::error::SearchError;
use crate::record::{NodeRef, SearchRecord, Visit};
use crate::traits::AstarPather;

/// Run A* from `start` to `goal` and return the search record.
///
/// The record starts with `start` at the cost of its own cell. Every step
/// adds [`WeightedPather::cost`](crate::WeightedPather::cost). The search
/// stops the first time `goal` is popped from the frontier; ties in `f`
/// are popped in insertion order.
///
/// Fails with [`SearchError::UnknownVertex`] if either endpoint is not a
/// vertex, and [`SearchError::UnreachableGoal`] if the frontier empties
/// first.
pub fn astar<P: AstarPather>(
    pather: &P,
    start: Coordinate,
    goal: Coordinate,
) -> Result<SearchRecord, SearchError> {
    let bounds = pather.bounds();
    let start_cost = pather
        .origin_cost(start)
        .ok_or(SearchError::UnknownVertex(start))?;
    let start_idx = bounds
        .index(start)
        .ok_or(SearchError::UnknownVertex(start))?;
    let goal_idx = bounds
        .index(goal)
        .filter(|_| pather.origin_cost(goal).is_some())
        .ok_or(SearchError::UnknownVertex(goal))?;

    log::debug!("astar {start} -> {goal} over {bounds}");

    let mut record = SearchRecord::new(bounds);
    record.set(
        start_idx,
        Visit {
            cost: start_cost,
            predecessor: None,
        },
    );

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        g: start_cost,
        f: pather.estimate(start, goal),
        seq,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;
        let Some(visit) = record.at_index(ci) else {
            continue;
        };

        // Skip stale entries.
        if current.g > visit.cost {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        expanded += 1;
        let current_point = bounds.coordinate(ci);

        nbuf.clear();
        match pather.neighbors(current_point, &mut nbuf) {
            Ok(()) => {}
            Err(SearchError::NoNeighbors(p)) => {
                log::trace!("dead end at {p}");
                continue;
            }
            Err(err) => return Err(err),
        }

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let tentative_g = visit.cost.saturating_add(pather.cost(current_point, np));

            if let Some(known) = record.at_index(ni) {
                if tentative_g >= known.cost {
                    continue;
                }
            }

            record.set(
                ni,
                Visit {
                    cost: tentative_g,
                    predecessor: Some(current_point),
                },
            );
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                g: tentative_g,
                f: tentative_g.saturating_add(pather.estimate(np, goal)),
                seq,
            });
        }
    };

    log::debug!(
        "astar {start} -> {goal}: {} after {expanded} expansions, {} visited",
        if found { "reached" } else { "exhausted" },
        record.len()
    );

    if !found {
        return Err(SearchError::UnreachableGoal { start, goal });
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use costpath_core::CostGrid;

    fn graph(width: i32, height: i32, rows: &[&[i64]]) -> Graph {
        let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
        Graph::build(&CostGrid::new(width, height, &rows).unwrap())
    }

    #[test]
    fn records_start_with_own_cost() {
        let g = graph(2, 1, &[&[4, 0]]);
        let start = Coordinate::new(0, 0);
        let rec = astar(&g, start, Coordinate::new(1, 0)).unwrap();
        assert_eq!(
            rec.get(start),
            Some(Visit {
                cost: 4,
                predecessor: None
            })
        );
        assert_eq!(rec.cost(Coordinate::new(1, 0)), Some(5));
    }

    #[test]
    fn open_grid_cost() {
        let g = graph(3, 3, &[&[0; 3], &[0; 3], &[0; 3]]);
        let rec = astar(&g, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        assert_eq!(rec.cost(Coordinate::new(2, 2)), Some(4));
    }

    #[test]
    fn prefers_detour_over_expensive_cell() {
        // Straight through the 9 costs 1+9+1+0 = 11; around costs 4 steps.
        let g = graph(3, 2, &[&[0, 9, 0], &[0, 0, 0]]);
        let rec = astar(&g, Coordinate::new(0, 0), Coordinate::new(2, 0)).unwrap();
        assert_eq!(rec.cost(Coordinate::new(2, 0)), Some(4));
    }

    #[test]
    fn blocked_corridor_is_unreachable() {
        let g = graph(3, 1, &[&[0, -1, 0]]);
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(2, 0);
        assert_eq!(
            astar(&g, start, goal).unwrap_err(),
            SearchError::UnreachableGoal { start, goal }
        );
    }

    #[test]
    fn isolated_start_is_a_dead_end() {
        let g = graph(3, 1, &[&[0, -1, 0]]);
        let start = Coordinate::new(2, 0);
        let goal = Coordinate::new(0, 0);
        assert!(astar(&g, start, goal).unwrap_err().is_no_path());
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let g = graph(
            4,
            4,
            &[&[0, 0, 0, 0], &[0, -1, -1, -1], &[0, -1, 0, -1], &[0, -1, -1, -1]],
        );
        let err = astar(&g, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap_err();
        assert!(matches!(err, SearchError::UnreachableGoal { .. }));
    }

    #[test]
    fn endpoints_must_be_vertices() {
        let g = graph(2, 1, &[&[0, -1]]);
        let wall = Coordinate::new(1, 0);
        assert_eq!(
            astar(&g, Coordinate::new(0, 0), wall).unwrap_err(),
            SearchError::UnknownVertex(wall)
        );
        let outside = Coordinate::new(5, 5);
        assert_eq!(
            astar(&g, outside, Coordinate::new(0, 0)).unwrap_err(),
            SearchError::UnknownVertex(outside)
        );
    }

    #[test]
    fn repeated_searches_agree() {
        let g = graph(4, 3, &[&[0, 2, 1, 0], &[3, -1, 0, 2], &[0, 1, 0, 0]]);
        let (s, t) = (Coordinate::new(0, 0), Coordinate::new(3, 2));
        let a = astar(&g, s, t).unwrap();
        let b = astar(&g, s, t).unwrap();
        assert_eq!(a.cost(t), b.cost(t));
        assert_eq!(a.get(t), b.get(t));
    }
}
