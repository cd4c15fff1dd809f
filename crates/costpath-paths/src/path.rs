//! Path reconstruction from a [`SearchRecord`].

use costpath_core::{Coordinate, Direction};

use crate::astar::astar;
use crate::error::SearchError;
use crate::record::SearchRecord;
use crate::traits::AstarPather;

/// An ordered start-to-goal sequence of coordinates and its total cost.
///
/// Only [`reconstruct`] builds one, so `steps` is never empty. Paths
/// serialize for reporting but are not deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    cost: i64,
    steps: Vec<Coordinate>,
}

impl Path {
    /// Total cost: the start cell's own cost plus every step's charge.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Coordinates from start to goal, both included.
    pub fn steps(&self) -> &[Coordinate] {
        &self.steps
    }

    /// Number of coordinates, endpoints included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false` for a reconstructed path, which holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> Coordinate {
        self.steps[0]
    }

    pub fn goal(&self) -> Coordinate {
        self.steps[self.steps.len() - 1]
    }

    /// Each coordinate except the goal, with the direction to the next one.
    pub fn directions(&self) -> impl Iterator<Item = (Coordinate, Direction)> + '_ {
        self.steps
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]).map(|d| (w[0], d)))
    }

    /// Direction taken when leaving `p`, if `p` is a non-final step.
    pub fn direction_at(&self, p: Coordinate) -> Option<Direction> {
        self.directions().find(|&(c, _)| c == p).map(|(_, d)| d)
    }
}

/// Walk predecessor links from `goal` back to `start`.
///
/// Fails with [`SearchError::NoPathExists`] when `goal` was never reached,
/// and [`SearchError::CorruptSearchRecord`] when the chain ends anywhere
/// but `start` or loops.
pub fn reconstruct(
    record: &SearchRecord,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Path, SearchError> {
    let goal_visit = record.get(goal).ok_or(SearchError::NoPathExists(goal))?;

    let mut steps = vec![goal];
    let mut current = goal;
    let mut visit = goal_visit;
    while let Some(prev) = visit.predecessor {
        if steps.len() > record.len() {
            return Err(SearchError::CorruptSearchRecord { at: prev, start });
        }
        visit = record
            .get(prev)
            .ok_or(SearchError::CorruptSearchRecord { at: prev, start })?;
        steps.push(prev);
        current = prev;
    }
    if current != start {
        return Err(SearchError::CorruptSearchRecord { at: current, start });
    }

    steps.reverse();
    Ok(Path {
        cost: goal_visit.cost,
        steps,
    })
}

/// Search with [`astar`] and reconstruct the resulting path.
pub fn find_path<P: AstarPather>(
    pather: &P,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Path, SearchError> {
    let record = astar(pather, start, goal)?;
    reconstruct(&record, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::record::Visit;
    use costpath_core::{Bounds, CostGrid};

    fn graph(width: i32, height: i32, rows: &[&[i64]]) -> Graph {
        let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
        Graph::build(&CostGrid::new(width, height, &rows).unwrap())
    }

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let g = graph(3, 3, &[&[0; 3], &[0; 3], &[0; 3]]);
        let path = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.len(), 5);
        assert_eq!(path.start(), c(0, 0));
        assert_eq!(path.goal(), c(2, 2));
        assert!(path.steps().windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn expensive_middle_cell() {
        let g = graph(3, 1, &[&[0, 5, 0]]);
        let path = find_path(&g, c(0, 0), c(2, 0)).unwrap();
        assert_eq!(path.cost(), 7);
        assert_eq!(path.steps(), &[c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn blocked_middle_cell() {
        let g = graph(3, 1, &[&[0, -1, 0]]);
        let err = find_path(&g, c(0, 0), c(2, 0)).unwrap_err();
        assert!(err.is_no_path());
    }

    #[test]
    fn start_equals_goal() {
        let g = graph(2, 2, &[&[0, 0], &[0, 6]]);
        let path = find_path(&g, c(1, 1), c(1, 1)).unwrap();
        assert_eq!(path.steps(), &[c(1, 1)]);
        assert_eq!(path.cost(), 6);
        assert_eq!(path.directions().count(), 0);
    }

    #[test]
    fn directions_follow_steps() {
        let g = graph(2, 2, &[&[0, -1], &[0, 0]]);
        let path = find_path(&g, c(0, 0), c(1, 1)).unwrap();
        let dirs: Vec<_> = path.directions().collect();
        assert_eq!(dirs, vec![(c(0, 0), Direction::Down), (c(0, 1), Direction::Right)]);
        assert_eq!(path.direction_at(c(0, 1)), Some(Direction::Right));
        assert_eq!(path.direction_at(c(1, 1)), None);
    }

    #[test]
    fn missing_goal_is_no_path() {
        let record = SearchRecord::new(Bounds::new(2, 2));
        assert_eq!(
            reconstruct(&record, c(0, 0), c(1, 1)).unwrap_err(),
            SearchError::NoPathExists(c(1, 1))
        );
    }

    #[test]
    fn chain_ending_elsewhere_is_corrupt() {
        let bounds = Bounds::new(3, 1);
        let mut record = SearchRecord::new(bounds);
        record.set(
            bounds.index(c(1, 0)).unwrap(),
            Visit {
                cost: 0,
                predecessor: None,
            },
        );
        record.set(
            bounds.index(c(2, 0)).unwrap(),
            Visit {
                cost: 1,
                predecessor: Some(c(1, 0)),
            },
        );
        assert_eq!(
            reconstruct(&record, c(0, 0), c(2, 0)).unwrap_err(),
            SearchError::CorruptSearchRecord {
                at: c(1, 0),
                start: c(0, 0)
            }
        );
    }

    #[test]
    fn predecessor_cycle_is_corrupt() {
        let bounds = Bounds::new(2, 1);
        let mut record = SearchRecord::new(bounds);
        record.set(
            0,
            Visit {
                cost: 1,
                predecessor: Some(c(1, 0)),
            },
        );
        record.set(
            1,
            Visit {
                cost: 1,
                predecessor: Some(c(0, 0)),
            },
        );
        assert!(matches!(
            reconstruct(&record, c(0, 0), c(1, 0)),
            Err(SearchError::CorruptSearchRecord { .. })
        ));
    }
}
