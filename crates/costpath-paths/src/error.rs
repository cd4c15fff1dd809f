use costpath_core::Coordinate;
use thiserror::Error;

/// Errors raised by graph construction, search and path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The coordinate is outside the graph or is not a passable vertex.
    #[error("vertex {0} does not exist")]
    UnknownVertex(Coordinate),

    #[error("vertex {0} was already added")]
    DuplicateVertex(Coordinate),

    #[error("edge {from} -> {to} was already added")]
    DuplicateEdge { from: Coordinate, to: Coordinate },

    /// The vertex has no adjacency entry. The search treats it as a dead end.
    #[error("vertex {0} has no neighbors")]
    NoNeighbors(Coordinate),

    /// The frontier emptied before the goal was reached.
    #[error("goal {goal} is unreachable from {start}")]
    UnreachableGoal { start: Coordinate, goal: Coordinate },

    /// The search record holds no entry for the goal.
    #[error("no path exists to {0}")]
    NoPathExists(Coordinate),

    /// The predecessor chain does not lead back to the start.
    #[error("search record is inconsistent at {at}: predecessor chain does not end at {start}")]
    CorruptSearchRecord { at: Coordinate, start: Coordinate },
}

impl SearchError {
    /// Whether this error means "no path" rather than a defect.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::UnreachableGoal { .. } | Self::NoPathExists(_))
    }
}
