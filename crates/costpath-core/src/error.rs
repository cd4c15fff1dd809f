use thiserror::Error;

use crate::geom::Coordinate;

/// Errors raised while validating a map or an endpoint coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The map text holds fewer lines than header, start and one row.
    #[error("map definition must have at least 3 lines, found {found}")]
    TooShort { found: usize },

    /// The dimension line is not two positive integers.
    #[error("malformed header {line:?}: expected two positive integers `width height`")]
    MalformedHeader { line: String },

    #[error("map has {found} rows but its declared height is {expected}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} columns but the declared width is {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: {token:?} is not an integer")]
    InvalidNumber { row: usize, token: String },

    /// Costs must be `-1` (impassable) or non-negative.
    #[error("invalid cost {value}: expected -1 (impassable) or a non-negative cost")]
    InvalidCost { value: i64 },

    /// Cell costs are stored as `i32`.
    #[error("cost {value} exceeds the largest supported cell cost {max}")]
    CostTooLarge { value: i64, max: i32 },

    /// A coordinate line is not two integers `x y`.
    #[error("malformed coordinate {line:?}: expected two integers `x y`")]
    MalformedCoordinate { line: String },

    #[error("coordinate ({x}, {y}) lies outside the {width}x{height} map")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: i32,
        height: i32,
    },

    #[error("coordinate {0} is impassable")]
    BlockedEndpoint(Coordinate),
}
