//! Map text parsing.
//!
//! A map is plain text:
//!
//! ```text
//! 3 2        <- width height
//! 0 0        <- start x y
//! 0 1 -1     <- `height` rows of `width` costs
//! 2 0 0
//! ```
//!
//! `-1` marks an impassable cell. Validation happens in file order: header,
//! matrix, then start line.

use crate::error::GridError;
use crate::geom::Coordinate;
use crate::grid::CostGrid;

/// A validated map: the cost grid plus the start coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    pub grid: CostGrid,
    pub start: Coordinate,
}

impl MapFile {
    /// Parse and validate map text.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.len() < 3 {
            return Err(GridError::TooShort { found: lines.len() });
        }

        let (width, height) = parse_header(lines[0])?;
        let rows = lines[2..]
            .iter()
            .enumerate()
            .map(|(y, line)| parse_row(y, line))
            .collect::<Result<Vec<_>, _>>()?;
        let grid = CostGrid::new(width, height, &rows)?;

        let (x, y) = parse_coordinate(lines[1])?;
        let start = grid.endpoint(x, y)?;

        Ok(Self { grid, start })
    }
}

/// Parse the `width height` line. Both values must be positive.
pub fn parse_header(line: &str) -> Result<(i32, i32), GridError> {
    let malformed = || GridError::MalformedHeader {
        line: line.trim().to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [w, h] = tokens.as_slice() else {
        return Err(malformed());
    };
    let width: i32 = w.parse().map_err(|_| malformed())?;
    let height: i32 = h.parse().map_err(|_| malformed())?;
    if width <= 0 || height <= 0 {
        return Err(malformed());
    }
    Ok((width, height))
}

/// Parse an `x y` pair. Range and passability are checked by
/// [`CostGrid::endpoint`].
pub fn parse_coordinate(line: &str) -> Result<(i64, i64), GridError> {
    let malformed = || GridError::MalformedCoordinate {
        line: line.trim().to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(malformed());
    };
    let x: i64 = x.parse().map_err(|_| malformed())?;
    let y: i64 = y.parse().map_err(|_| malformed())?;
    Ok((x, y))
}

fn parse_row(y: usize, line: &str) -> Result<Vec<i64>, GridError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| GridError::InvalidNumber {
                row: y,
                token: token.to_string(),
            })
        })
        .collect()
}
