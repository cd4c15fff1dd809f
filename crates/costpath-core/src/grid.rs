//! The cost matrix: [`Cost`] cells in a dense, immutable [`CostGrid`].

use crate::error::GridError;
use crate::geom::{Bounds, Coordinate};

/// Cost of entering a cell, or [`Cost::IMPASSABLE`].
///
/// Passable costs range over `0..=i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(i32);

impl Cost {
    /// Marks a cell that cannot be entered.
    pub const IMPASSABLE: Self = Self(-1);

    /// Validate a raw cost value.
    ///
    /// Anything below `-1` is [`GridError::InvalidCost`]; anything above
    /// `i32::MAX` is [`GridError::CostTooLarge`].
    pub fn new(value: i64) -> Result<Self, GridError> {
        if value < -1 {
            return Err(GridError::InvalidCost { value });
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| GridError::CostTooLarge {
                value,
                max: i32::MAX,
            })
    }

    /// The underlying integer value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        self.0 >= 0
    }
}

impl TryFrom<i64> for Cost {
    type Error = GridError;

    fn try_from(value: i64) -> Result<Self, GridError> {
        Self::new(value)
    }
}

impl From<Cost> for i32 {
    fn from(c: Cost) -> Self {
        c.0
    }
}

/// A rectangular matrix of [`Cost`]s, fixed in size at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<Cost>,
    bounds: Bounds,
}

impl CostGrid {
    /// Build a grid from `height` rows of `width` raw costs each.
    ///
    /// Fails with [`GridError::MalformedHeader`] for non-positive sizes,
    /// [`GridError::RowCountMismatch`], [`GridError::ColumnCountMismatch`]
    /// [`GridError::InvalidCost`] or [`GridError::CostTooLarge`].
    pub fn new(width: i32, height: i32, rows: &[Vec<i64>]) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::MalformedHeader {
                line: format!("{width} {height}"),
            });
        }
        if rows.len() != height as usize {
            return Err(GridError::RowCountMismatch {
                expected: height as usize,
                found: rows.len(),
            });
        }
        let bounds = Bounds::new(width, height);
        let mut cells = Vec::with_capacity(bounds.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width as usize {
                return Err(GridError::ColumnCountMismatch {
                    row: y,
                    expected: width as usize,
                    found: row.len(),
                });
            }
            for &value in row {
                cells.push(Cost::new(value)?);
            }
        }
        Ok(Self { cells, bounds })
    }

    /// Returns the bounds of the grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given coordinate.
    pub fn contains(&self, p: Coordinate) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cost at a coordinate, or `None` if out of bounds.
    pub fn at(&self, p: Coordinate) -> Option<Cost> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not impassable.
    pub fn is_passable(&self, p: Coordinate) -> bool {
        self.at(p).is_some_and(Cost::is_passable)
    }

    /// Iterate over every coordinate with its cost, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cost)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Validate a raw `(x, y)` pair as a start or goal coordinate.
    ///
    /// Fails with [`GridError::OutOfBounds`] for negative or too large
    /// components, and [`GridError::BlockedEndpoint`] when the cell is
    /// impassable.
    pub fn endpoint(&self, x: i64, y: i64) -> Result<Coordinate, GridError> {
        let in_range = x >= 0
            && y >= 0
            && x < i64::from(self.width())
            && y < i64::from(self.height());
        if !in_range {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        let p = Coordinate::new(x as i32, y as i32);
        if !self.is_passable(p) {
            return Err(GridError::BlockedEndpoint(p));
        }
        Ok(p)
    }
}
