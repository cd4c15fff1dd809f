//! Geometry primitives: [`Coordinate`], [`Bounds`] and [`Direction`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A cell position. X grows right, Y grows down (row index).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours in scan order: up, left, down, right.
    ///
    /// Some of them may lie outside any given [`Bounds`].
    #[inline]
    pub fn neighbors_4(self) -> [Coordinate; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x + 1, self.y),
        ]
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves between adjacent cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Direction of a unit delta, or `None` if `delta` is not a cardinal step.
    pub fn from_delta(delta: Coordinate) -> Option<Self> {
        match (delta.x, delta.y) {
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            (0, 1) => Some(Self::Down),
            (0, -1) => Some(Self::Up),
            _ => None,
        }
    }

    /// Direction of the move `from -> to`.
    #[inline]
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Self> {
        Self::from_delta(to - from)
    }

    /// Unit delta of this direction.
    pub const fn delta(self) -> Coordinate {
        match self {
            Self::Left => Coordinate::new(-1, 0),
            Self::Right => Coordinate::new(1, 0),
            Self::Down => Coordinate::new(0, 1),
            Self::Up => Coordinate::new(0, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A `width × height` rectangle anchored at the origin, half-open on both
/// axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Create bounds of the given size. Negative sizes collapse to empty.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the bounds hold no cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` is inside the bounds.
    #[inline]
    pub fn contains(self, p: Coordinate) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Coordinate) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn coordinate(self, idx: usize) -> Coordinate {
        let w = self.width.max(1) as usize;
        Coordinate::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Coordinate::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coordinate;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coordinate,
}

impl Iterator for BoundsIter {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.cur.y >= self.bounds.height || self.bounds.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height {
            return (0, Some(0));
        }
        let w = self.bounds.width as usize;
        let remaining_in_row = (self.bounds.width - self.cur.x) as usize;
        let remaining_rows = (self.bounds.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}
