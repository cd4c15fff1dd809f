use costpath_core::Coordinate;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> i64 {
    i64::from((a.x - b.x).abs()) + i64::from((a.y - b.y).abs())
}
