use costpath_core::Coordinate;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a coordinate, filtered by a
/// predicate, in the order up, left, down, right.
pub struct Neighbors {
    buf: Vec<Coordinate>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Coordinate, keep: impl Fn(Coordinate) -> bool) -> &[Coordinate] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
