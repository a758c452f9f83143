use serde::{Deserialize, Serialize};

/// Single coordinate axis. Signed so boards can be laid out around an origin.
pub type Coord = i16;

/// Length of a single board axis. Any `Coord` span fits.
pub type AxisLen = u16;

/// Count type used for mine counts and total-tile counts. Wide enough for the
/// largest `AxisLen × AxisLen` board.
pub type CellCount = u32;

/// Two-dimensional coordinates `(q, r)`.
pub type Coord2 = (Coord, Coord);

/// Half-open rectangle `[min.0, max.0) × [min.1, max.1)` of tile coordinates.
///
/// `q` runs along a row, `r` picks the row. Flat indices are row-major, so
/// index `i` maps to `q = min.0 + i % row_len`, `r = min.1 + i / row_len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Coord2,
    pub max: Coord2,
}

impl Bounds {
    pub const fn new(min: Coord2, max: Coord2) -> Self {
        Self { min, max }
    }

    /// `[0, dim) × [0, dim)`
    pub const fn square(dim: Coord) -> Self {
        Self::new((0, 0), (dim, dim))
    }

    /// Number of tiles in one row (extent along `q`).
    pub const fn row_len(&self) -> AxisLen {
        span(self.min.0, self.max.0)
    }

    /// Number of rows (extent along `r`).
    pub const fn row_count(&self) -> AxisLen {
        span(self.min.1, self.max.1)
    }

    pub const fn is_empty(&self) -> bool {
        self.row_len() == 0 || self.row_count() == 0
    }

    pub const fn tile_count(&self) -> CellCount {
        self.row_len() as CellCount * self.row_count() as CellCount
    }

    pub const fn contains(&self, (q, r): Coord2) -> bool {
        q >= self.min.0 && q < self.max.0 && r >= self.min.1 && r < self.max.1
    }

    /// Shape of the backing array, `[rows, row_len]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.row_count().into(), self.row_len().into()]
    }

    /// Converts in-bounds coordinates to a backing-array index.
    pub fn to_nd_index(&self, (q, r): Coord2) -> [usize; 2] {
        debug_assert!(self.contains((q, r)));
        [
            (r as isize - self.min.1 as isize) as usize,
            (q as isize - self.min.0 as isize) as usize,
        ]
    }

    /// Maps a flat index in `[0, tile_count)` back to coordinates.
    pub fn coords_of(&self, index: usize) -> Option<Coord2> {
        let row_len = usize::from(self.row_len());
        if row_len == 0 || index >= usize::try_from(self.tile_count()).ok()? {
            return None;
        }
        let q = self.min.0.checked_add((index % row_len).try_into().ok()?)?;
        let r = self.min.1.checked_add((index / row_len).try_into().ok()?)?;
        Some((q, r))
    }

    /// Flat index of in-bounds coordinates, the inverse of [`Bounds::coords_of`].
    pub fn flat_index(&self, coords: Coord2) -> Option<usize> {
        if !self.contains(coords) {
            return None;
        }
        let [row, col] = self.to_nd_index(coords);
        Some(row * usize::from(self.row_len()) + col)
    }

    /// All coordinates in flat-index order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (min_q, min_r) = self.min;
        let (max_q, max_r) = self.max;
        (min_r..max_r).flat_map(move |r| (min_q..max_q).map(move |q| (q, r)))
    }

    pub fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        NeighborIter::new(center, *self)
    }
}

const fn span(lo: Coord, hi: Coord) -> AxisLen {
    if hi > lo {
        (hi as i32 - lo as i32) as AxisLen
    } else {
        0
    }
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (Coord, Coord), bounds: &Bounds) -> Option<Coord2> {
    let next = (coords.0.checked_add(delta.0)?, coords.1.checked_add(delta.1)?);
    bounds.contains(next).then_some(next)
}

/// Up to eight in-bounds neighbours of a tile.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Bounds,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Bounds) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[usize::from(self.index)],
                &self.bounds,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let bounds = Bounds::square(4);
        let neighbors: Vec<_> = bounds.iter_neighbors((0, 0)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let bounds = Bounds::square(4);
        assert_eq!(bounds.iter_neighbors((1, 2)).count(), 8);
    }

    #[test]
    fn offset_origin_maps_flat_indices() {
        let bounds = Bounds::new((-2, 3), (2, 5));
        assert_eq!(bounds.row_len(), 4);
        assert_eq!(bounds.row_count(), 2);
        assert_eq!(bounds.coords_of(0), Some((-2, 3)));
        assert_eq!(bounds.coords_of(5), Some((-1, 4)));
        assert_eq!(bounds.coords_of(8), None);
        assert_eq!(bounds.flat_index((-1, 4)), Some(5));
        assert_eq!(bounds.to_nd_index((1, 4)), [1, 3]);
    }

    #[test]
    fn iter_follows_flat_index_order() {
        let bounds = Bounds::new((-1, -1), (1, 1));
        let coords: Vec<_> = bounds.iter().collect();
        assert_eq!(coords, [(-1, -1), (0, -1), (-1, 0), (0, 0)]);
        for (i, &c) in coords.iter().enumerate() {
            assert_eq!(bounds.coords_of(i), Some(c));
        }
    }

    #[test]
    fn tile_count_covers_boards_past_u16() {
        let bounds = Bounds::square(300);
        assert_eq!(bounds.tile_count(), 90_000);
        assert_eq!(bounds.coords_of(89_999), Some((299, 299)));
        assert_eq!(bounds.flat_index((299, 299)), Some(89_999));

        let widest = Bounds::new((Coord::MIN, Coord::MIN), (Coord::MAX, Coord::MAX));
        assert_eq!(widest.row_len(), AxisLen::MAX);
        assert_eq!(widest.tile_count(), 65_535 * 65_535);
    }

    #[test]
    fn inverted_bounds_are_empty() {
        let bounds = Bounds::new((3, 0), (1, 4));
        assert!(bounds.is_empty());
        assert_eq!(bounds.tile_count(), 0);
        assert_eq!(bounds.iter().count(), 0);
    }
}
