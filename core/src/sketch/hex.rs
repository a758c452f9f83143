use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::{Point, SQRT_3};

/// Axial offsets to the six neighbours of a pointy-top hex.
const AXIAL_DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Unit corner offsets of a pointy-top hex, clockwise from the lower right.
const CORNERS: [(f32, f32); 6] = [
    (SQRT_3 / 2.0, 0.5),
    (0.0, 1.0),
    (-SQRT_3 / 2.0, 0.5),
    (-SQRT_3 / 2.0, -0.5),
    (0.0, -1.0),
    (SQRT_3 / 2.0, -0.5),
];

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexCell {
    pub q: i32,
    pub r: i32,
    pub center: Point,
}

/// Pointy-top hexagons tiling a `cols × rows` rectangle, odd rows shifted
/// right by half a cell. Cells are addressed with axial `(q, r)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexGrid {
    cols: u16,
    rows: u16,
    radius: f32,
}

impl HexGrid {
    pub fn new(cols: u16, rows: u16, radius: f32) -> Self {
        Self { cols, rows, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel size of the whole tiling.
    pub fn extent(&self) -> (f32, f32) {
        if self.is_empty() {
            return (0.0, 0.0);
        }
        let cell_w = SQRT_3 * self.radius;
        let odd_shift = if self.rows > 1 { cell_w / 2.0 } else { 0.0 };
        let width = cell_w * f32::from(self.cols) + odd_shift;
        let height = self.radius * (1.5 * f32::from(self.rows) + 0.5);
        (width, height)
    }

    pub fn contains(&self, q: i32, r: i32) -> bool {
        let (col, row) = axial_to_offset(q, r);
        (0..i32::from(self.cols)).contains(&col) && (0..i32::from(self.rows)).contains(&row)
    }

    pub fn center(&self, q: i32, r: i32) -> Point {
        let w = SQRT_3 * self.radius;
        let x = w * (q as f32 + r as f32 / 2.0) + w / 2.0;
        let y = self.radius * (1.5 * r as f32 + 1.0);
        Point::new(x, y)
    }

    pub fn corners(&self, center: Point) -> [Point; 6] {
        CORNERS.map(|(dx, dy)| center + Point::new(dx, dy) * self.radius)
    }

    /// Cells row by row, left to right.
    pub fn cells(&self) -> Vec<HexCell> {
        let mut cells = Vec::with_capacity(self.len());
        for row in 0..i32::from(self.rows) {
            for col in 0..i32::from(self.cols) {
                let (q, r) = offset_to_axial(col, row);
                cells.push(HexCell {
                    q,
                    r,
                    center: self.center(q, r),
                });
            }
        }
        cells
    }

    pub fn neighbors(&self, q: i32, r: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        AXIAL_DIRECTIONS
            .into_iter()
            .map(move |(dq, dr)| (q + dq, r + dr))
            .filter(|&(nq, nr)| self.contains(nq, nr))
    }
}

/// Steps between two axial cells.
pub fn hex_distance((q1, r1): (i32, i32), (q2, r2): (i32, i32)) -> u32 {
    let dq = q1 - q2;
    let dr = r1 - r2;
    let ds = -dq - dr;
    dq.unsigned_abs().max(dr.unsigned_abs()).max(ds.unsigned_abs())
}

fn offset_to_axial(col: i32, row: i32) -> (i32, i32) {
    (col - (row - (row & 1)) / 2, row)
}

fn axial_to_offset(q: i32, r: i32) -> (i32, i32) {
    (q + (r - (r & 1)) / 2, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::approx_eq;

    #[test]
    fn cells_fill_the_rectangle() {
        let grid = HexGrid::new(5, 4, 10.0);
        let cells = grid.cells();
        assert_eq!(cells.len(), 20);
        assert!(cells.iter().all(|cell| grid.contains(cell.q, cell.r)));

        let (width, height) = grid.extent();
        for cell in &cells {
            for corner in grid.corners(cell.center) {
                assert!(corner.x >= -1e-3 && corner.x <= width + 1e-3);
                assert!(corner.y >= -1e-3 && corner.y <= height + 1e-3);
            }
        }
    }

    #[test]
    fn odd_rows_are_shifted() {
        let grid = HexGrid::new(3, 2, 2.0);
        let cells = grid.cells();
        let even = cells[0].center;
        let odd = cells[3].center;
        assert!(approx_eq(odd, Point::new(even.x + SQRT_3, even.y + 3.0)));
    }

    #[test]
    fn neighbors_are_symmetric_and_adjacent() {
        let grid = HexGrid::new(6, 6, 1.0);
        for cell in grid.cells() {
            let neighbors: Vec<_> = grid.neighbors(cell.q, cell.r).collect();
            assert!(neighbors.len() <= 6);
            for &(q, r) in &neighbors {
                assert_eq!(hex_distance((cell.q, cell.r), (q, r)), 1);
                assert!(grid.neighbors(q, r).any(|n| n == (cell.q, cell.r)));
            }
        }
        // interior cell sees all six
        let inner = grid.cells()[2 * 6 + 2];
        assert_eq!(grid.neighbors(inner.q, inner.r).count(), 6);
    }

    #[test]
    fn adjacent_centers_share_an_edge() {
        let grid = HexGrid::new(3, 3, 4.0);
        let a = grid.center(1, 1);
        let b = grid.center(2, 1);
        let shared: usize = grid
            .corners(a)
            .iter()
            .filter(|&&ca| grid.corners(b).iter().any(|&cb| approx_eq(ca, cb)))
            .count();
        assert_eq!(shared, 2);
    }
}
