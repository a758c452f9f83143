use alloc::vec::Vec;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Point;
use crate::SketchError;

/// Unit cube sitting at grid cell `(x, y)`, `z` levels above the floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

/// The three faces of a cube visible in a 2:1 isometric view.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeFaces {
    pub top: [Point; 4],
    pub left: [Point; 4],
    pub right: [Point; 4],
}

/// Stacks of cubes on a `width × depth` floor, stored as a height map
/// indexed `[x, y]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsoCubes {
    heights: Array2<u8>,
}

impl IsoCubes {
    /// Wraps an existing height map. Each side is limited to `u8::MAX` cells
    /// so cube coordinates stay exact.
    pub fn from_heights(heights: Array2<u8>) -> Result<Self, SketchError> {
        let (width, depth) = heights.dim();
        let max = usize::from(u8::MAX);
        if width > max || depth > max {
            return Err(SketchError::AreaTooLarge {
                width,
                height: depth,
                max,
            });
        }
        Ok(Self { heights })
    }

    /// Every stack gets a random height in `0..=max_height`.
    pub fn random(width: u8, depth: u8, max_height: u8, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let heights = Array2::from_shape_fn((usize::from(width), usize::from(depth)), |_| {
            rng.random_range(0..=max_height)
        });
        Self { heights }
    }

    pub fn size(&self) -> (u8, u8) {
        let (w, d) = self.heights.dim();
        // both constructors cap each side at u8::MAX
        (w as u8, d as u8)
    }

    pub fn height_at(&self, x: u8, y: u8) -> u8 {
        self.heights
            .get((usize::from(x), usize::from(y)))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_height(&self) -> u8 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    pub fn total_cubes(&self) -> usize {
        self.heights.iter().map(|&h| usize::from(h)).sum()
    }

    fn has_cube(&self, x: u16, y: u16, z: u8) -> bool {
        match (u8::try_from(x), u8::try_from(y)) {
            (Ok(x), Ok(y)) => z < self.height_at(x, y),
            _ => false,
        }
    }

    /// A cube covered on top and on both viewer-facing sides cannot be seen.
    pub fn is_buried(&self, cube: Cube) -> bool {
        let (x, y) = (u16::from(cube.x), u16::from(cube.y));
        cube.z < u8::MAX
            && self.has_cube(x, y, cube.z + 1)
            && self.has_cube(x + 1, y, cube.z)
            && self.has_cube(x, y + 1, cube.z)
    }

    /// Visible cubes in painter's order: farther diagonals first, lower
    /// levels first within a diagonal.
    pub fn cubes(&self) -> Vec<Cube> {
        let mut cubes: Vec<Cube> = self
            .heights
            .indexed_iter()
            .flat_map(|((x, y), &h)| {
                (0..h).map(move |z| Cube {
                    x: x as u8,
                    y: y as u8,
                    z,
                })
            })
            .filter(|&cube| !self.is_buried(cube))
            .collect();
        cubes.sort_by_key(|c| (u16::from(c.x) + u16::from(c.y), c.z, c.x));
        cubes
    }

    /// Projects a cube with edge `tile` pixels; `origin` is where the floor
    /// corner `(0, 0, 0)` lands.
    pub fn faces(cube: Cube, tile: f32, origin: Point) -> CubeFaces {
        let p = |x: u8, y: u8, z: u8| project(x, y, z, tile, origin);
        let (x0, y0, z0) = (cube.x, cube.y, cube.z);
        let (x1, y1, z1) = (x0 + 1, y0 + 1, z0 + 1);
        CubeFaces {
            top: [p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)],
            left: [p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0), p(x0, y1, z0)],
            right: [p(x1, y0, z1), p(x1, y1, z1), p(x1, y1, z0), p(x1, y0, z0)],
        }
    }

    /// Pixel size of the drawing and the origin that keeps it in view.
    pub fn layout(&self, tile: f32) -> ((f32, f32), Point) {
        let (w, d) = self.size();
        let (w, d) = (f32::from(w), f32::from(d));
        let top = f32::from(self.max_height()) * tile;
        let width = (w + d) * tile;
        let height = (w + d) * tile / 2.0 + top;
        ((width, height), Point::new(d * tile, top))
    }
}

fn project(x: u8, y: u8, z: u8, tile: f32, origin: Point) -> Point {
    let (x, y, z) = (f32::from(x), f32::from(y), f32::from(z));
    origin + Point::new((x - y) * tile, (x + y) * tile / 2.0 - z * tile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::approx_eq;

    #[test]
    fn random_heights_respect_limit() {
        let iso = IsoCubes::random(6, 4, 3, 11);
        assert_eq!(iso.size(), (6, 4));
        assert!(iso.max_height() <= 3);
        assert_eq!(iso, IsoCubes::random(6, 4, 3, 11));
    }

    #[test]
    fn cubes_are_back_to_front() {
        let iso = IsoCubes::random(5, 5, 4, 2);
        let cubes = iso.cubes();
        for pair in cubes.windows(2) {
            let a = (u16::from(pair[0].x) + u16::from(pair[0].y), pair[0].z);
            let b = (u16::from(pair[1].x) + u16::from(pair[1].y), pair[1].z);
            assert!(a <= b);
        }
    }

    #[test]
    fn buried_cubes_are_skipped() {
        let heights = Array2::from_elem((2, 2), 2u8);
        let iso = IsoCubes::from_heights(heights).unwrap();
        assert_eq!(iso.total_cubes(), 8);
        // (0, 0, 0) is covered above, at x + 1 and at y + 1
        assert!(iso.is_buried(Cube { x: 0, y: 0, z: 0 }));
        assert!(!iso.is_buried(Cube { x: 1, y: 1, z: 0 }));
        assert_eq!(iso.cubes().len(), 7);
    }

    #[test]
    fn oversized_height_maps_are_rejected() {
        let wide = Array2::from_elem((300, 2), 1u8);
        assert_eq!(
            IsoCubes::from_heights(wide),
            Err(SketchError::AreaTooLarge {
                width: 300,
                height: 2,
                max: 255
            })
        );

        let edge = IsoCubes::from_heights(Array2::from_elem((255, 1), 1u8)).unwrap();
        assert_eq!(edge.size(), (255, 1));
        assert_eq!(edge.cubes().last().map(|c| c.x), Some(254));
    }

    #[test]
    fn faces_meet_at_the_near_vertical_edge() {
        let faces = IsoCubes::faces(Cube { x: 0, y: 0, z: 0 }, 10.0, Point::new(0.0, 0.0));
        // top face corners: back, right, front, left
        assert!(approx_eq(faces.top[0], Point::new(0.0, -10.0)));
        assert!(approx_eq(faces.top[2], Point::new(0.0, 0.0)));
        assert!(approx_eq(faces.left[1], faces.top[2]));
        assert!(approx_eq(faces.right[1], faces.top[2]));
        assert!(approx_eq(faces.left[2], Point::new(0.0, 10.0)));
    }

    #[test]
    fn layout_keeps_cubes_in_view() {
        let iso = IsoCubes::random(4, 3, 5, 8);
        let ((width, height), origin) = iso.layout(8.0);
        for cube in iso.cubes() {
            let faces = IsoCubes::faces(cube, 8.0, origin);
            for p in faces.top.iter().chain(&faces.left).chain(&faces.right) {
                assert!(p.x >= -1e-3 && p.x <= width + 1e-3);
                assert!(p.y >= -1e-3 && p.y <= height + 1e-3);
            }
        }
    }
}
