use alloc::vec::Vec;
use core::ops::RangeInclusive;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::SketchError;

/// Axis-aligned box of grid cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBox {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl PixelBox {
    pub fn overlaps(&self, other: &PixelBox) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn area(&self) -> u32 {
        u32::from(self.w) * u32::from(self.h)
    }
}

/// Occupancy grid that packs randomly sized boxes without overlap.
///
/// The occupancy array is indexed `[y, x]`.
#[derive(Clone, Debug)]
pub struct PixelBoxGrid {
    occupied: Array2<bool>,
    boxes: Vec<PixelBox>,
    sizes: RangeInclusive<u16>,
    rng: SmallRng,
}

impl PixelBoxGrid {
    pub fn new(
        width: u16,
        height: u16,
        sizes: RangeInclusive<u16>,
        seed: u64,
    ) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::EmptyArea);
        }
        let (min, max) = (*sizes.start(), *sizes.end());
        if min == 0 || min > max {
            return Err(SketchError::InvalidSizeRange { min, max });
        }
        Ok(Self {
            occupied: Array2::default((usize::from(height), usize::from(width))),
            boxes: Vec::new(),
            sizes,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    pub fn width(&self) -> u16 {
        self.occupied.ncols() as u16
    }

    pub fn height(&self) -> u16 {
        self.occupied.nrows() as u16
    }

    pub fn boxes(&self) -> &[PixelBox] {
        &self.boxes
    }

    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        self.occupied
            .get((usize::from(y), usize::from(x)))
            .copied()
            .unwrap_or(true)
    }

    pub fn free_cells(&self) -> usize {
        self.occupied.iter().filter(|&&taken| !taken).count()
    }

    /// Places one box of random size at a random free spot. When the drawn
    /// size does not fit anywhere the box shrinks until it does, down to a
    /// single cell.
    pub fn place_box(&mut self) -> Result<PixelBox, SketchError> {
        if self.free_cells() == 0 {
            return Err(SketchError::GridFull);
        }

        let mut w = self.rng.random_range(self.sizes.clone()).min(self.width());
        let mut h = self.rng.random_range(self.sizes.clone()).min(self.height());

        loop {
            let spots = self.free_spots(w, h);
            if !spots.is_empty() {
                let (x, y) = spots[self.rng.random_range(0..spots.len())];
                let placed = PixelBox { x, y, w, h };
                self.occupy(placed);
                return Ok(placed);
            }
            if w == 1 && h == 1 {
                return Err(SketchError::GridFull);
            }
            if w >= h {
                w -= 1;
            } else {
                h -= 1;
            }
        }
    }

    /// Places up to `limit` boxes, stopping early once the grid is full.
    pub fn fill(&mut self, limit: usize) -> usize {
        let mut placed = 0;
        while placed < limit {
            match self.place_box() {
                Ok(_) => placed += 1,
                Err(err) => {
                    log::debug!("stopped after {placed} boxes: {err}");
                    break;
                }
            }
        }
        placed
    }

    fn free_spots(&self, w: u16, h: u16) -> Vec<(u16, u16)> {
        let (width, height) = (self.width(), self.height());
        if w > width || h > height {
            return Vec::new();
        }
        let mut spots = Vec::new();
        for y in 0..=height - h {
            for x in 0..=width - w {
                if self.is_free(PixelBox { x, y, w, h }) {
                    spots.push((x, y));
                }
            }
        }
        spots
    }

    fn is_free(&self, area: PixelBox) -> bool {
        (area.y..area.y + area.h).all(|y| (area.x..area.x + area.w).all(|x| !self.is_occupied(x, y)))
    }

    fn occupy(&mut self, area: PixelBox) {
        for y in area.y..area.y + area.h {
            for x in area.x..area.x + area.w {
                self.occupied[(usize::from(y), usize::from(x))] = true;
            }
        }
        self.boxes.push(area);
    }
}
