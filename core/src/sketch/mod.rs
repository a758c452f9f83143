//! Procedural geometry behind the art sketches.
//!
//! Every generator here is pure: it takes dimensions and a seed and returns
//! shapes in sketch-local pixels. Drawing is left to the caller.

use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

pub use clouds::*;
pub use flowers::*;
pub use hex::*;
pub use iso::*;
pub use pixel_box::*;

mod clouds;
mod flowers;
mod hex;
mod iso;
mod pixel_box;

/// `√3`, not yet available as a `core` constant.
pub(crate) const SQRT_3: f32 = 1.732_050_8;

/// 2D point in sketch pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: Point, b: Point) -> bool {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    dx * dx + dy * dy < 1e-6
}
