use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Point;
use crate::SketchError;

/// Upper bound on flowers in one field.
pub const MAX_FLOWERS: usize = 64;

/// `(cos, sin)` of a full turn split into 5, 6, 7 and 8 petals.
const PETAL_STEPS: [(usize, (f32, f32)); 4] = [
    (5, (0.309_017, 0.951_056_5)),
    (6, (0.5, 0.866_025_4)),
    (7, (0.623_489_8, 0.781_831_5)),
    (8, (0.707_106_8, 0.707_106_8)),
];

/// One petal as a closed pair of quadratic curves from `base` to `tip`,
/// bulging through `left` and `right`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Petal {
    pub base: Point,
    pub left: Point,
    pub tip: Point,
    pub right: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub center: Point,
    /// Distance from the centre to every petal tip.
    pub radius: f32,
    pub core_radius: f32,
    pub petals: Vec<Petal>,
}

/// Flowers scattered over a `width × height` meadow, petals evenly spaced
/// around each centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowerField {
    width: f32,
    height: f32,
    flowers: Vec<Flower>,
}

impl FlowerField {
    /// At most [`MAX_FLOWERS`] flowers, each fully inside the meadow.
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Result<Self, SketchError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(SketchError::EmptyArea);
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let side = width.min(height);

        let flowers = (0..count.min(MAX_FLOWERS))
            .map(|_| {
                let radius = side * rng.random_range(0.05f32..=0.12);
                let center = Point::new(
                    rng.random_range(radius..=width - radius),
                    rng.random_range(radius..=height - radius),
                );
                let (petals, step) = PETAL_STEPS[rng.random_range(0..PETAL_STEPS.len())];
                let width_ratio = rng.random_range(0.25f32..=0.45);
                let core_radius = radius * 0.25;

                let mut direction = unit_from_slope(rng.random_range(-1.0f32..=1.0));
                let petals = (0..petals)
                    .map(|_| {
                        let petal = petal(center, direction, radius, core_radius, width_ratio);
                        direction = rotate(direction, step);
                        petal
                    })
                    .collect();

                Flower {
                    center,
                    radius,
                    core_radius,
                    petals,
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            flowers,
        })
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }
}

fn petal(center: Point, direction: Point, length: f32, core_radius: f32, width_ratio: f32) -> Petal {
    let across = Point::new(-direction.y, direction.x) * (length * width_ratio);
    let bulge = center + direction * (length * 0.55);
    Petal {
        base: center + direction * core_radius,
        left: bulge + across,
        tip: center + direction * length,
        right: bulge - across,
    }
}

/// Unit vector for slope `t`, covering half a turn as `t` runs over `-1..=1`.
fn unit_from_slope(t: f32) -> Point {
    let d = 1.0 + t * t;
    Point::new((1.0 - t * t) / d, 2.0 * t / d)
}

fn rotate(v: Point, (cos, sin): (f32, f32)) -> Point {
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
