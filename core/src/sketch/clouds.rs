use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Point;

/// Clouds drawn at 100% cover.
pub const MAX_CLOUDS: usize = 12;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puff {
    pub offset: Point,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub position: Point,
    /// Horizontal drift in pixels per second.
    pub speed: f32,
    pub puffs: Vec<Puff>,
}

impl Cloud {
    /// Widest horizontal reach of any puff from the cloud position.
    pub fn half_width(&self) -> f32 {
        self.puffs
            .iter()
            .map(|puff| {
                let left = puff.radius - puff.offset.x;
                let right = puff.offset.x + puff.radius;
                if left > right { left } else { right }
            })
            .fold(0.0, f32::max)
    }
}

/// Drifting clouds whose number follows the cloud-cover percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudField {
    width: f32,
    height: f32,
    clouds: Vec<Cloud>,
}

impl CloudField {
    pub fn new(width: f32, height: f32, cloud_cover: f32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let count = cloud_count(cloud_cover);
        let scale = height / 8.0;

        let clouds = (0..count)
            .map(|_| {
                let puffs = (0..rng.random_range(3..=5))
                    .map(|i| Puff {
                        offset: Point::new(
                            (i as f32 - 2.0) * scale * 0.6,
                            rng.random_range(-0.3f32..=0.3) * scale,
                        ),
                        radius: scale * rng.random_range(0.5f32..=1.0),
                    })
                    .collect();
                Cloud {
                    position: Point::new(
                        rng.random_range(0.0..=width),
                        rng.random_range(0.1f32..=0.6) * height,
                    ),
                    speed: rng.random_range(4.0f32..=16.0),
                    puffs,
                }
            })
            .collect();

        Self {
            width,
            height,
            clouds,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Moves every cloud right by `seconds` of drift, re-entering from the
    /// left once it has fully left the frame.
    pub fn advance(&mut self, seconds: f32) {
        for cloud in &mut self.clouds {
            let reach = cloud.half_width();
            let span = self.width + 2.0 * reach;
            if span <= 0.0 {
                continue;
            }
            let shifted = cloud.position.x + reach + cloud.speed * seconds;
            cloud.position.x = shifted % span - reach;
            if cloud.position.x < -reach {
                cloud.position.x += span;
            }
        }
    }
}

/// Cover is a percentage; values outside `0..=100` are clamped.
pub fn cloud_count(cloud_cover: f32) -> usize {
    let cover = cloud_cover.clamp(0.0, 100.0);
    (cover / 100.0 * MAX_CLOUDS as f32 + 0.5) as usize
}
