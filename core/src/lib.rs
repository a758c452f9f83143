#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use theme::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod session;
pub mod sketch;
mod theme;
mod tile;
mod types;
pub mod weather;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(bounds: Bounds, mines: CellCount) -> Self {
        Self { bounds, mines }
    }

    /// Validated config: at least one tile, at least one mine and at least one
    /// safe tile.
    pub fn new(bounds: Bounds, mines: CellCount) -> Result<Self> {
        if bounds.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        if mines >= bounds.tile_count() {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(bounds, mines))
    }

    /// `dimension × dimension` board anchored at the origin.
    pub fn square(dimension: Coord, mines: CellCount) -> Result<Self> {
        Self::new(Bounds::square(dimension), mines)
    }

    pub const fn total_tiles(&self) -> CellCount {
        self.bounds.tile_count()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn dimension(self) -> Coord {
        use Difficulty::*;
        match self {
            Beginner => 8,
            Intermediate => 16,
            Expert => 24,
        }
    }

    pub const fn mines(self) -> CellCount {
        use Difficulty::*;
        match self {
            Beginner => 10,
            Intermediate => 40,
            Expert => 99,
        }
    }

    pub const fn config(self) -> GameConfig {
        GameConfig::new_unchecked(Bounds::square(self.dimension()), self.mines())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
