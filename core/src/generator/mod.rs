use crate::*;
use serde::{Deserialize, Serialize};
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartTile {
    /// Mines may land anywhere, including the first tile clicked.
    #[default]
    Random,
    /// The given tile never holds a mine.
    SimpleSafe(Coord2),
}
