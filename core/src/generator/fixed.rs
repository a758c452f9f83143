use alloc::vec::Vec;

use super::*;

/// Places mines on a predetermined set of tiles, for replays and puzzles.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let board = Board::with_mines(config.bounds, self.mines)?;
        if board.mine_count() != config.mines {
            log::warn!(
                "Fixed layout has {} mines, config asked for {}",
                board.mine_count(),
                config.mines
            );
        }
        Ok(board)
    }
}
