use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Minesweeper grid: a tile per coordinate inside `bounds`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    bounds: Bounds,
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board with mines on exactly the given coordinates and computes
    /// every tile's adjacent-mine count in a single pass.
    pub fn with_mines<I>(bounds: Bounds, mines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coord2>,
    {
        if bounds.is_empty() {
            return Err(GameError::EmptyBoard);
        }

        let mut tiles: Array2<Tile> = Array2::default(bounds.shape());
        let mut mine_count: CellCount = 0;
        for coords in mines {
            if !bounds.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            let tile = &mut tiles[bounds.to_nd_index(coords)];
            if tile.mine {
                return Err(GameError::DuplicateMine);
            }
            tile.mine = true;
            mine_count += 1;
        }

        let mut board = Self {
            bounds,
            tiles,
            mine_count,
        };
        board.compute_counts();
        Ok(board)
    }

    fn compute_counts(&mut self) {
        for coords in self.bounds.iter() {
            let count = self
                .bounds
                .iter_neighbors(coords)
                .filter(|&pos| self[pos].mine)
                .count();
            // at most eight neighbours
            self.tiles[self.bounds.to_nd_index(coords)].count = count as u8;
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.bounds.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn tile(&self, coords: Coord2) -> Result<Tile> {
        Ok(self[self.validate_coords(coords)?])
    }

    pub(crate) fn tile_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[self.bounds.to_nd_index(coords)]
    }

    pub fn total_tiles(&self) -> CellCount {
        self.bounds.tile_count()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.total_tiles() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.bounds.contains(coords) && self[coords].mine
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.bounds, self.mine_count)
    }

    /// Tiles with their coordinates, in flat-index order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.bounds.iter().map(|coords| (coords, self[coords]))
    }

    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.mine)
            .map(|(coords, _)| coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.bounds.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[self.bounds.to_nd_index(coords)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn counts_match_adjacent_mines() {
        let board = Board::with_mines(Bounds::square(3), [(0, 0), (2, 0)]).unwrap();

        assert_eq!(board[(1, 0)].count, 2);
        assert_eq!(board[(1, 1)].count, 2);
        assert_eq!(board[(0, 1)].count, 1);
        assert_eq!(board[(1, 2)].count, 0);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_tile_count(), 7);
    }

    #[test]
    fn every_count_is_recomputable_from_mines() {
        let mines = [(0, 0), (3, 1), (4, 4), (2, 2), (1, 3)];
        let board = Board::with_mines(Bounds::square(5), mines).unwrap();

        for (coords, tile) in board.iter() {
            let expected = board
                .iter_neighbors(coords)
                .filter(|&pos| mines.contains(&pos))
                .count();
            assert_eq!(usize::from(tile.count), expected, "at {coords:?}");
            assert!(tile.count <= 8);
        }
    }

    #[test]
    fn offset_bounds_keep_coordinates() {
        let bounds = Bounds::new((-2, -2), (2, 2));
        let board = Board::with_mines(bounds, [(-2, -2), (1, 1)]).unwrap();

        assert!(board.contains_mine((-2, -2)));
        assert!(board.contains_mine((1, 1)));
        assert!(!board.contains_mine((2, 2)));
        assert_eq!(board[(0, 0)].count, 1);
        assert_eq!(board.mines().collect::<Vec<_>>(), [(-2, -2), (1, 1)]);
    }

    #[test]
    fn rejects_duplicates_and_out_of_bounds() {
        let bounds = Bounds::square(2);
        assert_eq!(
            Board::with_mines(bounds, [(0, 0), (0, 0)]),
            Err(GameError::DuplicateMine)
        );
        assert_eq!(
            Board::with_mines(bounds, [(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::with_mines(Bounds::square(0), []),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn tile_lookup_is_bounds_checked() {
        let board = Board::with_mines(Bounds::square(2), [(1, 1)]).unwrap();
        assert!(board.tile((1, 1)).unwrap().mine);
        assert_eq!(board.tile((-1, 0)), Err(GameError::InvalidCoords));
    }
}
