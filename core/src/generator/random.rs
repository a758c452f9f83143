use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Places mines by sampling flat tile indices without replacement, optionally
/// keeping a starting tile safe. The same seed always gives the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    start_tile: StartTile,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start_tile: StartTile::Random,
        }
    }

    pub fn with_start_tile(mut self, start_tile: StartTile) -> Self {
        self.start_tile = start_tile;
        self
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let config = GameConfig::new(config.bounds, config.mines)?;
        let bounds = config.bounds;
        let total_tiles =
            usize::try_from(config.total_tiles()).map_err(|_| GameError::BoardTooLarge)?;
        let mines = usize::try_from(config.mines).map_err(|_| GameError::BoardTooLarge)?;

        let reserved = match self.start_tile {
            StartTile::Random => None,
            StartTile::SimpleSafe(coords) => Some(
                bounds
                    .flat_index(coords)
                    .ok_or(GameError::InvalidCoords)?,
            ),
        };
        // the reserved tile is skipped, so one fewer slot is available
        let slots = total_tiles - usize::from(reserved.is_some());
        if mines > slots {
            log::warn!("Cannot keep start tile safe, {mines} mines fill all {slots} free tiles");
            return Err(GameError::TooManyMines);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let sampled = index::sample(&mut rng, slots, mines);
        let mine_coords = sampled
            .iter()
            .map(|slot| match reserved {
                Some(skip) if slot >= skip => slot + 1,
                _ => slot,
            })
            .map(|flat| bounds.coords_of(flat).ok_or(GameError::InvalidCoords))
            .collect::<Result<Vec<_>>>()?;

        let board = Board::with_mines(bounds, mine_coords)?;
        if board.mine_count() != config.mines {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn beginner_board_has_exactly_ten_distinct_mines() {
        let config = GameConfig::square(8, 10).unwrap();
        let board = RandomMineGenerator::new(7).generate(config).unwrap();

        let mines: Vec<_> = board.mines().collect();
        let distinct: BTreeSet<_> = mines.iter().copied().collect();
        assert_eq!(mines.len(), 10);
        assert_eq!(distinct.len(), 10);
        assert_eq!(board.total_tiles(), 64);
        assert_eq!(board.mine_count(), 10);
    }

    #[test]
    fn mine_count_is_exact_for_many_seeds() {
        let config = Difficulty::Intermediate.config();
        for seed in 0..32 {
            let board = RandomMineGenerator::new(seed).generate(config).unwrap();
            assert_eq!(board.mines().count(), 40, "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = Difficulty::Expert.config();
        let a = RandomMineGenerator::new(42).generate(config).unwrap();
        let b = RandomMineGenerator::new(42).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn safe_start_tile_never_holds_a_mine() {
        // 15 of 16 tiles mined, so the only safe tile is the start
        let config = GameConfig::square(4, 15).unwrap();
        for seed in 0..16 {
            let board = RandomMineGenerator::new(seed)
                .with_start_tile(StartTile::SimpleSafe((2, 1)))
                .generate(config)
                .unwrap();
            assert!(!board.contains_mine((2, 1)));
            assert_eq!(board.mine_count(), 15);
            assert_eq!(board[(2, 1)].count, 8);
        }
    }

    #[test]
    fn works_with_offset_bounds() {
        let config = GameConfig::new(Bounds::new((-3, -3), (3, 3)), 9).unwrap();
        let board = RandomMineGenerator::new(3).generate(config).unwrap();
        assert_eq!(board.mine_count(), 9);
        assert!(board.mines().all(|coords| config.bounds.contains(coords)));
    }

    #[test]
    fn mines_reach_every_row_of_a_large_board() {
        // 90 000 tiles, past what a 16-bit count can index
        let config = GameConfig::square(300, 20_000).unwrap();
        assert_eq!(config.total_tiles(), 90_000);

        let board = RandomMineGenerator::new(5).generate(config).unwrap();
        assert_eq!(board.mine_count(), 20_000);
        let deepest = board.mines().map(|(_, r)| r).max().unwrap();
        assert!(deepest >= 290, "deepest mine row {deepest}");
    }

    #[test]
    fn rejects_invalid_requests() {
        let full = GameConfig::new_unchecked(Bounds::square(2), 4);
        assert_eq!(
            RandomMineGenerator::new(0).generate(full),
            Err(GameError::TooManyMines)
        );

        let config = GameConfig::square(2, 1).unwrap();
        assert_eq!(
            RandomMineGenerator::new(0)
                .with_start_tile(StartTile::SimpleSafe((5, 5)))
                .generate(config),
            Err(GameError::InvalidCoords)
        );
    }
}
