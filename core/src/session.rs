use serde::{Deserialize, Serialize};

use crate::*;

/// One game of Minesweeper. Changing difficulty or theme, or restarting,
/// discards the board and builds a fresh one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    theme: Theme,
    seed: u64,
    start_tile: StartTile,
    engine: PlayEngine,
}

impl GameSession {
    pub fn new(config: GameConfig, theme: Theme, seed: u64) -> Result<Self> {
        let engine = Self::build(config, seed, StartTile::Random)?;
        log::debug!("new session {config:?} theme={theme:?} seed={seed}");
        Ok(Self {
            config,
            theme,
            seed,
            start_tile: StartTile::Random,
            engine,
        })
    }

    /// Rebuilds the board so `start_tile` is kept free of mines, for this and
    /// every later restart.
    pub fn with_start_tile(mut self, start_tile: StartTile) -> Result<Self> {
        self.engine = Self::build(self.config, self.seed, start_tile)?;
        self.start_tile = start_tile;
        Ok(self)
    }

    pub fn with_difficulty(difficulty: Difficulty, theme: Theme, seed: u64) -> Result<Self> {
        Self::new(difficulty.config(), theme, seed)
    }

    fn build(config: GameConfig, seed: u64, start_tile: StartTile) -> Result<PlayEngine> {
        let board = RandomMineGenerator::new(seed)
            .with_start_tile(start_tile)
            .generate(config)?;
        Ok(PlayEngine::new(board))
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.engine.reveal(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.engine.toggle_flag(coords)
    }

    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.engine = Self::build(self.config, seed, self.start_tile)?;
        self.seed = seed;
        log::debug!("restarted with seed={seed}");
        Ok(())
    }

    /// The start tile only carries over when it still fits the new board.
    pub fn set_config(&mut self, config: GameConfig, seed: u64) -> Result<()> {
        let start_tile = match self.start_tile {
            StartTile::SimpleSafe(coords) if !config.bounds.contains(coords) => StartTile::Random,
            start_tile => start_tile,
        };
        self.engine = Self::build(config, seed, start_tile)?;
        self.start_tile = start_tile;
        self.config = config;
        self.seed = seed;
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty, seed: u64) -> Result<()> {
        self.set_config(difficulty.config(), seed)
    }

    pub fn set_theme(&mut self, theme: Theme, seed: u64) -> Result<()> {
        self.theme = theme;
        self.restart(seed)
    }
}
