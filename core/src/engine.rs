use alloc::vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Game rules on top of a [`Board`]: reveals, flags, win and loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    clicked_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            clicked_count: Saturating(0),
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bounds(&self) -> Bounds {
        self.board.bounds()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn clicked_count(&self) -> CellCount {
        self.clicked_count.0
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.board.mine_count()) - i64::from(self.flagged_count.0)
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        self.board.tile(coords)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.board.tile_mut(coords);
        if tile.clicked {
            return Ok(MarkOutcome::NoChange);
        }

        tile.flagged = !tile.flagged;
        if tile.flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(MarkOutcome::Changed)
    }

    /// Clicks a tile. A safe tile with no adjacent mines opens its whole
    /// connected zero region plus its numbered border; a mine ends the game.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.board[coords];
        if tile.clicked || tile.flagged {
            return Ok(RevealOutcome::NoChange);
        }

        if tile.mine {
            self.lose(coords);
            return Ok(RevealOutcome::HitMine);
        }

        let opened = self.flood_fill(coords);
        log::trace!("revealed {opened} tiles from {coords:?}");

        if self.clicked_count == Saturating(self.board.safe_tile_count()) {
            self.state = EngineState::Won;
            Ok(RevealOutcome::Won)
        } else {
            self.mark_started();
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Depth-first open from `start`; `clicked` doubles as the visited marker.
    fn flood_fill(&mut self, start: Coord2) -> CellCount {
        let mut opened = Saturating(0);
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let tile = self.board.tile_mut(coords);
            if tile.clicked || tile.flagged || tile.mine {
                continue;
            }
            tile.clicked = true;
            let count = tile.count;
            opened += 1;

            if count == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.board[pos].clicked),
                );
            }
        }

        self.clicked_count += opened;
        opened.0
    }

    fn lose(&mut self, triggered: Coord2) {
        self.triggered_mine = Some(triggered);
        self.state = EngineState::Lost;
        for coords in self.board.bounds().iter() {
            let tile = self.board.tile_mut(coords);
            if tile.mine {
                tile.clicked = true;
            }
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
