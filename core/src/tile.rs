use serde::{Deserialize, Serialize};

/// Play state of a single board tile.
///
/// `count` is filled in once, after every mine is placed, and never changes
/// afterwards. Only `clicked` and `flagged` move during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub mine: bool,
    pub count: u8,
    pub clicked: bool,
    pub flagged: bool,
}

impl Tile {
    pub const fn is_unrevealed(self) -> bool {
        !self.clicked
    }

    /// A clicked safe tile with no adjacent mines.
    pub const fn is_open_zero(self) -> bool {
        self.clicked && !self.mine && self.count == 0
    }
}
