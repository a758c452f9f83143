use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board has no tiles")]
    EmptyBoard,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board has more tiles than this platform can address")]
    BoardTooLarge,
    #[error("Mine placed twice on the same tile")]
    DuplicateMine,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SketchError {
    #[error("Sketch area is empty")]
    EmptyArea,
    #[error("Sketch area {width}x{height} exceeds {max} cells per side")]
    AreaTooLarge { width: usize, height: usize, max: usize },
    #[error("Invalid size range {min}..={max}")]
    InvalidSizeRange { min: u16, max: u16 },
    #[error("Grid is full, no room for another box")]
    GridFull,
}
