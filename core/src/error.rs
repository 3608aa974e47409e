use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Custom preset out of range: rows and columns must be 9-30, mines 10 to rows*columns-18")]
    InvalidPreset,
    #[error("Unknown difficulty index {0}")]
    InvalidDifficulty(usize),
}

pub type Result<T> = core::result::Result<T, GameError>;
