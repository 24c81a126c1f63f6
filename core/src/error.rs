use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Coordinates ({row}, {column}) are outside the board")]
    OutOfRange { row: Coord, column: Coord },
    #[error("Board shape does not match the fixed board size")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, BoardError>;
