use thiserror::Error;

use crate::chess_move::Move;

use super::color::Color;
use super::coord::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("illegal move: {chess_move}")]
    IllegalMove { chess_move: Move },
    #[error("no move to undo")]
    NoMoveToUndo,
    #[error("no prior move to undo")]
    NoPriorMove,
    #[error("game already over")]
    GameAlreadyOver,
    #[error("coordinates out of range: ({row}, {col})")]
    OutOfRange { row: usize, col: usize },
    #[error("cannot move from {coord}, the square is empty")]
    EmptyOrigin { coord: Coord },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("must have exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },
    #[error("cannot have a pawn on the first or last row ({coord})")]
    PawnOnBackRank { coord: Coord },
    #[error("the {color} king must not be in check when it is not {color}'s turn")]
    OpponentInCheck { color: Color },
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid coordinate `{0}`, expected a file a-h followed by a rank 1-8")]
    InvalidCoord(String),
    #[error("invalid move `{0}`, expected e.g. `e2e4` or `e7e8q`")]
    InvalidMove(String),
    #[error("invalid piece `{0}`")]
    InvalidPiece(char),
    #[error("expected 64 squares in the grid, got {0}")]
    InvalidGrid(usize),
}
