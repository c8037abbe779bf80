use thiserror::Error;

use crate::board::error::BoardError;
use crate::searcher::SearchError;

pub mod game_loop;
pub mod outcome;
pub mod position_counter;
pub mod renderer;

pub use self::game_loop::{GameConfig, GameLoop};
pub use self::outcome::{Outcome, Score};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
