//! Move selection strategies. Each one reads the board it is handed and does
//! its exploring on a private clone, applying and undoing moves in place.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::Board;
use crate::chess_move::{Action, Move};

pub use self::alpha_beta::AlphaBetaSearcher;
pub use self::greedy::greedy_move;
pub use self::lookahead::lookahead_move;
pub use self::random::random_move;

mod alpha_beta;
mod greedy;
mod lookahead;
mod random;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies the alpha-beta searcher looks below each candidate move.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

/// Anything that can take a turn: given the position, decide on an action.
pub trait Player {
    fn select_action(
        &mut self,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<Action, SearchError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Greedy,
    Lookahead,
    AlphaBeta,
}

impl FromStr for Strategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            "lookahead" => Ok(Strategy::Lookahead),
            "alpha-beta" => Ok(Strategy::AlphaBeta),
            _ => Err("invalid strategy; options are: random, greedy, lookahead, alpha-beta"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Lookahead => "lookahead",
            Strategy::AlphaBeta => "alpha-beta",
        };
        write!(f, "{}", name)
    }
}

/// A player that always moves, choosing with one of the built-in strategies.
pub struct ComputerPlayer {
    strategy: Strategy,
    searcher: AlphaBetaSearcher,
}

impl ComputerPlayer {
    pub fn new(strategy: Strategy, config: SearchConfig) -> Self {
        Self {
            strategy,
            searcher: AlphaBetaSearcher::new(config),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Positions visited by the last alpha-beta search; zero for the other
    /// strategies.
    pub fn searched_position_count(&self) -> usize {
        self.searcher.searched_position_count()
    }
}

impl Player for ComputerPlayer {
    fn select_action(
        &mut self,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<Action, SearchError> {
        let chess_move = match self.strategy {
            Strategy::Random => random_move(board, rng)?,
            Strategy::Greedy => greedy_move(board, rng)?,
            Strategy::Lookahead => lookahead_move(board, rng)?,
            Strategy::AlphaBeta => self.searcher.search(board, rng)?,
        };
        Ok(Action::Move(chess_move))
    }
}

/// The legal moves a strategy may choose from, or an error once the game
/// is over.
fn candidate_moves(board: &Board) -> Result<Vec<Move>, SearchError> {
    if board.game_over() {
        return Err(SearchError::NoAvailableMoves);
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_parse_strategy() {
        for name in ["random", "greedy", "lookahead", "alpha-beta"].iter() {
            let strategy: Strategy = name.parse().unwrap();
            assert_eq!(strategy.to_string(), *name);
        }
        assert!("minimax".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_default_depth() {
        assert_eq!(SearchConfig::default().depth, 2);
    }

    #[test]
    fn test_every_strategy_returns_a_legal_move() {
        let board = Board::starting_position();
        let mut rng = StdRng::seed_from_u64(7);
        for &strategy in [
            Strategy::Random,
            Strategy::Greedy,
            Strategy::Lookahead,
            Strategy::AlphaBeta,
        ]
        .iter()
        {
            let mut player = ComputerPlayer::new(strategy, SearchConfig { depth: 1 });
            match player.select_action(&board, &mut rng).unwrap() {
                Action::Move(chess_move) => assert!(
                    board.is_legal_move(&chess_move),
                    "{} chose illegal {}",
                    strategy,
                    chess_move
                ),
                action => panic!("{} chose {}", strategy, action),
            }
        }
    }

    #[test]
    fn test_strategies_refuse_finished_games() {
        let mut board = Board::starting_position();
        board.resign().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut player = ComputerPlayer::new(Strategy::Greedy, SearchConfig::default());
        assert_eq!(
            player.select_action(&board, &mut rng),
            Err(SearchError::NoAvailableMoves)
        );
    }
}
