use std::thread;

use log::{debug, info};
use rand::RngCore;

use crate::board::color::Color;
use crate::board::{Board, GameState};
use crate::chess_move::Action;
use crate::searcher::Player;

use super::outcome::Outcome;
use super::renderer::GameRenderer;
use super::GameError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Stop with `Outcome::PlyLimit` after this many actions.
    pub max_plies: Option<usize>,
}

/// Drives one game: renders the position, asks the side to move for an
/// action and carries it out, until the game ends.
pub struct GameLoop {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    renderers: Vec<Box<dyn GameRenderer>>,
    config: GameConfig,
}

impl GameLoop {
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            board,
            white,
            black,
            renderers: Vec::new(),
            config: GameConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn GameRenderer>) -> Self {
        self.renderers.push(renderer);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn run(&mut self, rng: &mut dyn RngCore) -> Result<Outcome, GameError> {
        let mut actions_taken = 0;

        loop {
            for renderer in self.renderers.iter_mut() {
                renderer.render(&self.board, self.board.changed_coords());
            }

            let turn = self.board.turn();
            let finished = match self.board.state() {
                GameState::Normal => None,
                GameState::Check => {
                    info!("{} is in check", turn);
                    None
                }
                GameState::Checkmate => Some(match turn {
                    Color::White => Outcome::CheckmateBlackWins,
                    Color::Black => Outcome::CheckmateWhiteWins,
                }),
                GameState::Stalemate => Some(Outcome::Stalemate),
                // the turn has already passed to the winner
                GameState::Resigned => Some(match turn {
                    Color::White => Outcome::BlackResigned,
                    Color::Black => Outcome::WhiteResigned,
                }),
            };
            if let Some(outcome) = finished {
                info!("{}", outcome);
                return Ok(outcome);
            }

            if let Some(max_plies) = self.config.max_plies {
                if actions_taken >= max_plies {
                    info!("stopping after {} plies", actions_taken);
                    return Ok(Outcome::PlyLimit);
                }
            }

            let player = match turn {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };
            let action = player.select_action(&self.board, rng)?;
            debug!("{} chose to {}", turn, action);

            match action {
                Action::Move(chess_move) => self.board.apply(chess_move)?,
                Action::Resign => self.board.resign()?,
                Action::Undo => self.board.atomic_undo()?,
            }
            actions_taken += 1;

            let delay = self.renderers.iter().filter_map(|r| r.frame_delay()).max();
            if let Some(delay) = delay {
                thread::sleep(delay);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::coord::Coord;
    use crate::chess_move::Move;
    use crate::searcher::{ComputerPlayer, SearchConfig, SearchError, Strategy};

    /// Plays a fixed list of actions, then fails.
    struct ScriptedPlayer {
        actions: VecDeque<Action>,
    }

    impl ScriptedPlayer {
        fn boxed(actions: &[&str]) -> Box<dyn Player> {
            let actions = actions
                .iter()
                .map(|a| match *a {
                    "resign" => Action::Resign,
                    "undo" => Action::Undo,
                    notation => Action::Move(notation.parse::<Move>().unwrap()),
                })
                .collect();
            Box::new(Self { actions })
        }
    }

    impl Player for ScriptedPlayer {
        fn select_action(
            &mut self,
            _board: &Board,
            _rng: &mut dyn RngCore,
        ) -> Result<Action, SearchError> {
            self.actions.pop_front().ok_or(SearchError::NoAvailableMoves)
        }
    }

    struct RecordingRenderer {
        frames: Rc<RefCell<Vec<Vec<Coord>>>>,
    }

    impl GameRenderer for RecordingRenderer {
        fn render(&mut self, _board: &Board, changed: &[Coord]) {
            self.frames.borrow_mut().push(changed.to_vec());
        }
    }

    #[test]
    fn test_fools_mate_outcome() {
        let mut game = GameLoop::new(
            Board::starting_position(),
            ScriptedPlayer::boxed(&["f2f3", "g2g4"]),
            ScriptedPlayer::boxed(&["e7e5", "d8h4"]),
        );
        let outcome = game.run(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(outcome, Outcome::CheckmateBlackWins);
        assert_eq!(game.board().state(), GameState::Checkmate);
    }

    #[test]
    fn test_resignation_outcome() {
        let mut game = GameLoop::new(
            Board::starting_position(),
            ScriptedPlayer::boxed(&["e2e4"]),
            ScriptedPlayer::boxed(&["resign"]),
        );
        let outcome = game.run(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(outcome, Outcome::BlackResigned);
        assert_eq!(game.board().turn(), Color::White);
    }

    #[test]
    fn test_undo_takes_back_a_full_turn() {
        let mut game = GameLoop::new(
            Board::starting_position(),
            ScriptedPlayer::boxed(&["e2e4", "undo", "d2d4", "resign"]),
            ScriptedPlayer::boxed(&["e7e5", "e7e5"]),
        );
        let outcome = game.run(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(outcome, Outcome::WhiteResigned);

        let board = game.into_board();
        let d4: Coord = "d4".parse().unwrap();
        let e4: Coord = "e4".parse().unwrap();
        assert!(board.piece_at(d4).is_some());
        assert!(board.piece_at(e4).is_none());
        assert_eq!(board.history_len(), 2);
    }

    #[test]
    fn test_illegal_scripted_move_is_an_error() {
        let mut game = GameLoop::new(
            Board::starting_position(),
            ScriptedPlayer::boxed(&["e2e5"]),
            ScriptedPlayer::boxed(&[]),
        );
        let result = game.run(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(GameError::Board(_))));
    }

    #[test]
    fn test_ply_limit() {
        let config = SearchConfig::default();
        let mut game = GameLoop::new(
            Board::starting_position(),
            Box::new(ComputerPlayer::new(Strategy::Random, config)),
            Box::new(ComputerPlayer::new(Strategy::Random, config)),
        )
        .with_config(GameConfig {
            max_plies: Some(3),
        });
        let outcome = game.run(&mut StdRng::seed_from_u64(3)).unwrap();
        // no game can be decided in three plies
        assert_eq!(outcome, Outcome::PlyLimit);
        assert_eq!(game.board().history_len(), 3);
    }

    #[test]
    fn test_renderers_see_every_transition() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let renderer = RecordingRenderer {
            frames: Rc::clone(&frames),
        };
        let mut game = GameLoop::new(
            Board::starting_position(),
            ScriptedPlayer::boxed(&["e2e4", "resign"]),
            ScriptedPlayer::boxed(&["e7e5"]),
        )
        .with_renderer(Box::new(renderer));
        game.run(&mut StdRng::seed_from_u64(0)).unwrap();

        let frames = frames.borrow();
        let squares = |list: &[&str]| -> Vec<Coord> {
            list.iter().map(|s| s.parse().unwrap()).collect()
        };
        assert_eq!(
            *frames,
            vec![
                vec![],
                squares(&["e2", "e4"]),
                squares(&["e7", "e5"]),
                vec![],
            ]
        );
    }
}
