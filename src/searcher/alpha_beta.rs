use log::debug;
use rand::Rng;

use crate::board::{Board, GameState};
use crate::chess_move::Move;
use crate::evaluate::{material_balance, CHECK_BONUS};

use super::{candidate_moves, random_move, SearchConfig, SearchError};

/// Depth-limited minimax with alpha-beta pruning. Every candidate move is
/// followed by `depth` further plies; leaves are scored by material.
pub struct AlphaBetaSearcher {
    depth: u8,
    searched_position_count: usize,
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AlphaBetaSearcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            depth: config.depth,
            searched_position_count: 0,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Starts from a random incumbent scored with the full window; each
    /// candidate is then searched with alpha raised to the incumbent's score,
    /// and only a strictly greater score replaces it.
    pub fn search<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Move, SearchError> {
        self.searched_position_count = 0;
        let moves = candidate_moves(board)?;
        let mut scratch = board.clone();

        let mut best_move = random_move(board, rng)?;
        scratch.apply(best_move)?;
        let mut best_points = self.minimax(&mut scratch, self.depth, i32::MIN, i32::MAX, false)?;
        scratch.undo()?;

        for chess_move in moves {
            scratch.apply(chess_move)?;
            let points = self.minimax(&mut scratch, self.depth, best_points, i32::MAX, false)?;
            scratch.undo()?;

            if points > best_points {
                best_move = chess_move;
                best_points = points;
            }
        }
        debug_assert_eq!(scratch.history_len(), board.history_len());

        debug!(
            "alpha-beta search chose {} for {} ({} points, {} positions searched)",
            best_move,
            board.turn(),
            best_points,
            self.searched_position_count
        );
        Ok(best_move)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchError> {
        self.searched_position_count += 1;

        if depth == 0 || board.game_over() {
            return Ok(board_points(board, maximizing));
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for chess_move in board.legal_moves() {
                board.apply(chess_move)?;
                let eval = self.minimax(board, depth - 1, alpha, beta, false)?;
                board.undo()?;

                max_eval = max_eval.max(eval);
                alpha = alpha.max(max_eval);
                if beta <= alpha {
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let mut min_eval = i32::MAX;
            for chess_move in board.legal_moves() {
                board.apply(chess_move)?;
                let eval = self.minimax(board, depth - 1, alpha, beta, true)?;
                board.undo()?;

                min_eval = min_eval.min(eval);
                beta = beta.min(min_eval);
                if beta <= alpha {
                    break;
                }
            }
            Ok(min_eval)
        }
    }
}

/// Scores the position for the side to move, then flips the sign when that
/// side is the minimizing one. Checkmate is `-i32::MAX` so the flip cannot
/// overflow.
fn board_points(board: &Board, maximizing: bool) -> i32 {
    let points = match board.state() {
        GameState::Check => material_balance(board, board.turn()) - CHECK_BONUS,
        GameState::Normal => material_balance(board, board.turn()),
        GameState::Checkmate => -i32::MAX,
        GameState::Stalemate => 0,
        GameState::Resigned => i32::MAX,
    };
    if maximizing {
        points
    } else {
        -points
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::color::Color;
    use crate::chess_position;

    fn mv(notation: &str) -> Move {
        notation.parse().unwrap()
    }

    #[test]
    fn test_find_mate_in_1_white() {
        let placement = chess_position! {
            .Q......
            ........
            ........
            ........
            ........
            ........
            k.K.....
            ........
        };
        let board = Board::from_placement(&placement).unwrap();
        let mut searcher = AlphaBetaSearcher::default();
        println!("Testing board:\n{}", board);

        let chess_move = searcher
            .search(&board, &mut StdRng::seed_from_u64(0))
            .unwrap();
        let valid_checkmates = vec![mv("b8b2"), mv("b8a8"), mv("b8a7")];
        assert!(
            valid_checkmates.contains(&chess_move),
            "{} does not lead to checkmate",
            chess_move
        );
        assert!(searcher.searched_position_count() > 0);
    }

    #[test]
    fn test_find_back_rank_mate_in_2_white() {
        let placement = chess_position! {
            .k.....r
            ppp.....
            ........
            ........
            ........
            ........
            ...Q....
            K..R....
        };
        let mut board = Board::from_placement(&placement).unwrap();
        let mut searcher = AlphaBetaSearcher::new(SearchConfig { depth: 2 });
        let mut rng = StdRng::seed_from_u64(4);
        println!("Testing board:\n{}", board);

        let move1 = searcher.search(&board, &mut rng).unwrap();
        assert!(
            [mv("d1d8"), mv("d2d8")].contains(&move1),
            "failed to find first move of mate in 2, got {}",
            move1
        );
        board.apply(move1).unwrap();
        println!("Testing board:\n{}", board);

        let move2 = searcher.search(&board, &mut rng).unwrap();
        assert_eq!(move2, mv("h8d8"));
        board.apply(move2).unwrap();
        println!("Testing board:\n{}", board);

        let move3 = searcher.search(&board, &mut rng).unwrap();
        board.apply(move3).unwrap();
        println!("Testing board:\n{}", board);
        assert_eq!(board.state(), GameState::Checkmate);
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_takes_free_queen() {
        let placement = chess_position! {
            ....k...
            ........
            ........
            ...q....
            ........
            ..N.....
            ........
            ....K...
        };
        let board = Board::from_placement(&placement).unwrap();
        let mut searcher = AlphaBetaSearcher::default();

        let chess_move = searcher
            .search(&board, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(chess_move, mv("c3d5"));
    }

    #[test]
    fn test_checkmate_sentinel_flips_without_overflow() {
        let mut board = Board::starting_position();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"].iter() {
            board.apply(notation.parse().unwrap()).unwrap();
        }
        assert_eq!(board_points(&board, true), -i32::MAX);
        assert_eq!(board_points(&board, false), i32::MAX);
    }

    #[test]
    fn test_check_is_scored_against_the_side_in_check() {
        let mut board = Board::starting_position();
        for notation in ["e2e4", "f7f6", "d1h5"].iter() {
            board.apply(notation.parse().unwrap()).unwrap();
        }
        assert_eq!(board.state(), GameState::Check);
        assert_eq!(board_points(&board, true), -CHECK_BONUS);
        assert_eq!(board_points(&board, false), CHECK_BONUS);
    }

    #[test]
    fn test_search_is_deterministic_for_a_seed() {
        let board = Board::starting_position();
        let mut searcher = AlphaBetaSearcher::new(SearchConfig { depth: 1 });
        let first = searcher
            .search(&board, &mut StdRng::seed_from_u64(21))
            .unwrap();
        let first_count = searcher.searched_position_count();
        let second = searcher
            .search(&board, &mut StdRng::seed_from_u64(21))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first_count, searcher.searched_position_count());
    }
}
