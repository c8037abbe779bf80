use log::debug;
use rand::Rng;

use crate::board::color::Color;
use crate::board::{Board, GameState};
use crate::chess_move::Move;
use crate::evaluate::{material_balance, CHECK_BONUS};

use super::{candidate_moves, random_move, SearchError};

/// One-ply search: plays every legal move on a scratch board and keeps the
/// one leaving the best material for the mover. A random legal move is the
/// starting incumbent and only a strictly better score displaces it.
pub fn greedy_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move, SearchError> {
    let moves = candidate_moves(board)?;
    let mover = board.turn();
    let mut scratch = board.clone();

    let mut best_move = random_move(board, rng)?;
    let mut best_points = move_points(&mut scratch, best_move, mover)?;

    for chess_move in moves {
        let points = move_points(&mut scratch, chess_move, mover)?;
        if points > best_points {
            best_move = chess_move;
            best_points = points;
        }
    }

    debug!(
        "greedy search chose {} for {} ({} points)",
        best_move, mover, best_points
    );
    Ok(best_move)
}

fn move_points(scratch: &mut Board, chess_move: Move, mover: Color) -> Result<i32, SearchError> {
    scratch.apply(chess_move)?;
    let points = match scratch.state() {
        GameState::Checkmate => i32::MAX,
        GameState::Stalemate => 0,
        GameState::Check => CHECK_BONUS + material_balance(scratch, mover),
        GameState::Normal | GameState::Resigned => material_balance(scratch, mover),
    };
    scratch.undo()?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
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
        println!("Testing board:\n{}", board);

        for seed in 0..5 {
            let chess_move = greedy_move(&board, &mut StdRng::seed_from_u64(seed)).unwrap();
            let valid_checkmates = vec![mv("b8b2"), mv("b8a8"), mv("b8a7")];
            assert!(
                valid_checkmates.contains(&chess_move),
                "{} does not lead to checkmate",
                chess_move
            );
        }
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
        println!("Testing board:\n{}", board);

        let chess_move = greedy_move(&board, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(chess_move, mv("c3d5"));
    }

    #[test]
    fn test_prefers_check_when_material_is_equal() {
        let placement = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        let board = Board::from_placement(&placement).unwrap();
        let chess_move = greedy_move(&board, &mut StdRng::seed_from_u64(9)).unwrap();

        let mut scratch = board.clone();
        scratch.apply(chess_move).unwrap();
        assert_eq!(scratch.state(), GameState::Check, "{} gives no check", chess_move);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::starting_position();
        let before = board.legal_moves();
        greedy_move(&board, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(board.legal_moves(), before);
        assert_eq!(board.history_len(), 0);
    }
}
