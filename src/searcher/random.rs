use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::chess_move::Move;

use super::{candidate_moves, SearchError};

/// Picks one legal move uniformly at random.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move, SearchError> {
    let moves = candidate_moves(board)?;
    moves
        .choose(rng)
        .copied()
        .ok_or(SearchError::NoAvailableMoves)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::chess_position;

    #[test]
    fn test_random_move_is_seeded() {
        let board = Board::starting_position();
        let first = random_move(&board, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = random_move(&board, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_move_covers_the_legal_moves() {
        let board = Board::starting_position();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: BTreeSet<Move> = (0..500)
            .map(|_| random_move(&board, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), board.legal_move_count());
    }

    #[test]
    fn test_no_moves_in_checkmate() {
        let mut board = Board::starting_position();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"].iter() {
            board.apply(notation.parse().unwrap()).unwrap();
        }
        let result = random_move(&board, &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(SearchError::NoAvailableMoves));
    }

    #[test]
    fn test_no_moves_between_bare_kings() {
        let placement = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let board = Board::from_placement(&placement).unwrap();
        let result = random_move(&board, &mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(SearchError::NoAvailableMoves));
    }
}
