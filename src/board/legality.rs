use std::fmt;

use crate::chess_move::Move;

use super::coord::Coord;
use super::error::BoardError;
use super::piece::{PieceKind, PROMOTION_KINDS};
use super::Board;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum GameState {
    Normal,
    Check,
    Checkmate,
    Stalemate,
    Resigned,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            GameState::Normal => "normal",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
            GameState::Resigned => "resigned",
        };
        write!(f, "{}", state)
    }
}

impl Board {
    /// Rebuilds the legal move set by speculatively playing every cached
    /// pseudo-legal move of the side to move on the live board.
    pub(crate) fn update_moves(&mut self) -> Result<(), BoardError> {
        self.legal_moves.clear();
        let mover = self.turn;

        for from in Coord::all() {
            let piece = match self.squares[from.index()].piece {
                Some(piece) if piece.color == mover => piece,
                _ => continue,
            };
            // playing a move rewrites this list, so iterate over a copy
            let destinations = self.squares[from.index()].moves.clone();

            for to in destinations {
                // the promotion choice never affects legality
                self.quick_move(Move::new(from, to))?;
                let leaves_king_safe = self.king_attackers[mover.index()] == 0;
                self.quick_undo()?;

                if !leaves_king_safe {
                    continue;
                }
                let promotes = piece.kind == PieceKind::Pawn && (to.row() == 0 || to.row() == 7);
                if promotes {
                    for &kind in PROMOTION_KINDS.iter() {
                        self.legal_moves.insert(Move::promoting(from, to, kind));
                    }
                } else {
                    self.legal_moves.insert(Move::new(from, to));
                }
            }
        }

        Ok(())
    }

    pub(crate) fn update_state(&mut self) {
        let in_check = self.king_attackers[self.turn.index()] > 0;
        let has_moves = !self.legal_moves.is_empty();

        self.state = match (in_check, has_moves) {
            (true, true) => GameState::Check,
            (true, false) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
            // two bare kings cannot mate
            (false, true) if self.piece_count() == 2 => GameState::Stalemate,
            (false, true) => GameState::Normal,
        };
    }
}
