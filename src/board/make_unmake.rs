//! Raw move application and reversal. Neither function touches the legal
//! move set or the game state; callers recompute those.

use smallvec::SmallVec;

use crate::chess_move::Move;

use super::color::Color;
use super::coord::Coord;
use super::error::BoardError;
use super::history::{Capture, Crumb};
use super::piece::PieceKind;
use super::Board;

/// Squares whose occupancy changed in one transition.
pub(crate) type ChangedCoords = SmallVec<[Coord; 6]>;

/// The rook's (from, to) for a king moving two columns onto `king_to`.
fn castling_rook_move(king_to: Coord) -> (Coord, Coord) {
    if king_to.col() == 2 {
        (Coord::at(king_to.row(), 0), Coord::at(king_to.row(), 3))
    } else {
        (Coord::at(king_to.row(), 7), Coord::at(king_to.row(), 5))
    }
}

fn col_distance(a: Coord, b: Coord) -> u8 {
    (a.col() as i8 - b.col() as i8).unsigned_abs()
}

impl Board {
    fn relocate(&mut self, from: Coord, to: Coord) {
        let piece = self.squares[from.index()].piece.take();
        self.squares[to.index()].piece = piece;
    }

    fn try_update_en_passant_pawn(&mut self, coord: Option<Coord>) {
        let coord = match coord {
            Some(coord) => coord,
            None => return,
        };
        match self.squares[coord.index()].piece {
            Some(piece) if piece.color == self.turn && piece.kind == PieceKind::Pawn => {
                self.update(coord)
            }
            _ => {}
        }
    }

    /// Refreshes pawns of the side to move standing beside `target`, so they
    /// gain or lose their en passant capture.
    fn notify_en_passant_target(&mut self, target: Coord) {
        self.try_update_en_passant_pawn(target.offset(0, -1));
        self.try_update_en_passant_pawn(target.offset(0, 1));
    }

    /// Applies a pseudo-legal move and pushes its crumb.
    pub(crate) fn quick_move(&mut self, chess_move: Move) -> Result<ChangedCoords, BoardError> {
        let Move {
            from,
            to,
            promotion,
        } = chess_move;
        let mut piece = self.squares[from.index()]
            .piece
            .ok_or(BoardError::EmptyOrigin { coord: from })?;

        let mut capture = self.squares[to.index()]
            .piece
            .map(|piece| Capture { piece, location: to });

        if let Some(kind) = promotion {
            piece.kind = kind;
        }
        self.squares[from.index()].piece = None;
        self.squares[to.index()].piece = Some(piece);

        let old_en_passant_target = self.en_passant_target.take();
        let mut rook_castling = None;

        match piece.kind {
            PieceKind::Pawn => {
                if (to.row() as i8 - from.row() as i8).abs() == 2 {
                    self.en_passant_target = Some(to);
                } else if to.col() != from.col() && capture.is_none() {
                    let victim = Coord::at(from.row(), to.col());
                    capture = self.squares[victim.index()]
                        .piece
                        .take()
                        .map(|piece| Capture {
                            piece,
                            location: victim,
                        });
                }
            }
            PieceKind::King if col_distance(from, to) == 2 => {
                let (rook_from, rook_to) = castling_rook_move(to);
                self.relocate(rook_from, rook_to);
                rook_castling = Some((rook_from, rook_to));
            }
            _ => {}
        }

        let old_castle_rights = self.castle_rights;
        let mover = self.turn;
        if from.row() == mover.home_row() {
            let rights = &mut self.castle_rights[mover.index()];
            *rights = rights.without_col(from.col());
        }
        if let Some(Capture { piece: taken, location }) = capture {
            if taken.kind == PieceKind::Rook && location.row() == taken.color.home_row() {
                let rights = &mut self.castle_rights[taken.color.index()];
                *rights = rights.without_col(location.col());
            }
        }

        // the window for the previous double step closes; depends on `turn`
        // still being the mover
        if let Some(target) = old_en_passant_target {
            self.notify_en_passant_target(target);
        }

        let mut changed = ChangedCoords::new();
        changed.push(from);
        changed.push(to);
        if let Some(capture) = capture {
            if capture.location != to {
                changed.push(capture.location);
            }
        }
        if let Some((rook_from, rook_to)) = rook_castling {
            changed.push(rook_from);
            changed.push(rook_to);
        }
        for &coord in changed.iter() {
            self.notify(coord);
        }

        self.history.push(Crumb {
            chess_move,
            capture,
            en_passant_target: old_en_passant_target,
            castle_rights: old_castle_rights,
        });
        self.turn = mover.opposite();

        Ok(changed)
    }

    /// Reverses the most recent `quick_move`.
    pub(crate) fn quick_undo(&mut self) -> Result<ChangedCoords, BoardError> {
        let crumb = self.history.pop().ok_or(BoardError::NoMoveToUndo)?;
        let Move {
            from,
            to,
            promotion,
        } = crumb.chess_move;

        let mut piece = self.squares[to.index()]
            .piece
            .ok_or(BoardError::EmptyOrigin { coord: to })?;
        if promotion.is_some() {
            piece.kind = PieceKind::Pawn;
        }
        self.squares[to.index()].piece = None;
        self.squares[from.index()].piece = Some(piece);

        if let Some(capture) = crumb.capture {
            self.squares[capture.location.index()].piece = Some(capture.piece);
        }

        let mut rook_castling = None;
        if piece.kind == PieceKind::King && col_distance(from, to) == 2 {
            let (rook_from, rook_to) = castling_rook_move(to);
            self.relocate(rook_to, rook_from);
            rook_castling = Some((rook_from, rook_to));
        }

        let undone_en_passant_target = self.en_passant_target.take();
        let undone_castle_rights = self.castle_rights;
        self.en_passant_target = crumb.en_passant_target;
        self.castle_rights = crumb.castle_rights;

        // pawns that were offered the undone double step lose it; `turn` is
        // still their colour here
        if let Some(target) = undone_en_passant_target {
            self.notify_en_passant_target(target);
        }

        self.turn = self.turn.opposite();

        // and the mover's pawns regain the restored one
        if let Some(target) = self.en_passant_target {
            self.notify_en_passant_target(target);
        }

        let mut changed = ChangedCoords::new();
        changed.push(from);
        changed.push(to);
        if let Some(capture) = crumb.capture {
            if capture.location != to {
                changed.push(capture.location);
            }
        }
        if let Some((rook_from, rook_to)) = rook_castling {
            changed.push(rook_from);
            changed.push(rook_to);
        }
        for &coord in changed.iter() {
            self.notify(coord);
        }

        // rights are not occupancy, so the graph cannot see them come back
        for color in Color::ALL.iter() {
            if self.castle_rights[color.index()] != undone_castle_rights[color.index()] {
                self.update(home_king_square(*color));
            }
        }

        Ok(changed)
    }
}

fn home_king_square(color: Color) -> Coord {
    Coord::at(color.home_row(), 4)
}
