//! Reactive maintenance of each square's pseudo-legal destinations.
//!
//! Every occupied square registers itself as an observer of each square whose
//! occupancy its move list depends on. When a square's occupancy changes,
//! `notify` recomputes exactly those observers. Move lists only ever read raw
//! occupancy (never another square's derived moves), so propagation is a
//! single hop.

use super::color::Color;
use super::coord::Coord;
use super::piece::{Piece, PieceKind};
use super::Board;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    fn observe(&mut self, observer: Coord, subject: Coord) {
        self.squares[subject.index()].observers.insert(observer);
        self.squares[observer.index()].subjects.insert(subject);
    }

    fn push_destination(&mut self, from: Coord, to: Coord) {
        self.squares[from.index()].moves.push(to);
    }

    /// Records a capture of the piece on `to`, flagging king threats.
    fn add_capture(&mut self, from: Coord, to: Coord) {
        if let Some(Piece {
            kind: PieceKind::King,
            color,
        }) = self.squares[to.index()].piece
        {
            self.squares[from.index()].attacks_king[color.index()] = true;
        }
        self.push_destination(from, to);
    }

    /// Returns whether `to` exists and is empty.
    fn try_add_pawn_advance(&mut self, from: Coord, to: Option<Coord>) -> bool {
        let to = match to {
            Some(to) => to,
            None => return false,
        };
        self.observe(from, to);
        if !self.squares[to.index()].is_empty() {
            return false;
        }
        self.push_destination(from, to);
        true
    }

    fn try_add_pawn_capture(&mut self, from: Coord, color: Color, to: Option<Coord>) {
        let to = match to {
            Some(to) => to,
            None => return,
        };
        self.observe(from, to);
        let dest = &self.squares[to.index()];
        if dest.holds_color(color.opposite()) {
            self.add_capture(from, to);
            return;
        }
        if !dest.is_empty() {
            return;
        }

        // The pawn that could be taken en passant sits beside us, not on `to`.
        let companion = Coord::at(from.row(), to.col());
        let en_passant = self.en_passant_target == Some(companion)
            && self.squares[companion.index()].holds_color(color.opposite());
        if en_passant {
            self.push_destination(from, to);
        } else {
            // a double step landing on the companion square must reach us
            self.observe(from, companion);
        }
    }

    /// Returns whether `to` exists and is empty, i.e. whether a ray may continue.
    fn try_add_move(&mut self, from: Coord, color: Color, to: Option<Coord>) -> bool {
        let to = match to {
            Some(to) => to,
            None => return false,
        };
        self.observe(from, to);
        let dest = &self.squares[to.index()];
        if dest.is_empty() {
            self.push_destination(from, to);
            return true;
        }
        if dest.holds_color(color.opposite()) {
            self.add_capture(from, to);
        }
        false
    }

    fn try_add_long_range(&mut self, from: Coord, color: Color, directions: &[(i8, i8)]) {
        for &(d_row, d_col) in directions {
            let mut to = from.offset(d_row, d_col);
            while self.try_add_move(from, color, to) {
                to = to.and_then(|c| c.offset(d_row, d_col));
            }
        }
    }

    fn try_add_castling(&mut self, from: Coord, color: Color) {
        let row = color.home_row();
        let rights = self.castle_rights[color.index()];
        let own_rook = Piece::new(color, PieceKind::Rook);

        // (row, 3) and (row, 5) are already observed as king steps
        if rights.queen_side {
            for col in 0..3 {
                self.observe(from, Coord::at(row, col));
            }
            let path_clear = (1..4).all(|col| self.squares[Coord::at(row, col).index()].is_empty());
            if path_clear && self.squares[Coord::at(row, 0).index()].holds(own_rook) {
                self.push_destination(from, Coord::at(row, 2));
            }
        }
        if rights.king_side {
            for col in 6..8 {
                self.observe(from, Coord::at(row, col));
            }
            let path_clear = (5..7).all(|col| self.squares[Coord::at(row, col).index()].is_empty());
            if path_clear && self.squares[Coord::at(row, 7).index()].holds(own_rook) {
                self.push_destination(from, Coord::at(row, 6));
            }
        }
    }

    /// Rebuilds the move list and king threats of the square at `coord` from
    /// the current occupancy, re-registering its dependencies.
    pub(crate) fn update(&mut self, coord: Coord) {
        let square = &mut self.squares[coord.index()];
        let subjects = square.subjects.take();
        square.moves.clear();
        let attacked_before = square.attacks_king;
        square.attacks_king = [false, false];
        let piece = square.piece;

        for subject in subjects {
            self.squares[subject.index()].observers.remove(coord);
        }

        if let Some(Piece { color, kind }) = piece {
            match kind {
                PieceKind::Pawn => {
                    let forward = color.forward();
                    let advanced = self.try_add_pawn_advance(coord, coord.offset(forward, 0));
                    if advanced && coord.row() == color.pawn_row() {
                        self.try_add_pawn_advance(coord, coord.offset(2 * forward, 0));
                    }
                    self.try_add_pawn_capture(coord, color, coord.offset(forward, -1));
                    self.try_add_pawn_capture(coord, color, coord.offset(forward, 1));
                }
                PieceKind::Rook => self.try_add_long_range(coord, color, &ROOK_DIRECTIONS),
                PieceKind::Bishop => self.try_add_long_range(coord, color, &BISHOP_DIRECTIONS),
                PieceKind::Queen => {
                    self.try_add_long_range(coord, color, &ROOK_DIRECTIONS);
                    self.try_add_long_range(coord, color, &BISHOP_DIRECTIONS);
                }
                PieceKind::Knight => {
                    for &(d_row, d_col) in KNIGHT_OFFSETS.iter() {
                        self.try_add_move(coord, color, coord.offset(d_row, d_col));
                    }
                }
                PieceKind::King => {
                    for &(d_row, d_col) in KING_OFFSETS.iter() {
                        self.try_add_move(coord, color, coord.offset(d_row, d_col));
                    }
                    self.try_add_castling(coord, color);
                }
            }
        }

        // counters move only on transitions so repeated updates stay balanced
        let attacks_now = self.squares[coord.index()].attacks_king;
        for color in Color::ALL.iter() {
            let i = color.index();
            match (attacked_before[i], attacks_now[i]) {
                (false, true) => self.king_attackers[i] += 1,
                (true, false) => self.king_attackers[i] -= 1,
                _ => {}
            }
        }
    }

    /// Recomputes every observer of `coord`, then `coord` itself.
    pub(crate) fn notify(&mut self, coord: Coord) {
        // interested observers re-register while updating
        let observers = self.squares[coord.index()].observers.take();
        for observer in observers {
            self.update(observer);
        }
        self.update(coord);
    }
}
