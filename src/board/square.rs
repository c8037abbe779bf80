use smallvec::SmallVec;

use super::color::Color;
use super::coord::Coord;
use super::coord_set::CoordSet;
use super::piece::Piece;

pub(crate) type Destinations = SmallVec<[Coord; 16]>;

/// One board cell plus the cached, reactively maintained data derived from
/// its occupant.
///
/// `observers` lists the squares whose move computation reads this square's
/// occupancy; `subjects` is the inverse relation. X is in Y.observers iff Y is
/// in X.subjects.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Square {
    pub(crate) piece: Option<Piece>,
    pub(crate) observers: CoordSet,
    pub(crate) subjects: CoordSet,
    /// Pseudo-legal destinations of the occupant.
    pub(crate) moves: Destinations,
    /// Whether the occupant currently threatens each colour's king.
    pub(crate) attacks_king: [bool; 2],
}

impl Square {
    pub(crate) fn holds(&self, piece: Piece) -> bool {
        self.piece == Some(piece)
    }

    pub(crate) fn holds_color(&self, color: Color) -> bool {
        matches!(self.piece, Some(p) if p.color == color)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}
