use crate::chess_move::Move;

use super::castle_rights::CastleRights;
use super::coord::Coord;
use super::piece::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Capture {
    pub(crate) piece: Piece,
    pub(crate) location: Coord,
}

/// Everything needed to reverse exactly one applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Crumb {
    pub(crate) chess_move: Move,
    pub(crate) capture: Option<Capture>,
    /// En passant target before the move.
    pub(crate) en_passant_target: Option<Coord>,
    /// Castle rights before the move, indexed by colour.
    pub(crate) castle_rights: [CastleRights; 2],
}

/// Strict LIFO stack of crumbs, one per applied move.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    stack: Vec<Crumb>,
}

impl History {
    pub(crate) fn push(&mut self, crumb: Crumb) {
        self.stack.push(crumb);
    }

    pub(crate) fn pop(&mut self) -> Option<Crumb> {
        self.stack.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
