/// Castling rights of one colour. Rights are only ever lost during play;
/// undo restores them from history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub queen_side: bool,
    pub king_side: bool,
}

impl CastleRights {
    pub const fn all() -> Self {
        Self {
            queen_side: true,
            king_side: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            queen_side: false,
            king_side: false,
        }
    }

    pub const fn is_empty(self) -> bool {
        !self.queen_side && !self.king_side
    }

    /// Rights remaining after the piece on `col` of the home row moves or is captured.
    pub const fn without_col(self, col: u8) -> Self {
        Self {
            queen_side: self.queen_side && col != 0 && col != 4,
            king_side: self.king_side && col != 7 && col != 4,
        }
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}
