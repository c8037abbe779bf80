use super::color::Color;
use super::coord::Coord;
use super::error::{ParseError, SetupError};
use super::piece::{Piece, PieceKind};

const STARTING_GRID: &str = "
    rnbqkbnr
    pppppppp
    ........
    ........
    ........
    ........
    PPPPPPPP
    RNBQKBNR
";

/// A free-form arrangement of pieces plus the side to move, validated when
/// turned into a `Board`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pieces: [Option<Piece>; 64],
    turn: Color,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            pieces: [None; 64],
            turn: Color::White,
        }
    }
}

impl Placement {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        Self::from_grid(STARTING_GRID).expect("the starting grid is well formed")
    }

    /// Parses 64 piece letters (`.` for empty), rank 8 first, as seen from
    /// white's side. Whitespace is ignored.
    pub fn from_grid(grid: &str) -> Result<Self, ParseError> {
        let cells: Vec<char> = grid.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(ParseError::InvalidGrid(cells.len()));
        }

        let mut placement = Self::new();
        for (i, &c) in cells.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).ok_or(ParseError::InvalidPiece(c))?;
            // the first character is a8, so rows are transposed
            let coord = Coord::at(7 - (i / 8) as u8, (i % 8) as u8);
            placement.put(coord, piece);
        }
        Ok(placement)
    }

    /// Puts `piece` on `coord`, returning whatever stood there.
    pub fn put(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        self.pieces[coord.index()].replace(piece)
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        self.pieces[coord.index()].take()
    }

    pub fn get(&self, coord: Coord) -> Option<Piece> {
        self.pieces[coord.index()]
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> &mut Self {
        self.turn = turn;
        self
    }

    /// Checks the placement rules that do not need move generation: one king
    /// per colour and no pawns on the first or last row.
    pub fn validate(&self) -> Result<(), SetupError> {
        for &color in Color::ALL.iter() {
            let king = Some(Piece::new(color, PieceKind::King));
            let count = self.pieces.iter().filter(|&&p| p == king).count();
            if count != 1 {
                return Err(SetupError::KingCount { color, count });
            }
        }

        let misplaced_pawn = Coord::all().find(|coord| {
            (coord.row() == 0 || coord.row() == 7)
                && matches!(self.get(*coord), Some(p) if p.kind == PieceKind::Pawn)
        });
        if let Some(coord) = misplaced_pawn {
            return Err(SetupError::PawnOnBackRank { coord });
        }

        Ok(())
    }
}

/// Builds a `Placement` from an 8x8 grid of piece letters, rank 8 on top.
///
/// ```
/// use reactive_chess::chess_position;
///
/// let placement = chess_position! {
///     ....k...
///     ........
///     ........
///     ........
///     ........
///     ........
///     ........
///     ....K...
/// };
/// assert!(placement.validate().is_ok());
/// ```
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        $crate::board::Placement::from_grid(stringify!($($piece)*))
            .expect("chess_position! expects 64 piece letters or dots")
    }};
}
