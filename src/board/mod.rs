//! The chess position: an 8x8 grid of squares with reactively maintained
//! pseudo-legal move lists, castling and en passant state, the legal move
//! set of the side to move, and a history stack for exact reversal.

pub mod castle_rights;
pub mod color;
pub mod coord;
pub mod coord_set;
pub mod error;
pub mod piece;

mod dependency_graph;
mod display;
mod history;
mod legality;
mod make_unmake;
mod placement;
mod square;


use std::collections::BTreeSet;

use log::{debug, trace};

use crate::chess_move::Move;

use castle_rights::CastleRights;
use color::Color;
use coord::Coord;
use error::{BoardError, SetupError};
use history::History;
use piece::{Piece, PieceKind};
use square::Square;

pub use legality::GameState;
pub use placement::Placement;

/// A chess position that can be mutated only through `apply`, `undo`,
/// `atomic_undo` and `resign`. Every transition leaves the legal move set and
/// the game state current.
#[derive(Clone)]
pub struct Board {
    squares: [Square; 64],
    state: GameState,
    turn: Color,
    /// Number of enemy pieces attacking each colour's king.
    king_attackers: [u8; 2],
    /// Square of a pawn that just stepped two rows, capturable this ply only.
    en_passant_target: Option<Coord>,
    castle_rights: [CastleRights; 2],
    legal_moves: BTreeSet<Move>,
    history: History,
    changed_coords: Vec<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        Self::from_placement(&Placement::starting_position())
            .expect("the initial arrangement is a valid placement")
    }

    /// Builds a board from an arbitrary placement. Castling rights are
    /// granted for every king and rook pair standing on its home squares.
    pub fn from_placement(placement: &Placement) -> Result<Self, SetupError> {
        placement.validate()?;

        let mut board = Self {
            squares: std::array::from_fn(|_| Square::default()),
            state: GameState::Normal,
            turn: placement.turn(),
            king_attackers: [0, 0],
            en_passant_target: None,
            castle_rights: [CastleRights::none(); 2],
            legal_moves: BTreeSet::new(),
            history: History::default(),
            changed_coords: Vec::new(),
        };
        for coord in Coord::all() {
            board.squares[coord.index()].piece = placement.get(coord);
        }
        // before any update, or kings would list castling moves they lack
        for color in Color::ALL.iter() {
            board.castle_rights[color.index()] = board.inferred_castle_rights(*color);
        }
        for coord in Coord::all() {
            if !board.squares[coord.index()].is_empty() {
                board.update(coord);
            }
        }
        board.update_moves()?;
        board.update_state();

        let waiting = board.turn.opposite();
        if board.king_attackers[waiting.index()] > 0 {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }
        Ok(board)
    }

    fn inferred_castle_rights(&self, color: Color) -> CastleRights {
        let row = color.home_row();
        let holds = |col: u8, kind: PieceKind| {
            self.squares[Coord::at(row, col).index()].holds(Piece::new(color, kind))
        };
        let king_home = holds(4, PieceKind::King);
        CastleRights {
            queen_side: king_home && holds(0, PieceKind::Rook),
            king_side: king_home && holds(7, PieceKind::Rook),
        }
    }

    /// All currently legal moves, ordered by origin, destination, promotion.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves.iter().copied().collect()
    }

    pub fn legal_move_count(&self) -> usize {
        self.legal_moves.len()
    }

    pub fn is_legal_move(&self, chess_move: &Move) -> bool {
        self.legal_moves.contains(chess_move)
    }

    pub fn at(&self, row: usize, col: usize) -> Result<Option<Piece>, BoardError> {
        let coord = Coord::new(row, col).ok_or(BoardError::OutOfRange { row, col })?;
        Ok(self.piece_at(coord))
    }

    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.squares[coord.index()].piece
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |coord| self.piece_at(coord).map(|piece| (coord, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|square| !square.is_empty()).count()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn game_over(&self) -> bool {
        matches!(
            self.state,
            GameState::Checkmate | GameState::Stalemate | GameState::Resigned
        )
    }

    /// Squares touched by the most recent move or undo; empty before any.
    pub fn changed_coords(&self) -> &[Coord] {
        &self.changed_coords
    }

    /// Whether a player's full turn (their move and the reply) can be undone.
    pub fn has_prior_move(&self) -> bool {
        self.history.len() >= 2
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn king_attackers(&self, color: Color) -> u8 {
        self.king_attackers[color.index()]
    }

    pub fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant_target
    }

    pub fn castle_rights(&self, color: Color) -> CastleRights {
        self.castle_rights[color.index()]
    }

    /// Plays a move from the legal move set. The board is unchanged on error.
    pub fn apply(&mut self, chess_move: Move) -> Result<(), BoardError> {
        if !self.is_legal_move(&chess_move) {
            return Err(BoardError::IllegalMove { chess_move });
        }
        let mover = self.turn;
        self.changed_coords = self.quick_move(chess_move)?.to_vec();
        self.refresh()?;
        debug!("{} played {}, position is {}", mover, chess_move, self.state);
        Ok(())
    }

    /// Takes back one ply. Undoing a resignation only hands the turn back.
    pub fn undo(&mut self) -> Result<(), BoardError> {
        if self.history.is_empty() {
            return Err(BoardError::NoMoveToUndo);
        }
        if self.state == GameState::Resigned {
            self.turn = self.turn.opposite();
            self.changed_coords.clear();
        } else {
            self.changed_coords = self.quick_undo()?.to_vec();
        }
        self.refresh()?;
        debug!("undid one ply, {} to move", self.turn);
        Ok(())
    }

    /// Takes back two plies as one transaction. A resignation counts as the
    /// first of the two.
    pub fn atomic_undo(&mut self) -> Result<(), BoardError> {
        if !self.has_prior_move() {
            return Err(BoardError::NoPriorMove);
        }
        if self.state == GameState::Resigned {
            self.turn = self.turn.opposite();
            self.changed_coords.clear();
        } else {
            self.changed_coords = self.quick_undo()?.to_vec();
        }
        let changed = self.quick_undo()?;
        self.changed_coords.extend(changed);
        self.refresh()?;
        debug!("undid a full turn, {} to move", self.turn);
        Ok(())
    }

    /// The side to move gives up; the turn passes to the winner.
    pub fn resign(&mut self) -> Result<(), BoardError> {
        if self.game_over() {
            return Err(BoardError::GameAlreadyOver);
        }
        debug!("{} resigned", self.turn);
        self.turn = self.turn.opposite();
        self.state = GameState::Resigned;
        self.legal_moves.clear();
        self.changed_coords.clear();
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), BoardError> {
        self.update_moves()?;
        self.update_state();
        trace!(
            "{} legal moves, attackers on kings: black {}, white {}",
            self.legal_moves.len(),
            self.king_attackers[Color::Black.index()],
            self.king_attackers[Color::White.index()]
        );
        Ok(())
    }
}
