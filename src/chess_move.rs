use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::coord::Coord;
use crate::board::error::ParseError;
use crate::board::piece::{PieceKind, PROMOTION_KINDS};

static LONG_ALGEBRAIC_MOVE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H][1-8])([a-hA-H][1-8])([rnbqRNBQ]?)$").unwrap());

/// A move of the piece on `from` to `to`, promoting when `promotion` is set.
/// Ordered by origin, then destination, then promotion (no promotion first).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Coord, to: Coord, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }

    pub fn to_uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMove(notation.to_string());
        let caps = LONG_ALGEBRAIC_MOVE.captures(notation).ok_or_else(invalid)?;
        let from = caps[1].parse::<Coord>()?;
        let to = caps[2].parse::<Coord>()?;
        let promotion = match caps[3].chars().next() {
            Some(c) => {
                let kind = PieceKind::from_char(c).ok_or_else(invalid)?;
                debug_assert!(PROMOTION_KINDS.contains(&kind));
                Some(kind)
            }
            None => None,
        };
        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

/// What a player may do on its turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Move),
    Resign,
    /// Take back the player's last full turn (their move and the reply).
    Undo,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(chess_move) => write!(f, "move {}", chess_move),
            Action::Resign => write!(f, "resign"),
            Action::Undo => write!(f, "undo"),
        }
    }
}
