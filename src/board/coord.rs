use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ParseError;

static ALGEBRAIC_SQUARE: Lazy<Regex> = Lazy::new(|| Regex::new("^([a-hA-H])([1-8])$").unwrap());

/// A board cell address. Row 0 is white's back rank, column 0 is the a-file.
/// Ordering is lexicographic on (row, col), which is also the order of
/// `index()`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Caller guarantees both values are below 8.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// The coordinate `d_row` rows and `d_col` columns away, if it is on the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Coord::at(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Coord {
    type Err = ParseError;

    fn from_str(algebraic: &str) -> Result<Self, Self::Err> {
        let caps = ALGEBRAIC_SQUARE
            .captures(algebraic)
            .ok_or_else(|| ParseError::InvalidCoord(algebraic.to_string()))?;
        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'1';
        Ok(Coord::at(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_algebraic() {
        let e2: Coord = "e2".parse().unwrap();
        assert_eq!((e2.row(), e2.col()), (1, 4));
        let h8: Coord = "H8".parse().unwrap();
        assert_eq!(h8.index(), 63);
        assert!("i1".parse::<Coord>().is_err());
        assert!("a9".parse::<Coord>().is_err());
        assert!("a".parse::<Coord>().is_err());
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!(Coord::at(0, 0).to_string(), "a1");
        assert_eq!(Coord::at(7, 7).to_string(), "h8");
        assert_eq!(Coord::at(3, 4).to_string(), "e4");
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
        assert_eq!(Coord::new(7, 7), Some(Coord::at(7, 7)));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1 = Coord::at(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(2, 1), Some(Coord::at(2, 1)));
        assert_eq!(Coord::at(7, 7).offset(1, 1), None);
    }

    #[test]
    fn test_order_is_row_major() {
        assert!(Coord::at(0, 7) < Coord::at(1, 0));
        let ordered: Vec<usize> = Coord::all().map(|c| c.index()).collect();
        assert_eq!(ordered, (0..64).collect::<Vec<_>>());
    }
}
