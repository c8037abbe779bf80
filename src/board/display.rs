use std::fmt;

use super::coord::Coord;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8u8 {
                let cell = match self.piece_at(Coord::at(row, col)) {
                    Some(piece) => piece.to_char(),
                    None if (row + col) % 2 == 1 => ' ',
                    None => '_',
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_text() {
        let expected = [
            "8 rnbqkbnr",
            "7 pppppppp",
            "6  _ _ _ _",
            "5 _ _ _ _ ",
            "4  _ _ _ _",
            "3 _ _ _ _ ",
            "2 PPPPPPPP",
            "1 RNBQKBNR",
            "",
            "  abcdefgh",
        ]
        .join("\n");
        assert_eq!(Board::starting_position().to_string(), expected);
    }
}
