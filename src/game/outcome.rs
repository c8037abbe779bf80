use std::fmt;

use crate::board::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    CheckmateWhiteWins,
    CheckmateBlackWins,
    Stalemate,
    WhiteResigned,
    BlackResigned,
    /// The game was cut off before it finished.
    PlyLimit,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::CheckmateWhiteWins | Outcome::BlackResigned => Some(Color::White),
            Outcome::CheckmateBlackWins | Outcome::WhiteResigned => Some(Color::Black),
            Outcome::Stalemate | Outcome::PlyLimit => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outcome::CheckmateWhiteWins => "Checkmate! White wins!",
            Outcome::CheckmateBlackWins => "Checkmate! Black wins!",
            Outcome::Stalemate => "Stalemate!",
            Outcome::WhiteResigned => "White resigned. Black wins!",
            Outcome::BlackResigned => "Black resigned. White wins!",
            Outcome::PlyLimit => "Ply limit reached.",
        };
        write!(f, "{}", message)
    }
}

/// Running tally over a series of games, kept in half-points: a win is
/// worth two, a stalemate one to each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    half_points: [u32; 2],
}

impl Score {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Stalemate => {
                self.half_points[Color::White.index()] += 1;
                self.half_points[Color::Black.index()] += 1;
            }
            Outcome::PlyLimit => {}
            _ => {
                if let Some(winner) = outcome.winner() {
                    self.half_points[winner.index()] += 2;
                }
            }
        }
    }

    pub fn half_points(&self, color: Color) -> u32 {
        self.half_points[color.index()]
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Score:")?;
        for (i, &color) in [Color::White, Color::Black].iter().enumerate() {
            let half_points = self.half_points(color);
            let name = if color == Color::White { "White" } else { "Black" };
            write!(f, "{}: {}", name, half_points / 2)?;
            if half_points % 2 == 1 {
                write!(f, " 1/2")?;
            }
            if i == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
