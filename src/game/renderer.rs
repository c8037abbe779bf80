use std::io::Write;
use std::time::Duration;

use log::warn;

use crate::board::coord::Coord;
use crate::board::Board;

/// Observes the game after every committed transition. Renderers get a
/// read-only view of the board plus the squares the transition touched.
pub trait GameRenderer {
    fn render(&mut self, board: &Board, changed: &[Coord]);

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Prints the board as text after every transition.
pub struct TextRenderer<W: Write> {
    out: W,
    delay_between_moves: Option<Duration>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            delay_between_moves: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_between_moves = Some(delay);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, board: &Board, changed: &[Coord]) -> std::io::Result<()> {
        writeln!(self.out, "{}", board)?;
        if !changed.is_empty() {
            let squares: Vec<String> = changed.iter().map(|c| c.to_string()).collect();
            writeln!(self.out, "changed: {}", squares.join(" "))?;
        }
        writeln!(self.out, "{} to move ({})", board.turn(), board.state())?;
        writeln!(self.out)
    }
}

impl<W: Write> GameRenderer for TextRenderer<W> {
    fn render(&mut self, board: &Board, changed: &[Coord]) {
        if let Err(error) = self.write_frame(board, changed) {
            warn!("failed to render board: {}", error);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}
