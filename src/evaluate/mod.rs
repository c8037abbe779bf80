use crate::board::color::Color;
use crate::board::Board;

pub use self::piece_values::material_value;

mod piece_values;

/// Added for giving check, subtracted for standing in it.
pub const CHECK_BONUS: i32 = 5;

/// Material on the board seen from `color`'s side: its own pieces count
/// positive, the opponent's negative.
pub fn material_balance(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = material_value(piece.kind);
            if piece.color == color {
                value
            } else {
                -value
            }
        })
        .sum()
}
