use std::time::{Duration, Instant};

use crate::board::error::BoardError;
use crate::board::Board;

/// Counts the leaves of the legal move tree `depth` plies below `board`,
/// playing and taking back every move on the board itself.
pub fn count_positions(board: &mut Board, depth: u8) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }
    // the legal move set is already on hand one ply above the leaves
    if depth == 1 {
        return Ok(board.legal_move_count() as u64);
    }

    let mut count = 0;
    for chess_move in board.legal_moves() {
        board.apply(chess_move)?;
        count += count_positions(board, depth - 1)?;
        board.undo()?;
    }
    Ok(count)
}

pub fn run_count_positions(depth: u8) -> Result<(), BoardError> {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 0..=depth {
        let mut board = Board::default();

        let starting_time = Instant::now();
        let count = count_positions(&mut board, depth)?;
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
    Ok(())
}
