use log::debug;
use rand::Rng;

use crate::board::color::Color;
use crate::board::{Board, GameState};
use crate::chess_move::Move;
use crate::evaluate::{material_balance, CHECK_BONUS};

use super::{candidate_moves, random_move, SearchError};

/// Two-ply search: each candidate is scored by the opponent's most damaging
/// reply, so material left hanging is seen one ply ahead.
pub fn lookahead_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Move, SearchError> {
    let moves = candidate_moves(board)?;
    let mover = board.turn();
    let mut scratch = board.clone();

    let mut best_move = random_move(board, rng)?;
    let mut best_points = move_points(&mut scratch, best_move, mover)?;

    for chess_move in moves {
        let points = move_points(&mut scratch, chess_move, mover)?;
        if points > best_points {
            best_move = chess_move;
            best_points = points;
        }
    }

    debug!(
        "lookahead search chose {} for {} ({} points)",
        best_move, mover, best_points
    );
    Ok(best_move)
}

fn move_points(scratch: &mut Board, chess_move: Move, mover: Color) -> Result<i32, SearchError> {
    scratch.apply(chess_move)?;
    let points = match scratch.state() {
        GameState::Checkmate => i32::MAX,
        GameState::Stalemate | GameState::Resigned => 0,
        GameState::Check => CHECK_BONUS.saturating_add(worst_reply_points(scratch, mover)?),
        GameState::Normal => worst_reply_points(scratch, mover)?,
    };
    scratch.undo()?;
    Ok(points)
}

/// The score `mover` is left with after the reply that hurts it most.
fn worst_reply_points(scratch: &mut Board, mover: Color) -> Result<i32, SearchError> {
    let mut worst = i32::MAX;
    for reply in scratch.legal_moves() {
        scratch.apply(reply)?;
        worst = worst.min(position_points(scratch, mover));
        scratch.undo()?;
    }
    Ok(worst)
}

/// Scores a position where `mover` is to move again.
fn position_points(board: &Board, mover: Color) -> i32 {
    match board.state() {
        GameState::Check => material_balance(board, mover) - CHECK_BONUS,
        GameState::Normal => material_balance(board, mover),
        GameState::Checkmate => i32::MIN,
        GameState::Stalemate => 0,
        GameState::Resigned => i32::MAX,
    }
}
