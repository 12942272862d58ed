//! Terminal-state guard run before every placement.

use crate::error::MoveError;

use super::board::{Board, COLS};
use super::state::GameStatus;

/// Check a column against the game status and the board. The board checks
/// fullness again on `apply`.
pub fn validate(board: &Board, column: usize, status: &GameStatus) -> Result<(), MoveError> {
    if !status.is_in_progress() {
        return Err(MoveError::GameNotInProgress);
    }
    if column >= COLS {
        return Err(MoveError::ColumnOutOfRange(column));
    }
    if board.is_column_full(column) {
        return Err(MoveError::ColumnFull(column));
    }
    Ok(())
}

pub fn can_apply(board: &Board, column: usize, status: &GameStatus) -> bool {
    validate(board, column, status).is_ok()
}
