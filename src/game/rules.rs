//! Pure rule functions. Every function here reads a board and returns a new
//! value; none of them mutate their input.

use tracing::{debug, warn};

use super::{Board, Token};
use crate::error::{InitError, PlayError};

/// Shortest run [`find_winner`] will ever accept.
pub const MIN_WINNING_RUN: usize = 3;

/// Scan directions as `(dx, dy)`: vertical, diagonal up, horizontal,
/// diagonal down. Their order is part of the tie-break.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

/// Red moves first, so red is level with yellow or exactly one ahead.
fn alternation_holds(red: usize, yellow: usize) -> bool {
    red == yellow || red == yellow + 1
}

/// Check that a board is playable. Checks run in a fixed order and the first
/// failure is reported.
pub fn validate(board: &Board) -> Result<(), InitError> {
    if board.width() < 1 || board.height() < 1 {
        return Err(InitError::InvalidMagnitudes);
    }

    let height = board.height() as usize;
    if board.columns().len() != board.width() as usize
        || board.columns().iter().any(|col| col.len() > height)
    {
        return Err(InitError::InvalidData);
    }

    let (red, yellow) = board.counts();
    if !alternation_holds(red, yellow) {
        return Err(InitError::InvalidData);
    }

    Ok(())
}

/// Drop `token` into `column` and return the resulting board.
///
/// Assumes `board` already passed [`validate`]; only bounds, capacity and turn
/// order are checked here.
pub fn apply_move(board: &Board, token: Token, column: i32) -> Result<Board, PlayError> {
    if column < 0 || column >= board.width() {
        return Err(PlayError::OutOfRange);
    }
    let col = board.column(column).ok_or(PlayError::OutOfRange)?;

    if col.len() as i64 >= i64::from(board.height()) {
        return Err(PlayError::ColumnFull);
    }

    let (mut red, mut yellow) = board.counts();
    match token {
        Token::Red => red += 1,
        Token::Yellow => yellow += 1,
    }
    if !alternation_holds(red, yellow) {
        return Err(PlayError::NotYourTurn);
    }

    Ok(board.with_token(column as usize, token))
}

/// Length of the run of `token` starting at `(x, y)` and walking along
/// `(dx, dy)`, capped at `limit`.
fn run_length(
    board: &Board,
    (x, y): (i32, i32),
    (dx, dy): (i32, i32),
    token: Token,
    limit: usize,
) -> usize {
    let (mut cx, mut cy) = (x, y);
    let mut count = 0;
    while count < limit && cx < board.width() && board.get(cx, cy) == Some(token) {
        count += 1;
        cx += dx;
        cy += dy;
    }
    count
}

/// Find a player with at least `min_run` aligned tokens.
///
/// Cells are scanned column by column from the left, bottom to top within a
/// column, trying [`DIRECTIONS`] in order from each cell. The first qualifying
/// run decides the winner. Returns `None` for `min_run < 3` and for boards
/// that fail [`validate`].
pub fn find_winner(board: &Board, min_run: usize) -> Option<Token> {
    if min_run < MIN_WINNING_RUN {
        return None;
    }
    if let Err(e) = validate(board) {
        warn!(error = %e, "refusing to look for a winner on an invalid board");
        return None;
    }

    for (x, column) in board.columns().iter().enumerate() {
        for (y, &token) in column.iter().enumerate() {
            let start = (x as i32, y as i32);
            for dir in DIRECTIONS {
                if run_length(board, start, dir, token, min_run) >= min_run {
                    debug!(%token, x, y, dx = dir.0, dy = dir.1, "winning run found");
                    return Some(token);
                }
            }
        }
    }
    None
}
