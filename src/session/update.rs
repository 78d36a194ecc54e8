use crate::game::{Board, Token};

/// What changed the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCause {
    Init,
    Play { token: Token, column: i32 },
}

/// Sent to subscribers after every successful `init` or `play`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub board: Board,
    pub cause: UpdateCause,
}
