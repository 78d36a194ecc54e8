use tracing::{debug, info, warn};

use super::{rules, Board, Token};
use crate::error::{InitError, PlayError};

/// Holds the current board and applies the rules to it.
///
/// A fresh engine has no board; `play` refuses to run until `init` adopts
/// one. Boards are never mutated in place: every successful operation swaps
/// in a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    current: Option<Board>,
}

impl Engine {
    /// Create an engine with no board adopted
    pub fn new() -> Self {
        Engine { current: None }
    }

    /// Create an engine and adopt `board` right away
    pub fn with_board(board: Board) -> Result<Self, InitError> {
        let mut engine = Engine::new();
        engine.init(board)?;
        Ok(engine)
    }

    /// Get the current board, if one has been adopted
    pub fn board(&self) -> Option<&Board> {
        self.current.as_ref()
    }

    /// Validate `board` and make it the current board.
    ///
    /// On failure the previous board stays in place.
    pub fn init(&mut self, board: Board) -> Result<Board, InitError> {
        if let Err(e) = rules::validate(&board) {
            warn!(error = %e, width = board.width(), height = board.height(), "board rejected");
            return Err(e);
        }
        debug!(width = board.width(), height = board.height(), "board adopted");
        self.current = Some(board.clone());
        Ok(board)
    }

    /// Drop `token` into `column` of the current board.
    ///
    /// The resulting board becomes current and is returned.
    pub fn play(&mut self, token: Token, column: i32) -> Result<Board, PlayError> {
        let current = self.current.as_ref().ok_or(PlayError::NoBoard)?;
        match rules::apply_move(current, token, column) {
            Ok(next) => {
                debug!(%token, column, "move applied");
                self.current = Some(next.clone());
                Ok(next)
            }
            Err(e) => {
                warn!(%token, column, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    /// Token of the first player found with `min_run` aligned tokens.
    pub fn winner(&self, min_run: usize) -> Option<Token> {
        let winner = rules::find_winner(self.current.as_ref()?, min_run);
        if let Some(token) = winner {
            info!(%token, min_run, "winner");
        }
        winner
    }
}
