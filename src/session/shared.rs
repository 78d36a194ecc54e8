use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};

use super::{BoardUpdate, Session};
use crate::error::{InitError, PlayError};
use crate::game::{Board, Engine, Token};

/// Cloneable handle to a [`Session`] shared between threads.
///
/// Every call holds the lock for the whole validate-and-adopt step, so two
/// racing `play` calls are always checked against different boards.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(engine: Engine) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(Session::new(engine))),
        }
    }

    // The session only ever swaps whole board values, so a panic in another
    // holder cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current board
    pub fn board(&self) -> Option<Board> {
        self.lock().board().cloned()
    }

    pub fn subscribe(&self) -> mpsc::Receiver<BoardUpdate> {
        self.lock().subscribe()
    }

    pub fn init(&self, board: Board) -> Result<Board, InitError> {
        self.lock().init(board)
    }

    pub fn play(&self, token: Token, column: i32) -> Result<Board, PlayError> {
        self.lock().play(token, column)
    }

    pub fn winner(&self, min_run: usize) -> Option<Token> {
        self.lock().winner(min_run)
    }
}
