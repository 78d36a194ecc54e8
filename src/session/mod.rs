//! Calling-layer wrapper around the engine: publishes every board change to
//! subscribers and serializes concurrent callers.

mod shared;
mod update;

pub use shared::SharedSession;
pub use update::{BoardUpdate, UpdateCause};

use std::sync::mpsc;

use tracing::trace;

use crate::error::{InitError, PlayError};
use crate::game::{Board, Engine, Token};

/// An [`Engine`] plus the channels that observe it.
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    subscribers: Vec<mpsc::Sender<BoardUpdate>>,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Session {
            engine,
            subscribers: Vec::new(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn board(&self) -> Option<&Board> {
        self.engine.board()
    }

    /// Register a new observer. It only sees changes made after this call.
    pub fn subscribe(&mut self) -> mpsc::Receiver<BoardUpdate> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Number of observers still listening (as of the last publish)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn init(&mut self, board: Board) -> Result<Board, InitError> {
        let board = self.engine.init(board)?;
        self.publish(BoardUpdate {
            board: board.clone(),
            cause: UpdateCause::Init,
        });
        Ok(board)
    }

    pub fn play(&mut self, token: Token, column: i32) -> Result<Board, PlayError> {
        let board = self.engine.play(token, column)?;
        self.publish(BoardUpdate {
            board: board.clone(),
            cause: UpdateCause::Play { token, column },
        });
        Ok(board)
    }

    pub fn winner(&self, min_run: usize) -> Option<Token> {
        self.engine.winner(min_run)
    }

    /// Send `update` to every subscriber, dropping those that hung up.
    fn publish(&mut self, update: BoardUpdate) {
        self.subscribers.retain(|tx| tx.send(update.clone()).is_ok());
        trace!(subscribers = self.subscribers.len(), "board update published");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token::{Red as R, Yellow as Y};

    #[test]
    fn test_init_is_published() {
        let mut session = Session::default();
        let rx = session.subscribe();
        let board = Board::empty(7, 6);
        session.init(board.clone()).unwrap();

        let update = rx.try_recv().unwrap();
        assert_eq!(update.board, board);
        assert_eq!(update.cause, UpdateCause::Init);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_play_is_published_to_all() {
        let mut session = Session::new(Engine::with_board(Board::empty(7, 6)).unwrap());
        let a = session.subscribe();
        let b = session.subscribe();
        let board = session.play(R, 2).unwrap();

        for rx in [&a, &b] {
            let update = rx.try_recv().unwrap();
            assert_eq!(update.board, board);
            assert_eq!(update.cause, UpdateCause::Play { token: R, column: 2 });
        }
    }

    #[test]
    fn test_failures_are_not_published() {
        let mut session = Session::new(Engine::with_board(Board::empty(7, 6)).unwrap());
        let rx = session.subscribe();
        assert_eq!(session.play(Y, 0), Err(PlayError::NotYourTurn));
        assert_eq!(session.init(Board::empty(-1, 6)), Err(InitError::InvalidMagnitudes));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut session = Session::new(Engine::with_board(Board::empty(7, 6)).unwrap());
        let keep = session.subscribe();
        let gone = session.subscribe();
        drop(gone);
        assert_eq!(session.subscriber_count(), 2);

        session.play(R, 0).unwrap();
        assert_eq!(session.subscriber_count(), 1);
        assert!(keep.try_recv().is_ok());
    }

    #[test]
    fn test_updates_arrive_in_order() {
        let mut session = Session::new(Engine::with_board(Board::empty(7, 6)).unwrap());
        let rx = session.subscribe();
        session.play(R, 0).unwrap();
        session.play(Y, 1).unwrap();
        session.play(R, 0).unwrap();

        let columns: Vec<i32> = rx
            .try_iter()
            .map(|u| match u.cause {
                UpdateCause::Play { column, .. } => column,
                UpdateCause::Init => -1,
            })
            .collect();
        assert_eq!(columns, vec![0, 1, 0]);
    }

    #[test]
    fn test_winner_delegates() {
        let mut session = Session::new(Engine::with_board(Board::empty(7, 6)).unwrap());
        for (token, col) in [(R, 0), (Y, 0), (R, 1), (Y, 1), (R, 2)] {
            session.play(token, col).unwrap();
        }
        assert_eq!(session.winner(3), Some(R));
        assert_eq!(session.winner(4), None);
    }
}
