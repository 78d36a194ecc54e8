//! # Connect Four engine
//!
//! Rules engine for Connect Four on boards of any size: validates a board,
//! applies single-token moves under turn-order and capacity constraints, and
//! finds a player with a configurable minimum run of aligned tokens.
//!
//! ## Modules
//!
//! - [`game`] — Board value, tokens, pure rule functions, the engine
//! - [`session`] — Board-change subscriptions and a thread-safe handle
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use error::{InitError, PlayError};
pub use game::{Board, Engine, Move, Token};
pub use session::{BoardUpdate, Session, SharedSession, UpdateCause};
