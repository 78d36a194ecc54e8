//! Core Connect Four rules: the board value, token type, pure rule functions
//! and the engine holding the current board.

mod board;
mod engine;
mod moves;
pub mod rules;
mod token;

pub use board::Board;
pub use engine::Engine;
pub use moves::Move;
pub use token::Token;
