use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's marker. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Red,
    Yellow,
}

impl Token {
    /// Get the other player's token
    pub fn other(self) -> Token {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
        }
    }

    /// Upper-case name, as exchanged with the UI layer
    pub fn name(self) -> &'static str {
        match self {
            Token::Red => "RED",
            Token::Yellow => "YELLOW",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
