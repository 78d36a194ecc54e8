use std::fmt;
use std::str::FromStr;

use super::Token;
use crate::error::MoveParseError;

/// A single token drop, written `R3` or `Y0` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub token: Token,
    pub column: i32,
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let token = match chars.next() {
            None => return Err(MoveParseError::Empty),
            Some('R') | Some('r') => Token::Red,
            Some('Y') | Some('y') => Token::Yellow,
            Some(c) => return Err(MoveParseError::UnknownToken(c)),
        };
        let column = chars
            .as_str()
            .parse()
            .map_err(|_| MoveParseError::InvalidColumn(s.to_string()))?;
        Ok(Move { token, column })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.token {
            Token::Red => 'R',
            Token::Yellow => 'Y',
        };
        write!(f, "{}{}", c, self.column)
    }
}
