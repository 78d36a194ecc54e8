use serde::{Deserialize, Serialize};

use super::Token;

/// Immutable Connect Four board.
///
/// `columns[x][y]` is the token at column `x`, row `y`. Rows are counted from
/// the bottom, so each column only stores its occupied cells:
///
/// ```text
/// 2 |
/// 1 | Y
/// 0 | R R
///   +-----
///     0 1 2
/// ```
///
/// Magnitudes are signed so that boards coming from outside the engine can
/// carry nonsense values; [`rules::validate`](super::rules::validate) decides
/// whether a board is playable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    #[serde(rename = "data")]
    columns: Vec<Vec<Token>>,
}

impl Board {
    /// Build a board from raw parts. No validation is performed.
    pub fn new(width: i32, height: i32, columns: Vec<Vec<Token>>) -> Self {
        Board {
            width,
            height,
            columns,
        }
    }

    /// Create a board with `width` empty columns
    pub fn empty(width: i32, height: i32) -> Self {
        let cols = usize::try_from(width).unwrap_or(0);
        Board::new(width, height, vec![Vec::new(); cols])
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn columns(&self) -> &[Vec<Token>] {
        &self.columns
    }

    /// Tokens of column `x`, bottom first
    pub fn column(&self, x: i32) -> Option<&[Token]> {
        let x = usize::try_from(x).ok()?;
        self.columns.get(x).map(Vec::as_slice)
    }

    /// Token at column `x`, row `y` (row 0 is the bottom)
    pub fn get(&self, x: i32, y: i32) -> Option<Token> {
        let y = usize::try_from(y).ok()?;
        self.column(x)?.get(y).copied()
    }

    /// Number of tokens of the given colour on the board
    pub fn count(&self, token: Token) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|&&t| t == token)
            .count()
    }

    /// `(red, yellow)` token counts
    pub fn counts(&self) -> (usize, usize) {
        self.columns
            .iter()
            .flatten()
            .fold((0, 0), |(red, yellow), t| match t {
                Token::Red => (red + 1, yellow),
                Token::Yellow => (red, yellow + 1),
            })
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, x: i32) -> bool {
        match self.column(x) {
            Some(col) => col.len() as i64 >= i64::from(self.height),
            None => true,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|x| self.is_column_full(x))
    }

    /// Columns that can still receive a token
    pub fn legal_columns(&self) -> Vec<i32> {
        (0..self.width).filter(|&x| !self.is_column_full(x)).collect()
    }

    /// Whose move it is, derived from the token counts.
    ///
    /// Returns `None` when the counts already break the alternation
    /// (yellow ahead, or red ahead by more than one).
    pub fn next_token(&self) -> Option<Token> {
        let (red, yellow) = self.counts();
        if red == yellow {
            Some(Token::Red)
        } else if red == yellow + 1 {
            Some(Token::Yellow)
        } else {
            None
        }
    }

    /// Copy of this board with `token` stacked on top of column `x`.
    /// The caller has already checked that `x` is a valid index.
    pub(crate) fn with_token(&self, x: usize, token: Token) -> Board {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let mut col = col.clone();
                if i == x {
                    col.push(token);
                }
                col
            })
            .collect();
        Board::new(self.width, self.height, columns)
    }
}

impl Default for Board {
    /// Standard 7 x 6 empty board
    fn default() -> Self {
        Board::empty(7, 6)
    }
}
