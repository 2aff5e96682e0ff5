//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X (moves first).
    #[serde(alias = "x")]
    X,
    /// Mark O (moves second).
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Placing a mark with [`Board::with_mark`]
/// yields a new board and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from a row-major snapshot.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        *slot = square;
        Ok(())
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Out-of-range indices return the board unchanged.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(slot) = next.squares.get_mut(index) {
            *slot = Square::Occupied(mark);
        }
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a grid, numbering empty squares 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => char::from(b'1' + index as u8),
                    square => square.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<[Option<Mark>; CELLS]> for Board {
    fn from(cells: [Option<Mark>; CELLS]) -> Self {
        Self {
            squares: cells.map(|cell| cell.map_or(Square::Empty, Square::Occupied)),
        }
    }
}

/// Compact one-line form, e.g. `XX..O....`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses `X`, `O` (either case) and `.`, `_`, `-` for empty squares.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELLS];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(BoardError::InvalidSymbol(other)),
            };
            if count == CELLS {
                return Err(BoardError::WrongLength(s.len()));
            }
            squares[count] = square;
            count += 1;
        }
        if count != CELLS {
            return Err(BoardError::WrongLength(count));
        }
        Ok(Self { squares })
    }
}

/// Error produced when building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
    /// Unrecognised character in a board string.
    #[display("Invalid board symbol {:?}", _0)]
    InvalidSymbol(#[error(not(source))] char),
    /// Board string did not describe exactly nine squares.
    #[display("Board must have 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}
