//! Board classification.

use super::super::{Board, Mark};
use super::draw::is_full;
use super::win::check_winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and no line is complete.
    Ongoing,
    /// A mark holds a complete line.
    Won(Mark),
    /// The board is full with no complete line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Ongoing | Outcome::Drawn => None,
        }
    }

    /// Returns true if the board is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Drawn)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Drawn => write!(f, "It's a draw"),
        }
    }
}

/// Classifies a board as ongoing, won or drawn.
///
/// A won board may still have empty squares, so the winner check runs
/// first.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Drawn
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
        let board: Board = "XOX OXO ...".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_evaluate_won_with_empty_cells() {
        let board: Board = "OX. OX. O..".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Mark::O));
    }

    #[test]
    fn test_evaluate_two_lines_same_mark() {
        // X completes both the top row and the left column.
        let board: Board = "XXX XOO XO.".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_evaluate_drawn() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Drawn);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Drawn.is_terminal());
        assert!(Outcome::Drawn.is_draw());
        assert_eq!(Outcome::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Won(Mark::X).to_string(), "Player X wins");
    }
}
