//! Exhaustive minimax over immutable board snapshots.

use crate::rules::{Outcome, evaluate};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position from the searching player's side.
///
/// Ordered `Loss < Draw < Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// The opponent wins.
    Loss,
    /// Neither side wins.
    Draw,
    /// The searching player wins.
    Win,
}

impl Score {
    /// Numeric value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

/// Score of a searched position and the move that achieves it.
///
/// `best_move` is `None` for terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the position under optimal play.
    pub score: Score,
    /// Index of the move reaching `score`.
    pub best_move: Option<usize>,
}

/// Returns the empty indices of `board` in ascending order.
#[instrument(level = "trace")]
pub fn available_moves(board: &Board) -> Vec<usize> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter_map(|(index, square)| square.mark().is_none().then_some(index))
        .collect()
}

/// Scores a terminal board from `me`'s point of view.
///
/// Returns `None` while the game is still in progress.
#[instrument(level = "trace")]
pub fn terminal_score(board: &Board, me: Mark, opponent: Mark) -> Option<Score> {
    match evaluate(board) {
        Outcome::Ongoing => None,
        Outcome::Drawn => Some(Score::Draw),
        Outcome::Won(mark) if mark == me => Some(Score::Win),
        Outcome::Won(mark) if mark == opponent => Some(Score::Loss),
        // Won by a mark that is neither side: only reachable when the caller
        // passes equal marks.
        Outcome::Won(_) => Some(Score::Draw),
    }
}

/// Full-depth minimax search.
///
/// `maximizing` selects whose turn the current level represents: `me` when
/// true, `opponent` otherwise. Moves are tried in ascending index order and
/// only a strictly better score replaces the current best, so ties go to
/// the lowest index.
#[instrument(level = "trace")]
pub fn search(board: &Board, me: Mark, opponent: Mark, maximizing: bool) -> SearchResult {
    if let Some(score) = terminal_score(board, me, opponent) {
        return SearchResult {
            score,
            best_move: None,
        };
    }

    let to_play = if maximizing { me } else { opponent };
    let mut best: Option<(Score, usize)> = None;

    for index in available_moves(board) {
        let child = board.with_mark(index, to_play);
        let score = search(&child, me, opponent, !maximizing).score;
        let improves = match best {
            None => true,
            Some((current, _)) if maximizing => score > current,
            Some((current, _)) => score < current,
        };
        if improves {
            best = Some((score, index));
        }
    }

    match best {
        Some((score, index)) => SearchResult {
            score,
            best_move: Some(index),
        },
        // A non-terminal board always has an empty square.
        None => SearchResult {
            score: Score::Draw,
            best_move: None,
        },
    }
}

/// Returns the optimal move for `me`, or `None` when no square is empty.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, me: Mark, opponent: Mark) -> Option<usize> {
    let result = search(board, me, opponent, true);
    debug!(score = result.score.value(), best_move = ?result.best_move, "Search complete");
    result.best_move
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_available_moves_ascending() {
        assert_eq!(available_moves(&board("X.O .X. ..O")), vec![1, 3, 5, 6, 7]);
        assert!(available_moves(&board("XOX OXX OXO")).is_empty());
    }

    #[test]
    fn test_terminal_score_is_relative_to_me() {
        let x_wins = board("XXX OO. ...");
        assert_eq!(terminal_score(&x_wins, Mark::X, Mark::O), Some(Score::Win));
        assert_eq!(terminal_score(&x_wins, Mark::O, Mark::X), Some(Score::Loss));
        assert_eq!(
            terminal_score(&board("XOX OXX OXO"), Mark::O, Mark::X),
            Some(Score::Draw)
        );
        assert_eq!(terminal_score(&Board::new(), Mark::X, Mark::O), None);
    }

    #[test]
    fn test_search_terminal_has_no_move() {
        let result = search(&board("OOO XX. X.."), Mark::O, Mark::X, true);
        assert_eq!(
            result,
            SearchResult {
                score: Score::Win,
                best_move: None
            }
        );
    }

    #[test]
    fn test_search_single_move_left() {
        let result = search(&board("XOO OX. XXO"), Mark::X, Mark::O, true);
        assert_eq!(
            result,
            SearchResult {
                score: Score::Draw,
                best_move: Some(5)
            }
        );
    }

    #[test]
    fn test_minimizing_level_picks_opponent_win() {
        // O to move (minimizing for X) can win at 2.
        let result = search(&board("OO. XX. X.."), Mark::X, Mark::O, false);
        assert_eq!(result.score, Score::Loss);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_score_values() {
        assert_eq!(Score::Loss.value(), -1);
        assert_eq!(Score::Draw.value(), 0);
        assert_eq!(Score::Win.value(), 1);
        assert!(Score::Loss < Score::Draw && Score::Draw < Score::Win);
    }
}
