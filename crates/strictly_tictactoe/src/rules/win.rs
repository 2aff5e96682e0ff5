//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// Three board indices that win when held by one mark.
pub type Line = [usize; 3];

/// Winning lines, scanned in this order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark holding the first complete line in [`LINES`] order,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(mark) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some(mark)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO. XO. .O.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.. .O. ..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..X .X. X..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_decides() {
        // Both marks hold a line; the row is scanned before the column.
        let board: Board = "OOO XXX ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        let mut seen = [0usize; 9];
        for line in LINES {
            for index in line {
                seen[index] += 1;
            }
        }
        // Center sits on 4 lines, corners on 3, edges on 2.
        assert_eq!(seen, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }
}
