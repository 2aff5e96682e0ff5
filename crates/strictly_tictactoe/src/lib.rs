//! Strictly tic-tac-toe - pure game rules and an unbeatable move search
//!
//! # Architecture
//!
//! - **Rules**: classify a board as ongoing, won or drawn
//! - **Search**: exhaustive minimax returning an optimal move index
//! - **Game**: board ownership and turn sequencing for both play modes
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Mark, Outcome, best_move, evaluate};
//!
//! let board: Board = "XX. .O. ...".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//! assert_eq!(best_move(&board, Mark::X, Mark::O), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod rules;
mod search;
mod types;

pub use game::{Game, MoveError, Mode};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, check_winner, evaluate, is_draw, is_full};
pub use search::{Score, SearchResult, available_moves, best_move, search, terminal_score};
pub use types::{Board, BoardError, CELLS, Mark, Square};
