//! Adversarial move search.
//!
//! The engine scores every continuation of a position down to the end of
//! the game, so the move it returns is optimal rather than heuristic.

mod minimax;

pub use minimax::{Score, SearchResult, available_moves, best_move, search, terminal_score};
