//! Player trait and implementations.

mod human;
mod minimax_bot;

pub use human::{HumanPlayer, SharedInput, spawn_stdin_reader};
pub use minimax_bot::MinimaxBot;

use anyhow::Result;
use strictly_tictactoe::{Game, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the mark currently to move.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns true for engine-driven players.
    fn is_engine(&self) -> bool {
        false
    }
}
