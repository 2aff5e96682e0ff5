//! Engine player backed by the minimax search.

use super::Player;
use anyhow::Result;
use derive_new::new;
use std::time::Duration;
use strictly_tictactoe::{Game, Position, best_move};
use tracing::{debug, instrument};

/// Unbeatable engine player.
///
/// Waits `delay` before answering so moves do not appear instantly; the
/// pause has no effect on the move chosen.
#[derive(Debug, Clone, new)]
pub struct MinimaxBot {
    #[new(into)]
    name: String,
    delay: Duration,
}

#[async_trait::async_trait]
impl Player for MinimaxBot {
    #[instrument(skip(self, game), fields(bot = %self.name))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let me = game.to_move();
        let index = best_move(game.board(), me, me.opponent())
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        let position = Position::from_index(index)
            .ok_or_else(|| anyhow::anyhow!("Engine chose invalid index {}", index))?;

        debug!(position = %position, "Engine chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_engine(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_takes_winning_square() {
        let mut game = Game::default();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ] {
            game.make_move(pos).unwrap();
        }

        let mut bot = MinimaxBot::new("Engine", Duration::ZERO);
        assert_eq!(bot.get_move(&game).await.unwrap(), Position::TopRight);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_does_not_change_move() {
        let game = Game::default();
        let mut slow = MinimaxBot::new("Slow", Duration::from_secs(5));
        let mut fast = MinimaxBot::new("Fast", Duration::ZERO);
        assert_eq!(
            slow.get_move(&game).await.unwrap(),
            fast.get_move(&game).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_finished_game_has_no_move() {
        let mut game = Game::default();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }

        let mut bot = MinimaxBot::new("Engine", Duration::ZERO);
        // Won boards still have empty squares but search returns no move.
        assert!(bot.get_move(&game).await.is_err());
    }
}
