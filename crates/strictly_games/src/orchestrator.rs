//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use strictly_tictactoe::{Game, Mark, Outcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board rendering and status line after a change.
    StateChanged {
        /// Grid rendering of the board.
        board: String,
        /// Status line, e.g. `Turn: Player O (AI)`.
        status: String,
    },
    /// Engine is thinking.
    AgentThinking {
        /// Engine player's name.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// Move was refused by the game.
    MoveRejected {
        /// Name of the player whose move was refused.
        player: String,
        /// Reason shown to the player.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final classification.
        outcome: Outcome,
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator for `game`.
    pub fn new(
        game: Game,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game,
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the board is won or drawn.
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(mode = ?self.game.mode(), "Starting game orchestration");
        self.send_state()?;

        loop {
            let outcome = self.game.outcome();
            if outcome.is_terminal() {
                let winner = outcome.winner().map(|mark| self.player(mark).name().to_string());
                info!(%outcome, ?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
                return Ok(outcome);
            }

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();
            let is_engine = player.is_engine();

            if is_engine {
                self.event_tx.send(GameEvent::AgentThinking {
                    player: player_name.clone(),
                })?;
            }

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            let applied = if is_engine {
                self.game.play(position)
            } else {
                self.game.make_move(position)
            };

            match applied {
                Ok(()) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mark,
                        position,
                    })?;
                    self.send_state()?;
                }
                Err(e) => {
                    warn!(player = %player_name, error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: player_name,
                        reason: e.to_string(),
                    })?;
                }
            }
        }
    }

    /// Restarts the game, keeping mode and side.
    pub fn restart(&mut self) {
        self.game.restart();
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    fn send_state(&self) -> Result<()> {
        self.event_tx.send(GameEvent::StateChanged {
            board: self.game.board().display(),
            status: self.game.status_text(),
        })?;
        Ok(())
    }
}
