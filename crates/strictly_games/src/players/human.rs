//! Human player that reads moves from text input.

use super::Player;
use anyhow::Result;
use std::io::BufRead;
use std::sync::Arc;
use strictly_tictactoe::{Game, Position};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Line input shared by every human at the keyboard.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Human player fed by a line channel.
///
/// Accepts a keypad number (1-9) or a position label such as `center`.
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        let mut input = self.input.lock().await;
        while let Some(line) = input.recv().await {
            match Position::from_label_or_number(&line) {
                Some(pos) if game.board().is_empty(pos.to_index()) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => {
                    warn!(player = %self.name, position = %pos, "Square already taken");
                    println!("{} is taken, pick another square.", pos);
                }
                None => {
                    println!("Enter 1-9 or a square name like \"center\".");
                }
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Forwards stdin lines to a shared channel from a reader thread.
///
/// The thread is detached so a pending read never blocks shutdown.
pub fn spawn_stdin_reader() -> SharedInput {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin closed");
    });
    Arc::new(Mutex::new(rx))
}
