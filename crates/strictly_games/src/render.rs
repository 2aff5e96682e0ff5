//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;

/// Formats an event for the terminal, or `None` for events with no output.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::StateChanged { board, status } => Some(format!("\n{board}\n\n{status}")),
        GameEvent::AgentThinking { player } => Some(format!("{player} is thinking...")),
        GameEvent::MoveMade {
            player,
            mark,
            position,
        } => Some(format!("{player} ({mark}) -> {position}")),
        GameEvent::MoveRejected { reason, .. } => Some(reason.clone()),
        GameEvent::GameOver { .. } => Some("\nPlay again? [y/N]".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Mark, Outcome, Position};

    #[test]
    fn test_render_move() {
        let event = GameEvent::MoveMade {
            player: "Engine".to_string(),
            mark: Mark::O,
            position: Position::Center,
        };
        assert_eq!(render_event(&event).unwrap(), "Engine (O) -> Center");
    }

    #[test]
    fn test_game_over_prompts_restart() {
        let event = GameEvent::GameOver {
            outcome: Outcome::Drawn,
            winner: None,
        };
        assert!(render_event(&event).unwrap().contains("Play again?"));
    }
}
