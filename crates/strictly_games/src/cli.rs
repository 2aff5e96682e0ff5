//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_tictactoe::{Board, Mark, Mode};

/// Strictly Games - tic-tac-toe against a friend or an unbeatable engine
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Terminal tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Game mode (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Mark the human plays against the engine (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<MarkArg>,

        /// Engine thinking delay in milliseconds (overrides the config file)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the engine's move for a board, e.g. `XX..O....`
    BestMove {
        /// Board in row-major order: X, O, and `.` for empty
        board: Board,

        /// Mark to move; inferred from the mark counts when omitted
        #[arg(long, value_enum)]
        mark: Option<MarkArg>,
    },

    /// Classify a board as ongoing, won or drawn
    Evaluate {
        /// Board in row-major order: X, O, and `.` for empty
        board: Board,
    },
}

/// Game mode argument.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans at one keyboard
    TwoPlayer,
    /// Human against the engine
    VersusAi,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoPlayer => Mode::TwoPlayer,
            ModeArg::VersusAi => Mode::VersusAi,
        }
    }
}

/// Mark argument.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// X, moves first
    X,
    /// O, moves second
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Infers the mark to move: X moves whenever the counts are even.
pub fn mark_to_move(board: &Board) -> Mark {
    let (x, o) = board
        .squares()
        .iter()
        .fold((0, 0), |(x, o), square| match square.mark() {
            Some(Mark::X) => (x + 1, o),
            Some(Mark::O) => (x, o + 1),
            None => (x, o),
        });
    if x > o { Mark::O } else { Mark::X }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::try_parse_from([
            "strictly_games",
            "play",
            "--mode",
            "versus-ai",
            "--human",
            "o",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                human,
                delay_ms,
                config,
            } => {
                assert_eq!(mode, Some(ModeArg::VersusAi));
                assert_eq!(human, Some(MarkArg::O));
                assert_eq!(delay_ms, Some(0));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_best_move_board() {
        let cli = Cli::try_parse_from(["strictly_games", "best-move", "XX..O...."]).unwrap();
        match cli.command {
            Command::BestMove { board, mark } => {
                assert_eq!(board.to_string(), "XX..O....");
                assert!(mark.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_invalid_board_rejected() {
        assert!(Cli::try_parse_from(["strictly_games", "evaluate", "XX"]).is_err());
    }

    #[test]
    fn test_mark_to_move() {
        assert_eq!(mark_to_move(&Board::new()), Mark::X);
        assert_eq!(mark_to_move(&"X........".parse().unwrap()), Mark::O);
        assert_eq!(mark_to_move(&"XX..O....".parse().unwrap()), Mark::O);
        assert_eq!(mark_to_move(&"XO.......".parse().unwrap()), Mark::X);
    }
}
