//! Strictly Games - Unified CLI
//!
//! Play tic-tac-toe in the terminal or query the engine directly.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_games::cli::{Cli, Command, MarkArg, mark_to_move};
use strictly_games::players::{HumanPlayer, MinimaxBot, Player, SharedInput, spawn_stdin_reader};
use strictly_games::{GameConfig, Orchestrator, render_event};
use strictly_tictactoe::{Board, Game, Mark, Mode, Position, evaluate, search};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            human,
            delay_ms,
            config,
        } => {
            let config = match config {
                Some(path) => GameConfig::from_file(path)?,
                None => GameConfig::default(),
            };
            let config = config.with_overrides(
                mode.map(Mode::from),
                human.map(Mark::from),
                delay_ms,
            );
            run_play(config).await
        }
        Command::BestMove { board, mark } => run_best_move(board, mark),
        Command::Evaluate { board } => {
            println!("{}", evaluate(&board));
            Ok(())
        }
    }
}

/// Run interactive games until the players stop
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    info!(mode = ?config.mode(), human = %config.human_mark(), "Starting terminal game");

    let input = spawn_stdin_reader();
    let (player_x, player_o) = build_players(&config, &input);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render_event(&event) {
                println!("{text}");
            }
        }
    });

    let game = Game::new(*config.mode(), *config.human_mark());
    let mut orchestrator = Orchestrator::new(game, player_x, player_o, event_tx);

    loop {
        orchestrator.run().await?;
        let again = input.lock().await.recv().await;
        match again.as_deref().map(str::trim) {
            Some("y") | Some("Y") | Some("yes") => orchestrator.restart(),
            _ => break,
        }
    }

    drop(orchestrator);
    renderer.await?;
    Ok(())
}

fn build_players(config: &GameConfig, input: &SharedInput) -> (Box<dyn Player>, Box<dyn Player>) {
    let human = |name: &str| -> Box<dyn Player> { Box::new(HumanPlayer::new(name, input.clone())) };
    let engine = || -> Box<dyn Player> { Box::new(MinimaxBot::new("Engine", config.ai_delay())) };

    match (config.mode(), config.human_mark()) {
        (Mode::TwoPlayer, _) => (human("Player X"), human("Player O")),
        (Mode::VersusAi, Mark::X) => (human("You"), engine()),
        (Mode::VersusAi, Mark::O) => (engine(), human("You")),
    }
}

/// Print the engine's choice for a board
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: Board, mark: Option<MarkArg>) -> Result<()> {
    let me = mark.map(Mark::from).unwrap_or_else(|| mark_to_move(&board));
    let result = search(&board, me, me.opponent(), true);

    println!("{}", board.display());
    println!("Outcome: {}", evaluate(&board));
    match result.best_move.and_then(Position::from_index) {
        Some(position) => println!(
            "Best move for {}: {} ({}), score {}",
            me,
            position.to_index(),
            position,
            result.score.value()
        ),
        None => println!("No move available for {}", me),
    }
    Ok(())
}
