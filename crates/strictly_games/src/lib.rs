//! Strictly Games - terminal front-end for strictly tic-tac-toe
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Players**: keyboard humans and the minimax engine behind one trait
//! - **Orchestrator**: turn loop emitting [`GameEvent`]s to a renderer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
pub mod players;
mod render;

pub use config::{ConfigError, GameConfig};
pub use orchestrator::{GameEvent, Orchestrator};
pub use render::render_event;
