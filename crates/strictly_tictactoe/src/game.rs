//! Game controller: board ownership and turn sequencing.

use super::rules::{Outcome, evaluate};
use super::search::best_move;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who controls the two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays against the minimax engine.
    VersusAi,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A human tried to move while the engine is to play.
    #[display("It's not your turn: {} plays for the AI", _0)]
    NotYourTurn(Mark),

    /// The engine was asked to move outside its turn.
    #[display("It's not the AI's turn")]
    NotAiTurn,
}

impl std::error::Error for MoveError {}

/// A single game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    mode: Mode,
    human: Mark,
}

impl Game {
    /// Creates a new game. In [`Mode::VersusAi`] the engine takes the mark
    /// the human does not.
    #[instrument]
    pub fn new(mode: Mode, human: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            mode,
            human,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the human's mark in [`Mode::VersusAi`].
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    /// Returns the engine's mark in [`Mode::VersusAi`].
    pub fn ai_mark(&self) -> Mark {
        self.human.opponent()
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns true once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Returns true when the engine should move next.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == Mode::VersusAi && !self.is_over() && self.to_move == self.ai_mark()
    }

    /// Places the human's mark at `position`.
    ///
    /// In [`Mode::VersusAi`] this is refused while the engine is to move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(MoveError::NotYourTurn(self.to_move));
        }
        self.play(position)
    }

    /// Asks the engine for its move and applies it.
    ///
    /// Returns `Ok(None)` when the engine has no move to apply.
    #[instrument(skip(self))]
    pub fn play_ai_move(&mut self) -> Result<Option<Position>, MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotAiTurn);
        }

        let Some(position) =
            best_move(&self.board, self.ai_mark(), self.human).and_then(Position::from_index)
        else {
            debug!("Engine returned no move");
            return Ok(None);
        };

        self.play(position)?;
        Ok(Some(position))
    }

    /// Places the mark to move at `position` without the turn-ownership
    /// check of [`Game::make_move`].
    ///
    /// For front-ends that route each turn to its own player.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let index = position.to_index();
        if !self.board.is_empty(index) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.board = self.board.with_mark(index, self.to_move);
        debug!(mark = %self.to_move, %position, "Mark placed");

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(())
    }

    /// Clears the board, keeping mode and side.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
    }

    /// Switches mode and restarts.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.restart();
    }

    /// Switches the human's side and restarts.
    #[instrument(skip(self))]
    pub fn set_human_mark(&mut self, human: Mark) {
        self.human = human;
        self.restart();
    }

    /// One-line status for display.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Won(_) | Outcome::Drawn => self.outcome().to_string(),
            Outcome::Ongoing => {
                let suffix = match self.mode {
                    Mode::TwoPlayer => "",
                    Mode::VersusAi if self.to_move == self.human => " (You)",
                    Mode::VersusAi => " (AI)",
                };
                format!("Turn: Player {}{}", self.to_move, suffix)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mode::default(), Mark::X)
    }
}
