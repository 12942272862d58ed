use crate::ai::{Difficulty, Strategist};
use crate::error::{DifficultyError, MoveError};

use super::board::Board;
use super::player::Player;
use super::state::{GameMode, GameStatus, Move, MoveOutcome, Placement, Scoreboard};
use super::validator::validate;
use super::win::check_winner;

/// The human side when playing the computer.
const HUMAN: Player = Player::A;
/// The computer side when playing the computer.
const COMPUTER: Player = Player::B;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Side that starts the first game.
    pub first_player: Player,
    /// Flip the starting side after every finished game.
    pub alternate_first_player: bool,
    /// Raise the computer difficulty by one tier when the human wins.
    pub auto_progress: bool,
    /// Seed for the computer's random fallback.
    pub seed: Option<u64>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        ControllerOptions {
            first_player: Player::A,
            alternate_first_player: false,
            auto_progress: true,
            seed: None,
        }
    }
}

/// A computer move chosen now and applied later. It carries the identity of
/// the board it was computed against so a completion after a reset, or after
/// any other move, is rejected instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMoveRequest {
    generation: u64,
    move_count: usize,
    column: usize,
}

impl AiMoveRequest {
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Turn orchestration for one table: owns the board, the status, whose turn it
/// is and the computer opponent. Human and computer moves share one path:
/// validate, apply, detect.
pub struct GameController {
    board: Board,
    status: GameStatus,
    mode: GameMode,
    current_player: Player,
    first_player: Player,
    options: ControllerOptions,
    generation: u64,
    strategist: Strategist,
    scores: Scoreboard,
    last_move: Option<Move>,
}

impl GameController {
    /// Create an idle controller. No move is accepted until `reset` or
    /// `new_game` starts a game.
    pub fn new(mode: GameMode, options: ControllerOptions) -> Self {
        GameController {
            board: Board::new(),
            status: GameStatus::Idle,
            mode,
            current_player: options.first_player,
            first_player: options.first_player,
            options,
            generation: 0,
            strategist: Strategist::from_optional_seed(options.seed),
            scores: Scoreboard::default(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.mode.difficulty()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Side configured to start the next `new_game`.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Incremented on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.mode, GameMode::VsAi(_))
            && self.status.is_in_progress()
            && self.current_player == COMPUTER
    }

    /// Start a fresh game with `first` to move. `first` also becomes the
    /// configured starter.
    pub fn reset(&mut self, first: Player) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.current_player = first;
        self.first_player = first;
        self.last_move = None;
        self.generation += 1;
        log::debug!(
            "game {} started, {} moves first ({})",
            self.generation,
            first.name(),
            self.mode.label()
        );
    }

    /// Start the next game with the configured starter, flipping it first when
    /// alternation is on and the previous game finished.
    pub fn new_game(&mut self) {
        let first = if self.options.alternate_first_player && self.status.is_terminal() {
            self.first_player.other()
        } else {
            self.first_player
        };
        self.reset(first);
    }

    /// Toggle which side starts the next game. Returns the new starter.
    pub fn switch_first_player(&mut self) -> Player {
        self.first_player = self.first_player.other();
        self.first_player
    }

    /// Switch between two-player and computer play. Starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset(self.first_player);
    }

    pub fn set_difficulty(&mut self, tier: u8) -> Result<Difficulty, DifficultyError> {
        let difficulty = Difficulty::new(tier)?;
        match self.mode {
            GameMode::TwoPlayer => Err(DifficultyError::TwoPlayerMode),
            GameMode::VsAi(_) => {
                self.mode = GameMode::VsAi(difficulty);
                Ok(difficulty)
            }
        }
    }

    pub fn clear_scores(&mut self) {
        self.scores = Scoreboard::default();
    }

    /// Play `column` for the side to move. Against the computer only the
    /// human's turn is accepted.
    pub fn apply_human_move(&mut self, column: usize) -> MoveOutcome {
        validate(&self.board, column, &self.status)?;
        if self.is_computer_turn() {
            return Err(MoveError::OutOfTurn);
        }
        self.place(column)
    }

    /// Choose and play the computer's move immediately.
    pub fn request_ai_move(&mut self) -> MoveOutcome {
        let request = self.schedule_ai_move()?;
        self.complete_ai_move(request)
    }

    /// Choose the computer's move without playing it, for callers that delay
    /// the move. Apply it with [`GameController::complete_ai_move`].
    pub fn schedule_ai_move(&mut self) -> Result<AiMoveRequest, MoveError> {
        if !self.status.is_in_progress() {
            return Err(MoveError::GameNotInProgress);
        }
        let difficulty = match self.mode {
            GameMode::VsAi(difficulty) if self.current_player == COMPUTER => difficulty,
            _ => return Err(MoveError::OutOfTurn),
        };

        let column = self
            .strategist
            .select_move(&self.board, COMPUTER, HUMAN, difficulty);
        Ok(AiMoveRequest {
            generation: self.generation,
            move_count: self.board.move_count(),
            column,
        })
    }

    /// Play a previously scheduled computer move, unless the board has changed
    /// since it was computed.
    pub fn complete_ai_move(&mut self, request: AiMoveRequest) -> MoveOutcome {
        if request.generation != self.generation
            || request.move_count != self.board.move_count()
        {
            log::debug!(
                "discarding stale computer move (game {}, now {})",
                request.generation,
                self.generation
            );
            return Err(MoveError::StaleMove);
        }
        validate(&self.board, request.column, &self.status)?;
        if !self.is_computer_turn() {
            return Err(MoveError::OutOfTurn);
        }
        self.place(request.column)
    }

    fn place(&mut self, column: usize) -> MoveOutcome {
        let player = self.current_player;
        let row = self.board.apply(column, player)?;
        self.last_move = Some(Move {
            row,
            column,
            player,
        });
        self.status = check_winner(&self.board, row, column).into();
        log::debug!("{} played column {} (row {})", player.name(), column, row);

        let mut promoted_to = None;
        if self.status.is_terminal() {
            self.scores.record(&self.status);
            match self.status.winner() {
                Some(winner) => log::info!("{} wins game {}", winner.name(), self.generation),
                None => log::info!("game {} is a draw", self.generation),
            }
            promoted_to = self.progress_difficulty();
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            column,
            player,
            promoted_to,
        })
    }

    /// Raise the computer one tier after a human win.
    fn progress_difficulty(&mut self) -> Option<Difficulty> {
        let GameMode::VsAi(current) = self.mode else {
            return None;
        };
        if !self.options.auto_progress || current.is_max() || self.status.winner() != Some(HUMAN)
        {
            return None;
        }

        let next = current.next();
        self.mode = GameMode::VsAi(next);
        log::info!("difficulty raised from {} to {}", current, next);
        Some(next)
    }
}
