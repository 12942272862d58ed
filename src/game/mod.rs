//! Core Connect Four game logic: board representation, run detection, move
//! validation and the turn controller.

mod board;
mod controller;
mod player;
mod state;
mod validator;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use controller::{AiMoveRequest, ControllerOptions, GameController};
pub use player::Player;
pub use state::{GameMode, GameStatus, Move, MoveOutcome, Placement, Scoreboard};
pub use validator::{can_apply, validate};
pub use win::{check_winner, Position, Run, WinResult, WIN_LENGTH};
