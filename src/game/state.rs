use crate::ai::Difficulty;
use crate::error::MoveError;

use super::player::Player;
use super::win::{Run, WinResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// No game has been started yet.
    Idle,
    InProgress,
    Won(Run),
    Draw,
}

impl GameStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(run) => Some(run.player),
            _ => None,
        }
    }
}

impl From<WinResult> for GameStatus {
    fn from(result: WinResult) -> Self {
        match result {
            WinResult::Undecided => GameStatus::InProgress,
            WinResult::Win(run) => GameStatus::Won(run),
            WinResult::Draw => GameStatus::Draw,
        }
    }
}

/// Who plays Player B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsAi(Difficulty),
}

impl GameMode {
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsAi(difficulty) => Some(difficulty),
        }
    }

    pub fn label(self) -> String {
        match self {
            GameMode::TwoPlayer => "Two players".to_string(),
            GameMode::VsAi(difficulty) => format!("vs Computer (level {})", difficulty.tier()),
        }
    }
}

/// A piece that was placed. `row` is where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// An accepted move, plus the difficulty it raised the computer to when the
/// move won the game for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub promoted_to: Option<Difficulty>,
}

impl Placement {
    pub fn as_move(&self) -> Move {
        Move {
            row: self.row,
            column: self.column,
            player: self.player,
        }
    }
}

pub type MoveOutcome = Result<Placement, MoveError>;

/// Running totals across games; survives resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(run) => match run.player {
                Player::A => self.wins_a += 1,
                Player::B => self.wins_b += 1,
            },
            GameStatus::Draw => self.draws += 1,
            GameStatus::Idle | GameStatus::InProgress => {}
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::A => self.wins_a,
            Player::B => self.wins_b,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins_a + self.wins_b + self.draws
    }
}
