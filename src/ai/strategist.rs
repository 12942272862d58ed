use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{check_winner, Board, Player, WinResult, COLS};

use super::difficulty::Difficulty;

/// Column visiting order, center-out.
pub const CENTER_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// The heuristic layer that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Random,
    ImmediateWin,
    Block,
    Center,
    AvoidTrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub tier: Tier,
}

/// Layered computer opponent: win now, block, prefer the center, avoid
/// handing the opponent a win on top, otherwise play at random.
pub struct Strategist {
    rng: StdRng,
}

impl Strategist {
    pub fn new() -> Self {
        Strategist {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible random fallback.
    pub fn with_seed(seed: u64) -> Self {
        Strategist {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Pick a column for `ai`. Panics if the board has no open column; callers
    /// must check for a draw first.
    pub fn select_move(
        &mut self,
        board: &Board,
        ai: Player,
        human: Player,
        difficulty: Difficulty,
    ) -> usize {
        self.decide(board, ai, human, difficulty).column
    }

    pub fn decide(
        &mut self,
        board: &Board,
        ai: Player,
        human: Player,
        difficulty: Difficulty,
    ) -> Decision {
        let open = board.open_columns();
        assert!(!open.is_empty(), "No legal actions available");

        let decision = heuristic(board, ai, human, difficulty).unwrap_or_else(|| Decision {
            column: open[self.rng.random_range(0..open.len())],
            tier: Tier::Random,
        });

        log::debug!(
            "{} (difficulty {}) plays column {} via {:?}",
            ai.name(),
            difficulty,
            decision.column,
            decision.tier
        );
        decision
    }
}

impl Default for Strategist {
    fn default() -> Self {
        Self::new()
    }
}

/// The deterministic tiers; `None` means fall back to a random column.
fn heuristic(
    board: &Board,
    ai: Player,
    human: Player,
    difficulty: Difficulty,
) -> Option<Decision> {
    if difficulty.enables(1) {
        if let Some(column) = winning_column(board, ai) {
            return Some(Decision {
                column,
                tier: Tier::ImmediateWin,
            });
        }
    }

    if difficulty.enables(2) {
        if let Some(column) = winning_column(board, human) {
            return Some(Decision {
                column,
                tier: Tier::Block,
            });
        }
    }

    if difficulty.enables(4) {
        return safe_center_column(board, ai, human).map(|column| Decision {
            column,
            tier: Tier::AvoidTrap,
        });
    }

    if difficulty.enables(3) {
        return center_column(board).map(|column| Decision {
            column,
            tier: Tier::Center,
        });
    }

    None
}

/// Whether `player` dropping into `col` completes a run.
fn wins_at(board: &Board, col: usize, player: Player) -> bool {
    let mut sim = *board;
    match sim.apply(col, player) {
        Ok(row) => matches!(check_winner(&sim, row, col), WinResult::Win(_)),
        Err(_) => false,
    }
}

/// First column, in ascending order, where `player` wins immediately.
fn winning_column(board: &Board, player: Player) -> Option<usize> {
    (0..COLS).find(|&col| !board.is_column_full(col) && wins_at(board, col, player))
}

fn center_column(board: &Board) -> Option<usize> {
    CENTER_ORDER
        .iter()
        .copied()
        .find(|&col| !board.is_column_full(col))
}

/// First center-ordered column where the opponent cannot win by stacking
/// directly on top of our piece. Only one ply of the reply is considered.
fn safe_center_column(board: &Board, ai: Player, human: Player) -> Option<usize> {
    CENTER_ORDER.iter().copied().find(|&col| {
        let mut sim = *board;
        if sim.apply(col, ai).is_err() {
            return false;
        }
        sim.is_column_full(col) || !wins_at(&sim, col, human)
    })
}
