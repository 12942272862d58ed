//! Computer opponent: difficulty levels and the tiered column heuristic.

mod difficulty;
mod strategist;

pub use difficulty::Difficulty;
pub use strategist::{Decision, Strategist, Tier, CENTER_ORDER};
