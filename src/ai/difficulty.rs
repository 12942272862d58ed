use std::fmt;

use crate::error::DifficultyError;

/// Computer strength, 0..=4. Tier gating is monotonic: a difficulty enables
/// every tier at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(0);
    pub const MAX: Difficulty = Difficulty(4);

    pub fn new(tier: u8) -> Result<Self, DifficultyError> {
        if tier > Self::MAX.0 {
            return Err(DifficultyError::OutOfRange(tier));
        }
        Ok(Difficulty(tier))
    }

    pub fn tier(self) -> u8 {
        self.0
    }

    /// Whether the heuristic layer numbered `tier` is active.
    pub fn enables(self, tier: u8) -> bool {
        self.0 >= tier
    }

    /// One tier up, saturating at [`Difficulty::MAX`].
    pub fn next(self) -> Difficulty {
        Difficulty(self.0.saturating_add(1).min(Self::MAX.0))
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Difficulty::new(tier)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(Difficulty::new(0).unwrap(), Difficulty::MIN);
        assert_eq!(Difficulty::new(4).unwrap(), Difficulty::MAX);
        assert_eq!(Difficulty::new(5), Err(DifficultyError::OutOfRange(5)));
        assert!(Difficulty::try_from(9).is_err());
    }

    #[test]
    fn test_gating_is_monotonic() {
        let d = Difficulty::new(2).unwrap();
        assert!(d.enables(0));
        assert!(d.enables(1));
        assert!(d.enables(2));
        assert!(!d.enables(3));
        assert!(!d.enables(4));
    }

    #[test]
    fn test_next_saturates() {
        assert_eq!(Difficulty::MIN.next().tier(), 1);
        assert_eq!(Difficulty::MAX.next(), Difficulty::MAX);
        assert!(Difficulty::new(3).unwrap().next().is_max());
    }
}
