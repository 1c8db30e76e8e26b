//! Difficulty levels and their clue targets.
//!
//! A level is an integer in 1..=6. Each variant reads its own static table:
//! the 6x6 mini variant counts cells to empty, the 9x9 jigsaw variant counts
//! clues to keep. Out-of-range levels are a caller error and are rejected,
//! never clamped.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cells left empty per level on the 6x6 mini grid.
const MINI_EMPTY_CELLS: [usize; 6] = [10, 15, 20, 24, 26, 28];

/// Clues kept per level on the 9x9 jigsaw grid.
const JIGSAW_CLUES: [usize; 6] = [45, 40, 36, 32, 28, 26];

const NAMES: [&str; 6] = [
    "Really Easy / Sehr Leicht",
    "Easy / Leicht",
    "Medium / Mittel",
    "Hard / Schwer",
    "Very Hard / Sehr Schwer",
    "Devilish / Teuflisch",
];

/// A validated difficulty level in 1..=6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidDifficulty(level))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Bilingual scale name, as printed on the rendered sheets.
    pub fn name(self) -> &'static str {
        NAMES[(self.0 - 1) as usize]
    }

    /// How many cells the 6x6 mini variant leaves empty at this level.
    pub fn mini_empty_cells(self) -> usize {
        MINI_EMPTY_CELLS[(self.0 - 1) as usize]
    }

    /// How many clues the 9x9 jigsaw variant keeps at this level.
    pub fn jigsaw_clues(self) -> usize {
        JIGSAW_CLUES[(self.0 - 1) as usize]
    }

    /// All six levels, easiest first.
    pub fn all_levels() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_the_six_levels() {
        for level in 1..=6 {
            let difficulty = Difficulty::new(level).unwrap();
            assert_eq!(difficulty.level(), level);
        }
    }

    #[test]
    fn test_rejects_out_of_range_levels() {
        assert_eq!(Difficulty::new(0), Err(Error::InvalidDifficulty(0)));
        assert_eq!(Difficulty::new(7), Err(Error::InvalidDifficulty(7)));
    }

    #[test]
    fn test_mini_table() {
        let medium = Difficulty::new(3).unwrap();
        assert_eq!(medium.mini_empty_cells(), 20);
        let devilish = Difficulty::new(6).unwrap();
        assert_eq!(devilish.mini_empty_cells(), 28);
    }

    #[test]
    fn test_jigsaw_table() {
        let easiest = Difficulty::new(1).unwrap();
        assert_eq!(easiest.jigsaw_clues(), 45);
        let devilish = Difficulty::new(6).unwrap();
        assert_eq!(devilish.jigsaw_clues(), 26);
    }

    #[test]
    fn test_serde_rejects_invalid_level() {
        assert!(serde_json::from_str::<Difficulty>("3").is_ok());
        assert!(serde_json::from_str::<Difficulty>("0").is_err());
    }
}
