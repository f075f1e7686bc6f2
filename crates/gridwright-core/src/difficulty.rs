//! The difficulty scale shared by the generator and the analyzer.

use std::{fmt, ops::RangeInclusive};

/// Puzzle difficulty tier.
///
/// Each tier maps to a clue-count band used by the generator when carving,
/// and to a set of solving techniques the analyzer expects a human to need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Solvable with singles alone, generous clue count.
    Easy,
    /// Requires locked candidates or pairs, or a tighter clue count.
    Medium,
    /// Requires fish patterns such as X-Wing.
    Hard,
    /// Beyond the analyzer's technique catalog.
    Expert,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// The clue-count band the generator targets for this tier.
    ///
    /// Bands are disjoint and descend with difficulty. The floor of the
    /// expert band is 17, the minimum clue count of any uniquely solvable
    /// puzzle.
    #[must_use]
    pub const fn clue_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 36..=45,
            Self::Medium => 30..=35,
            Self::Hard => 25..=29,
            Self::Expert => 17..=24,
        }
    }

    /// Maps a 1-9 difficulty level to a tier, clamping out-of-range input.
    ///
    /// Levels 1-2 are easy, 3-4 medium, 5-6 hard, and 7-9 expert. A level of
    /// 0 is treated as 1 and anything above 9 as 9.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0..=2 => Self::Easy,
            3..=4 => Self::Medium,
            5..=6 => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// Returns the lowercase tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
