use gridwright_core::{Digit, DigitSet, PositionSet};

use crate::{
    TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique},
};

const NAME: &str = "X-Wing";

/// A fish technique on two parallel lines.
///
/// An "X-Wing" occurs when a digit has exactly two candidate positions in
/// each of two rows, and those positions share the same two columns. The
/// digit can then be eliminated from the rest of both columns. The same
/// holds with rows and columns swapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing {}

impl XWing {
    /// Creates a new `XWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Searches for an X-Wing with base lines in `base` and cover lines in
    /// `cover`.
    fn find_in_lines(
        digit: Digit,
        positions: PositionSet,
        base: &[PositionSet; 9],
        cover: &[PositionSet; 9],
    ) -> Option<Step> {
        for (i, &base1) in base.iter().enumerate() {
            let in_base1 = positions & base1;
            if in_base1.len() != 2 {
                continue;
            }
            for &base2 in &base[i + 1..] {
                let in_base2 = positions & base2;
                if in_base2.len() != 2 {
                    continue;
                }
                let corners = in_base1 | in_base2;
                let cover_lines: Vec<PositionSet> = cover
                    .iter()
                    .copied()
                    .filter(|line| !(*line & corners).is_empty())
                    .collect();
                if cover_lines.len() != 2 {
                    continue;
                }
                let mut targets = PositionSet::EMPTY;
                for line in cover_lines {
                    targets |= (positions & line) - corners;
                }
                if !targets.is_empty() {
                    return Some(Step {
                        technique: NAME,
                        action: StepAction::Eliminate {
                            positions: targets,
                            digits: DigitSet::from_elem(digit),
                        },
                    });
                }
            }
        }
        None
    }
}

impl Technique for XWing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, state: &TechniqueState) -> Option<Step> {
        for digit in Digit::ALL {
            let positions = state.digit_positions(digit) & state.unplaced();
            let step = Self::find_in_lines(
                digit,
                positions,
                &PositionSet::ROWS,
                &PositionSet::COLUMNS,
            )
            .or_else(|| {
                Self::find_in_lines(digit, positions, &PositionSet::COLUMNS, &PositionSet::ROWS)
            });
            if step.is_some() {
                return step;
            }
        }
        None
    }
}
