use gridwright_core::{Digit, DigitSet, PositionSet};

use crate::{
    TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique},
};

const NAME: &str = "Locked Candidates";

/// A technique covering both pointing and claiming intersections.
///
/// Pointing: when every candidate position of a digit within a box lies in
/// one row or column, the digit can be eliminated from the rest of that
/// line. Claiming (box-line reduction): when every candidate position of a
/// digit within a line lies in one box, the digit can be eliminated from the
/// rest of that box.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates {}

impl LockedCandidates {
    /// Creates a new `LockedCandidates` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// If `cells` (at least two candidate positions confined to `area`)
    /// all fall inside a single set of `lines`, returns that line.
    fn confining_line(cells: PositionSet, lines: &[PositionSet; 9]) -> Option<PositionSet> {
        lines
            .iter()
            .copied()
            .find(|line| line.is_superset(cells))
    }

    fn eliminate_step(digit: Digit, positions: PositionSet) -> Option<Step> {
        if positions.is_empty() {
            return None;
        }
        Some(Step {
            technique: NAME,
            action: StepAction::Eliminate {
                positions,
                digits: DigitSet::from_elem(digit),
            },
        })
    }
}

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, state: &TechniqueState) -> Option<Step> {
        for digit in Digit::ALL {
            let positions = state.digit_positions(digit) & state.unplaced();

            // Pointing: box candidates confined to one row or column.
            for box_positions in PositionSet::BOXES {
                let in_box = positions & box_positions;
                if in_box.len() < 2 {
                    continue;
                }
                for lines in [&PositionSet::ROWS, &PositionSet::COLUMNS] {
                    if let Some(line) = Self::confining_line(in_box, lines) {
                        let step =
                            Self::eliminate_step(digit, (positions & line) - box_positions);
                        if step.is_some() {
                            return step;
                        }
                    }
                }
            }

            // Claiming: line candidates confined to one box.
            for lines in [&PositionSet::ROWS, &PositionSet::COLUMNS] {
                for line in lines {
                    let in_line = positions & *line;
                    if in_line.len() < 2 {
                        continue;
                    }
                    if let Some(box_positions) =
                        Self::confining_line(in_line, &PositionSet::BOXES)
                    {
                        let step =
                            Self::eliminate_step(digit, (positions & box_positions) - *line);
                        if step.is_some() {
                            return step;
                        }
                    }
                }
            }
        }
        None
    }
}
