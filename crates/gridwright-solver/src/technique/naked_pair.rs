use gridwright_core::{House, Position, PositionSet};
use tinyvec::ArrayVec;

use crate::{
    TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique},
};

const NAME: &str = "Naked Pair";

/// A technique that removes candidates using a naked pair within a house.
///
/// A "naked pair" occurs when two cells of a row, column, or box hold the
/// same two candidates. Those two digits can be eliminated from every other
/// cell of that house.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair {}

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, state: &TechniqueState) -> Option<Step> {
        for house in House::ALL {
            let open = house.positions() & state.unplaced();
            let mut pair_cells: ArrayVec<[Position; 9]> = ArrayVec::new();
            for pos in open {
                if state.candidates_at(pos).len() == 2 {
                    pair_cells.push(pos);
                }
            }
            for (i, &pos1) in pair_cells.iter().enumerate() {
                let pair_digits = state.candidates_at(pos1);
                for &pos2 in &pair_cells[i + 1..] {
                    if state.candidates_at(pos2) != pair_digits {
                        continue;
                    }
                    let mut targets = PositionSet::EMPTY;
                    for other in open {
                        if other == pos1 || other == pos2 {
                            continue;
                        }
                        if !(state.candidates_at(other) & pair_digits).is_empty() {
                            targets.insert(other);
                        }
                    }
                    if !targets.is_empty() {
                        return Some(Step {
                            technique: NAME,
                            action: StepAction::Eliminate {
                                positions: targets,
                                digits: pair_digits,
                            },
                        });
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use gridwright_core::Digit;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_eliminates_pair_candidates_in_row() {
        let mut state = TechniqueState::new();
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, 0);
        let target = Position::new(4, 0);

        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                state.remove_candidate(pos1, digit);
                state.remove_candidate(pos2, digit);
            }
        }

        TechniqueTester::new(state)
            .apply_once(&NakedPair::new())
            .assert_removed(target, Digit::D1)
            .assert_removed(target, Digit::D2)
            .assert_kept(target, Digit::D3);
    }

    #[test]
    fn test_no_step_on_open_state() {
        TechniqueTester::new(TechniqueState::new()).assert_no_step(&NakedPair::new());
    }

    #[test]
    fn test_no_step_when_pair_digits_differ() {
        let mut state = TechniqueState::new();
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, 0);

        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                state.remove_candidate(pos1, digit);
            }
            if digit != Digit::D3 && digit != Digit::D4 {
                state.remove_candidate(pos2, digit);
            }
        }

        TechniqueTester::new(state).assert_no_step(&NakedPair::new());
    }
}
