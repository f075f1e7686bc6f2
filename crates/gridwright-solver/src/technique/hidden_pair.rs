use gridwright_core::{Digit, DigitSet, House};

use crate::{
    TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique},
};

const NAME: &str = "Hidden Pair";

/// A technique that narrows two cells sharing the only positions of two
/// digits in a house.
///
/// A "hidden pair" occurs when two digits can only go in the same two cells
/// of a row, column, or box. All other candidates can be removed from those
/// two cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenPair {}

impl HiddenPair {
    /// Creates a new `HiddenPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, state: &TechniqueState) -> Option<Step> {
        for house in House::ALL {
            let open = house.positions() & state.unplaced();
            for (i, digit1) in Digit::ALL.iter().copied().enumerate() {
                let positions1 = state.digit_positions(digit1) & open;
                if positions1.len() != 2 {
                    continue;
                }
                for digit2 in Digit::ALL[i + 1..].iter().copied() {
                    let positions2 = state.digit_positions(digit2) & open;
                    if positions2 != positions1 {
                        continue;
                    }
                    let pair_digits = DigitSet::from_elem(digit1) | DigitSet::from_elem(digit2);
                    let mut extra_digits = DigitSet::EMPTY;
                    for pos in positions1 {
                        extra_digits |= state.candidates_at(pos).difference(pair_digits);
                    }
                    if !extra_digits.is_empty() {
                        return Some(Step {
                            technique: NAME,
                            action: StepAction::Eliminate {
                                positions: positions1,
                                digits: extra_digits,
                            },
                        });
                    }
                }
            }
        }
        None
    }
}
