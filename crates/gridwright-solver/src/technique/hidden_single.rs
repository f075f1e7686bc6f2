use gridwright_core::{Digit, House};

use crate::{
    TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique},
};

const NAME: &str = "Hidden Single";

/// A technique that places a digit with a single remaining position in a
/// house.
///
/// A "hidden single" occurs when a digit can only go in one cell of a row,
/// column, or box, even though that cell still has other candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, state: &TechniqueState) -> Option<Step> {
        for digit in Digit::ALL {
            let open_positions = state.digit_positions(digit) & state.unplaced();
            for house in House::ALL {
                if let Some(pos) = (open_positions & house.positions()).as_single() {
                    return Some(Step {
                        technique: NAME,
                        action: StepAction::Place { pos, digit },
                    });
                }
            }
        }
        None
    }
}
