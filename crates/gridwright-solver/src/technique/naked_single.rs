use crate::{
    TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique},
};

const NAME: &str = "Naked Single";

/// A technique that places a digit in a cell with a single candidate left.
///
/// A "naked single" occurs when all but one candidate of a cell have been
/// eliminated by its peers. The remaining digit must go there.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_step(&self, state: &TechniqueState) -> Option<Step> {
        for pos in state.unplaced() {
            if let Some(digit) = state.candidates_at(pos).as_single() {
                return Some(Step {
                    technique: NAME,
                    action: StepAction::Place { pos, digit },
                });
            }
        }
        None
    }
}
