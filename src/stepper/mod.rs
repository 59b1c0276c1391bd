//! Wizard step sequencing: which panel is shown and which steps are satisfied.

mod completion;
mod machine;

pub use self::completion::{
    CompletionMap, active_step, active_step_within, completed_count, first_incomplete, is_complete,
};
pub use self::machine::Stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Login,
    Repository,
    Book,
}

pub const STEPS: [Step; 3] = [Step::Login, Step::Repository, Step::Book];
pub const STEP_COUNT: usize = STEPS.len();

impl Step {
    pub fn from_index(i: usize) -> Option<Step> {
        STEPS.get(i).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Step::Login => 0,
            Step::Repository => 1,
            Step::Book => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Login => "Login",
            Step::Repository => "Repository",
            Step::Book => "Book",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Step::Login => "Login to Door43",
            Step::Repository => "Select a Repository to Convert to TSV",
            Step::Book => "Select a Book",
        }
    }
}
