use super::completion::{CompletionMap, active_step, completed_count, first_incomplete, is_complete};
use super::{STEP_COUNT, Step};

/// Displayed step plus the completion state it is checked against.
///
/// The furthest reachable step is always `active_step(completed)`. The
/// displayed step follows it only when the user was resting on the old
/// frontier, or when the displayed step is no longer reachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stepper {
    active: usize,
    completed: CompletionMap,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    pub fn new() -> Self {
        Self {
            active: 0,
            completed: CompletionMap::from([(0, false), (1, false)]),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn current(&self) -> Step {
        Step::from_index(self.active).unwrap_or(Step::Login)
    }

    pub fn completed(&self) -> &CompletionMap {
        &self.completed
    }

    pub fn is_complete(&self, step: usize) -> bool {
        is_complete(&self.completed, step)
    }

    pub fn all_complete(&self) -> bool {
        completed_count(&self.completed) == STEP_COUNT
    }

    pub fn reachable(&self) -> usize {
        active_step(&self.completed)
    }

    /// Rebuilds the completion map from provider state. The Book entry is
    /// only present once a book has been chosen from a loaded tree.
    pub fn sync(&mut self, has_auth: bool, has_repo: bool, has_book: bool) -> bool {
        let mut completed = CompletionMap::from([(0, has_auth), (1, has_repo)]);
        if has_book {
            completed.insert(2, true);
        }
        if completed == self.completed {
            return false;
        }

        let old_frontier = active_step(&self.completed);
        self.completed = completed;
        let frontier = active_step(&self.completed);

        let before = self.active;
        if self.active > frontier || (self.active == old_frontier && frontier != old_frontier) {
            self.active = frontier;
        }
        before != self.active
    }

    pub fn can_back(&self) -> bool {
        self.active > 0
    }

    pub fn can_next(&self) -> bool {
        self.is_complete(self.active) && self.active + 1 < STEP_COUNT
    }

    pub fn back(&mut self) {
        if self.active > 0 {
            self.active -= 1;
        }
    }

    pub fn next(&mut self) {
        let last = STEP_COUNT - 1;
        if self.active == last {
            if !self.all_complete()
                && let Some(i) = first_incomplete(&self.completed)
            {
                self.active = i;
            }
            return;
        }
        self.active += 1;
    }

    /// Free navigation to any step regardless of completion.
    pub fn select(&mut self, step: usize) -> bool {
        if step >= STEP_COUNT {
            return false;
        }
        self.active = step;
        true
    }
}

#[cfg(test)]
#[path = "../tests/stepper/machine_tests.rs"]
mod tests;
