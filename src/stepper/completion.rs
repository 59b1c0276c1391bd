use std::collections::BTreeMap;

use super::STEP_COUNT;

/// Per-step satisfaction. A `false` entry counts the same as a missing one.
pub type CompletionMap = BTreeMap<usize, bool>;

pub fn is_complete(completed: &CompletionMap, step: usize) -> bool {
    completed.get(&step).copied().unwrap_or(false)
}

pub fn completed_count(completed: &CompletionMap) -> usize {
    completed
        .iter()
        .filter(|(step, done)| **step < STEP_COUNT && **done)
        .count()
}

pub fn first_incomplete(completed: &CompletionMap) -> Option<usize> {
    (0..STEP_COUNT).find(|&i| !is_complete(completed, i))
}

/// Step the wizard should rest on: the earliest unmet prerequisite, or the
/// last step once everything is satisfied.
pub fn active_step(completed: &CompletionMap) -> usize {
    active_step_within(completed, STEP_COUNT)
}

pub fn active_step_within(completed: &CompletionMap, total: usize) -> usize {
    let last = total.saturating_sub(1);
    let done = completed
        .iter()
        .filter(|(step, done)| **step < total && **done)
        .count();
    if done == total {
        return last;
    }
    (0..total)
        .find(|&i| !is_complete(completed, i))
        .unwrap_or(last)
}

#[cfg(test)]
#[path = "../tests/stepper/completion_tests.rs"]
mod tests;
