use super::*;

#[test]
fn new_stepper_shows_login_with_nothing_complete() {
    let s = Stepper::new();
    assert_eq!(s.active(), 0);
    assert_eq!(s.current(), Step::Login);
    assert!(!s.can_back());
    assert!(!s.can_next());
}

#[test]
fn login_then_repository_walks_the_wizard_forward() {
    let mut s = Stepper::new();
    assert!(!s.sync(false, false, false));
    assert_eq!(s.active(), 0);

    assert!(s.sync(true, false, false));
    assert_eq!(s.active(), 1);
    assert_eq!(s.completed(), &CompletionMap::from([(0, true), (1, false)]));

    assert!(s.sync(true, true, false));
    assert_eq!(s.active(), 2);
    assert_eq!(s.current(), Step::Book);
}

#[test]
fn saved_login_on_startup_lands_on_repository_step() {
    let mut s = Stepper::new();
    s.sync(true, false, false);
    assert_eq!(s.active(), 1);
}

#[test]
fn next_on_last_step_jumps_to_first_incomplete() {
    let mut s = Stepper::new();
    s.sync(true, false, false);
    assert!(s.select(2));
    s.next();
    assert_eq!(s.active(), 1);

    let mut s = Stepper::new();
    s.select(2);
    s.next();
    assert_eq!(s.active(), 0);
}

#[test]
fn next_on_last_step_with_everything_complete_stays_in_range() {
    let mut s = Stepper::new();
    s.sync(true, true, true);
    assert_eq!(s.active(), 2);
    assert!(s.all_complete());
    s.next();
    assert_eq!(s.active(), 2);
}

#[test]
fn next_advances_one_step_from_a_completed_step() {
    let mut s = Stepper::new();
    s.sync(true, true, false);
    s.select(0);
    assert!(s.can_next());
    s.next();
    assert_eq!(s.active(), 1);
}

#[test]
fn next_is_disabled_on_incomplete_or_final_step() {
    let mut s = Stepper::new();
    s.sync(true, false, false);
    assert_eq!(s.active(), 1);
    assert!(!s.can_next());

    s.sync(true, true, true);
    assert_eq!(s.active(), 2);
    assert!(!s.can_next());
}

#[test]
fn back_decrements_and_is_inert_at_login() {
    let mut s = Stepper::new();
    s.sync(true, false, false);
    assert_eq!(s.active(), 1);
    assert!(s.can_back());
    s.back();
    assert_eq!(s.active(), 0);
    assert!(!s.can_back());
    s.back();
    assert_eq!(s.active(), 0);
}

#[test]
fn step_click_ignores_completion_but_rejects_unknown_steps() {
    let mut s = Stepper::new();
    assert!(s.select(2));
    assert_eq!(s.active(), 2);
    assert!(!s.select(3));
    assert_eq!(s.active(), 2);
}

#[test]
fn manual_browsing_survives_unrelated_changes() {
    let mut s = Stepper::new();
    s.sync(true, true, false);
    assert_eq!(s.active(), 2);
    s.select(0);

    // Book chosen elsewhere: frontier stays on the last step.
    s.sync(true, true, true);
    assert_eq!(s.active(), 0);
}

#[test]
fn losing_a_prerequisite_pulls_the_display_back() {
    let mut s = Stepper::new();
    s.sync(true, true, false);
    assert_eq!(s.active(), 2);

    assert!(s.sync(false, true, false));
    assert_eq!(s.active(), 0);
    assert_eq!(s.reachable(), 0);
}

#[test]
fn clearing_repository_while_browsing_login_keeps_login() {
    let mut s = Stepper::new();
    s.sync(true, true, false);
    s.select(0);
    assert!(!s.sync(true, false, false));
    assert_eq!(s.active(), 0);
}
