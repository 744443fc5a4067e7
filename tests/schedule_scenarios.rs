//! End-to-end scenarios through the schedule command handler.
//!
//! Each scenario submits a small household and checks the qualitative
//! outcome rather than exact tuning-dependent scores.

use chore_scheduler::application::handlers::{
    CreateScheduleCommand, CreateScheduleHandler, CreateScheduleResult,
};
use chore_scheduler::domain::scheduling::{
    ChoreInput, Ratio, ScheduleError, ScheduleInput, ScoreRating, Situation, UserInput,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn run(input: ScheduleInput) -> Result<CreateScheduleResult, ScheduleError> {
    CreateScheduleHandler::default().handle(CreateScheduleCommand { input })
}

fn chores(specs: &[(&str, f64)]) -> Vec<ChoreInput> {
    specs
        .iter()
        .map(|(name, amount)| ChoreInput::new(*name, *amount))
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn single_user_takes_every_chore_at_full_capacity() {
    let input = ScheduleInput::new(
        vec![UserInput::new("Alice", 3.0)],
        chores(&[("dishes", 1.0), ("trash", 1.0), ("laundry", 1.0)]),
    );

    let result = run(input).unwrap();

    assert_eq!(
        result.schedule.get("Alice").unwrap(),
        &["dishes", "trash", "laundry"]
    );
    assert_eq!(result.quality.capacity_ratio, Ratio::Finite(1.0));
    assert_eq!(result.quality.situation, Situation::Balanced);
    assert!(result.quality.overflow.is_empty());
}

#[test]
fn two_single_slot_users_split_two_chores() {
    let input = ScheduleInput::new(
        vec![UserInput::new("Ann", 1.0), UserInput::new("Ben", 1.0)],
        chores(&[("a", 1.0), ("b", 1.0)]),
    );

    let result = run(input).unwrap();

    assert_eq!(result.schedule.get("Ann").unwrap().len(), 1);
    assert_eq!(result.schedule.get("Ben").unwrap().len(), 1);
    assert_eq!(result.quality.fairness, 100.0);
    assert_eq!(result.quality.fairness_index, 1.0);
}

#[test]
fn zero_capacity_user_still_receives_the_only_chore() {
    let input = ScheduleInput::new(vec![UserInput::new("Bob", 0.0)], chores(&[("x", 5.0)]));

    let result = run(input).unwrap();
    let quality = &result.quality;

    assert_eq!(result.schedule.get("Bob").unwrap(), &["x"]);
    assert_eq!(quality.user_loads.get("Bob").unwrap().ratio, Ratio::Unbounded);
    assert_eq!(quality.capacity_ratio, Ratio::Unbounded);
    assert_eq!(quality.situation, Situation::Overloaded);
    assert_eq!(quality.score, 0);
    assert_eq!(quality.score_results, ScoreRating::Poor);
    assert_eq!(quality.overflow, vec!["x".to_string()]);
}

#[test]
fn hard_chore_goes_to_the_user_who_finds_it_easy() {
    let input = ScheduleInput::new(
        vec![UserInput::new("A", 1.0), UserInput::new("B", 1.0)],
        chores(&[("hard-task", 5.0)]),
    )
    .with_difficulty("A", "hard-task", 10)
    .with_difficulty("B", "hard-task", -10);

    let result = run(input).unwrap();

    assert_eq!(result.schedule.get("B").unwrap(), &["hard-task"]);
    assert!(result.schedule.get("A").unwrap().is_empty());
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn users_without_chores_still_appear_in_output() {
    let input = ScheduleInput::new(
        vec![
            UserInput::new("Ann", 2.0),
            UserInput::new("Ben", 2.0),
            UserInput::new("Cid", 2.0),
        ],
        chores(&[("only", 1.0)]),
    );

    let result = run(input).unwrap();

    assert_eq!(result.schedule.len(), 3);
    let idle = result.quality.user_loads.get("Cid").unwrap();
    assert_eq!(idle.assigned, 0);
    assert_eq!(idle.ratio, Ratio::Finite(0.0));
    assert_eq!(result.quality.situation, Situation::LightLoad);
}

#[test]
fn stale_preferences_are_ignored() {
    let input = ScheduleInput::new(vec![UserInput::new("Ann", 1.0)], chores(&[("dishes", 1.0)]))
        .with_loved("Ghost", "dishes")
        .with_hated("Ann", "vacuum")
        .with_difficulty("Ann", "mopping", 4);

    let result = run(input).unwrap();

    assert_eq!(result.schedule.get("Ann").unwrap(), &["dishes"]);
    assert_eq!(result.quality.preferences.loved_total, 0);
    assert_eq!(result.quality.preferences.hated_total, 0);
}

#[test]
fn out_of_range_difficulty_is_clamped_not_rejected() {
    let input = ScheduleInput::new(
        vec![UserInput::new("A", 1.0), UserInput::new("B", 1.0)],
        chores(&[("garage", 2.0)]),
    )
    .with_difficulty("A", "garage", -500)
    .with_difficulty("B", "garage", -10);

    let result = run(input).unwrap();

    // Both clamp to -10, so the index tie-break decides.
    assert_eq!(result.schedule.get("A").unwrap(), &["garage"]);
}

#[test]
fn invalid_input_is_rejected_before_allocation() {
    let input = ScheduleInput::new(
        vec![UserInput::new("Ann", 1.0), UserInput::new("Ann", 1.0)],
        chores(&[("dishes", 1.0)]),
    );

    let err = run(input).unwrap_err();

    assert_eq!(err.field_path(), "users[1].name");
    assert_eq!(err.code().to_string(), "INVALID_USER");
}
