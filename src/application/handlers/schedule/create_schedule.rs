//! CreateScheduleHandler - Command handler for allocating chores and scoring the result.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::scheduling::{
    Allocator, CostMatrix, InputValidator, QualityReport, QualityScorer, Schedule, ScheduleError,
    ScheduleInput, SchedulingParameters,
};

/// Command to build a schedule from one request snapshot.
#[derive(Debug, Clone)]
pub struct CreateScheduleCommand {
    pub input: ScheduleInput,
}

/// Result of a successful allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateScheduleResult {
    pub schedule: Schedule,
    pub quality: QualityReport,
}

/// Handler running validate -> cost -> allocate -> score.
///
/// Holds only the tuning parameters; every call works on its own snapshot.
#[derive(Debug, Clone, Default)]
pub struct CreateScheduleHandler {
    params: SchedulingParameters,
}

impl CreateScheduleHandler {
    pub fn new(params: SchedulingParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SchedulingParameters {
        &self.params
    }

    pub fn handle(&self, cmd: CreateScheduleCommand) -> Result<CreateScheduleResult, ScheduleError> {
        // 1. Validate and normalize
        let validated = InputValidator::validate(&cmd.input).map_err(|e| {
            debug!(error = %e, field = %e.field_path(), "Rejected schedule input");
            e
        })?;
        let household = validated.household;
        let notes = validated.notes;
        debug!(
            users = household.users().len(),
            chores = household.chores().len(),
            pruned_difficulties = notes.pruned_difficulties,
            pruned_preferences = notes.pruned_preferences,
            clamped_difficulties = notes.clamped_difficulties,
            "Validated schedule input"
        );

        // 2. Cost every (user, chore) pair
        let costs = CostMatrix::build(&household, &self.params.cost);

        // 3. Allocate
        let allocation = Allocator::allocate(&household, &costs);
        if allocation.has_overflow() {
            warn!(
                overflow = allocation.overflow.len(),
                total_capacity = household.total_capacity(),
                "Chores placed beyond user capacity"
            );
        }

        // 4. Score
        let quality = QualityScorer::evaluate(&household, &allocation, &self.params);
        info!(
            score = quality.score,
            rating = quality.score_results.label(),
            situation = quality.situation.label(),
            capacity_ratio = %quality.capacity_ratio,
            "Schedule created"
        );

        Ok(CreateScheduleResult {
            schedule: allocation.assignment.to_schedule(&household),
            quality,
        })
    }
}
