//! Scheduling Module - fair chore allocation and quality scoring.
//!
//! A run is a stateless pipeline over one request snapshot:
//!
//! 1. [`InputValidator`] - checks and normalizes the raw [`ScheduleInput`]
//! 2. [`CostMatrix`] - effective cost of every (user, chore) pair
//! 3. [`Allocator`] - greedy largest-first placement under capacity
//! 4. [`QualityScorer`] - score, situation and per-user workloads
//!
//! All functions are pure. Nothing is shared or mutated between runs, so
//! concurrent requests need no coordination.

mod allocator;
mod cost_model;
mod errors;
mod household;
mod input;
mod parameters;
mod quality;
mod validator;

pub use allocator::{Allocation, Allocator, Assignment, Schedule};
pub use cost_model::{effective_cost, CostMatrix};
pub use errors::{InputCollection, ScheduleError};
pub use household::{
    Chore, DifficultyMatrix, Household, Preference, PreferenceSets, User, DIFFICULTY_MAX,
    DIFFICULTY_MIN,
};
pub use input::{ChoreInput, NumericInput, ScheduleInput, UserInput};
pub use parameters::{
    CostWeights, SchedulingParameters, ScoreBands, ScoringWeights, SituationBands,
    DEFAULT_DIFFICULTY_WEIGHT, DEFAULT_HATED_MULTIPLIER, DEFAULT_LOVED_MULTIPLIER,
};
pub use quality::{
    PreferenceSummary, QualityReport, QualityScorer, Ratio, ScoreRating, Situation, UserLoad,
    UserLoads, UNBOUNDED,
};
pub use validator::{InputValidator, NormalizationNotes, Validated};
