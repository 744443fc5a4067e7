//! Scheduling engine tuning

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scheduling::{
    CostWeights, SchedulingParameters, ScoreBands, ScoringWeights, SituationBands,
};

/// Tunable constants for cost, situation bands and scoring.
///
/// Defaults mirror [`SchedulingParameters::default`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Cost added per difficulty point
    pub difficulty_weight: f64,

    /// Cost multiplier for loved chores, in (0, 1)
    pub loved_multiplier: f64,

    /// Cost multiplier for hated chores, above 1
    pub hated_multiplier: f64,

    /// Highest capacity ratio still labelled "Light load"
    pub light_load_max: f64,

    /// Highest capacity ratio still labelled "Balanced"
    pub balanced_max: f64,

    /// Fairness points lost per unit of ratio spread
    pub fairness_penalty: f64,

    /// Feasibility points lost per unit of capacity ratio above 1
    pub overload_penalty: f64,

    pub fairness_weight: f64,
    pub feasibility_weight: f64,

    pub excellent_min: u8,
    pub good_min: u8,
    pub fair_min: u8,
}

impl SchedulingConfig {
    /// Converts into domain parameters.
    pub fn to_parameters(&self) -> SchedulingParameters {
        SchedulingParameters {
            cost: CostWeights {
                difficulty_weight: self.difficulty_weight,
                loved_multiplier: self.loved_multiplier,
                hated_multiplier: self.hated_multiplier,
            },
            situation: SituationBands {
                light_load_max: self.light_load_max,
                balanced_max: self.balanced_max,
            },
            scoring: ScoringWeights {
                fairness_penalty: self.fairness_penalty,
                overload_penalty: self.overload_penalty,
                fairness_weight: self.fairness_weight,
                feasibility_weight: self.feasibility_weight,
            },
            score_bands: ScoreBands {
                excellent_min: self.excellent_min,
                good_min: self.good_min,
                fair_min: self.fair_min,
            },
        }
    }

    /// Validate scheduling configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.difficulty_weight.is_finite() && self.difficulty_weight > 0.0) {
            return Err(ValidationError::InvalidDifficultyWeight);
        }
        if !(self.loved_multiplier > 0.0 && self.loved_multiplier < 1.0) {
            return Err(ValidationError::InvalidLovedMultiplier);
        }
        if !(self.hated_multiplier.is_finite() && self.hated_multiplier > 1.0) {
            return Err(ValidationError::InvalidHatedMultiplier);
        }
        if !(self.light_load_max >= 0.0
            && self.balanced_max.is_finite()
            && self.light_load_max <= self.balanced_max)
        {
            return Err(ValidationError::InvalidSituationBands);
        }
        for penalty in [self.fairness_penalty, self.overload_penalty] {
            if !(penalty.is_finite() && penalty >= 0.0) {
                return Err(ValidationError::InvalidPenalty);
            }
        }
        let weights = [self.fairness_weight, self.feasibility_weight];
        if weights.iter().any(|w| !(w.is_finite() && *w >= 0.0)) || weights.iter().sum::<f64>() <= 0.0 {
            return Err(ValidationError::InvalidScoreWeights);
        }
        if !(self.fair_min <= self.good_min
            && self.good_min <= self.excellent_min
            && self.excellent_min <= 100)
        {
            return Err(ValidationError::InvalidScoreBands);
        }
        Ok(())
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        let params = SchedulingParameters::default();
        Self {
            difficulty_weight: params.cost.difficulty_weight,
            loved_multiplier: params.cost.loved_multiplier,
            hated_multiplier: params.cost.hated_multiplier,
            light_load_max: params.situation.light_load_max,
            balanced_max: params.situation.balanced_max,
            fairness_penalty: params.scoring.fairness_penalty,
            overload_penalty: params.scoring.overload_penalty,
            fairness_weight: params.scoring.fairness_weight,
            feasibility_weight: params.scoring.feasibility_weight,
            excellent_min: params.score_bands.excellent_min,
            good_min: params.score_bands.good_min,
            fair_min: params.score_bands.fair_min,
        }
    }
}
