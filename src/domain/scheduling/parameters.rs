//! Tunable constants for cost, classification and scoring.
//!
//! None of these are fixed by the problem; they are grouped here so
//! deployments can tune them through configuration.

/// Default weight applied to a difficulty point.
pub const DEFAULT_DIFFICULTY_WEIGHT: f64 = 1.0;
/// Default multiplier for a loved chore (< 1).
pub const DEFAULT_LOVED_MULTIPLIER: f64 = 0.5;
/// Default multiplier for a hated chore (> 1).
pub const DEFAULT_HATED_MULTIPLIER: f64 = 2.0;

/// Weights used by the cost model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    pub difficulty_weight: f64,
    pub loved_multiplier: f64,
    pub hated_multiplier: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            difficulty_weight: DEFAULT_DIFFICULTY_WEIGHT,
            loved_multiplier: DEFAULT_LOVED_MULTIPLIER,
            hated_multiplier: DEFAULT_HATED_MULTIPLIER,
        }
    }
}

/// Upper bounds (inclusive) of the capacity-ratio bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SituationBands {
    pub light_load_max: f64,
    pub balanced_max: f64,
}

impl Default for SituationBands {
    fn default() -> Self {
        Self {
            light_load_max: 0.7,
            balanced_max: 1.0,
        }
    }
}

/// How the two score components are penalized and combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Points lost per unit of spread between the highest and lowest user ratio.
    pub fairness_penalty: f64,
    /// Points lost per unit of aggregate capacity ratio above 1.
    pub overload_penalty: f64,
    pub fairness_weight: f64,
    pub feasibility_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fairness_penalty: 100.0,
            overload_penalty: 100.0,
            fairness_weight: 0.5,
            feasibility_weight: 0.5,
        }
    }
}

/// Minimum score (inclusive) for each rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBands {
    pub excellent_min: u8,
    pub good_min: u8,
    pub fair_min: u8,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            excellent_min: 90,
            good_min: 70,
            fair_min: 50,
        }
    }
}

/// Every tunable used by one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SchedulingParameters {
    pub cost: CostWeights,
    pub situation: SituationBands,
    pub scoring: ScoringWeights,
    pub score_bands: ScoreBands,
}
