//! Quality Scorer - fairness and feasibility report for a finished allocation.
//!
//! # Components
//!
//! - **Fairness** (0-100): 100 minus a penalty proportional to the spread
//!   between the highest and lowest per-user load ratio. Only users with
//!   capacity take part. A zero-capacity user holding work has an unbounded
//!   ratio, which no finite spread can express, so it drives fairness to 0.
//! - **Feasibility** (0-100): 100 while the aggregate capacity ratio is at
//!   most 1, then falls linearly with the excess.
//!
//! The overall score is the weighted mean of both, rounded to an integer.
//! Situation and feasibility use the exact capacity ratio; only the reported
//! figure is rounded.
//!
//! The report also carries `difficulty_fit` (0-100), outside the score: how
//! close each user's mean assigned difficulty is to the easiest set of the
//! same size they could have received.

use std::fmt;

use serde::{Serialize, Serializer};

use super::allocator::{Allocation, Assignment};
use super::household::{Household, Preference};
use super::parameters::{SchedulingParameters, ScoreBands, SituationBands};

/// Returned in place of a number when dividing by a zero capacity.
pub const UNBOUNDED: &str = "unbounded";

/// Share of the household's difficulty spread tolerated as mean deviation
/// before `difficulty_fit` reaches 0.
const DIFFICULTY_FIT_TOLERANCE: f64 = 0.3;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// A load ratio, or the overload sentinel for work placed on zero capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Finite(f64),
    Unbounded,
}

impl Ratio {
    /// `assigned / capacity`. Zero capacity holding work is unbounded.
    pub fn of(assigned: u64, capacity: u64) -> Self {
        match (assigned, capacity) {
            (0, _) => Ratio::Finite(0.0),
            (_, 0) => Ratio::Unbounded,
            (a, c) => Ratio::Finite(a as f64 / c as f64),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Ratio::Finite(v) => *v,
            Ratio::Unbounded => f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Ratio::Unbounded)
    }

    fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Ratio::Finite(v) => Ratio::Finite(f(v)),
            Ratio::Unbounded => Ratio::Unbounded,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Finite(v) => write!(f, "{}", v),
            Ratio::Unbounded => f.write_str(UNBOUNDED),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Finite(v) => serializer.serialize_f64(*v),
            Ratio::Unbounded => serializer.serialize_str(UNBOUNDED),
        }
    }
}

/// Qualitative band of the aggregate capacity ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Situation {
    #[serde(rename = "Light load")]
    LightLoad,
    Balanced,
    Overloaded,
}

impl Situation {
    /// Total and monotonic in `ratio`.
    pub fn classify(ratio: Ratio, bands: &SituationBands) -> Self {
        match ratio {
            Ratio::Unbounded => Situation::Overloaded,
            Ratio::Finite(r) if r <= bands.light_load_max => Situation::LightLoad,
            Ratio::Finite(r) if r <= bands.balanced_max => Situation::Balanced,
            Ratio::Finite(_) => Situation::Overloaded,
        }
    }

    /// Returns the display label for this situation.
    pub fn label(&self) -> &'static str {
        match self {
            Situation::LightLoad => "Light load",
            Situation::Balanced => "Balanced",
            Situation::Overloaded => "Overloaded",
        }
    }
}

/// Human-readable qualifier for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ScoreRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreRating {
    pub fn from_score(score: u8, bands: &ScoreBands) -> Self {
        if score >= bands.excellent_min {
            ScoreRating::Excellent
        } else if score >= bands.good_min {
            ScoreRating::Good
        } else if score >= bands.fair_min {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }

    /// Returns the display label for this rating.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        }
    }
}

/// Workload of one user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserLoad {
    pub assigned: u32,
    pub capacity: u32,
    /// `ratio * 100`, one decimal.
    pub percentage: Ratio,
    /// `assigned / capacity`, two decimals.
    pub ratio: Ratio,
}

/// Per-user workloads keyed by name, in input user order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserLoads(Vec<(String, UserLoad)>);

impl UserLoads {
    pub fn get(&self, user: &str) -> Option<&UserLoad> {
        self.0.iter().find(|(name, _)| name == user).map(|(_, load)| load)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UserLoad)> {
        self.0.iter().map(|(name, load)| (name.as_str(), load))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for UserLoads {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// How many loved and hated (user, chore) pairs the allocation honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PreferenceSummary {
    pub loved_assigned: u32,
    pub loved_total: u32,
    pub hated_assigned: u32,
    pub hated_total: u32,
}

/// Full quality report for one allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub score: u8,
    pub score_results: ScoreRating,
    pub situation: Situation,
    /// Total assigned over total capacity, two decimals.
    pub capacity_ratio: Ratio,
    pub user_loads: UserLoads,
    pub fairness: f64,
    pub feasibility: f64,
    /// Jain's index over the ratios of users with capacity.
    pub fairness_index: f64,
    /// How well assigned difficulties match each user's easiest options.
    pub difficulty_fit: f64,
    /// Names of chores placed beyond capacity.
    pub overflow: Vec<String>,
    pub preferences: PreferenceSummary,
}

/// Calculator for allocation quality.
pub struct QualityScorer;

impl QualityScorer {
    /// Builds the report for an allocation of `household`.
    pub fn evaluate(
        household: &Household,
        allocation: &Allocation,
        params: &SchedulingParameters,
    ) -> QualityReport {
        let users = household.users();
        let assignment = &allocation.assignment;

        let user_loads = UserLoads(
            users
                .iter()
                .enumerate()
                .map(|(u, user)| {
                    let assigned = assignment.count(u) as u32;
                    let exact = Ratio::of(u64::from(assigned), u64::from(user.max_chores));
                    let load = UserLoad {
                        assigned,
                        capacity: user.max_chores,
                        percentage: exact.map(|r| round_to(r * 100.0, 1)),
                        ratio: exact.map(|r| round_to(r, 2)),
                    };
                    (user.name.clone(), load)
                })
                .collect(),
        );

        let exact_ratios: Vec<Ratio> = users
            .iter()
            .enumerate()
            .map(|(u, user)| Ratio::of(assignment.count(u) as u64, u64::from(user.max_chores)))
            .collect();

        let total_assigned: u64 = (0..users.len()).map(|u| assignment.count(u) as u64).sum();
        let exact_capacity_ratio = Ratio::of(total_assigned, household.total_capacity());
        let fairness_index = Self::jains_index(&Self::capacity_ratios(&exact_ratios, household));

        let fairness = Self::fairness(&exact_ratios, household, params.scoring.fairness_penalty);
        let feasibility = Self::feasibility(exact_capacity_ratio, params.scoring.overload_penalty);
        let (deviations, spread) = Self::difficulty_deviations(household, assignment);
        let score = Self::combine(
            fairness,
            feasibility,
            params.scoring.fairness_weight,
            params.scoring.feasibility_weight,
        );

        QualityReport {
            score,
            score_results: ScoreRating::from_score(score, &params.score_bands),
            situation: Situation::classify(exact_capacity_ratio, &params.situation),
            capacity_ratio: exact_capacity_ratio.map(|r| round_to(r, 2)),
            user_loads,
            fairness: round_to(fairness, 1),
            feasibility: round_to(feasibility, 1),
            fairness_index: round_to(fairness_index, 3),
            difficulty_fit: round_to(Self::difficulty_fit(&deviations, spread), 1),
            overflow: allocation
                .overflow
                .iter()
                .map(|&c| household.chores()[c].name.clone())
                .collect(),
            preferences: Self::preference_summary(household, allocation),
        }
    }

    /// Finite ratios of users that have capacity.
    fn capacity_ratios(ratios: &[Ratio], household: &Household) -> Vec<f64> {
        ratios
            .iter()
            .zip(household.users())
            .filter(|(_, user)| user.max_chores > 0)
            .map(|(ratio, _)| ratio.value())
            .collect()
    }

    /// 100 minus `penalty` per unit of ratio spread, clamped to [0, 100].
    pub fn fairness(ratios: &[Ratio], household: &Household, penalty: f64) -> f64 {
        if ratios.iter().any(Ratio::is_unbounded) {
            return 0.0;
        }

        let considered = Self::capacity_ratios(ratios, household);
        if considered.is_empty() {
            return 100.0;
        }
        let max = considered.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = considered.iter().copied().fold(f64::INFINITY, f64::min);

        (100.0 - (max - min) * penalty).clamp(0.0, 100.0)
    }

    /// 100 up to full capacity, then minus `penalty` per unit of excess.
    pub fn feasibility(capacity_ratio: Ratio, penalty: f64) -> f64 {
        match capacity_ratio {
            Ratio::Unbounded => 0.0,
            Ratio::Finite(r) if r <= 1.0 => 100.0,
            Ratio::Finite(r) => (100.0 - (r - 1.0) * penalty).clamp(0.0, 100.0),
        }
    }

    /// Weighted mean of the components, rounded and clamped to [0, 100].
    pub fn combine(fairness: f64, feasibility: f64, fairness_weight: f64, feasibility_weight: f64) -> u8 {
        let total_weight = fairness_weight + feasibility_weight;
        if total_weight <= 0.0 {
            return 0;
        }
        let blended = (fairness * fairness_weight + feasibility * feasibility_weight) / total_weight;
        blended.round().clamp(0.0, 100.0) as u8
    }

    /// Jain's fairness index: `(sum x)^2 / (n * sum x^2)`. 1.0 means perfectly even.
    pub fn jains_index(values: &[f64]) -> f64 {
        let sum: f64 = values.iter().sum();
        let sum_sq: f64 = values.iter().map(|v| v * v).sum();
        let denominator = values.len() as f64 * sum_sq;
        if denominator == 0.0 {
            return 1.0;
        }
        (sum * sum) / denominator
    }

    /// 100 minus the mean deviation as a share of the tolerated deviation,
    /// clamped to [0, 100]. No deviations at all scores 100.
    ///
    /// The tolerance is `spread * 0.3`, never below 1 point of difficulty.
    pub fn difficulty_fit(deviations: &[f64], spread: f64) -> f64 {
        if deviations.is_empty() {
            return 100.0;
        }
        let mean = deviations.iter().sum::<f64>() / deviations.len() as f64;
        let tolerance = (spread * DIFFICULTY_FIT_TOLERANCE).max(1.0);
        (100.0 * (1.0 - mean / tolerance)).clamp(0.0, 100.0)
    }

    /// Per-user gap between the mean difficulty held and the lowest mean
    /// reachable with the same number of chores, for users holding any.
    /// Also returns the spread of all difficulty ratings in the household.
    fn difficulty_deviations(household: &Household, assignment: &Assignment) -> (Vec<f64>, f64) {
        let difficulty = household.difficulty();
        let chore_count = household.chores().len();
        let mut lowest = f64::INFINITY;
        let mut highest = f64::NEG_INFINITY;
        let mut deviations = Vec::new();

        for user in 0..household.users().len() {
            let mut ratings: Vec<f64> = (0..chore_count)
                .map(|c| f64::from(difficulty.get(user, c)))
                .collect();
            for &rating in &ratings {
                lowest = lowest.min(rating);
                highest = highest.max(rating);
            }

            let held = assignment.chores_of(user);
            if held.is_empty() {
                continue;
            }
            ratings.sort_unstable_by(f64::total_cmp);
            let n = held.len() as f64;
            let ideal = ratings.iter().take(held.len()).sum::<f64>() / n;
            let actual = held
                .iter()
                .map(|&c| f64::from(difficulty.get(user, c)))
                .sum::<f64>()
                / n;
            deviations.push((actual - ideal).max(0.0));
        }

        let spread = if highest >= lowest { highest - lowest } else { 0.0 };
        (deviations, spread)
    }

    fn preference_summary(household: &Household, allocation: &Allocation) -> PreferenceSummary {
        let prefs = household.preferences();
        let mut summary = PreferenceSummary::default();

        for user in 0..household.users().len() {
            for chore in 0..household.chores().len() {
                let held = allocation.assignment.chores_of(user).contains(&chore);
                match prefs.get(user, chore) {
                    Preference::Loved => {
                        summary.loved_total += 1;
                        summary.loved_assigned += u32::from(held);
                    }
                    Preference::Hated => {
                        summary.hated_total += 1;
                        summary.hated_assigned += u32::from(held);
                    }
                    Preference::Neutral => {}
                }
            }
        }
        summary
    }
}
