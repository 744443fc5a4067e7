//! Effective cost of giving a chore to a user. Lower is more desirable.

use super::household::{Household, Preference};
use super::parameters::CostWeights;

/// Computes `(amount + difficulty * weight)` scaled by the user's preference.
///
/// A loved chore never gets more expensive and a hated chore never gets
/// cheaper, whatever the sign of the adjusted cost: positive costs are
/// multiplied by the preference multiplier, non-positive costs divided by it.
pub fn effective_cost(amount: f64, difficulty: i8, preference: Preference, weights: &CostWeights) -> f64 {
    let adjusted = amount + f64::from(difficulty) * weights.difficulty_weight;

    let multiplier = match preference {
        Preference::Neutral => return finite(adjusted),
        Preference::Loved => weights.loved_multiplier,
        Preference::Hated => weights.hated_multiplier,
    };

    if adjusted > 0.0 {
        finite(adjusted * multiplier)
    } else {
        finite(adjusted / multiplier)
    }
}

fn finite(cost: f64) -> f64 {
    if cost.is_finite() {
        cost
    } else {
        f64::MAX.copysign(cost)
    }
}

/// Precomputed costs for every (user, chore) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    costs: Vec<f64>,
    chore_count: usize,
}

impl CostMatrix {
    /// Builds the full table for a household.
    pub fn build(household: &Household, weights: &CostWeights) -> Self {
        let chore_count = household.chores().len();
        let mut costs = Vec::with_capacity(household.users().len() * chore_count);

        for user in 0..household.users().len() {
            for (chore, details) in household.chores().iter().enumerate() {
                costs.push(effective_cost(
                    details.amount,
                    household.difficulty().get(user, chore),
                    household.preferences().get(user, chore),
                    weights,
                ));
            }
        }

        Self { costs, chore_count }
    }

    pub fn cost(&self, user: usize, chore: usize) -> f64 {
        self.costs[user * self.chore_count + chore]
    }
}
