//! Greedy largest-first chore allocation.
//!
//! Chores are placed in descending `amount` order. Each goes to the user with
//! spare capacity whose running load would be lowest after taking it; ties
//! fall to the user holding fewer chores, then to the earlier input position.
//! When nobody has capacity left the chore goes to the user with the lowest
//! current load (then fewer chores, then earlier position) and the placement
//! is recorded as overflow. Every chore is always placed.
//!
//! Runs in `O(C log C + C * U)`.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};

use super::cost_model::CostMatrix;
use super::household::Household;

/// Chore indices owned by each user, indexed by user position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    chores_by_user: Vec<Vec<usize>>,
}

impl Assignment {
    fn empty(user_count: usize) -> Self {
        Self {
            chores_by_user: vec![Vec::new(); user_count],
        }
    }

    /// Chores held by a user, in placement order.
    pub fn chores_of(&self, user: usize) -> &[usize] {
        &self.chores_by_user[user]
    }

    /// Number of chores held by a user.
    pub fn count(&self, user: usize) -> usize {
        self.chores_by_user[user].len()
    }

    /// The user holding a chore, if any.
    pub fn owner_of(&self, chore: usize) -> Option<usize> {
        self.chores_by_user
            .iter()
            .position(|chores| chores.contains(&chore))
    }

    /// Resolves indices to names, keeping input order for users and chores.
    pub fn to_schedule(&self, household: &Household) -> Schedule {
        let entries = household
            .users()
            .iter()
            .zip(&self.chores_by_user)
            .map(|(user, owned)| {
                let mut owned = owned.clone();
                owned.sort_unstable();
                let names = owned
                    .into_iter()
                    .map(|c| household.chores()[c].name.clone())
                    .collect();
                (user.name.clone(), names)
            })
            .collect();
        Schedule { entries }
    }
}

/// Named assignment: user name -> chore names. Serializes as a JSON object
/// whose keys follow input user order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    entries: Vec<(String, Vec<String>)>,
}

impl Schedule {
    /// Chores assigned to the named user.
    pub fn get(&self, user: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == user)
            .map(|(_, chores)| chores.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, chores)| (name.as_str(), chores.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// The outcome of one allocation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub assignment: Assignment,
    /// Chores placed beyond their owner's capacity, in placement order.
    pub overflow: Vec<usize>,
    /// Sum of effective costs held by each user.
    pub loads: Vec<f64>,
}

impl Allocation {
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }
}

/// Greedy min-max allocator.
pub struct Allocator;

impl Allocator {
    /// Assigns every chore exactly once.
    pub fn allocate(household: &Household, costs: &CostMatrix) -> Allocation {
        let users = household.users();
        let chores = household.chores();

        let mut order: Vec<usize> = (0..chores.len()).collect();
        order.sort_by(|&a, &b| chores[b].amount.total_cmp(&chores[a].amount).then(a.cmp(&b)));

        let mut assignment = Assignment::empty(users.len());
        let mut loads = vec![0.0_f64; users.len()];
        let mut overflow = Vec::new();

        for chore in order {
            let with_room = (0..users.len())
                .filter(|&u| (assignment.count(u) as u64) < u64::from(users[u].max_chores));

            let placement = Self::cheapest(with_room, chore, &loads, &assignment, costs);
            let (user, overflowed) = match placement {
                Some(user) => (user, false),
                None => (Self::least_loaded(&loads, &assignment), true),
            };

            loads[user] += costs.cost(user, chore);
            assignment.chores_by_user[user].push(chore);
            if overflowed {
                overflow.push(chore);
            }
        }

        Allocation {
            assignment,
            overflow,
            loads,
        }
    }

    /// Overflow target: lowest current load, then fewest chores, then earliest index.
    fn least_loaded(loads: &[f64], assignment: &Assignment) -> usize {
        debug_assert!(!loads.is_empty(), "validated households always have users");
        (1..loads.len()).fold(0, |best, u| {
            let order = loads[u]
                .total_cmp(&loads[best])
                .then_with(|| assignment.count(u).cmp(&assignment.count(best)));
            if order == Ordering::Less {
                u
            } else {
                best
            }
        })
    }

    /// Picks the candidate with the lowest projected load.
    fn cheapest(
        candidates: impl Iterator<Item = usize>,
        chore: usize,
        loads: &[f64],
        assignment: &Assignment,
        costs: &CostMatrix,
    ) -> Option<usize> {
        candidates.min_by(|&a, &b| {
            let projected_a = loads[a] + costs.cost(a, chore);
            let projected_b = loads[b] + costs.cost(b, chore);
            projected_a
                .total_cmp(&projected_b)
                .then_with(|| assignment.count(a).cmp(&assignment.count(b)))
                .then(a.cmp(&b))
        })
    }
}
