//! Normalized household snapshot consumed by the scheduling pipeline.
//!
//! A [`Household`] is only produced by the validator, so every value in it
//! already satisfies the structural invariants: names are unique and
//! non-empty, amounts are positive, difficulties lie in
//! [`DIFFICULTY_MIN`]..=[`DIFFICULTY_MAX`], and no preference refers to an
//! unknown user or chore.

use serde::{Deserialize, Serialize};

/// Lowest accepted difficulty adjustment.
pub const DIFFICULTY_MIN: i8 = -10;

/// Highest accepted difficulty adjustment.
pub const DIFFICULTY_MAX: i8 = 10;

/// A participant and their capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// Maximum number of chores this user may be assigned.
    pub max_chores: u32,
}

impl User {
    pub fn new(name: impl Into<String>, max_chores: u32) -> Self {
        Self {
            name: name.into(),
            max_chores,
        }
    }
}

/// One atomic, single-owner chore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    pub name: String,
    /// Base workload weight of one occurrence.
    pub amount: f64,
}

impl Chore {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// How a user feels about a chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    #[default]
    Neutral,
    Loved,
    Hated,
}

/// Dense user x chore grid, indexed by input position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Grid<T> {
    cells: Vec<T>,
    chore_count: usize,
}

impl<T: Copy + Default> Grid<T> {
    fn new(user_count: usize, chore_count: usize) -> Self {
        Self {
            cells: vec![T::default(); user_count * chore_count],
            chore_count,
        }
    }

    fn get(&self, user: usize, chore: usize) -> T {
        self.cells[user * self.chore_count + chore]
    }

    fn set(&mut self, user: usize, chore: usize, value: T) {
        self.cells[user * self.chore_count + chore] = value;
    }
}

/// Per-user-per-chore difficulty adjustments. Missing entries are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyMatrix(Grid<i8>);

impl DifficultyMatrix {
    /// Creates an all-zero matrix.
    pub fn new(user_count: usize, chore_count: usize) -> Self {
        Self(Grid::new(user_count, chore_count))
    }

    /// Clamps a raw difficulty into the accepted range.
    pub fn clamp(raw: i64) -> i8 {
        raw.clamp(i64::from(DIFFICULTY_MIN), i64::from(DIFFICULTY_MAX)) as i8
    }

    pub fn get(&self, user: usize, chore: usize) -> i8 {
        self.0.get(user, chore)
    }

    /// Stores a raw value, clamping it into range.
    pub fn set(&mut self, user: usize, chore: usize, raw: i64) {
        self.0.set(user, chore, Self::clamp(raw));
    }
}

/// Loved and hated chores for every user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSets(Grid<Preference>);

impl PreferenceSets {
    /// Creates preferences where every pair is neutral.
    pub fn new(user_count: usize, chore_count: usize) -> Self {
        Self(Grid::new(user_count, chore_count))
    }

    pub fn get(&self, user: usize, chore: usize) -> Preference {
        self.0.get(user, chore)
    }

    /// Marks a chore as loved unless the user already hates it.
    pub fn love(&mut self, user: usize, chore: usize) {
        if self.get(user, chore) != Preference::Hated {
            self.0.set(user, chore, Preference::Loved);
        }
    }

    /// Marks a chore as hated. Hated wins over loved.
    pub fn hate(&mut self, user: usize, chore: usize) {
        self.0.set(user, chore, Preference::Hated);
    }

    /// Counts the (user, chore) pairs holding the given preference.
    pub fn count(&self, preference: Preference) -> usize {
        self.0.cells.iter().filter(|p| **p == preference).count()
    }
}

/// Validated, immutable input for one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    users: Vec<User>,
    chores: Vec<Chore>,
    difficulty: DifficultyMatrix,
    preferences: PreferenceSets,
}

impl Household {
    pub(crate) fn new(
        users: Vec<User>,
        chores: Vec<Chore>,
        difficulty: DifficultyMatrix,
        preferences: PreferenceSets,
    ) -> Self {
        Self {
            users,
            chores,
            difficulty,
            preferences,
        }
    }

    /// Users in input order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Chores in input order.
    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    pub fn difficulty(&self) -> &DifficultyMatrix {
        &self.difficulty
    }

    pub fn preferences(&self) -> &PreferenceSets {
        &self.preferences
    }

    /// Sum of every user's capacity.
    pub fn total_capacity(&self) -> u64 {
        self.users.iter().map(|u| u64::from(u.max_chores)).sum()
    }
}
