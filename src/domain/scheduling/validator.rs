//! Input validation and normalization.
//!
//! Structural problems (empty names, duplicates, bad numbers, empty lists)
//! are terminal. Stale references in the optional difficulty and preference
//! maps are pruned silently, as are difficulty values that are not numbers.
//! Fractional difficulties are rounded and out-of-range ones clamped.

use std::collections::HashMap;

use super::errors::{InputCollection, ScheduleError};
use super::household::{
    Chore, DifficultyMatrix, Household, PreferenceSets, User, DIFFICULTY_MAX, DIFFICULTY_MIN,
};
use super::input::{ChoreInput, ScheduleInput, UserInput};

/// What normalization quietly changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationNotes {
    /// Difficulty entries naming an unknown user or chore, or holding no number.
    pub pruned_difficulties: usize,
    /// Loved/hated entries naming an unknown user or chore.
    pub pruned_preferences: usize,
    /// Difficulty entries outside the accepted range after rounding.
    pub clamped_difficulties: usize,
}

/// A household plus the notes produced while normalizing it.
#[derive(Debug, Clone)]
pub struct Validated {
    pub household: Household,
    pub notes: NormalizationNotes,
}

/// Validates raw input into a [`Household`].
pub struct InputValidator;

impl InputValidator {
    /// Checks structural consistency and normalizes the optional maps.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` when there are no users or no chores
    /// - `InvalidUser` for an empty/duplicate name or a bad `max_chores`
    /// - `InvalidChore` for an empty/duplicate name or a bad `amount`
    pub fn validate(input: &ScheduleInput) -> Result<Validated, ScheduleError> {
        if input.users.is_empty() {
            return Err(ScheduleError::EmptyInput(InputCollection::Users));
        }
        if input.chores.is_empty() {
            return Err(ScheduleError::EmptyInput(InputCollection::Chores));
        }

        let users = input
            .users
            .iter()
            .enumerate()
            .map(|(index, user)| Self::validate_user(index, user))
            .collect::<Result<Vec<_>, _>>()?;
        let user_index = Self::index_names(users.iter().map(|u| u.name.as_str()))
            .map_err(|index| ScheduleError::invalid_user(index, "name", "must be unique"))?;

        let chores = input
            .chores
            .iter()
            .enumerate()
            .map(|(index, chore)| Self::validate_chore(index, chore))
            .collect::<Result<Vec<_>, _>>()?;
        let chore_index = Self::index_names(chores.iter().map(|c| c.name.as_str()))
            .map_err(|index| ScheduleError::invalid_chore(index, "name", "must be unique"))?;

        let mut notes = NormalizationNotes::default();
        let mut difficulty = DifficultyMatrix::new(users.len(), chores.len());
        let mut preferences = PreferenceSets::new(users.len(), chores.len());

        // Sorted so that keys colliding after trimming resolve the same way every run.
        // Numbers round to the nearest integer; `as` saturates huge values.
        let mut entries: Vec<(&str, &str, Option<i64>)> = input
            .difficulties
            .iter()
            .flat_map(|(user, row)| {
                row.iter().map(move |(chore, value)| {
                    let raw = value.as_number().map(|n| n.round() as i64);
                    (user.as_str(), chore.as_str(), raw)
                })
            })
            .collect();
        entries.sort_unstable();

        for (user, chore, raw) in entries {
            let cell = (user_index.get(user.trim()), chore_index.get(chore.trim()), raw);
            match cell {
                (Some(&u), Some(&c), Some(raw)) => {
                    if raw < i64::from(DIFFICULTY_MIN) || raw > i64::from(DIFFICULTY_MAX) {
                        notes.clamped_difficulties += 1;
                    }
                    difficulty.set(u, c, raw);
                }
                _ => notes.pruned_difficulties += 1,
            }
        }

        for (user, names) in &input.loved {
            notes.pruned_preferences += Self::apply_preferences(
                &user_index,
                &chore_index,
                user,
                names,
                |u, c| preferences.love(u, c),
            );
        }
        for (user, names) in &input.hated {
            notes.pruned_preferences += Self::apply_preferences(
                &user_index,
                &chore_index,
                user,
                names,
                |u, c| preferences.hate(u, c),
            );
        }

        Ok(Validated {
            household: Household::new(users, chores, difficulty, preferences),
            notes,
        })
    }

    fn validate_user(index: usize, raw: &UserInput) -> Result<User, ScheduleError> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::invalid_user(index, "name", "cannot be empty"));
        }

        let invalid = |reason: &str| ScheduleError::invalid_user(index, "max_chores", reason);
        let max_chores = raw.max_chores.as_number().ok_or_else(|| invalid("must be a number"))?;
        if max_chores < 0.0 {
            return Err(invalid("cannot be negative"));
        }
        if max_chores.fract() != 0.0 {
            return Err(invalid("must be a whole number"));
        }
        if max_chores > f64::from(u32::MAX) {
            return Err(invalid("is too large"));
        }

        Ok(User::new(name, max_chores as u32))
    }

    fn validate_chore(index: usize, raw: &ChoreInput) -> Result<Chore, ScheduleError> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::invalid_chore(index, "name", "cannot be empty"));
        }

        let amount = raw.amount.as_number().ok_or_else(|| {
            ScheduleError::invalid_chore(index, "amount", "must be a number")
        })?;
        if amount <= 0.0 {
            return Err(ScheduleError::invalid_chore(
                index,
                "amount",
                "must be greater than zero",
            ));
        }

        Ok(Chore::new(name, amount))
    }

    /// Maps each name to its position, or returns the index of the first duplicate.
    fn index_names<'a>(names: impl Iterator<Item = &'a str>) -> Result<HashMap<&'a str, usize>, usize> {
        let mut index = HashMap::new();
        for (position, name) in names.enumerate() {
            if index.insert(name, position).is_some() {
                return Err(position);
            }
        }
        Ok(index)
    }

    /// Applies one user's preference list, returning how many entries were pruned.
    fn apply_preferences(
        user_index: &HashMap<&str, usize>,
        chore_index: &HashMap<&str, usize>,
        user: &str,
        chores: &[String],
        mut apply: impl FnMut(usize, usize),
    ) -> usize {
        let Some(&u) = user_index.get(user.trim()) else {
            return chores.len();
        };

        let mut pruned = 0;
        for chore in chores {
            match chore_index.get(chore.trim()) {
                Some(&c) => apply(u, c),
                None => pruned += 1,
            }
        }
        pruned
    }
}
