//! Loosely typed request payload, as submitted by a client.
//!
//! Nothing here is trusted. [`super::InputValidator`] turns a
//! [`ScheduleInput`] into a [`super::Household`] or rejects it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A numeric field that may arrive as a JSON number, a numeric string,
/// or something else entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(Value),
}

impl NumericInput {
    /// Returns the finite numeric value, if there is one.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().ok()?,
            NumericInput::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        NumericInput::Other(Value::Null)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// A user as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub max_chores: NumericInput,
}

impl UserInput {
    pub fn new(name: impl Into<String>, max_chores: impl Into<NumericInput>) -> Self {
        Self {
            name: name.into(),
            max_chores: max_chores.into(),
        }
    }
}

/// A chore as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoreInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: NumericInput,
}

impl ChoreInput {
    pub fn new(name: impl Into<String>, amount: impl Into<NumericInput>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Everything one allocation request carries. Optional maps default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInput {
    #[serde(default)]
    pub users: Vec<UserInput>,
    #[serde(default)]
    pub chores: Vec<ChoreInput>,
    /// user name -> chore name -> difficulty
    #[serde(default)]
    pub difficulties: HashMap<String, HashMap<String, NumericInput>>,
    /// user name -> loved chore names
    #[serde(default)]
    pub loved: HashMap<String, Vec<String>>,
    /// user name -> hated chore names
    #[serde(default)]
    pub hated: HashMap<String, Vec<String>>,
}

impl ScheduleInput {
    pub fn new(users: Vec<UserInput>, chores: Vec<ChoreInput>) -> Self {
        Self {
            users,
            chores,
            ..Default::default()
        }
    }

    pub fn with_difficulty(mut self, user: &str, chore: &str, value: i64) -> Self {
        self.difficulties
            .entry(user.to_string())
            .or_default()
            .insert(chore.to_string(), NumericInput::Number(value as f64));
        self
    }

    pub fn with_loved(mut self, user: &str, chore: &str) -> Self {
        self.loved
            .entry(user.to_string())
            .or_default()
            .push(chore.to_string());
        self
    }

    pub fn with_hated(mut self, user: &str, chore: &str) -> Self {
        self.hated
            .entry(user.to_string())
            .or_default()
            .push(chore.to_string());
        self
    }
}
