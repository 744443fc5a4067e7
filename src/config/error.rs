//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Difficulty weight must be positive")]
    InvalidDifficultyWeight,

    #[error("Loved multiplier must be between 0 and 1 (exclusive)")]
    InvalidLovedMultiplier,

    #[error("Hated multiplier must be greater than 1")]
    InvalidHatedMultiplier,

    #[error("Situation bands must satisfy 0 <= light_load_max <= balanced_max")]
    InvalidSituationBands,

    #[error("Penalties must be finite and non-negative")]
    InvalidPenalty,

    #[error("Score weights must be non-negative with a positive sum")]
    InvalidScoreWeights,

    #[error("Score bands must satisfy fair_min <= good_min <= excellent_min <= 100")]
    InvalidScoreBands,
}
