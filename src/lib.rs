//! Chore Scheduler - Fair Chore Allocation & Quality Scoring
//!
//! This crate splits a household's chores among its members, respecting
//! per-user capacity, difficulty ratings and loved/hated preferences, and
//! scores the result for fairness and feasibility.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
