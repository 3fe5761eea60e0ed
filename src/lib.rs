//! # Vitalscore
//!
//! Deterministic rule-based health-risk scoring for self-assessment data.
//!
//! This crate provides:
//! - Weighted risk scoring for sleep, nutrition/BMI, depression, and anxiety
//! - Threshold-ladder classification into discrete risk levels
//! - Key-factor and recommendation synthesis (deduplicated, urgent-first)
//! - Derived metrics: BMR and macro targets, meal plans, sleep stages
//!
//! ## Architecture
//!
//! The crate is split into three layers:
//! - `domain`: Typed input records with range validation, and result types
//! - `engine`: Static rule tables and the scoring/classification logic
//! - `application`: The `AssessmentService` orchestrating validate → score
//!
//! All scoring is pure and synchronous: one input record in, one immutable
//! result out. There is no I/O, no shared mutable state, and no randomness,
//! so identical inputs always produce identical results and the engine can
//! be called concurrently without locking.

pub mod application;
pub mod domain;
pub mod engine;

pub use application::AssessmentService;
pub use domain::{
    AnxietyAssessment, AnxietyInput, DepressionAssessment, DepressionInput, NutritionAssessment,
    NutritionInput, RiskLevel, SleepAssessment, SleepInput,
};

/// Result type for Vitalscore operations.
pub type Result<T> = std::result::Result<T, VitalscoreError>;

/// Main error type for Vitalscore.
///
/// Scoring itself is total: once an input passes validation there are no
/// further failure modes, no retries, and no partial results.
#[derive(Debug, thiserror::Error)]
pub enum VitalscoreError {
    /// One or more input fields were missing or out of their documented range.
    #[error("invalid assessment input: {}", .0.join("; "))]
    Validation(Vec<String>),
}
