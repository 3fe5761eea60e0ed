//! Sleep domain: input record with range validation and the assessment result.

use serde::{Deserialize, Serialize};

use super::assessment::{BloodPressure, Gender, PossibleCondition, RiskFactor, RiskLevel};

/// Sleep self-assessment input.
///
/// All fields are required; values must already be in their documented
/// ranges (the scorer does not re-derive them from raw user text).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepInput {
    /// Age in years (1-120)
    pub age: f64,
    pub gender: Gender,
    /// Average sleep duration in hours (0-24)
    pub sleep_duration: f64,
    /// Self-rated sleep quality (1-10)
    pub quality_of_sleep: f64,
    /// Physical activity level as a percentage (0-100)
    pub physical_activity: f64,
    /// Self-rated stress level (1-10)
    pub stress_level: f64,
    /// Body mass index (8-80)
    pub bmi: f64,
    pub blood_pressure: BloodPressure,
    /// Resting heart rate in bpm (25-220)
    pub heart_rate: f64,
    /// Average daily step count (0-100000)
    pub daily_steps: f64,
}

impl SleepInput {
    /// Validate that all fields are within expected ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings, one per field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1.0..=120.0).contains(&self.age) {
            errors.push(format!("Age {} out of range [1, 120]", self.age));
        }
        if !(0.0..=24.0).contains(&self.sleep_duration) {
            errors.push(format!(
                "Sleep duration {} out of range [0, 24]",
                self.sleep_duration
            ));
        }
        if !(1.0..=10.0).contains(&self.quality_of_sleep) {
            errors.push(format!(
                "Quality of sleep {} out of range [1, 10]",
                self.quality_of_sleep
            ));
        }
        if !(0.0..=100.0).contains(&self.physical_activity) {
            errors.push(format!(
                "Physical activity {} out of range [0, 100]",
                self.physical_activity
            ));
        }
        if !(1.0..=10.0).contains(&self.stress_level) {
            errors.push(format!(
                "Stress level {} out of range [1, 10]",
                self.stress_level
            ));
        }
        if !(8.0..=80.0).contains(&self.bmi) {
            errors.push(format!("BMI {} out of range [8, 80]", self.bmi));
        }
        if !(60.0..=250.0).contains(&self.blood_pressure.systolic) {
            errors.push(format!(
                "Systolic BP {} out of range [60, 250]",
                self.blood_pressure.systolic
            ));
        }
        if !(30.0..=150.0).contains(&self.blood_pressure.diastolic) {
            errors.push(format!(
                "Diastolic BP {} out of range [30, 150]",
                self.blood_pressure.diastolic
            ));
        }
        if !(25.0..=220.0).contains(&self.heart_rate) {
            errors.push(format!(
                "Heart rate {} out of range [25, 220]",
                self.heart_rate
            ));
        }
        if !(0.0..=100_000.0).contains(&self.daily_steps) {
            errors.push(format!(
                "Daily steps {} out of range [0, 100000]",
                self.daily_steps
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Estimated sleep-stage distribution, percentages summing to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepStages {
    pub deep_sleep: u8,
    pub rem_sleep: u8,
    pub light_sleep: u8,
}

impl SleepStages {
    /// Total of the three stage percentages (always 100 for engine output).
    #[must_use]
    pub fn total(&self) -> u16 {
        u16::from(self.deep_sleep) + u16::from(self.rem_sleep) + u16::from(self.light_sleep)
    }
}

/// Complete sleep-disorder risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepAssessment {
    pub risk_level: RiskLevel,
    /// Human-readable summary of the risk level
    pub risk_description: String,
    /// Normalized risk percentage, 0-100
    pub risk_score: u8,
    /// Heuristic confidence estimate, 60-95
    pub confidence: u8,
    /// Flagged inputs, sorted by descending impact
    pub key_factors: Vec<RiskFactor>,
    /// Condition hypotheses, sorted by descending probability
    pub possible_conditions: Vec<PossibleCondition>,
    /// Deduplicated recommendations, urgent entries first
    pub recommendations: Vec<String>,
    pub sleep_stages: SleepStages,
    /// Heuristic restorative-sleep ratio, 0-100 (not a clinical metric)
    pub sleep_efficiency: u8,
}
