//! Assessment service: validate at the boundary, then score.
//!
//! The service is stateless; every method is a pure validate-then-score
//! pipeline over one typed input record.

use crate::domain::{
    AnxietyAssessment, AnxietyInput, DepressionAssessment, DepressionInput, NutritionAssessment,
    NutritionInput, SleepAssessment, SleepInput,
};
use crate::engine;
use crate::{Result, VitalscoreError};

/// Entry point for running health-risk assessments.
///
/// Inputs are validated before they reach the scoring engine; scoring itself
/// is total and deterministic, so a successful call always yields a complete
/// assessment.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssessmentService;

impl AssessmentService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run a sleep-disorder risk assessment.
    ///
    /// # Errors
    /// Returns [`VitalscoreError::Validation`] when any input field is out
    /// of its documented range.
    pub fn assess_sleep(&self, input: &SleepInput) -> Result<SleepAssessment> {
        input.validate().map_err(VitalscoreError::Validation)?;
        let assessment = engine::sleep::score(input);
        tracing::info!(
            risk_level = %assessment.risk_level,
            risk_score = assessment.risk_score,
            "sleep assessment complete"
        );
        Ok(assessment)
    }

    /// Run a nutrition/BMI assessment.
    ///
    /// # Errors
    /// Returns [`VitalscoreError::Validation`] when any input field is out
    /// of its documented range.
    pub fn assess_nutrition(&self, input: &NutritionInput) -> Result<NutritionAssessment> {
        input.validate().map_err(VitalscoreError::Validation)?;
        let assessment = engine::nutrition::score(input);
        tracing::info!(
            bmi = assessment.calculated_bmi,
            category = %assessment.bmi_category,
            nutrition_score = assessment.nutrition_score,
            "nutrition assessment complete"
        );
        Ok(assessment)
    }

    /// Run a depression risk assessment.
    ///
    /// # Errors
    /// Returns [`VitalscoreError::Validation`] when any input field is out
    /// of its documented range.
    pub fn assess_depression(&self, input: &DepressionInput) -> Result<DepressionAssessment> {
        input.validate().map_err(VitalscoreError::Validation)?;
        let assessment = engine::depression::score(input);
        tracing::info!(
            risk_points = assessment.risk_points,
            profile = %assessment.depression_type,
            "depression assessment complete"
        );
        Ok(assessment)
    }

    /// Run an anxiety assessment.
    ///
    /// # Errors
    /// Returns [`VitalscoreError::Validation`] when any input field is out
    /// of its documented range.
    pub fn assess_anxiety(&self, input: &AnxietyInput) -> Result<AnxietyAssessment> {
        input.validate().map_err(VitalscoreError::Validation)?;
        let assessment = engine::anxiety::score(input);
        tracing::info!(
            anxiety_score = assessment.anxiety_score,
            severity = %assessment.severity_level,
            "anxiety assessment complete"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::BloodPressure;
    use crate::domain::{Gender, RiskLevel};

    fn healthy_sleep_input() -> SleepInput {
        SleepInput {
            age: 30.0,
            gender: Gender::Female,
            sleep_duration: 7.5,
            quality_of_sleep: 8.0,
            physical_activity: 60.0,
            stress_level: 3.0,
            bmi: 22.0,
            blood_pressure: BloodPressure {
                systolic: 118.0,
                diastolic: 76.0,
            },
            heart_rate: 68.0,
            daily_steps: 8000.0,
        }
    }

    #[test]
    fn test_valid_sleep_input_scores() {
        let service = AssessmentService::new();
        let assessment = service
            .assess_sleep(&healthy_sleep_input())
            .expect("Should assess");
        assert_eq!(assessment.risk_level, RiskLevel::Minimal);
    }

    #[test]
    fn test_invalid_input_is_rejected_before_scoring() {
        let service = AssessmentService::new();
        let mut input = healthy_sleep_input();
        input.quality_of_sleep = 0.0;
        input.heart_rate = 300.0;

        let err = service
            .assess_sleep(&input)
            .expect_err("Should fail validation");
        let VitalscoreError::Validation(messages) = err;
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_error_message_joins_all_fields() {
        let service = AssessmentService::new();
        let mut input = healthy_sleep_input();
        input.age = 0.0;
        input.stress_level = 11.0;

        let err = service
            .assess_sleep(&input)
            .expect_err("Should fail validation");
        let text = err.to_string();
        assert!(text.contains("Age"));
        assert!(text.contains("Stress"));
    }
}
