//! Depression domain: input record and the point-sum assessment result.

use serde::{Deserialize, Serialize};

use super::assessment::{DepressionRiskLevel, Gender, PossibleCondition, RiskFactor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
    Student,
    Retired,
}

/// Depression self-assessment input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepressionInput {
    /// Age in years (1-120)
    pub age: f64,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub employment_status: EmploymentStatus,
    /// Self-rated stress level (1-10)
    pub stress_level: f64,
    /// Self-rated sleep quality (1-10)
    pub sleep_quality: f64,
    /// Self-rated social support (1-10)
    pub social_support: f64,
    /// Physical activity level as a percentage (0-100)
    pub physical_activity: f64,
    /// Self-rated diet quality (1-10)
    pub diet_quality: f64,
    /// Family history of depression
    pub genetic_history: bool,
    /// Diagnosed medical conditions (default empty)
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

impl DepressionInput {
    /// Validate that all fields are within expected ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings, one per field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1.0..=120.0).contains(&self.age) {
            errors.push(format!("Age {} out of range [1, 120]", self.age));
        }
        if !(1.0..=10.0).contains(&self.stress_level) {
            errors.push(format!(
                "Stress level {} out of range [1, 10]",
                self.stress_level
            ));
        }
        if !(1.0..=10.0).contains(&self.sleep_quality) {
            errors.push(format!(
                "Sleep quality {} out of range [1, 10]",
                self.sleep_quality
            ));
        }
        if !(1.0..=10.0).contains(&self.social_support) {
            errors.push(format!(
                "Social support {} out of range [1, 10]",
                self.social_support
            ));
        }
        if !(0.0..=100.0).contains(&self.physical_activity) {
            errors.push(format!(
                "Physical activity {} out of range [0, 100]",
                self.physical_activity
            ));
        }
        if !(1.0..=10.0).contains(&self.diet_quality) {
            errors.push(format!(
                "Diet quality {} out of range [1, 10]",
                self.diet_quality
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Complete depression risk assessment.
///
/// The score is a raw point sum (max 22), not a normalized percentage:
/// the classifier cutoffs work directly on the sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepressionAssessment {
    pub risk_level: DepressionRiskLevel,
    /// Raw accumulated risk points, 0-22
    pub risk_points: u8,
    /// Named risk-profile label (e.g. "Major Depressive Episode Risk")
    pub depression_type: String,
    pub depression_type_description: String,
    /// Heuristic confidence estimate, 60-95
    pub confidence: u8,
    /// Flagged inputs, sorted by descending impact
    pub key_factors: Vec<RiskFactor>,
    /// Condition hypotheses, sorted by descending probability
    pub possible_conditions: Vec<PossibleCondition>,
    /// Deduplicated recommendations, urgent entries first
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> DepressionInput {
        DepressionInput {
            age: 28.0,
            gender: Gender::Other,
            marital_status: MaritalStatus::Single,
            employment_status: EmploymentStatus::Employed,
            stress_level: 4.0,
            sleep_quality: 8.0,
            social_support: 7.0,
            physical_activity: 60.0,
            diet_quality: 7.0,
            genetic_history: false,
            medical_conditions: Vec::new(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_scale_bounds_enforced() {
        let mut input = valid_input();
        input.stress_level = 0.0;
        input.social_support = 11.0;
        let errors = input.validate().expect_err("Should fail validation");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_medical_conditions_default_from_json() {
        let json = r#"{
            "age": 28, "gender": "female", "maritalStatus": "single",
            "employmentStatus": "student", "stressLevel": 4, "sleepQuality": 8,
            "socialSupport": 7, "physicalActivity": 60, "dietQuality": 7,
            "geneticHistory": false
        }"#;
        let input: DepressionInput = serde_json::from_str(json).expect("Should deserialize");
        assert!(input.medical_conditions.is_empty());
    }
}
