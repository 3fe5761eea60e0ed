//! Shared assessment vocabulary: impact tiers, risk levels, key factors,
//! and possible conditions.
//!
//! These types are common to all four scoring domains.

use serde::{Deserialize, Serialize};

/// Impact tier of a flagged risk factor.
///
/// Ordered ascending so that `Critical > High > Medium > Low`; key-factor
/// lists are sorted descending by impact before output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Severity attached to a possible condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Derive severity from a condition probability estimate.
    #[must_use]
    pub fn from_probability(probability: u8) -> Self {
        if probability >= 70 {
            Self::High
        } else if probability >= 45 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Risk level classification for percentage-normalized domains (sleep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal risk - No significant indicators",
            Self::Low => "Low risk - Minor indicators present",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Consultation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimal => write!(f, "Minimal"),
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Risk level for the depression domain.
///
/// Kept separate from [`RiskLevel`]: the depression classifier works on raw
/// point sums and serializes lowercase, matching the historical wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepressionRiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for DepressionRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Self-reported gender, used for BMR offsets and protein targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Blood pressure reading in mmHg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure (60-250 typical input range)
    pub systolic: f64,
    /// Diastolic pressure (30-150 typical input range)
    pub diastolic: f64,
}

impl BloodPressure {
    /// Hypertensive per the stage-1 cutoff used throughout the rule tables.
    #[must_use]
    pub fn is_hypertensive(&self) -> bool {
        self.systolic > 140.0 || self.diastolic > 90.0
    }
}

/// A human-readable flagged input that crossed a risk threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub name: String,
    pub impact: Impact,
    /// The observed input value, formatted for display (e.g. "4 hours")
    pub observed_value: String,
}

/// A named condition hypothesis with a probability estimate.
///
/// Distinct from the overall risk level: several conditions may co-occur.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleCondition {
    pub name: String,
    pub severity: Severity,
    /// Probability estimate, 0-100
    pub probability: u8,
}

impl PossibleCondition {
    /// Create a condition, deriving severity from the probability.
    #[must_use]
    pub fn new(name: impl Into<String>, probability: u8) -> Self {
        Self {
            name: name.into(),
            severity: Severity::from_probability(probability),
            probability,
        }
    }
}

/// Sort key factors by descending impact, stable within each tier.
pub fn sort_factors(factors: &mut [RiskFactor]) {
    factors.sort_by(|a, b| b.impact.cmp(&a.impact));
}

/// Sort conditions by descending probability, stable within ties.
pub fn sort_conditions(conditions: &mut [PossibleCondition]) {
    conditions.sort_by(|a, b| b.probability.cmp(&a.probability));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_ordering() {
        assert!(Impact::Critical > Impact::High);
        assert!(Impact::High > Impact::Medium);
        assert!(Impact::Medium > Impact::Low);
    }

    #[test]
    fn test_severity_from_probability() {
        assert_eq!(Severity::from_probability(85), Severity::High);
        assert_eq!(Severity::from_probability(50), Severity::Moderate);
        assert_eq!(Severity::from_probability(30), Severity::Low);
    }

    #[test]
    fn test_sort_factors_descending() {
        let mut factors = vec![
            RiskFactor {
                name: "a".into(),
                impact: Impact::Low,
                observed_value: String::new(),
            },
            RiskFactor {
                name: "b".into(),
                impact: Impact::Critical,
                observed_value: String::new(),
            },
            RiskFactor {
                name: "c".into(),
                impact: Impact::Medium,
                observed_value: String::new(),
            },
        ];
        sort_factors(&mut factors);
        assert_eq!(factors[0].name, "b");
        assert_eq!(factors[2].name, "a");
    }

    #[test]
    fn test_depression_level_serializes_lowercase() {
        let json = serde_json::to_string(&DepressionRiskLevel::High).expect("Should serialize");
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_risk_level_serializes_capitalized() {
        let json = serde_json::to_string(&RiskLevel::Moderate).expect("Should serialize");
        assert_eq!(json, "\"Moderate\"");
    }
}
