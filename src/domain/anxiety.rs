//! Anxiety domain: GAD-7-style input record and the assessment result.

use serde::{Deserialize, Serialize};

/// Anxiety severity ladder over the accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnxietySeverity {
    #[serde(rename = "Minimal Anxiety")]
    Minimal,
    #[serde(rename = "Mild Anxiety")]
    Mild,
    #[serde(rename = "Moderate Anxiety")]
    Moderate,
    #[serde(rename = "Moderately Severe Anxiety")]
    ModeratelySevere,
    #[serde(rename = "Severe Anxiety")]
    Severe,
}

impl std::fmt::Display for AnxietySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Minimal => "Minimal Anxiety",
            Self::Mild => "Mild Anxiety",
            Self::Moderate => "Moderate Anxiety",
            Self::ModeratelySevere => "Moderately Severe Anxiety",
            Self::Severe => "Severe Anxiety",
        };
        write!(f, "{label}")
    }
}

/// Anxiety self-assessment input.
///
/// The seven core items follow the GAD-7 questionnaire (0=not at all,
/// 1=several days, 2=more than half the days, 3=nearly every day). The
/// symptom flags and coping fields default to absent/neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnxietyInput {
    /// Feeling nervous, anxious, or on edge (0-3)
    pub nervous_feeling: u8,
    /// Not being able to stop or control worrying (0-3)
    pub uncontrollable_worrying: u8,
    /// Worrying too much about different things (0-3)
    pub excessive_worrying: u8,
    /// Trouble relaxing (0-3)
    pub trouble_relaxing: u8,
    /// Being so restless that it is hard to sit still (0-3)
    pub restlessness: u8,
    /// Becoming easily annoyed or irritable (0-3)
    pub easily_annoyed: u8,
    /// Feeling afraid as if something awful might happen (0-3)
    pub feeling_afraid: u8,

    // Physical symptoms
    #[serde(default)]
    pub heart_palpitations: bool,
    #[serde(default)]
    pub sweating: bool,
    #[serde(default)]
    pub trembling: bool,
    #[serde(default)]
    pub shortness_of_breath: bool,
    #[serde(default)]
    pub chest_pain: bool,
    #[serde(default)]
    pub nausea: bool,
    #[serde(default)]
    pub dizziness: bool,

    // Social anxiety indicators
    #[serde(default)]
    pub social_avoidance: bool,
    #[serde(default)]
    pub public_speaking_fear: bool,
    #[serde(default)]
    pub small_talk_difficulty: bool,

    /// Panic attack frequency: 0=never, 1=rarely, 2=sometimes, 3=often
    #[serde(default)]
    pub panic_attacks_frequency: u8,

    // High-risk indicators
    /// Self-reported persistent high anxiousness
    #[serde(default)]
    pub anxiousness: bool,
    /// Self-reported suicidal thoughts; triggers the crisis path
    #[serde(default)]
    pub suicidal: bool,

    // Behavioral factors
    #[serde(default)]
    pub concentration_difficulty: bool,
    #[serde(default)]
    pub sleep_disturbance: bool,
    /// Fatigue level, 0-10 scale (default 0)
    #[serde(default)]
    pub fatigue_level: u8,
    #[serde(default)]
    pub appetite_change: bool,

    // Coping factors
    /// Exercise days per week, 0-7 (default 0)
    #[serde(default)]
    pub exercise_frequency: u8,
    /// Self-rated social support, 0-10 (default 5)
    #[serde(default = "default_social_support")]
    pub social_support: u8,
    #[serde(default)]
    pub professional_help: bool,
}

fn default_social_support() -> u8 {
    5
}

impl AnxietyInput {
    /// Validate that all fields are within expected ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings, one per field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let gad7_items = [
            ("Nervous feeling", self.nervous_feeling),
            ("Uncontrollable worrying", self.uncontrollable_worrying),
            ("Excessive worrying", self.excessive_worrying),
            ("Trouble relaxing", self.trouble_relaxing),
            ("Restlessness", self.restlessness),
            ("Easily annoyed", self.easily_annoyed),
            ("Feeling afraid", self.feeling_afraid),
        ];
        for (name, value) in gad7_items {
            if value > 3 {
                errors.push(format!("{name} {value} out of range [0, 3]"));
            }
        }
        if self.panic_attacks_frequency > 3 {
            errors.push(format!(
                "Panic attack frequency {} out of range [0, 3]",
                self.panic_attacks_frequency
            ));
        }
        if self.fatigue_level > 10 {
            errors.push(format!(
                "Fatigue level {} out of range [0, 10]",
                self.fatigue_level
            ));
        }
        if self.exercise_frequency > 7 {
            errors.push(format!(
                "Exercise frequency {} out of range [0, 7] days/week",
                self.exercise_frequency
            ));
        }
        if self.social_support > 10 {
            errors.push(format!(
                "Social support {} out of range [0, 10]",
                self.social_support
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Sum of the seven GAD-7 items (0-21).
    #[must_use]
    pub fn gad7_score(&self) -> u8 {
        self.nervous_feeling
            + self.uncontrollable_worrying
            + self.excessive_worrying
            + self.trouble_relaxing
            + self.restlessness
            + self.easily_annoyed
            + self.feeling_afraid
    }

    /// Number of reported physical symptoms (0-7).
    #[must_use]
    pub fn physical_symptom_count(&self) -> u8 {
        [
            self.heart_palpitations,
            self.sweating,
            self.trembling,
            self.shortness_of_breath,
            self.chest_pain,
            self.nausea,
            self.dizziness,
        ]
        .iter()
        .filter(|&&s| s)
        .count() as u8
    }

    /// Number of reported social-anxiety indicators (0-3).
    #[must_use]
    pub fn social_anxiety_count(&self) -> u8 {
        [
            self.social_avoidance,
            self.public_speaking_fear,
            self.small_talk_difficulty,
        ]
        .iter()
        .filter(|&&s| s)
        .count() as u8
    }
}

/// Breakdown of symptom groups for the detailed assessment section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnxietyDetail {
    pub psychological_symptoms: String,
    pub physical_symptoms: String,
    pub social_impact: String,
    pub functional_impairment: bool,
}

/// Complete anxiety assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnxietyAssessment {
    /// Accumulated anxiety score after protective offsets
    pub anxiety_score: u8,
    /// Raw GAD-7 subtotal, 0-21
    pub gad7_score: u8,
    pub severity_level: AnxietySeverity,
    /// Heuristic confidence estimate, 60-95
    pub confidence: u8,
    pub risk_factors: Vec<String>,
    pub symptoms: Vec<String>,
    /// Deduplicated recommendations, urgent entries first
    pub recommendations: Vec<String>,
    pub coping_strategies: Vec<String>,
    pub needs_professional_help: bool,
    /// Whether the crisis path fired (suicidal thoughts reported)
    pub crisis_intervention: bool,
    pub detailed_assessment: AnxietyDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_input() -> AnxietyInput {
        AnxietyInput {
            nervous_feeling: 0,
            uncontrollable_worrying: 0,
            excessive_worrying: 0,
            trouble_relaxing: 0,
            restlessness: 0,
            easily_annoyed: 0,
            feeling_afraid: 0,
            heart_palpitations: false,
            sweating: false,
            trembling: false,
            shortness_of_breath: false,
            chest_pain: false,
            nausea: false,
            dizziness: false,
            social_avoidance: false,
            public_speaking_fear: false,
            small_talk_difficulty: false,
            panic_attacks_frequency: 0,
            anxiousness: false,
            suicidal: false,
            concentration_difficulty: false,
            sleep_disturbance: false,
            fatigue_level: 0,
            appetite_change: false,
            exercise_frequency: 3,
            social_support: 7,
            professional_help: false,
        }
    }

    #[test]
    fn test_gad7_sum() {
        let mut input = quiet_input();
        input.nervous_feeling = 3;
        input.trouble_relaxing = 2;
        assert_eq!(input.gad7_score(), 5);
    }

    #[test]
    fn test_symptom_counts() {
        let mut input = quiet_input();
        input.sweating = true;
        input.chest_pain = true;
        input.social_avoidance = true;
        assert_eq!(input.physical_symptom_count(), 2);
        assert_eq!(input.social_anxiety_count(), 1);
    }

    #[test]
    fn test_gad7_item_bounds() {
        let mut input = quiet_input();
        input.feeling_afraid = 4;
        assert!(input.validate().is_err());
    }
}
