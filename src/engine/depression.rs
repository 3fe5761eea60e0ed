//! Depression scoring: point rules over lifestyle and history fields, a
//! raw point-sum classifier, and risk-profile inference.
//!
//! Unlike the sleep and nutrition domains this score is NOT normalized to a
//! percentage: the classifier cutoffs operate on the raw point sum.

use crate::domain::assessment::{
    sort_conditions, sort_factors, Impact, PossibleCondition, RiskFactor,
};
use crate::domain::depression::{DepressionAssessment, DepressionInput};
use crate::domain::{DepressionRiskLevel, EmploymentStatus, MaritalStatus};
use crate::engine::recommend::RecommendationSet;
use crate::engine::rules;

/// Lifestyle staples appended to every result before dedup.
const UNIVERSAL_RECOMMENDATIONS: &[&str] = &[
    "Maintain a regular sleep schedule and aim for 7-9 hours of rest",
    "Stay physically active - even light daily exercise lifts mood",
    "Eat a balanced diet and limit alcohol and caffeine",
];

/// One point-awarding check. First matching rule per dimension wins, so
/// rules for the same dimension are ordered most severe first.
struct PointRule {
    trigger: fn(&DepressionInput) -> bool,
    points: u8,
    factor: Option<(&'static str, Impact)>,
    observed: fn(&DepressionInput) -> String,
    recommendations: &'static [&'static str],
}

/// Dimensions with their ordered rule cascades. Total awardable: 22 points.
static RULES: &[&[PointRule]] = &[
    // Stress (up to 4)
    &[
        PointRule {
            trigger: |i| i.stress_level >= 8.0,
            points: 4,
            factor: Some(("Severe Chronic Stress", Impact::Critical)),
            observed: |i| format!("{}/10", rules::fmt_value(i.stress_level)),
            recommendations: &[],
        },
        PointRule {
            trigger: |i| i.stress_level >= 6.0,
            points: 2,
            factor: Some(("Elevated Stress Levels", Impact::Medium)),
            observed: |i| format!("{}/10", rules::fmt_value(i.stress_level)),
            recommendations: &[],
        },
    ],
    // Sleep quality (up to 4)
    &[
        PointRule {
            trigger: |i| i.sleep_quality <= 3.0,
            points: 4,
            factor: Some(("Severe Sleep Disturbance", Impact::High)),
            observed: |i| format!("{}/10", rules::fmt_value(i.sleep_quality)),
            recommendations: &[],
        },
        PointRule {
            trigger: |i| i.sleep_quality <= 5.0,
            points: 2,
            factor: Some(("Poor Sleep Quality", Impact::Medium)),
            observed: |i| format!("{}/10", rules::fmt_value(i.sleep_quality)),
            recommendations: &[],
        },
    ],
    // Social support (up to 3)
    &[
        PointRule {
            trigger: |i| i.social_support <= 3.0,
            points: 3,
            factor: Some(("Social Isolation", Impact::High)),
            observed: |i| format!("{}/10", rules::fmt_value(i.social_support)),
            recommendations: &[
                "Social isolation worsens depression - reach out to friends, family, or support groups",
            ],
        },
        PointRule {
            trigger: |i| i.social_support <= 5.0,
            points: 1,
            factor: None,
            observed: |i| format!("{}/10", rules::fmt_value(i.social_support)),
            recommendations: &[],
        },
    ],
    // Physical activity (up to 2)
    &[
        PointRule {
            trigger: |i| i.physical_activity < 30.0,
            points: 2,
            factor: Some(("Physical Inactivity", Impact::Medium)),
            observed: |i| format!("{}/100", rules::fmt_value(i.physical_activity)),
            recommendations: &[
                "Regular exercise is proven to reduce depression - start with 20-30 min walks daily",
            ],
        },
        PointRule {
            trigger: |i| i.physical_activity < 50.0,
            points: 1,
            factor: None,
            observed: |i| format!("{}/100", rules::fmt_value(i.physical_activity)),
            recommendations: &[],
        },
    ],
    // Diet quality (up to 2)
    &[
        PointRule {
            trigger: |i| i.diet_quality <= 3.0,
            points: 2,
            factor: Some(("Poor Diet Quality", Impact::Medium)),
            observed: |i| format!("{}/10", rules::fmt_value(i.diet_quality)),
            recommendations: &[],
        },
        PointRule {
            trigger: |i| i.diet_quality <= 5.0,
            points: 1,
            factor: None,
            observed: |i| format!("{}/10", rules::fmt_value(i.diet_quality)),
            recommendations: &[],
        },
    ],
    // Family history (3)
    &[PointRule {
        trigger: |i| i.genetic_history,
        points: 3,
        factor: Some(("Family History of Depression", Impact::High)),
        observed: |_| "Yes".to_string(),
        recommendations: &[],
    }],
    // Medical conditions (2)
    &[PointRule {
        trigger: |i| !i.medical_conditions.is_empty(),
        points: 2,
        factor: Some(("Chronic Medical Conditions", Impact::Medium)),
        observed: |i| format!("{} condition(s)", i.medical_conditions.len()),
        recommendations: &[],
    }],
    // Employment (1)
    &[PointRule {
        trigger: |i| i.employment_status == EmploymentStatus::Unemployed,
        points: 1,
        factor: None,
        observed: |_| "Unemployed".to_string(),
        recommendations: &[],
    }],
    // Marital status (1)
    &[PointRule {
        trigger: |i| {
            matches!(
                i.marital_status,
                MaritalStatus::Divorced | MaritalStatus::Widowed
            )
        },
        points: 1,
        factor: None,
        observed: |_| "Divorced or widowed".to_string(),
        recommendations: &[],
    }],
];

/// Classify a raw point sum onto the risk ladder.
#[must_use]
pub fn classify(points: u8) -> DepressionRiskLevel {
    if points >= 12 {
        DepressionRiskLevel::High
    } else if points >= 6 {
        DepressionRiskLevel::Moderate
    } else {
        DepressionRiskLevel::Low
    }
}

fn risk_profile(
    level: DepressionRiskLevel,
) -> (&'static str, &'static str, Option<PossibleCondition>) {
    match level {
        DepressionRiskLevel::High => (
            "Major Depressive Episode Risk",
            "Strong indicators of depressive risk detected. Immediate professional consultation is recommended.",
            Some(PossibleCondition::new("Major Depressive Episode Risk", 75)),
        ),
        DepressionRiskLevel::Moderate => (
            "Persistent Depressive Disorder Risk",
            "Several risk factors present. Early intervention and lifestyle adjustments are highly advisable.",
            Some(PossibleCondition::new(
                "Persistent Depressive Disorder Risk",
                55,
            )),
        ),
        DepressionRiskLevel::Low => (
            "Low Probability",
            "Your profile suggests a low risk of depression. Maintain your healthy habits.",
            None,
        ),
    }
}

/// Pattern overlays: condition hypotheses added alongside the level-based
/// profile, never replacing it.
fn overlay_conditions(
    level: DepressionRiskLevel,
    input: &DepressionInput,
) -> Vec<PossibleCondition> {
    let mut conditions = Vec::new();
    if level != DepressionRiskLevel::Low {
        if input.stress_level >= 8.0 && input.sleep_quality <= 4.0 {
            conditions.push(PossibleCondition::new("Burnout Syndrome", 60));
        }
        if input.social_support <= 3.0 {
            conditions.push(PossibleCondition::new("Social Isolation Pattern", 50));
        }
    }
    conditions
}

/// A profile where the core indicators are healthy yet the point sum still
/// climbed on minor factors alone.
fn contradiction(input: &DepressionInput, level: DepressionRiskLevel) -> bool {
    input.stress_level < 4.0
        && input.sleep_quality > 7.0
        && !input.genetic_history
        && level != DepressionRiskLevel::Low
}

fn confidence(input: &DepressionInput, level: DepressionRiskLevel, factor_count: usize) -> u8 {
    let mut confidence = 75i32;
    if factor_count >= 3 {
        confidence += 10;
    }
    if contradiction(input, level) {
        confidence -= 10;
    }
    confidence.clamp(60, 95) as u8
}

/// Score a validated depression input.
#[must_use]
pub fn score(input: &DepressionInput) -> DepressionAssessment {
    let mut points = 0u8;
    let mut factors: Vec<RiskFactor> = Vec::new();
    let mut recommendations = RecommendationSet::new();

    for cascade in RULES {
        let Some(rule) = cascade.iter().find(|r| (r.trigger)(input)) else {
            continue;
        };
        points += rule.points;
        if let Some((name, impact)) = rule.factor {
            factors.push(RiskFactor {
                name: name.to_string(),
                impact,
                observed_value: (rule.observed)(input),
            });
        }
        recommendations.extend(rule.recommendations.iter().copied());
    }

    let level = classify(points);
    let (profile, description, condition) = risk_profile(level);

    let mut conditions: Vec<PossibleCondition> = condition.into_iter().collect();
    conditions.extend(overlay_conditions(level, input));

    match level {
        DepressionRiskLevel::High => {
            recommendations.extend([
                "URGENT: Consult a mental health professional immediately",
                "Reach out to a trusted person to share your feelings",
            ]);
        }
        DepressionRiskLevel::Moderate => {
            recommendations.extend([
                "Consider talking to a counselor to prevent symptoms from worsening",
                "Review your work-life balance and prioritize rest",
            ]);
        }
        DepressionRiskLevel::Low => {}
    }
    recommendations.extend(UNIVERSAL_RECOMMENDATIONS.iter().copied());

    let confidence = confidence(input, level, factors.len());
    sort_factors(&mut factors);
    sort_conditions(&mut conditions);

    DepressionAssessment {
        risk_level: level,
        risk_points: points,
        depression_type: profile.to_string(),
        depression_type_description: description.to_string(),
        confidence,
        key_factors: factors,
        possible_conditions: conditions,
        recommendations: recommendations.into_prioritized(),
    }
}
