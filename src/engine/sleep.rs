//! Sleep-disorder risk scoring: rule tables, classifier, and derived
//! metrics (sleep stages, efficiency, confidence).

use crate::domain::assessment::{Impact, RiskLevel};
use crate::domain::sleep::{SleepAssessment, SleepInput, SleepStages};
use crate::engine::rules::{self, Band, CompoundRule, Rule, WeightTier};

/// Universal sleep-hygiene staples appended to every result before dedup.
const UNIVERSAL_RECOMMENDATIONS: &[&str] = &[
    "Maintain consistent sleep and wake times, even on weekends",
    "Limit screen time at least 1 hour before bed",
];

/// Scored risk dimensions, evaluated in order. Every rule fires exactly
/// once per call; the maximum possible score is the constant 170.0.
static RULES: &[Rule<SleepInput>] = &[
    Rule {
        dimension: "sleep_duration",
        tier: WeightTier::Critical,
        value: |i: &SleepInput| i.sleep_duration,
        observed: |i: &SleepInput| format!("{} hours", rules::fmt_value(i.sleep_duration)),
        bands: &[
            Band {
                matches: |v| v < 3.0,
                magnitude: 10.0,
                factor: Some(("Severely Insufficient Sleep", Impact::Critical)),
                condition: Some(("Severe Insomnia", 85)),
                recommendations: &[
                    "URGENT: Consult a sleep specialist about severe sleep deprivation",
                    "Aim for 7-9 hours of sleep per night",
                ],
            },
            Band {
                matches: |v| v < 5.0,
                magnitude: 9.0,
                factor: Some(("Severely Insufficient Sleep", Impact::Critical)),
                condition: Some(("Severe Insomnia", 75)),
                recommendations: &["Aim for 7-9 hours of sleep per night"],
            },
            Band {
                matches: |v| v < 6.0,
                magnitude: 7.0,
                factor: Some(("Insufficient Sleep", Impact::High)),
                condition: Some(("Insomnia", 60)),
                recommendations: &["Aim for 7-9 hours of sleep per night"],
            },
            Band {
                matches: |v| v < 7.0,
                magnitude: 4.0,
                factor: Some(("Borderline Sleep Duration", Impact::Medium)),
                condition: None,
                recommendations: &["Aim for 7-9 hours of sleep per night"],
            },
            Band {
                matches: |v| v > 10.0,
                magnitude: 6.0,
                factor: Some(("Excessive Sleep Duration", Impact::High)),
                condition: Some(("Hypersomnia", 55)),
                recommendations: &[
                    "Excessive sleep may indicate an underlying condition, consider consulting a sleep specialist",
                ],
            },
            Band {
                matches: |v| v > 9.0,
                magnitude: 4.0,
                factor: Some(("Long Sleep Duration", Impact::Medium)),
                condition: Some(("Hypersomnia", 45)),
                recommendations: &[
                    "Excessive sleep may indicate an underlying condition, consider consulting a sleep specialist",
                ],
            },
        ],
    },
    Rule {
        dimension: "quality_of_sleep",
        tier: WeightTier::Critical,
        value: |i: &SleepInput| i.quality_of_sleep,
        observed: |i: &SleepInput| format!("{}/10", rules::fmt_value(i.quality_of_sleep)),
        bands: &[
            Band {
                matches: |v| v <= 2.0,
                magnitude: 10.0,
                factor: Some(("Very Poor Sleep Quality", Impact::Critical)),
                condition: Some(("Non-Restorative Sleep", 70)),
                recommendations: &[
                    "Improve sleep environment: reduce noise, light, and maintain comfortable temperature",
                ],
            },
            Band {
                matches: |v| v <= 4.0,
                magnitude: 7.0,
                factor: Some(("Poor Sleep Quality", Impact::High)),
                condition: None,
                recommendations: &[
                    "Improve sleep environment: reduce noise, light, and maintain comfortable temperature",
                ],
            },
            Band {
                matches: |v| v <= 6.0,
                magnitude: 4.0,
                factor: Some(("Mediocre Sleep Quality", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Improve sleep environment: reduce noise, light, and maintain comfortable temperature",
                ],
            },
        ],
    },
    Rule {
        dimension: "stress_level",
        tier: WeightTier::High,
        value: |i: &SleepInput| i.stress_level,
        observed: |i: &SleepInput| format!("{}/10", rules::fmt_value(i.stress_level)),
        bands: &[
            Band {
                matches: |v| v >= 9.0,
                magnitude: 10.0,
                factor: Some(("Severe Stress", Impact::Critical)),
                condition: Some(("Severe Stress-Induced Insomnia", 80)),
                recommendations: &[
                    "URGENT: Seek support for severe stress - it is significantly disrupting your sleep",
                    "Practice stress management techniques like meditation or deep breathing exercises",
                ],
            },
            Band {
                matches: |v| v >= 7.0,
                magnitude: 7.0,
                factor: Some(("High Stress", Impact::High)),
                condition: Some(("Stress-Induced Insomnia", 65)),
                recommendations: &[
                    "Practice stress management techniques like meditation or deep breathing exercises",
                ],
            },
            Band {
                matches: |v| v >= 6.0,
                magnitude: 4.0,
                factor: Some(("Elevated Stress", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Practice stress management techniques like meditation or deep breathing exercises",
                ],
            },
        ],
    },
    Rule {
        dimension: "bmi",
        tier: WeightTier::High,
        value: |i: &SleepInput| i.bmi,
        observed: |i: &SleepInput| rules::fmt_value(i.bmi),
        bands: &[
            Band {
                matches: |v| v >= 35.0,
                magnitude: 10.0,
                factor: Some(("Severe Obesity", Impact::Critical)),
                condition: Some(("Obstructive Sleep Apnea", 75)),
                recommendations: &[
                    "URGENT: Discuss sleep apnea screening with a healthcare provider",
                    "Weight management may help reduce sleep apnea symptoms",
                ],
            },
            Band {
                matches: |v| v >= 30.0,
                magnitude: 7.0,
                factor: Some(("Obesity", Impact::High)),
                condition: Some(("Sleep Apnea", 60)),
                recommendations: &["Weight management may help reduce sleep apnea symptoms"],
            },
            Band {
                matches: |v| v >= 25.0,
                magnitude: 4.0,
                factor: Some(("Overweight", Impact::Medium)),
                condition: None,
                recommendations: &["Weight management may help reduce sleep apnea symptoms"],
            },
            Band {
                matches: |v| v < 18.5,
                magnitude: 3.0,
                factor: Some(("Underweight", Impact::Low)),
                condition: None,
                recommendations: &[],
            },
        ],
    },
    Rule {
        dimension: "physical_activity",
        tier: WeightTier::Medium,
        value: |i: &SleepInput| i.physical_activity,
        observed: |i: &SleepInput| format!("{}%", rules::fmt_value(i.physical_activity)),
        bands: &[
            Band {
                matches: |v| v < 20.0,
                magnitude: 8.0,
                factor: Some(("Very Low Physical Activity", Impact::High)),
                condition: None,
                recommendations: &[
                    "Increase daily physical activity, aim for at least 30 minutes of moderate exercise",
                ],
            },
            Band {
                matches: |v| v < 40.0,
                magnitude: 5.0,
                factor: Some(("Low Physical Activity", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Increase daily physical activity, aim for at least 30 minutes of moderate exercise",
                ],
            },
            Band {
                matches: |v| v > 85.0,
                magnitude: 2.0,
                factor: None,
                condition: None,
                recommendations: &[
                    "Ensure exercise is not too close to bedtime as it may interfere with sleep",
                ],
            },
        ],
    },
    // Blood pressure and heart rate evaluate a combined severity scale
    // (0 = normal, 1 = elevated, 2 = markedly abnormal) so the cascade
    // stays a single-value band walk.
    Rule {
        dimension: "blood_pressure",
        tier: WeightTier::High,
        value: |i: &SleepInput| {
            if i.blood_pressure.systolic > 160.0 || i.blood_pressure.diastolic > 100.0 {
                2.0
            } else if i.blood_pressure.is_hypertensive() {
                1.0
            } else {
                0.0
            }
        },
        observed: |i: &SleepInput| {
            format!(
                "{}/{} mmHg",
                rules::fmt_value(i.blood_pressure.systolic),
                rules::fmt_value(i.blood_pressure.diastolic)
            )
        },
        bands: &[
            Band {
                matches: |v| v >= 2.0,
                magnitude: 9.0,
                factor: Some(("Hypertension Stage 2", Impact::Critical)),
                condition: None,
                recommendations: &[
                    "Monitor blood pressure regularly and consider consulting a healthcare provider",
                ],
            },
            Band {
                matches: |v| v >= 1.0,
                magnitude: 6.0,
                factor: Some(("Elevated Blood Pressure", Impact::High)),
                condition: None,
                recommendations: &[
                    "Monitor blood pressure regularly and consider consulting a healthcare provider",
                ],
            },
        ],
    },
    Rule {
        dimension: "heart_rate",
        tier: WeightTier::Medium,
        value: |i: &SleepInput| {
            if i.heart_rate > 110.0 || i.heart_rate < 45.0 {
                2.0
            } else if i.heart_rate > 100.0 || i.heart_rate < 50.0 {
                1.0
            } else {
                0.0
            }
        },
        observed: |i: &SleepInput| format!("{} bpm", rules::fmt_value(i.heart_rate)),
        bands: &[
            Band {
                matches: |v| v >= 2.0,
                magnitude: 8.0,
                factor: Some(("Abnormal Resting Heart Rate", Impact::High)),
                condition: None,
                recommendations: &[
                    "Abnormal resting heart rate may affect sleep quality, consider cardiovascular evaluation",
                ],
            },
            Band {
                matches: |v| v >= 1.0,
                magnitude: 5.0,
                factor: Some(("Borderline Resting Heart Rate", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Abnormal resting heart rate may affect sleep quality, consider cardiovascular evaluation",
                ],
            },
        ],
    },
    Rule {
        dimension: "daily_steps",
        tier: WeightTier::Low,
        value: |i: &SleepInput| i.daily_steps,
        observed: |i: &SleepInput| format!("{} steps/day", rules::fmt_value(i.daily_steps)),
        bands: &[
            Band {
                matches: |v| v < 2000.0,
                magnitude: 8.0,
                factor: Some(("Sedentary Lifestyle", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Increase daily activity level by taking more steps throughout the day",
                ],
            },
            Band {
                matches: |v| v < 5000.0,
                magnitude: 5.0,
                factor: Some(("Low Daily Steps", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Increase daily activity level by taking more steps throughout the day",
                ],
            },
            Band {
                matches: |v| v < 7000.0,
                magnitude: 3.0,
                factor: None,
                condition: None,
                recommendations: &[
                    "Increase daily activity level by taking more steps throughout the day",
                ],
            },
        ],
    },
    Rule {
        dimension: "age",
        tier: WeightTier::Low,
        value: |i: &SleepInput| i.age,
        observed: |i: &SleepInput| format!("{} years", rules::fmt_value(i.age)),
        bands: &[
            Band {
                matches: |v| v > 65.0,
                magnitude: 6.0,
                factor: Some(("Advanced Age", Impact::Medium)),
                condition: None,
                recommendations: &["Consider age-appropriate sleep hygiene practices"],
            },
            Band {
                matches: |v| v > 50.0,
                magnitude: 3.0,
                factor: Some(("Age-Related Sleep Changes", Impact::Low)),
                condition: None,
                recommendations: &["Consider age-appropriate sleep hygiene practices"],
            },
        ],
    },
];

/// Diagnostic overlays over several fields at once. These add condition
/// hypotheses and recommendations but never touch the score.
static COMPOUND_RULES: &[CompoundRule<SleepInput>] = &[
    CompoundRule {
        trigger: |i: &SleepInput| {
            i.age > 40.0
                && i.stress_level > 6.0
                && i.physical_activity < 40.0
                && i.quality_of_sleep < 6.0
        },
        condition: Some(("Restless Leg Syndrome", 40)),
        recommendations: &["Consider stretching exercises before bed to alleviate restless leg symptoms"],
    },
    CompoundRule {
        trigger: |i: &SleepInput| {
            i.quality_of_sleep < 6.0 && i.sleep_duration < 7.0 && i.stress_level > 5.0
        },
        condition: Some(("Circadian Rhythm Disorder", 50)),
        recommendations: &[
            "Maintain consistent sleep and wake times, even on weekends",
            "Get exposure to natural daylight during the day",
        ],
    },
];

/// Score a validated sleep input.
#[must_use]
pub fn score(input: &SleepInput) -> SleepAssessment {
    let mut tally = rules::evaluate(input, RULES, COMPOUND_RULES);
    tally.recommendations.extend(UNIVERSAL_RECOMMENDATIONS.iter().copied());
    tally.sort_for_output();

    let percentage = tally.percentage();
    let risk_level = classify(percentage);

    SleepAssessment {
        risk_level,
        risk_description: risk_level.description().to_string(),
        risk_score: percentage.round() as u8,
        confidence: confidence(input),
        key_factors: tally.factors,
        possible_conditions: tally.conditions,
        recommendations: tally.recommendations.into_prioritized(),
        sleep_stages: sleep_stages(input.age, input.quality_of_sleep),
        sleep_efficiency: sleep_efficiency(input.sleep_duration, input.quality_of_sleep),
    }
}

/// Map the normalized risk percentage to a risk level.
#[must_use]
pub fn classify(percentage: f64) -> RiskLevel {
    if percentage >= 60.0 {
        RiskLevel::High
    } else if percentage >= 35.0 {
        RiskLevel::Moderate
    } else if percentage >= 15.0 {
        RiskLevel::Low
    } else {
        RiskLevel::Minimal
    }
}

/// Estimate the sleep-stage distribution from age-bucketed base values,
/// scaled down when sleep quality is poor and renormalized to sum to 100.
#[must_use]
pub fn sleep_stages(age: f64, quality_of_sleep: f64) -> SleepStages {
    let (mut deep, mut rem, light): (f64, f64, f64) = if age < 18.0 {
        (22.0, 23.0, 55.0)
    } else if age < 30.0 {
        (20.0, 22.0, 58.0)
    } else if age < 45.0 {
        (18.0, 21.0, 61.0)
    } else if age < 60.0 {
        (16.0, 20.0, 64.0)
    } else {
        (14.0, 18.0, 68.0)
    };

    if quality_of_sleep < 7.0 {
        deep *= 0.85;
        rem *= 0.9;
    }

    let total = deep + rem + light;
    let deep_pct = (deep / total * 100.0).round() as u8;
    let rem_pct = (rem / total * 100.0).round() as u8;
    // Light sleep takes the rounding residual so the sum is exactly 100.
    let light_pct = 100 - deep_pct - rem_pct;

    SleepStages {
        deep_sleep: deep_pct,
        rem_sleep: rem_pct,
        light_sleep: light_pct,
    }
}

/// Heuristic restorative-sleep ratio: actual vs. 8 hours at full quality.
#[must_use]
pub fn sleep_efficiency(duration: f64, quality: f64) -> u8 {
    let efficiency = (duration / 8.0) * (quality / 10.0) * 100.0;
    efficiency.min(100.0).round() as u8
}

/// Confidence estimate: penalized for biologically implausible extremes,
/// boosted when independent factors align, clamped to [60, 95].
#[must_use]
pub fn confidence(input: &SleepInput) -> u8 {
    let mut confidence: i32 = 85;

    if input.sleep_duration < 3.0 || input.sleep_duration > 12.0 {
        confidence -= 10;
    }
    if input.bmi < 15.0 || input.bmi > 50.0 {
        confidence -= 8;
    }
    if input.heart_rate < 40.0 || input.heart_rate > 130.0 {
        confidence -= 8;
    }

    let aligned = [
        input.stress_level >= 7.0 && input.quality_of_sleep <= 4.0,
        input.bmi >= 30.0 && input.blood_pressure.is_hypertensive(),
        input.physical_activity < 40.0 && input.daily_steps < 5000.0,
        (7.0..=9.0).contains(&input.sleep_duration) && input.quality_of_sleep >= 7.0,
    ];
    confidence += 3 * aligned.iter().filter(|&&a| a).count() as i32;

    confidence.clamp(60, 95) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{BloodPressure, Gender};

    fn healthy_input() -> SleepInput {
        SleepInput {
            age: 35.0,
            gender: Gender::Female,
            sleep_duration: 7.5,
            quality_of_sleep: 8.0,
            physical_activity: 60.0,
            stress_level: 4.0,
            bmi: 22.0,
            blood_pressure: BloodPressure {
                systolic: 118.0,
                diastolic: 76.0,
            },
            heart_rate: 68.0,
            daily_steps: 9000.0,
        }
    }

    #[test]
    fn test_max_possible_score_is_constant() {
        let healthy = rules::evaluate(&healthy_input(), RULES, COMPOUND_RULES);
        let mut bad = healthy_input();
        bad.sleep_duration = 4.0;
        bad.stress_level = 9.0;
        let risky = rules::evaluate(&bad, RULES, COMPOUND_RULES);

        assert!((healthy.max - 170.0).abs() < f64::EPSILON);
        assert!((risky.max - healthy.max).abs() < f64::EPSILON);
    }

    #[test]
    fn test_healthy_input_is_minimal() {
        let assessment = score(&healthy_input());
        assert_eq!(assessment.risk_level, RiskLevel::Minimal);
        assert_eq!(
            assessment.risk_description,
            "Minimal risk - No significant indicators"
        );
        assert_eq!(assessment.risk_score, 0);
        assert!(assessment.key_factors.is_empty());
        assert_eq!(
            assessment.recommendations,
            vec![
                "Maintain consistent sleep and wake times, even on weekends".to_string(),
                "Limit screen time at least 1 hour before bed".to_string(),
            ]
        );
    }

    #[test]
    fn test_classification_cutoffs() {
        assert_eq!(classify(60.0), RiskLevel::High);
        assert_eq!(classify(59.9), RiskLevel::Moderate);
        assert_eq!(classify(35.0), RiskLevel::Moderate);
        assert_eq!(classify(15.0), RiskLevel::Low);
        assert_eq!(classify(14.9), RiskLevel::Minimal);
    }

    #[test]
    fn test_stages_sum_to_100() {
        for age in [10.0, 25.0, 40.0, 55.0, 75.0] {
            for quality in [2.0, 6.0, 9.0] {
                let stages = sleep_stages(age, quality);
                assert_eq!(stages.total(), 100, "age={age} quality={quality}");
            }
        }
    }

    #[test]
    fn test_poor_quality_reduces_deep_sleep() {
        let rested = sleep_stages(35.0, 9.0);
        let restless = sleep_stages(35.0, 3.0);
        assert!(restless.deep_sleep < rested.deep_sleep);
    }

    #[test]
    fn test_efficiency_capped_at_100() {
        assert_eq!(sleep_efficiency(12.0, 10.0), 100);
        assert_eq!(sleep_efficiency(8.0, 10.0), 100);
        assert_eq!(sleep_efficiency(4.0, 5.0), 25);
    }

    #[test]
    fn test_confidence_bounds() {
        let mut input = healthy_input();
        input.sleep_duration = 2.0;
        input.bmi = 55.0;
        input.heart_rate = 140.0;
        assert_eq!(score(&input).confidence, 60);

        assert!(score(&healthy_input()).confidence <= 95);
    }

    #[test]
    fn test_restless_leg_overlay() {
        let mut input = healthy_input();
        input.age = 48.0;
        input.stress_level = 7.0;
        input.physical_activity = 30.0;
        input.quality_of_sleep = 5.0;

        let assessment = score(&input);
        assert!(assessment
            .possible_conditions
            .iter()
            .any(|c| c.name == "Restless Leg Syndrome"));
    }

    #[test]
    fn test_urgent_recommendations_first() {
        let mut input = healthy_input();
        input.sleep_duration = 2.5;
        input.stress_level = 9.0;

        let assessment = score(&input);
        let first_normal = assessment
            .recommendations
            .iter()
            .position(|r| !r.contains("URGENT"))
            .expect("Should have non-urgent entries");
        assert!(assessment.recommendations[..first_normal]
            .iter()
            .all(|r| r.contains("URGENT")));
        assert!(first_normal >= 2);
    }
}
