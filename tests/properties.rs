//! Property tests over the scoring invariants: bounds, ordering,
//! constant denominators, and determinism.

use proptest::prelude::*;

use vitalscore::domain::assessment::BloodPressure;
use vitalscore::domain::depression::{EmploymentStatus, MaritalStatus};
use vitalscore::domain::{BmiCategory, DepressionRiskLevel, Gender};
use vitalscore::engine;
use vitalscore::{AssessmentService, DepressionInput, SleepInput};

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![
        Just(Gender::Male),
        Just(Gender::Female),
        Just(Gender::Other),
    ]
}

fn sleep_input_strategy() -> impl Strategy<Value = SleepInput> {
    (
        1.0..=120.0f64,
        gender_strategy(),
        0.0..=24.0f64,
        1.0..=10.0f64,
        0.0..=100.0f64,
        1.0..=10.0f64,
        8.0..=80.0f64,
        60.0..=250.0f64,
        30.0..=150.0f64,
        25.0..=220.0f64,
        0.0..=100_000.0f64,
    )
        .prop_map(
            |(
                age,
                gender,
                sleep_duration,
                quality_of_sleep,
                physical_activity,
                stress_level,
                bmi,
                systolic,
                diastolic,
                heart_rate,
                daily_steps,
            )| SleepInput {
                age,
                gender,
                sleep_duration,
                quality_of_sleep,
                physical_activity,
                stress_level,
                bmi,
                blood_pressure: BloodPressure { systolic, diastolic },
                heart_rate,
                daily_steps,
            },
        )
}

fn depression_input_strategy() -> impl Strategy<Value = DepressionInput> {
    (
        1.0..=120.0f64,
        gender_strategy(),
        prop_oneof![
            Just(MaritalStatus::Single),
            Just(MaritalStatus::Married),
            Just(MaritalStatus::Divorced),
            Just(MaritalStatus::Widowed),
        ],
        prop_oneof![
            Just(EmploymentStatus::Employed),
            Just(EmploymentStatus::Unemployed),
            Just(EmploymentStatus::Student),
            Just(EmploymentStatus::Retired),
        ],
        1.0..=10.0f64,
        1.0..=10.0f64,
        1.0..=10.0f64,
        0.0..=100.0f64,
        1.0..=10.0f64,
        any::<bool>(),
        prop::collection::vec("[a-z]{3,12}", 0..3),
    )
        .prop_map(
            |(
                age,
                gender,
                marital_status,
                employment_status,
                stress_level,
                sleep_quality,
                social_support,
                physical_activity,
                diet_quality,
                genetic_history,
                medical_conditions,
            )| DepressionInput {
                age,
                gender,
                marital_status,
                employment_status,
                stress_level,
                sleep_quality,
                social_support,
                physical_activity,
                diet_quality,
                genetic_history,
                medical_conditions,
            },
        )
}

fn bmi_ladder_index(category: BmiCategory) -> usize {
    [
        BmiCategory::SevereThinness,
        BmiCategory::ModerateThinness,
        BmiCategory::MildThinness,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::ObeseClassI,
        BmiCategory::ObeseClassII,
        BmiCategory::ObeseClassIII,
    ]
    .iter()
    .position(|&c| c == category)
    .expect("Category is in the ladder")
}

proptest! {
    #[test]
    fn prop_sleep_score_and_confidence_bounds(input in sleep_input_strategy()) {
        let assessment = AssessmentService::new()
            .assess_sleep(&input)
            .expect("Valid by construction");
        prop_assert!(assessment.risk_score <= 100);
        prop_assert!((60..=95).contains(&assessment.confidence));
    }

    #[test]
    fn prop_sleep_factors_sorted_by_descending_impact(input in sleep_input_strategy()) {
        let assessment = AssessmentService::new()
            .assess_sleep(&input)
            .expect("Valid by construction");
        for pair in assessment.key_factors.windows(2) {
            prop_assert!(pair[0].impact >= pair[1].impact);
        }
    }

    #[test]
    fn prop_recommendations_deduped_and_urgent_first(input in sleep_input_strategy()) {
        let assessment = AssessmentService::new()
            .assess_sleep(&input)
            .expect("Valid by construction");

        let recs = &assessment.recommendations;
        for (i, rec) in recs.iter().enumerate() {
            prop_assert!(!recs[i + 1..].contains(rec), "duplicate: {rec}");
        }
        // Once a non-urgent entry appears, no urgent entry may follow.
        let first_normal = recs.iter().position(|r| !r.contains("URGENT"));
        if let Some(first_normal) = first_normal {
            prop_assert!(recs[first_normal..].iter().all(|r| !r.contains("URGENT")));
        }
    }

    #[test]
    fn prop_conditions_sorted_by_descending_probability(input in sleep_input_strategy()) {
        let assessment = AssessmentService::new()
            .assess_sleep(&input)
            .expect("Valid by construction");
        for pair in assessment.possible_conditions.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn prop_sleep_stages_sum_to_100(age in 1.0..=120.0f64, quality in 1.0..=10.0f64) {
        let stages = engine::sleep::sleep_stages(age, quality);
        prop_assert_eq!(stages.total(), 100);
    }

    #[test]
    fn prop_bmi_ladder_total_and_monotone(bmi in 5.0..=60.0f64) {
        let (category, _) = engine::nutrition::classify_bmi(bmi);
        let (next_category, _) = engine::nutrition::classify_bmi(bmi + 0.5);
        prop_assert!(bmi_ladder_index(next_category) >= bmi_ladder_index(category));
    }

    #[test]
    fn prop_sleep_scoring_is_deterministic(input in sleep_input_strategy()) {
        let service = AssessmentService::new();
        let a = service.assess_sleep(&input).expect("Valid by construction");
        let b = service.assess_sleep(&input).expect("Valid by construction");
        let a_json = serde_json::to_string(&a).expect("Should serialize");
        let b_json = serde_json::to_string(&b).expect("Should serialize");
        prop_assert_eq!(a_json, b_json);
    }

    #[test]
    fn prop_depression_points_bounded_and_consistent(input in depression_input_strategy()) {
        let assessment = AssessmentService::new()
            .assess_depression(&input)
            .expect("Valid by construction");

        prop_assert!(assessment.risk_points <= 22);
        let expected = if assessment.risk_points >= 12 {
            DepressionRiskLevel::High
        } else if assessment.risk_points >= 6 {
            DepressionRiskLevel::Moderate
        } else {
            DepressionRiskLevel::Low
        };
        prop_assert_eq!(assessment.risk_level, expected);
        prop_assert!((60..=95).contains(&assessment.confidence));
    }
}
