//! Nutrition/BMI scoring: nutrition rule tables, the BMI category ladder,
//! and derived metrics (BMR, calorie goal, macros, meal plan).

use crate::domain::assessment::{Impact, RiskFactor};
use crate::domain::nutrition::{
    BmiCategory, DietaryRestriction, HealthMetricsSummary, HealthRisk, MacroTarget, Macronutrients,
    Meal, MealPlan, NutritionAssessment, NutritionInput,
};
use crate::domain::Gender;
use crate::engine::rules::{self, Band, Rule, WeightTier};

/// Balanced-diet staples appended to every result before dedup.
const UNIVERSAL_RECOMMENDATIONS: &[&str] = &[
    "Eat a balanced diet rich in whole grains, lean proteins, and healthy fats",
    "Stay hydrated throughout the day",
];

/// Scored nutrition dimensions. Maximum possible score is the constant 200.0.
static RULES: &[Rule<NutritionInput>] = &[
    Rule {
        dimension: "water_intake",
        tier: WeightTier::Medium,
        value: |i: &NutritionInput| i.water_intake,
        observed: |i: &NutritionInput| format!("{} glasses/day", rules::fmt_value(i.water_intake)),
        bands: &[
            Band {
                matches: |v| v < 4.0,
                magnitude: 8.0,
                factor: Some(("Very Low Water Intake", Impact::High)),
                condition: None,
                recommendations: &[
                    "URGENT: Increase water intake significantly - dehydration affects metabolism",
                ],
            },
            Band {
                matches: |v| v < 6.0,
                magnitude: 5.0,
                factor: Some(("Low Water Intake", Impact::Medium)),
                condition: None,
                recommendations: &["Drink more water - aim for at least 8 glasses daily"],
            },
            Band {
                matches: |v| v < 8.0,
                magnitude: 2.0,
                factor: None,
                condition: None,
                recommendations: &["Increase water intake to 8 glasses per day"],
            },
        ],
    },
    Rule {
        dimension: "vegetable_servings",
        tier: WeightTier::Medium,
        value: |i: &NutritionInput| i.vegetable_servings,
        observed: |i: &NutritionInput| {
            format!("{} servings/day", rules::fmt_value(i.vegetable_servings))
        },
        bands: &[
            Band {
                matches: |v| v < 3.0,
                magnitude: 6.0,
                factor: Some(("Insufficient Vegetables", Impact::High)),
                condition: None,
                recommendations: &["Increase vegetable intake to at least 5 servings per day"],
            },
            Band {
                matches: |v| v < 5.0,
                magnitude: 2.0,
                factor: None,
                condition: None,
                recommendations: &["Try to reach 5 servings of vegetables daily"],
            },
        ],
    },
    Rule {
        dimension: "fruit_servings",
        tier: WeightTier::Low,
        value: |i: &NutritionInput| i.fruit_servings,
        observed: |i: &NutritionInput| {
            format!("{} servings/day", rules::fmt_value(i.fruit_servings))
        },
        bands: &[
            Band {
                matches: |v| v < 2.0,
                magnitude: 6.0,
                factor: None,
                condition: None,
                recommendations: &["Include 2-3 servings of fruit daily"],
            },
            Band {
                matches: |v| v < 3.0,
                magnitude: 3.0,
                factor: None,
                condition: None,
                recommendations: &["Include 2-3 servings of fruit daily"],
            },
        ],
    },
    Rule {
        dimension: "processed_food_frequency",
        tier: WeightTier::High,
        value: |i: &NutritionInput| i.processed_food_frequency,
        observed: |i: &NutritionInput| {
            if i.processed_food_frequency >= 3.0 {
                "Daily".to_string()
            } else {
                "Several times/week".to_string()
            }
        },
        bands: &[
            Band {
                matches: |v| v >= 3.0,
                magnitude: 9.0,
                factor: Some(("High Processed Food", Impact::High)),
                condition: None,
                recommendations: &[
                    "Minimize processed foods - they increase health risks significantly",
                ],
            },
            Band {
                matches: |v| v >= 2.0,
                magnitude: 5.0,
                factor: Some(("Moderate Processed Food", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Reduce processed food consumption - cook fresh meals more often",
                ],
            },
            Band {
                matches: |v| v >= 1.0,
                magnitude: 2.0,
                factor: None,
                condition: None,
                recommendations: &[],
            },
        ],
    },
    Rule {
        dimension: "fast_food_frequency",
        tier: WeightTier::Medium,
        value: |i: &NutritionInput| i.fast_food_frequency,
        observed: |i: &NutritionInput| {
            format!("{} times/week", rules::fmt_value(i.fast_food_frequency))
        },
        bands: &[
            Band {
                matches: |v| v > 3.0,
                magnitude: 9.0,
                factor: Some(("Excessive Fast Food", Impact::High)),
                condition: None,
                recommendations: &[
                    "URGENT: Cut back on fast food - it is working against your health goals",
                ],
            },
            Band {
                matches: |v| v > 1.0,
                magnitude: 5.0,
                factor: Some(("Frequent Fast Food", Impact::Medium)),
                condition: None,
                recommendations: &["Limit fast food to once per week or less"],
            },
            Band {
                matches: |v| v > 0.0,
                magnitude: 2.0,
                factor: None,
                condition: None,
                recommendations: &[],
            },
        ],
    },
    Rule {
        dimension: "breakfast_habit",
        tier: WeightTier::Low,
        value: |i: &NutritionInput| if i.breakfast_habit { 0.0 } else { 1.0 },
        observed: |_: &NutritionInput| "Regularly skipped".to_string(),
        bands: &[Band {
            matches: |v| v >= 1.0,
            magnitude: 6.0,
            factor: Some(("Skipping Breakfast", Impact::Medium)),
            condition: None,
            recommendations: &["Eat a healthy breakfast to boost metabolism and reduce cravings"],
        }],
    },
    Rule {
        dimension: "meals_per_day",
        tier: WeightTier::Low,
        value: |i: &NutritionInput| i.meals_per_day,
        observed: |i: &NutritionInput| format!("{} meals/day", rules::fmt_value(i.meals_per_day)),
        bands: &[
            Band {
                matches: |v| v < 3.0,
                magnitude: 6.0,
                factor: Some(("Irregular Eating", Impact::Medium)),
                condition: None,
                recommendations: &["Eat regular meals - skipping meals can slow metabolism"],
            },
            Band {
                matches: |v| v > 5.0,
                magnitude: 3.0,
                factor: None,
                condition: None,
                recommendations: &["Consolidate grazing into regular planned meals"],
            },
        ],
    },
    Rule {
        dimension: "portion_control",
        tier: WeightTier::High,
        value: |i: &NutritionInput| i.portion_control,
        observed: |i: &NutritionInput| format!("{}/10", rules::fmt_value(i.portion_control)),
        bands: &[
            Band {
                matches: |v| v < 5.0,
                magnitude: 7.0,
                factor: Some(("Poor Portion Control", Impact::High)),
                condition: None,
                recommendations: &[
                    "Practice portion control using smaller plates and mindful eating",
                ],
            },
            Band {
                matches: |v| v < 7.0,
                magnitude: 3.0,
                factor: None,
                condition: None,
                recommendations: &[
                    "Practice portion control using smaller plates and mindful eating",
                ],
            },
        ],
    },
    Rule {
        dimension: "sugar_intake",
        tier: WeightTier::Medium,
        value: |i: &NutritionInput| i.sugar_intake,
        observed: |i: &NutritionInput| format!("{}/5", rules::fmt_value(i.sugar_intake)),
        bands: &[
            Band {
                matches: |v| v > 2.0,
                magnitude: 7.0,
                factor: Some(("High Sugar Intake", Impact::High)),
                condition: None,
                recommendations: &[
                    "Reduce added sugars - use natural sweeteners or fruits instead",
                ],
            },
            Band {
                matches: |v| v > 1.0,
                magnitude: 3.0,
                factor: None,
                condition: None,
                recommendations: &[],
            },
        ],
    },
    Rule {
        dimension: "alcohol_consumption",
        tier: WeightTier::Medium,
        value: |i: &NutritionInput| i.alcohol_consumption,
        observed: |i: &NutritionInput| {
            format!("{} drinks/week", rules::fmt_value(i.alcohol_consumption))
        },
        bands: &[
            Band {
                matches: |v| v > 7.0,
                magnitude: 7.0,
                factor: Some(("High Alcohol Consumption", Impact::Medium)),
                condition: None,
                recommendations: &[
                    "Reduce alcohol consumption - it adds empty calories and disrupts sleep",
                ],
            },
            Band {
                matches: |v| v > 1.0,
                magnitude: 4.0,
                factor: None,
                condition: None,
                recommendations: &[
                    "Reduce alcohol consumption - it adds empty calories and disrupts sleep",
                ],
            },
        ],
    },
    Rule {
        dimension: "emotional_eating",
        tier: WeightTier::Medium,
        value: |i: &NutritionInput| if i.emotional_eating { 1.0 } else { 0.0 },
        observed: |_: &NutritionInput| "Yes".to_string(),
        bands: &[Band {
            matches: |v| v >= 1.0,
            magnitude: 7.0,
            factor: Some(("Emotional Eating", Impact::High)),
            condition: None,
            recommendations: &["Address emotional eating with mindfulness or counseling"],
        }],
    },
    Rule {
        dimension: "binge_eating",
        tier: WeightTier::Critical,
        value: |i: &NutritionInput| if i.binge_eating { 1.0 } else { 0.0 },
        observed: |_: &NutritionInput| "Yes".to_string(),
        bands: &[Band {
            matches: |v| v >= 1.0,
            magnitude: 8.0,
            factor: Some(("Binge Eating", Impact::High)),
            condition: None,
            recommendations: &["URGENT: Seek professional help for binge eating patterns"],
        }],
    },
    Rule {
        dimension: "late_night_snacking",
        tier: WeightTier::Low,
        value: |i: &NutritionInput| if i.late_night_snacking { 1.0 } else { 0.0 },
        observed: |_: &NutritionInput| "Yes".to_string(),
        bands: &[Band {
            matches: |v| v >= 1.0,
            magnitude: 5.0,
            factor: Some(("Late Night Snacking", Impact::Medium)),
            condition: None,
            recommendations: &["Avoid eating 2-3 hours before bedtime for better digestion"],
        }],
    },
];

/// The BMI category ladder: contiguous, exhaustive, first match wins.
static BMI_LADDER: &[(f64, BmiCategory, HealthRisk)] = &[
    (16.0, BmiCategory::SevereThinness, HealthRisk::VeryHigh),
    (17.0, BmiCategory::ModerateThinness, HealthRisk::High),
    (18.5, BmiCategory::MildThinness, HealthRisk::Moderate),
    (25.0, BmiCategory::Normal, HealthRisk::Minimal),
    (30.0, BmiCategory::Overweight, HealthRisk::Moderate),
    (35.0, BmiCategory::ObeseClassI, HealthRisk::High),
    (40.0, BmiCategory::ObeseClassII, HealthRisk::VeryHigh),
    (f64::INFINITY, BmiCategory::ObeseClassIII, HealthRisk::ExtremelyHigh),
];

/// Classify a BMI value on the category ladder.
#[must_use]
pub fn classify_bmi(bmi: f64) -> (BmiCategory, HealthRisk) {
    for &(upper, category, risk) in BMI_LADDER {
        if bmi < upper {
            return (category, risk);
        }
    }
    // Unreachable: the last ladder entry is unbounded.
    (BmiCategory::ObeseClassIII, HealthRisk::ExtremelyHigh)
}

/// Basal metabolic rate via the Mifflin-St Jeor equation.
#[must_use]
pub fn bmr(weight: f64, height: f64, age: f64, gender: Gender) -> f64 {
    let sex_offset = match gender {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    };
    10.0 * weight + 6.25 * height - 5.0 * age + sex_offset
}

/// Activity multiplier selected by the daily-steps ladder.
#[must_use]
pub fn activity_multiplier(daily_steps: f64) -> f64 {
    if daily_steps < 3000.0 {
        1.2
    } else if daily_steps < 7000.0 {
        1.375
    } else if daily_steps < 10_000.0 {
        1.55
    } else {
        1.725
    }
}

fn macronutrients(weight: f64, gender: Gender, calorie_goal: f64) -> Macronutrients {
    let protein_multiplier = match gender {
        Gender::Male => 1.6,
        Gender::Female | Gender::Other => 1.4,
    };
    let protein_grams = (weight * protein_multiplier).round();
    let protein_calories = protein_grams * 4.0;

    Macronutrients {
        protein: MacroTarget {
            grams: protein_grams as u32,
            calories: protein_calories as u32,
            percentage: (protein_calories / calorie_goal * 100.0).round() as u8,
        },
        carbs: MacroTarget {
            grams: (calorie_goal * 0.45 / 4.0).round() as u32,
            calories: (calorie_goal * 0.45).round() as u32,
            percentage: 45,
        },
        fats: MacroTarget {
            grams: (calorie_goal * 0.25 / 9.0).round() as u32,
            calories: (calorie_goal * 0.25).round() as u32,
            percentage: 25,
        },
    }
}

const BREAKFAST_SUGGESTIONS: &[&str] = &[
    "Oatmeal with berries, nuts, and protein powder",
    "Greek yogurt parfait with granola and fruits",
    "Whole grain toast with avocado and eggs",
    "Smoothie bowl with spinach, banana, and protein",
];

const LUNCH_SUGGESTIONS: &[&str] = &[
    "Grilled chicken salad with quinoa and mixed vegetables",
    "Salmon with brown rice and steamed broccoli",
    "Lentil soup with whole grain bread",
    "Turkey and vegetable wrap with hummus",
];

const DINNER_SUGGESTIONS: &[&str] = &[
    "Lean beef stir-fry with mixed vegetables and brown rice",
    "Baked fish with sweet potato and green beans",
    "Chicken breast with roasted vegetables and quinoa",
    "Tofu curry with cauliflower rice",
];

const SNACK_SUGGESTIONS: &[&str] = &[
    "Apple slices with almond butter",
    "Mixed nuts (handful)",
    "Carrot sticks with hummus",
    "Protein shake or bar",
];

const LUNCH_MEAT_WORDS: &[&str] = &["chicken", "salmon", "turkey"];
const DINNER_MEAT_WORDS: &[&str] = &["beef", "fish", "chicken"];

fn is_plant_based(restrictions: &[DietaryRestriction]) -> bool {
    restrictions
        .iter()
        .any(|r| matches!(r, DietaryRestriction::Vegetarian | DietaryRestriction::Vegan))
}

fn suggestions_without(list: &[&str], excluded_words: &[&str]) -> Vec<String> {
    list.iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            !excluded_words.iter().any(|w| lower.contains(w))
        })
        .map(|s| (*s).to_string())
        .collect()
}

/// Four-meal skeleton plan at 25/35/30/10% of the calorie goal, with meal
/// suggestions filtered by dietary restrictions.
#[must_use]
pub fn meal_plan(calorie_goal: f64, restrictions: &[DietaryRestriction]) -> MealPlan {
    let mut lunch: Vec<String> = LUNCH_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect();
    let mut dinner: Vec<String> = DINNER_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect();

    if is_plant_based(restrictions) {
        lunch = suggestions_without(LUNCH_SUGGESTIONS, LUNCH_MEAT_WORDS);
        lunch.insert(0, "Chickpea buddha bowl with tahini dressing".to_string());

        dinner = suggestions_without(DINNER_SUGGESTIONS, DINNER_MEAT_WORDS);
        dinner.insert(0, "Black bean and vegetable enchiladas".to_string());
    }

    MealPlan {
        breakfast: Meal {
            calories: (calorie_goal * 0.25).round() as u32,
            suggestions: BREAKFAST_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect(),
        },
        lunch: Meal {
            calories: (calorie_goal * 0.35).round() as u32,
            suggestions: lunch,
        },
        dinner: Meal {
            calories: (calorie_goal * 0.30).round() as u32,
            suggestions: dinner,
        },
        snacks: Meal {
            calories: (calorie_goal * 0.10).round() as u32,
            suggestions: SNACK_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect(),
        },
    }
}

fn health_metrics(bmi: f64, nutrition_score: u8, daily_steps: f64) -> HealthMetricsSummary {
    let body_weight_status = if bmi < 18.5 {
        "Below Healthy Range"
    } else if bmi < 25.0 {
        "Healthy Range"
    } else if bmi < 30.0 {
        "Above Healthy Range"
    } else {
        "Obese Range"
    };
    let nutritional_status = if nutrition_score >= 80 {
        "Excellent"
    } else if nutrition_score >= 60 {
        "Good"
    } else if nutrition_score >= 40 {
        "Fair"
    } else {
        "Poor"
    };
    let activity_level = if daily_steps >= 10_000.0 {
        "Active"
    } else if daily_steps >= 7000.0 {
        "Moderate"
    } else if daily_steps >= 5000.0 {
        "Light"
    } else {
        "Sedentary"
    };

    HealthMetricsSummary {
        body_weight_status: body_weight_status.to_string(),
        nutritional_status: nutritional_status.to_string(),
        activity_level: activity_level.to_string(),
    }
}

/// Score a validated nutrition/BMI input.
#[must_use]
pub fn score(input: &NutritionInput) -> NutritionAssessment {
    let mut tally = rules::evaluate(input, RULES, &[]);

    let bmi = input.bmi();
    let (bmi_category, health_risk) = classify_bmi(bmi);

    // Lifestyle overlays: flagged and advised, but never scored.
    if input.blood_pressure.is_hypertensive() {
        tally.factors.push(RiskFactor {
            name: "Hypertension".to_string(),
            impact: Impact::High,
            observed_value: format!(
                "{}/{} mmHg",
                rules::fmt_value(input.blood_pressure.systolic),
                rules::fmt_value(input.blood_pressure.diastolic)
            ),
        });
        tally
            .recommendations
            .push("Reduce sodium intake and follow the DASH diet for blood pressure");
    }
    if input.stress_level > 7.0 {
        tally.factors.push(RiskFactor {
            name: "High Stress".to_string(),
            impact: Impact::High,
            observed_value: format!("{}/10", rules::fmt_value(input.stress_level)),
        });
        tally
            .recommendations
            .push("Chronic stress affects weight - practice stress management techniques");
    }
    if input.sleep_duration < 7.0 {
        tally.factors.push(RiskFactor {
            name: "Insufficient Sleep".to_string(),
            impact: Impact::High,
            observed_value: format!("{} hours", rules::fmt_value(input.sleep_duration)),
        });
        tally
            .recommendations
            .push("Poor sleep increases hunger hormones - aim for 7-9 hours");
    }

    // Calorie targets: BMR, activity-scaled maintenance, goal adjustment.
    let basal = bmr(input.weight, input.height, input.age, input.gender);
    let maintenance = (basal * activity_multiplier(input.daily_steps)).round();
    let calorie_goal = if bmi < 18.5 {
        let goal = maintenance + 300.0;
        tally.recommendations.push(&format!(
            "Aim for {} calories daily to gain weight healthily",
            goal as u32
        ));
        goal
    } else if bmi > 25.0 {
        let goal = maintenance - 500.0;
        tally.recommendations.push(&format!(
            "Aim for {} calories daily for steady weight loss (1-2 lbs/week)",
            goal as u32
        ));
        goal
    } else {
        tally.recommendations.push(&format!(
            "Maintain {} calories daily to preserve current weight",
            maintenance as u32
        ));
        maintenance
    };

    // BMI-band recommendation blocks.
    if bmi < 18.5 {
        tally.recommendations.extend([
            "Focus on nutrient-dense, calorie-rich foods: nuts, avocados, whole grains",
            "Add strength training to build muscle mass",
            "Eat 5-6 smaller meals throughout the day",
        ]);
    } else if (25.0..30.0).contains(&bmi) {
        tally.recommendations.extend([
            "Increase physical activity to 150-300 minutes per week",
            "Focus on whole foods and reduce calorie-dense snacks",
            "Track your food intake to stay accountable",
        ]);
    } else if bmi >= 30.0 {
        tally.recommendations.extend([
            "Consult a doctor or registered dietitian for personalized guidance",
            "Start with small, sustainable changes - walk 30 minutes daily",
            "Consider seeking support groups for weight management",
            "Get screened for metabolic conditions (diabetes, cholesterol)",
        ]);
    }

    tally.recommendations.extend(UNIVERSAL_RECOMMENDATIONS.iter().copied());
    tally.sort_for_output();

    let risk_pct = tally.percentage();
    let nutrition_score = (100.0 - risk_pct).round() as u8;
    let confidence = (70.0 + f64::from(nutrition_score) * 0.3).min(95.0).max(60.0).round() as u8;

    NutritionAssessment {
        calculated_bmi: (bmi * 10.0).round() / 10.0,
        bmi_category,
        health_risk,
        nutrition_score,
        risk_score: risk_pct.round() as u8,
        bmr: basal.round() as u32,
        target_calories: calorie_goal.max(0.0) as u32,
        macronutrients: macronutrients(input.weight, input.gender, calorie_goal),
        meal_plan: meal_plan(calorie_goal, &input.dietary_restrictions),
        key_factors: tally.factors,
        recommendations: tally.recommendations.into_prioritized(),
        confidence,
        health_metrics: health_metrics(bmi, nutrition_score, input.daily_steps),
    }
}
