//! Nutrition/BMI domain: input record, BMI category ladder types, and the
//! assessment result with derived metrics (BMR, macros, meal plan).

use serde::{Deserialize, Serialize};

use super::assessment::{BloodPressure, Gender, RiskFactor};

/// Dietary restriction tags used to filter meal-plan suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

/// Nutrition/BMI self-assessment input.
///
/// Demographics and lifestyle fields are required. The nutrition habit
/// fields are optional and default to neutral values when absent, so a
/// minimal record still scores; height and weight must always be present
/// and non-zero (the BMI division fails loudly at validation, never at
/// scoring time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInput {
    /// Age in years (1-120)
    pub age: f64,
    pub gender: Gender,
    /// Height in cm (50-272)
    pub height: f64,
    /// Weight in kg (20-400)
    pub weight: f64,
    /// Average daily step count (0-100000)
    pub daily_steps: f64,
    /// Average sleep duration in hours (0-24)
    pub sleep_duration: f64,
    /// Self-rated stress level (1-10)
    pub stress_level: f64,
    pub blood_pressure: BloodPressure,

    /// Meals per day (default 3)
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: f64,
    /// Glasses of water per day (default 6)
    #[serde(default = "default_water_intake")]
    pub water_intake: f64,
    /// Vegetable servings per day (default 2)
    #[serde(default = "default_two")]
    pub vegetable_servings: f64,
    /// Fruit servings per day (default 2)
    #[serde(default = "default_two")]
    pub fruit_servings: f64,
    /// Processed food frequency: 0=never .. 3=daily (default 2)
    #[serde(default = "default_two")]
    pub processed_food_frequency: f64,
    /// Fast food meals per week (default 1)
    #[serde(default = "default_one")]
    pub fast_food_frequency: f64,
    /// Whether breakfast is eaten regularly (default true)
    #[serde(default = "default_true")]
    pub breakfast_habit: bool,
    #[serde(default)]
    pub emotional_eating: bool,
    /// Accepts the historical wire key "bingEating" on input
    #[serde(default, alias = "bingEating")]
    pub binge_eating: bool,
    #[serde(default)]
    pub late_night_snacking: bool,
    /// Added sugar intake, 0-5 scale (default 2)
    #[serde(default = "default_two")]
    pub sugar_intake: f64,
    /// Alcoholic drinks per week (default 1)
    #[serde(default = "default_one")]
    pub alcohol_consumption: f64,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Portion control self-rating, 0-10 scale (default 5)
    #[serde(default = "default_portion_control")]
    pub portion_control: f64,
}

fn default_meals_per_day() -> f64 {
    3.0
}
fn default_water_intake() -> f64 {
    6.0
}
fn default_two() -> f64 {
    2.0
}
fn default_one() -> f64 {
    1.0
}
fn default_true() -> bool {
    true
}
fn default_portion_control() -> f64 {
    5.0
}

impl NutritionInput {
    /// Create an input with the documented neutral defaults for all
    /// optional nutrition fields.
    #[must_use]
    pub fn with_defaults(
        age: f64,
        gender: Gender,
        height: f64,
        weight: f64,
        daily_steps: f64,
        sleep_duration: f64,
        stress_level: f64,
        blood_pressure: BloodPressure,
    ) -> Self {
        Self {
            age,
            gender,
            height,
            weight,
            daily_steps,
            sleep_duration,
            stress_level,
            blood_pressure,
            meals_per_day: default_meals_per_day(),
            water_intake: default_water_intake(),
            vegetable_servings: default_two(),
            fruit_servings: default_two(),
            processed_food_frequency: default_two(),
            fast_food_frequency: default_one(),
            breakfast_habit: true,
            emotional_eating: false,
            binge_eating: false,
            late_night_snacking: false,
            sugar_intake: default_two(),
            alcohol_consumption: default_one(),
            dietary_restrictions: Vec::new(),
            portion_control: default_portion_control(),
        }
    }

    /// Body mass index from height and weight.
    ///
    /// Only meaningful after validation (height is guaranteed non-zero).
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height / 100.0;
        self.weight / (height_m * height_m)
    }

    /// Validate that all fields are within expected ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings, one per field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1.0..=120.0).contains(&self.age) {
            errors.push(format!("Age {} out of range [1, 120]", self.age));
        }
        if !(50.0..=272.0).contains(&self.height) {
            errors.push(format!("Height {} out of range [50, 272] cm", self.height));
        }
        if !(20.0..=400.0).contains(&self.weight) {
            errors.push(format!("Weight {} out of range [20, 400] kg", self.weight));
        }
        if !(0.0..=100_000.0).contains(&self.daily_steps) {
            errors.push(format!(
                "Daily steps {} out of range [0, 100000]",
                self.daily_steps
            ));
        }
        if !(0.0..=24.0).contains(&self.sleep_duration) {
            errors.push(format!(
                "Sleep duration {} out of range [0, 24]",
                self.sleep_duration
            ));
        }
        if !(1.0..=10.0).contains(&self.stress_level) {
            errors.push(format!(
                "Stress level {} out of range [1, 10]",
                self.stress_level
            ));
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
        if !(1.0..=10.0).contains(&self.meals_per_day) {
            errors.push(format!(
                "Meals per day {} out of range [1, 10]",
                self.meals_per_day
            ));
        }
        if !(0.0..=30.0).contains(&self.water_intake) {
            errors.push(format!(
                "Water intake {} out of range [0, 30] glasses",
                self.water_intake
            ));
        }
        if !(0.0..=3.0).contains(&self.processed_food_frequency) {
            errors.push(format!(
                "Processed food frequency {} out of range [0, 3]",
                self.processed_food_frequency
            ));
        }
        if !(0.0..=5.0).contains(&self.sugar_intake) {
            errors.push(format!(
                "Sugar intake {} out of range [0, 5]",
                self.sugar_intake
            ));
        }
        if !(0.0..=10.0).contains(&self.portion_control) {
            errors.push(format!(
                "Portion control {} out of range [0, 10]",
                self.portion_control
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Fine-grained BMI category, directly from the BMI threshold ladder.
///
/// The ladder is contiguous and exhaustive over the real line; exactly one
/// category applies to any BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Severe Thinness")]
    SevereThinness,
    #[serde(rename = "Moderate Thinness")]
    ModerateThinness,
    #[serde(rename = "Mild Thinness")]
    MildThinness,
    Normal,
    Overweight,
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    #[serde(rename = "Obese Class III")]
    ObeseClassIII,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::SevereThinness => "Severe Thinness",
            Self::ModerateThinness => "Moderate Thinness",
            Self::MildThinness => "Mild Thinness",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::ObeseClassIII => "Obese Class III",
        };
        write!(f, "{label}")
    }
}

/// Coarse health-risk tier paired with each BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRisk {
    Minimal,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "Extremely High")]
    ExtremelyHigh,
}

/// Gram/calorie/percentage target for one macronutrient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroTarget {
    pub grams: u32,
    pub calories: u32,
    pub percentage: u8,
}

/// Daily macronutrient targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Macronutrients {
    pub protein: MacroTarget,
    pub carbs: MacroTarget,
    pub fats: MacroTarget,
}

/// One meal slot in the skeleton plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub calories: u32,
    pub suggestions: Vec<String>,
}

/// Four-meal skeleton plan at 25/35/30/10% of the calorie goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Meal,
}

/// Summary ladders over the raw metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetricsSummary {
    pub body_weight_status: String,
    pub nutritional_status: String,
    pub activity_level: String,
}

/// Complete nutrition/BMI assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAssessment {
    /// BMI rounded to one decimal
    #[serde(rename = "calculatedBMI")]
    pub calculated_bmi: f64,
    pub bmi_category: BmiCategory,
    pub health_risk: HealthRisk,
    /// Nutrition quality score, 0-100 (higher is better)
    pub nutrition_score: u8,
    /// Normalized nutrition risk percentage, 0-100 (higher is worse)
    pub risk_score: u8,
    /// Basal metabolic rate (Mifflin-St Jeor), kcal
    pub bmr: u32,
    /// Daily calorie goal after the surplus/deficit adjustment
    pub target_calories: u32,
    pub macronutrients: Macronutrients,
    pub meal_plan: MealPlan,
    /// Flagged inputs, sorted by descending impact
    pub key_factors: Vec<RiskFactor>,
    /// Deduplicated recommendations, urgent entries first
    pub recommendations: Vec<String>,
    /// Heuristic confidence estimate, 60-95
    pub confidence: u8,
    pub health_metrics: HealthMetricsSummary,
}
