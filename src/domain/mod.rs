//! Domain types: assessment inputs, shared vocabulary, and result records.

pub mod anxiety;
pub mod assessment;
pub mod depression;
pub mod nutrition;
pub mod sleep;

pub use anxiety::{AnxietyAssessment, AnxietyInput, AnxietySeverity};
pub use assessment::{
    BloodPressure, DepressionRiskLevel, Gender, Impact, PossibleCondition, RiskFactor, RiskLevel,
    Severity,
};
pub use depression::{DepressionAssessment, DepressionInput, EmploymentStatus, MaritalStatus};
pub use nutrition::{
    BmiCategory, DietaryRestriction, HealthRisk, Macronutrients, Meal, MealPlan,
    NutritionAssessment, NutritionInput,
};
pub use sleep::{SleepAssessment, SleepInput, SleepStages};
