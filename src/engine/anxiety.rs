//! Anxiety scoring: GAD-7 core with symptom-group accumulation, protective
//! offsets, and a severity ladder over the total.

use crate::domain::anxiety::{AnxietyAssessment, AnxietyDetail, AnxietyInput, AnxietySeverity};
use crate::engine::recommend::RecommendationSet;

/// Self-management staples appended to every result before dedup.
const UNIVERSAL_RECOMMENDATIONS: &[&str] = &[
    "Try mindfulness meditation apps (Headspace, Calm, Insight Timer)",
    "Limit caffeine and alcohol - both can increase anxiety symptoms",
    "Set aside daily worry time (15 min) to contain anxious thoughts",
    "Practice self-compassion - be kind to yourself during anxious periods",
];

/// Classify the accumulated score onto the severity ladder.
#[must_use]
pub fn classify(score: u8) -> AnxietySeverity {
    match score {
        0..=5 => AnxietySeverity::Minimal,
        6..=10 => AnxietySeverity::Mild,
        11..=15 => AnxietySeverity::Moderate,
        16..=21 => AnxietySeverity::ModeratelySevere,
        _ => AnxietySeverity::Severe,
    }
}

fn confidence(input: &AnxietyInput, gad7: u8) -> u8 {
    let answered = [
        input.nervous_feeling,
        input.uncontrollable_worrying,
        input.excessive_worrying,
        input.trouble_relaxing,
        input.restlessness,
        input.easily_annoyed,
        input.feeling_afraid,
    ]
    .iter()
    .filter(|&&item| item > 0)
    .count() as i32;

    let mut confidence = 75 + (answered * 2).min(10);
    // Extreme fatigue with a silent GAD-7 is an implausible profile.
    if input.fatigue_level >= 9 && gad7 == 0 {
        confidence -= 10;
    }
    confidence.clamp(60, 95) as u8
}

fn detailed_assessment(
    input: &AnxietyInput,
    gad7: u8,
    physical: u8,
    social: u8,
) -> AnxietyDetail {
    let psychological = if gad7 >= 10 {
        "Significant"
    } else if gad7 >= 5 {
        "Moderate"
    } else {
        "Mild"
    };
    let physical_label = if physical >= 4 {
        "Severe"
    } else if physical >= 2 {
        "Moderate"
    } else {
        "Mild"
    };
    let social_label = if social >= 2 {
        "High"
    } else if social >= 1 {
        "Moderate"
    } else {
        "Low"
    };

    AnxietyDetail {
        psychological_symptoms: psychological.to_string(),
        physical_symptoms: physical_label.to_string(),
        social_impact: social_label.to_string(),
        functional_impairment: input.concentration_difficulty
            || input.sleep_disturbance
            || input.fatigue_level >= 7,
    }
}

/// Score a validated anxiety input.
#[must_use]
pub fn score(input: &AnxietyInput) -> AnxietyAssessment {
    let gad7 = input.gad7_score();
    let physical = input.physical_symptom_count();
    let social = input.social_anxiety_count();

    let mut total = f64::from(gad7);
    let mut risk_factors: Vec<String> = Vec::new();
    let mut symptoms: Vec<String> = Vec::new();
    let mut coping: Vec<String> = Vec::new();
    let mut needs_professional_help = false;

    total += f64::from(physical) * 1.5;
    if physical >= 1 {
        symptoms.push("Physical anxiety symptoms".to_string());
    }
    if physical >= 4 {
        risk_factors.push("Multiple physical anxiety symptoms".to_string());
    }

    total += f64::from(social) * 1.5;
    if social >= 2 {
        symptoms.push("Social Anxiety".to_string());
        risk_factors.push("Significant social anxiety".to_string());
    }

    total += f64::from(input.panic_attacks_frequency) * 2.0;
    if input.panic_attacks_frequency >= 2 {
        symptoms.push("Panic Disorder".to_string());
        risk_factors.push("Recurring panic attacks".to_string());
        needs_professional_help = true;
    }

    if input.concentration_difficulty {
        total += 2.0;
        symptoms.push("Concentration difficulties".to_string());
    }
    if input.sleep_disturbance {
        total += 2.0;
        symptoms.push("Sleep disturbance".to_string());
    }
    if input.fatigue_level >= 7 {
        total += 2.0;
        symptoms.push("Severe fatigue".to_string());
    }
    if input.appetite_change {
        total += 2.0;
        symptoms.push("Appetite changes".to_string());
    }

    // High-risk indicators. Suicidal thoughts always open the crisis path,
    // regardless of the accumulated score.
    if input.anxiousness && input.suicidal {
        total += 10.0;
        needs_professional_help = true;
        risk_factors.push("Suicidal ideation detected".to_string());
    } else if input.suicidal {
        total += 8.0;
        needs_professional_help = true;
        risk_factors.push("Suicidal thoughts".to_string());
    } else if input.anxiousness {
        total += 3.0;
        risk_factors.push("Self-reported high anxiousness".to_string());
    }

    // Protective factors, each floored at zero.
    if input.exercise_frequency >= 3 {
        total = (total - 2.0).max(0.0);
        coping.push("Regular exercise (protective factor)".to_string());
    }
    if input.social_support >= 7 {
        total = (total - 2.0).max(0.0);
        coping.push("Strong social support (protective factor)".to_string());
    }
    if input.professional_help {
        coping.push("Currently receiving professional help".to_string());
    }

    let anxiety_score = total.round() as u8;
    let severity = classify(anxiety_score);
    if matches!(
        severity,
        AnxietySeverity::ModeratelySevere | AnxietySeverity::Severe
    ) {
        needs_professional_help = true;
    }
    tracing::debug!(anxiety_score, gad7, %severity, "anxiety total accumulated");

    let mut recommendations = RecommendationSet::new();
    if input.suicidal || anxiety_score > 21 {
        recommendations.extend([
            "URGENT: Contact a mental health crisis line immediately",
            "National Suicide Prevention Lifeline: 988 (US) or your local emergency number",
            "Seek immediate evaluation by a mental health professional",
        ]);
    } else if needs_professional_help {
        recommendations.extend([
            "Consult a mental health professional (therapist, psychologist, or psychiatrist)",
            "Consider Cognitive Behavioral Therapy (CBT) for anxiety management",
        ]);
    }
    if anxiety_score >= 10 {
        recommendations.extend([
            "Practice deep breathing: 4-7-8 technique (inhale 4 seconds, hold 7, exhale 8)",
            "Try progressive muscle relaxation exercises daily",
        ]);
    }
    if physical >= 2 {
        recommendations.extend([
            "Physical symptoms may be anxiety-related - consult a doctor to rule out medical causes",
            "Practice grounding techniques during panic episodes (5-4-3-2-1 method)",
        ]);
    }
    if social >= 2 {
        recommendations.extend([
            "Gradual exposure to social situations can help (start small, increase slowly)",
            "Consider joining a social anxiety support group",
        ]);
    }
    if input.exercise_frequency < 3 {
        recommendations.push("Regular exercise (30 min, 3-5 times/week) significantly reduces anxiety");
    }
    if input.sleep_disturbance {
        recommendations.push("Establish a consistent sleep routine - poor sleep worsens anxiety");
    }
    if gad7 >= 10 {
        recommendations.push("Keep an anxiety journal to identify triggers and patterns");
    }
    if input.social_support < 5 {
        recommendations.extend([
            "Reach out to trusted friends or family - social connection reduces anxiety",
            "Consider online or in-person support groups for anxiety",
        ]);
    }
    recommendations.extend(UNIVERSAL_RECOMMENDATIONS.iter().copied());

    if risk_factors.is_empty() {
        risk_factors.push("No significant risk factors identified".to_string());
    }
    if symptoms.is_empty() {
        symptoms.push("Minimal symptoms".to_string());
    }

    AnxietyAssessment {
        anxiety_score,
        gad7_score: gad7,
        severity_level: severity,
        confidence: confidence(input, gad7),
        risk_factors,
        symptoms,
        recommendations: recommendations.into_prioritized(),
        coping_strategies: coping,
        needs_professional_help,
        crisis_intervention: input.suicidal,
        detailed_assessment: detailed_assessment(input, gad7, physical, social),
    }
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
    fn test_quiet_profile_is_minimal() {
        let assessment = score(&quiet_input());
        assert_eq!(assessment.anxiety_score, 0);
        assert_eq!(assessment.severity_level, AnxietySeverity::Minimal);
        assert!(!assessment.needs_professional_help);
        assert_eq!(assessment.risk_factors, vec!["No significant risk factors identified"]);
        assert_eq!(assessment.symptoms, vec!["Minimal symptoms"]);
    }

    #[test]
    fn test_severity_cutoffs() {
        assert_eq!(classify(5), AnxietySeverity::Minimal);
        assert_eq!(classify(6), AnxietySeverity::Mild);
        assert_eq!(classify(11), AnxietySeverity::Moderate);
        assert_eq!(classify(16), AnxietySeverity::ModeratelySevere);
        assert_eq!(classify(22), AnxietySeverity::Severe);
    }

    #[test]
    fn test_protective_offsets_floor_at_zero() {
        let mut input = quiet_input();
        input.nervous_feeling = 1;
        // gad7=1, minus 2 (exercise) minus 2 (support), floored at 0.
        let assessment = score(&input);
        assert_eq!(assessment.anxiety_score, 0);
        assert_eq!(assessment.coping_strategies.len(), 2);
    }

    #[test]
    fn test_panic_attacks_force_professional_help() {
        let mut input = quiet_input();
        input.panic_attacks_frequency = 2;
        let assessment = score(&input);
        assert!(assessment.needs_professional_help);
        assert!(assessment
            .symptoms
            .iter()
            .any(|s| s == "Panic Disorder"));
        assert!(assessment
            .recommendations
            .iter()
            .any(|r| r.contains("mental health professional")));
    }

    #[test]
    fn test_severe_profile_gets_urgent_first() {
        let mut input = quiet_input();
        input.nervous_feeling = 3;
        input.uncontrollable_worrying = 3;
        input.excessive_worrying = 3;
        input.trouble_relaxing = 3;
        input.restlessness = 3;
        input.easily_annoyed = 3;
        input.feeling_afraid = 3;
        input.panic_attacks_frequency = 3;
        input.exercise_frequency = 0;
        input.social_support = 2;
        let assessment = score(&input);

        assert!(assessment.anxiety_score > 21);
        assert_eq!(assessment.severity_level, AnxietySeverity::Severe);
        assert!(assessment.recommendations[0].contains("URGENT"));
    }

    #[test]
    fn test_physical_symptom_accumulation() {
        let mut input = quiet_input();
        input.exercise_frequency = 0;
        input.social_support = 5;
        input.sweating = true;
        input.trembling = true;
        // 2 * 1.5 = 3
        let assessment = score(&input);
        assert_eq!(assessment.anxiety_score, 3);
        assert!(assessment
            .symptoms
            .iter()
            .any(|s| s == "Physical anxiety symptoms"));
        assert_eq!(assessment.detailed_assessment.physical_symptoms, "Moderate");
    }

    #[test]
    fn test_functional_impairment_flag() {
        let mut input = quiet_input();
        input.fatigue_level = 8;
        let assessment = score(&input);
        assert!(assessment.detailed_assessment.functional_impairment);
        assert!(assessment.symptoms.iter().any(|s| s == "Severe fatigue"));
    }

    #[test]
    fn test_suicidal_thoughts_open_crisis_path() {
        let mut input = quiet_input();
        input.suicidal = true;
        let assessment = score(&input);

        // +8 minus the two protective offsets.
        assert_eq!(assessment.anxiety_score, 4);
        assert!(assessment.crisis_intervention);
        assert!(assessment.needs_professional_help);
        assert!(assessment
            .risk_factors
            .iter()
            .any(|f| f == "Suicidal thoughts"));
        // Crisis guidance fires even though the score stays minimal.
        assert!(assessment.recommendations[0].contains("URGENT"));
        assert!(assessment
            .recommendations
            .iter()
            .any(|r| r.contains("988")));
    }

    #[test]
    fn test_combined_high_risk_indicators_outweigh_each_alone() {
        let mut input = quiet_input();
        input.exercise_frequency = 0;
        input.social_support = 5;
        input.anxiousness = true;
        input.suicidal = true;
        let both = score(&input);
        assert_eq!(both.anxiety_score, 10);
        assert!(both
            .risk_factors
            .iter()
            .any(|f| f == "Suicidal ideation detected"));

        input.suicidal = false;
        let anxious_only = score(&input);
        assert_eq!(anxious_only.anxiety_score, 3);
        assert!(!anxious_only.crisis_intervention);
        assert!(!anxious_only.needs_professional_help);
        assert!(anxious_only
            .risk_factors
            .iter()
            .any(|f| f == "Self-reported high anxiousness"));
    }

    #[test]
    fn test_confidence_penalizes_implausible_profile() {
        let mut input = quiet_input();
        input.fatigue_level = 10;
        let assessment = score(&input);
        assert_eq!(assessment.confidence, 65);

        let mut answered = quiet_input();
        answered.nervous_feeling = 2;
        answered.trouble_relaxing = 1;
        assert_eq!(score(&answered).confidence, 79);
    }
}
