//! Generic weighted-rule machinery.
//!
//! Each scoring domain declares an ordered list of [`Rule`]s, one per risk
//! dimension. A rule extracts a single numeric value from the input and
//! walks an ordered cascade of [`Band`]s, most severe first. The first
//! matching band determines the points awarded (tier multiplier × band
//! magnitude) plus any key factor, condition hypothesis, or recommendations.
//!
//! Every rule contributes its full `tier × 10` to the maximum possible
//! score whether or not a band matched, so the final percentage is "risk
//! realized over risk evaluable" and the denominator is a per-domain
//! constant. [`CompoundRule`]s are diagnostic overlays over several fields
//! at once: they may add conditions and recommendations but never touch
//! the numerator or denominator.

use crate::domain::assessment::{
    sort_conditions, sort_factors, Impact, PossibleCondition, RiskFactor,
};
use crate::engine::recommend::RecommendationSet;

/// Maximum raw sub-score magnitude per rule.
pub const MAX_MAGNITUDE: f64 = 10.0;

/// Clinical-importance tier scaling a rule's point contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTier {
    Critical,
    High,
    Medium,
    Low,
}

impl WeightTier {
    /// The fixed multiplier for this tier.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Critical => 3.0,
            Self::High => 2.0,
            Self::Medium => 1.5,
            Self::Low => 1.0,
        }
    }

    /// Maximum points a rule of this tier can contribute.
    #[must_use]
    pub fn max_points(self) -> f64 {
        self.multiplier() * MAX_MAGNITUDE
    }
}

/// One threshold band in a rule's cascade.
///
/// Bands are checked in declaration order; the first match wins. A value
/// matching no band is in the healthy range and contributes zero points.
pub struct Band {
    /// Whether the extracted value falls in this band
    pub matches: fn(f64) -> bool,
    /// Raw sub-score magnitude, 0-10
    pub magnitude: f64,
    /// Key factor emitted when this band fires
    pub factor: Option<(&'static str, Impact)>,
    /// Condition hypothesis (name, probability) emitted when this band fires
    pub condition: Option<(&'static str, u8)>,
    /// Recommendations emitted when this band fires
    pub recommendations: &'static [&'static str],
}

/// One scored risk dimension.
pub struct Rule<I> {
    /// Dimension name, for tracing
    pub dimension: &'static str,
    pub tier: WeightTier,
    /// Extract the value this rule evaluates
    pub value: fn(&I) -> f64,
    /// Format the observed input for key-factor display
    pub observed: fn(&I) -> String,
    pub bands: &'static [Band],
}

/// A diagnostic overlay that fires when several fields jointly satisfy a
/// condition. Never contributes to the score.
pub struct CompoundRule<I> {
    pub trigger: fn(&I) -> bool,
    pub condition: Option<(&'static str, u8)>,
    pub recommendations: &'static [&'static str],
}

/// Accumulated output of one evaluation pass.
pub struct Tally {
    pub total: f64,
    pub max: f64,
    pub factors: Vec<RiskFactor>,
    pub conditions: Vec<PossibleCondition>,
    pub recommendations: RecommendationSet,
}

impl Tally {
    fn new() -> Self {
        Self {
            total: 0.0,
            max: 0.0,
            factors: Vec::new(),
            conditions: Vec::new(),
            recommendations: RecommendationSet::new(),
        }
    }

    /// Normalized risk percentage, 0-100.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max > 0.0 {
            self.total / self.max * 100.0
        } else {
            0.0
        }
    }

    /// Sort factors by descending impact and conditions by descending
    /// probability for presentation.
    pub fn sort_for_output(&mut self) {
        sort_factors(&mut self.factors);
        sort_conditions(&mut self.conditions);
    }
}

/// Evaluate every rule exactly once, then apply the compound overlays.
pub fn evaluate<I>(input: &I, rules: &[Rule<I>], compounds: &[CompoundRule<I>]) -> Tally {
    let mut tally = Tally::new();

    for rule in rules {
        tally.max += rule.tier.max_points();

        let value = (rule.value)(input);
        let Some(band) = rule.bands.iter().find(|b| (b.matches)(value)) else {
            continue;
        };

        let points = rule.tier.multiplier() * band.magnitude;
        tally.total += points;
        tracing::debug!(
            dimension = rule.dimension,
            value,
            points,
            "risk band matched"
        );

        if let Some((name, impact)) = band.factor {
            tally.factors.push(RiskFactor {
                name: name.to_string(),
                impact,
                observed_value: (rule.observed)(input),
            });
        }
        if let Some((name, probability)) = band.condition {
            tally.conditions.push(PossibleCondition::new(name, probability));
        }
        for rec in band.recommendations {
            tally.recommendations.push(rec);
        }
    }

    for compound in compounds {
        if !(compound.trigger)(input) {
            continue;
        }
        if let Some((name, probability)) = compound.condition {
            tally.conditions.push(PossibleCondition::new(name, probability));
        }
        for rec in compound.recommendations {
            tally.recommendations.push(rec);
        }
    }

    tally
}

/// Format a numeric value without a trailing `.0` for whole numbers.
#[must_use]
pub fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        x: f64,
        y: f64,
    }

    static RULES: &[Rule<Dummy>] = &[
        Rule {
            dimension: "x",
            tier: WeightTier::Critical,
            value: |d: &Dummy| d.x,
            observed: |d: &Dummy| fmt_value(d.x),
            bands: &[
                Band {
                    matches: |v| v < 3.0,
                    magnitude: 10.0,
                    factor: Some(("Very Low X", Impact::Critical)),
                    condition: Some(("X Deficiency", 80)),
                    recommendations: &["URGENT: raise x"],
                },
                Band {
                    matches: |v| v < 6.0,
                    magnitude: 5.0,
                    factor: Some(("Low X", Impact::Medium)),
                    condition: None,
                    recommendations: &["raise x"],
                },
            ],
        },
        Rule {
            dimension: "y",
            tier: WeightTier::Low,
            value: |d: &Dummy| d.y,
            observed: |d: &Dummy| fmt_value(d.y),
            bands: &[Band {
                matches: |v| v > 8.0,
                magnitude: 4.0,
                factor: None,
                condition: None,
                recommendations: &[],
            }],
        },
    ];

    static COMPOUNDS: &[CompoundRule<Dummy>] = &[CompoundRule {
        trigger: |d: &Dummy| d.x < 3.0 && d.y > 8.0,
        condition: Some(("Joint Syndrome", 40)),
        recommendations: &["joint rec"],
    }];

    #[test]
    fn test_every_rule_contributes_to_denominator() {
        let healthy = Dummy { x: 9.0, y: 1.0 };
        let tally = evaluate(&healthy, RULES, COMPOUNDS);
        assert!((tally.max - 40.0).abs() < f64::EPSILON); // 3.0*10 + 1.0*10
        assert!((tally.total - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_matching_band_wins() {
        let d = Dummy { x: 2.0, y: 1.0 };
        let tally = evaluate(&d, RULES, COMPOUNDS);
        // Critical tier (3.0) x magnitude 10, not the milder 5.0 band.
        assert!((tally.total - 30.0).abs() < f64::EPSILON);
        assert_eq!(tally.factors[0].name, "Very Low X");
        assert_eq!(tally.conditions[0].name, "X Deficiency");
    }

    #[test]
    fn test_compound_rules_do_not_score() {
        let d = Dummy { x: 2.0, y: 9.0 };
        let tally = evaluate(&d, RULES, COMPOUNDS);
        // x band (30) + y band (1.0 * 4) only; the compound adds no points.
        assert!((tally.total - 34.0).abs() < f64::EPSILON);
        assert!(tally.conditions.iter().any(|c| c.name == "Joint Syndrome"));
    }

    #[test]
    fn test_percentage_bounds() {
        let worst = Dummy { x: 0.0, y: 9.0 };
        let tally = evaluate(&worst, RULES, COMPOUNDS);
        assert!(tally.percentage() <= 100.0);
        assert!(tally.percentage() >= 0.0);
    }

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(4.0), "4");
        assert_eq!(fmt_value(22.49), "22.5");
    }
}
