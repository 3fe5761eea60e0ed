//! Scoring engine: static rule tables, the generic evaluation loop, and the
//! per-domain scoring/classification logic.

pub mod anxiety;
pub mod depression;
pub mod nutrition;
pub mod recommend;
pub mod rules;
pub mod sleep;

pub use recommend::RecommendationSet;
pub use rules::{Band, CompoundRule, Rule, Tally, WeightTier};
