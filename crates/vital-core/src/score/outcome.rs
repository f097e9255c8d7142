use crate::model::{AgeRange, Band, Gender, Tier};
use crate::recommend::Recommendation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marker's penalty contribution to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub marker_id: String,
    pub label: String,
    /// The answered (or defaulted) value that earned the penalty.
    pub value: Decimal,
    pub penalty: Decimal,
    pub band: Band,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Aggregate scoring result: the bounded score plus one deduction per
/// penalized marker, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: Decimal,
    pub deductions: Vec<Deduction>,
}

/// One row of the detailed breakdown table, on the four-tier scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub marker_id: String,
    pub label: String,
    pub unit: String,
    pub value: Decimal,
    /// Age/gender/region-adjusted comparison value.
    pub average: Decimal,
    pub tier: Tier,
}

/// The full report payload handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub region_label: String,
    pub age: AgeRange,
    pub gender: Gender,
    /// The user's score and deductions.
    pub outcome: ScoreOutcome,
    /// What an average person in the same group and region would score,
    /// computed through the identical engine.
    pub group_outcome: ScoreOutcome,
    pub breakdown: Vec<BreakdownRow>,
    pub recommendations: Vec<Recommendation>,
}
