use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Survey answers: marker id -> reported value.
///
/// Absent entries are read as 0 by the scoring engine. The engine never
/// mutates an answer set.
pub type AnswerSet = BTreeMap<String, Decimal>;

/// Severity band on the full six-step scale used for the headline score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Excellent,
    Good,
    Mild,
    Moderate,
    High,
    VeryBad,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Excellent => write!(f, "excellent"),
            Band::Good => write!(f, "good"),
            Band::Mild => write!(f, "mild"),
            Band::Moderate => write!(f, "moderate"),
            Band::High => write!(f, "high"),
            Band::VeryBad => write!(f, "very bad"),
        }
    }
}

/// Severity tier on the simplified four-step scale used by the breakdown
/// table. Has no extremes, so it intentionally disagrees with [`Band`]
/// outside the threshold range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Good,
    Mild,
    Moderate,
    High,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Good => write!(f, "good"),
            Tier::Mild => write!(f, "mild"),
            Tier::Moderate => write!(f, "moderate"),
            Tier::High => write!(f, "high"),
        }
    }
}

/// Fixed, ordered age brackets. Age-indexed baseline tables are indexed by
/// the bracket position in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-29")]
    From18To29,
    #[serde(rename = "30-39")]
    From30To39,
    #[serde(rename = "40-49")]
    From40To49,
    #[serde(rename = "50-59")]
    From50To59,
    #[serde(rename = "60-69")]
    From60To69,
    #[serde(rename = "70+")]
    From70,
}

impl AgeRange {
    pub const ALL: [AgeRange; 6] = [
        AgeRange::From18To29,
        AgeRange::From30To39,
        AgeRange::From40To49,
        AgeRange::From50To59,
        AgeRange::From60To69,
        AgeRange::From70,
    ];

    /// Position in the fixed bracket order.
    pub fn index(self) -> usize {
        match self {
            AgeRange::From18To29 => 0,
            AgeRange::From30To39 => 1,
            AgeRange::From40To49 => 2,
            AgeRange::From50To59 => 3,
            AgeRange::From60To69 => 4,
            AgeRange::From70 => 5,
        }
    }

    pub fn from_str_loose(s: &str) -> Option<AgeRange> {
        match s.trim() {
            "18-29" => Some(AgeRange::From18To29),
            "30-39" => Some(AgeRange::From30To39),
            "40-49" => Some(AgeRange::From40To49),
            "50-59" => Some(AgeRange::From50To59),
            "60-69" => Some(AgeRange::From60To69),
            "70+" | "70" => Some(AgeRange::From70),
            _ => None,
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeRange::From18To29 => write!(f, "18-29"),
            AgeRange::From30To39 => write!(f, "30-39"),
            AgeRange::From40To49 => write!(f, "40-49"),
            AgeRange::From50To59 => write!(f, "50-59"),
            AgeRange::From60To69 => write!(f, "60-69"),
            AgeRange::From70 => write!(f, "70+"),
        }
    }
}

/// Gender for baseline adjustment lookups. Genders without an entry in the
/// adjustment tables simply contribute no adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Key used in the gender adjustment tables.
    pub fn key(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }

    /// Parse a CLI-style gender string. Anything unrecognized maps to
    /// `Other`, which never has a table entry.
    pub fn from_str_loose(s: &str) -> Gender {
        match s.trim().to_lowercase().as_str() {
            "f" | "female" | "woman" => Gender::Female,
            "m" | "male" | "man" => Gender::Male,
            _ => Gender::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The session state the survey layer owns: selected region, demographic
/// selection and collected answers. Passed into the core explicitly so the
/// engine stays free of ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub region: String,
    pub age: AgeRange,
    pub gender: Gender,
    pub answers: AnswerSet,
}
