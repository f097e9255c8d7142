use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Band thresholds in increasing severity. Values are strictly ascending for
/// consumption markers and strictly descending for benefit markers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandThresholds {
    pub mild: Decimal,
    pub moderate: Decimal,
    pub high: Decimal,
}

/// Penalty points per severity band, non-decreasing with severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PenaltyWeights {
    pub mild: Decimal,
    pub moderate: Decimal,
    pub high: Decimal,
}

/// A single tracked lifestyle habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    /// Unique key, referenced by answers, regions and demographic tables.
    pub id: String,
    pub label: String,
    pub unit: String,
    /// True when higher values are better (benefit markers).
    #[serde(default)]
    pub invert: bool,
    pub bands: BandThresholds,
    pub penalties: PenaltyWeights,
    /// Static fallback comparison value when neither an age table nor a
    /// region baseline applies.
    pub baseline: Decimal,
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The marker catalog as it appears in a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub markers: Vec<Marker>,
}

/// Regional overall averages, used for the "average" display and for group
/// baseline fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub label: String,
    /// Marker id -> overall-average value for this region. Markers may be
    /// absent; lookups fall back to the marker default.
    pub baselines: BTreeMap<String, Decimal>,
}

/// Age- and gender-specific baseline data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemographicsDef {
    /// Marker id -> per-bracket baseline values, indexed by the fixed age
    /// bracket order. Tables may cover fewer brackets than exist.
    #[serde(default)]
    pub age_baselines: BTreeMap<String, Vec<Decimal>>,
    /// Marker id -> gender key -> signed delta added to the base value.
    #[serde(default)]
    pub gender_adjustments: BTreeMap<String, BTreeMap<String, Decimal>>,
}
