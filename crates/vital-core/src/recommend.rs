//! Turns the worst deductions into directional suggestions.

use crate::catalog::Catalog;
use crate::error::VitalError;
use crate::score::outcome::Deduction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of suggestions a report shows unless the caller asks otherwise.
pub const DEFAULT_LIMIT: usize = 3;

/// Which way the user should move a marker value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Reduce,
    Increase,
}

/// An actionable suggestion derived from one deduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub marker_id: String,
    pub label: String,
    pub direction: Direction,
    /// The mild-band threshold the value should move past.
    pub target: Decimal,
    pub unit: String,
    /// Points recovered if the deduction disappears entirely.
    pub potential_gain: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Recommendation {
    /// One-line advice text for plain rendering.
    pub fn advice(&self) -> String {
        match self.direction {
            Direction::Reduce => format!(
                "Reduce {} to below {} {}",
                self.label.to_lowercase(),
                self.target,
                self.unit
            ),
            Direction::Increase => format!(
                "Increase {} to at least {} {}",
                self.label.to_lowercase(),
                self.target,
                self.unit
            ),
        }
    }
}

/// Rank deductions by penalty and turn the worst `limit` into suggestions.
///
/// The sort is stable, so equal penalties keep the catalog order the
/// deductions arrived in.
pub fn recommend(
    deductions: &[Deduction],
    catalog: &Catalog,
    limit: usize,
) -> Result<Vec<Recommendation>, VitalError> {
    let mut ranked: Vec<&Deduction> = deductions.iter().collect();
    ranked.sort_by(|a, b| b.penalty.cmp(&a.penalty));

    ranked
        .into_iter()
        .take(limit)
        .map(|d| {
            let marker = catalog.get(&d.marker_id)?;
            Ok(Recommendation {
                marker_id: marker.id.clone(),
                label: marker.label.clone(),
                direction: if marker.invert {
                    Direction::Increase
                } else {
                    Direction::Reduce
                },
                target: marker.bands.mild,
                unit: marker.unit.clone(),
                potential_gain: d.penalty,
                citation: marker.citation.clone(),
            })
        })
        .collect()
}
