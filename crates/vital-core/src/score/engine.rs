use crate::catalog::Catalog;
use crate::error::VitalError;
use crate::model::AnswerSet;
use crate::score::band;
use crate::score::outcome::{Deduction, ScoreOutcome};
use rust_decimal::Decimal;

/// Score an answer set against the catalog.
///
/// Starts at 100 and subtracts the six-band penalty for every marker in
/// catalog order, reading absent answers as 0. The final score is clamped
/// to a minimum of 0; deductions keep catalog order (sorting is the
/// ranker's job). The answer set may be real user input or a synthetic
/// baseline set; both take this exact path.
pub fn score(answers: &AnswerSet, catalog: &Catalog) -> Result<ScoreOutcome, VitalError> {
    // An answer key outside the catalog means the survey and the catalog
    // have drifted apart. Refuse to score rather than guess.
    for id in answers.keys() {
        if !catalog.contains(id) {
            return Err(VitalError::UnknownMarker(id.clone()));
        }
    }

    let mut total = Decimal::ONE_HUNDRED;
    let mut deductions = Vec::new();

    for marker in catalog.markers() {
        let value = answers.get(&marker.id).copied().unwrap_or(Decimal::ZERO);
        let outcome = band::classify(value, &marker.bands, &marker.penalties, marker.invert);
        total -= outcome.penalty;

        if outcome.penalty > Decimal::ZERO {
            deductions.push(Deduction {
                marker_id: marker.id.clone(),
                label: marker.label.clone(),
                value,
                penalty: outcome.penalty,
                band: outcome.band,
                citation: marker.citation.clone(),
                description: marker.description.clone(),
            });
        }
    }

    Ok(ScoreOutcome {
        score: total.max(Decimal::ZERO),
        deductions,
    })
}
