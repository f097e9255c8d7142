pub mod baseline;
pub mod catalog;
pub mod error;
pub mod model;
pub mod recommend;
pub mod score;

use catalog::schema::DemographicsDef;
use catalog::{Catalog, RegionTable};
use error::VitalError;
use model::Session;
use rust_decimal::Decimal;
use score::outcome::{BreakdownRow, Report};

/// Main API entry point: turn a survey session into the report payload the
/// presentation layer renders.
///
/// Scores the user's answers, scores a synthetic baseline answer set for
/// the same demographic group through the identical engine, builds the
/// per-marker breakdown table and ranks recommendations.
pub fn build_report(
    session: &Session,
    catalog: &Catalog,
    regions: &RegionTable,
    tables: &DemographicsDef,
    limit: usize,
) -> Result<Report, VitalError> {
    let region = regions
        .get(&session.region)
        .ok_or_else(|| VitalError::UnknownRegion(session.region.clone()))?;

    let outcome = score::score(&session.answers, catalog)?;

    let group_answers =
        baseline::baseline_answers(catalog, tables, region, session.age, session.gender);
    let group_outcome = score::score(&group_answers, catalog)?;

    let mut breakdown = Vec::with_capacity(catalog.len());
    for marker in catalog.markers() {
        let value = session
            .answers
            .get(&marker.id)
            .copied()
            .unwrap_or(Decimal::ZERO);
        let average = baseline::resolve_baseline(
            catalog,
            tables,
            region,
            &marker.id,
            session.age,
            session.gender,
        )?;
        breakdown.push(BreakdownRow {
            marker_id: marker.id.clone(),
            label: marker.label.clone(),
            unit: marker.unit.clone(),
            value,
            average,
            tier: score::band::classify_tier(value, &marker.bands, marker.invert),
        });
    }

    let recommendations = recommend::recommend(&outcome.deductions, catalog, limit)?;

    Ok(Report {
        region_label: region.label.clone(),
        age: session.age,
        gender: session.gender,
        outcome,
        group_outcome,
        breakdown,
        recommendations,
    })
}
