//! Resolves the comparison value a user's marker values are measured
//! against: age-bracket tables first, then regional averages, then the
//! marker's own default, with a per-gender delta on top.

use crate::catalog::schema::{DemographicsDef, Marker, Region};
use crate::catalog::Catalog;
use crate::error::VitalError;
use crate::model::{AgeRange, AnswerSet, Gender};
use rust_decimal::Decimal;

/// Resolve the comparison value for one marker under a demographic
/// selection.
///
/// Lookup order: the age-indexed table entry for the bracket, then the
/// region's overall baseline, then the marker's static default. The gender
/// delta applies only when the adjustment table has an entry for both the
/// marker and the gender. The result never goes below zero.
pub fn resolve_baseline(
    catalog: &Catalog,
    tables: &DemographicsDef,
    region: &Region,
    marker_id: &str,
    age: AgeRange,
    gender: Gender,
) -> Result<Decimal, VitalError> {
    let marker = catalog.get(marker_id)?;
    Ok(resolve_for(marker, tables, region, age, gender))
}

/// Build the synthetic answer set an average person in the selected group
/// would report: one resolved baseline per catalog marker. Scored through
/// the same engine as real answers.
pub fn baseline_answers(
    catalog: &Catalog,
    tables: &DemographicsDef,
    region: &Region,
    age: AgeRange,
    gender: Gender,
) -> AnswerSet {
    catalog
        .markers()
        .iter()
        .map(|marker| {
            (
                marker.id.clone(),
                resolve_for(marker, tables, region, age, gender),
            )
        })
        .collect()
}

fn resolve_for(
    marker: &Marker,
    tables: &DemographicsDef,
    region: &Region,
    age: AgeRange,
    gender: Gender,
) -> Decimal {
    let base = tables
        .age_baselines
        .get(&marker.id)
        .and_then(|values| values.get(age.index()))
        .copied()
        .or_else(|| region.baselines.get(&marker.id).copied())
        .unwrap_or(marker.baseline);

    let adjustment = tables
        .gender_adjustments
        .get(&marker.id)
        .and_then(|deltas| deltas.get(gender.key()))
        .copied()
        .unwrap_or(Decimal::ZERO);

    (base + adjustment).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::{
        BandThresholds, CatalogDef, DemographicsDef, Marker, PenaltyWeights, Region,
    };
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn marker(id: &str, baseline: Decimal) -> Marker {
        Marker {
            id: id.into(),
            label: id.into(),
            unit: "u".into(),
            invert: false,
            bands: BandThresholds {
                mild: dec!(5),
                moderate: dec!(10),
                high: dec!(14),
            },
            penalties: PenaltyWeights {
                mild: dec!(2),
                moderate: dec!(5),
                high: dec!(8),
            },
            baseline,
            citation: None,
            description: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_def(CatalogDef {
            name: "Test".into(),
            description: None,
            version: "1.0".into(),
            markers: vec![marker("alcohol", dec!(6)), marker("caffeine", dec!(2))],
        })
        .unwrap()
    }

    fn region(baselines: &[(&str, Decimal)]) -> Region {
        Region {
            label: "Test".into(),
            baselines: baselines
                .iter()
                .map(|(id, v)| (id.to_string(), *v))
                .collect(),
        }
    }

    fn tables() -> DemographicsDef {
        DemographicsDef {
            age_baselines: BTreeMap::from([(
                "alcohol".to_string(),
                vec![dec!(7), dec!(6.5), dec!(6)],
            )]),
            gender_adjustments: BTreeMap::from([(
                "alcohol".to_string(),
                BTreeMap::from([
                    ("female".to_string(), dec!(-1.5)),
                    ("male".to_string(), dec!(1.5)),
                ]),
            )]),
        }
    }

    #[test]
    fn test_age_table_wins_over_region() {
        let catalog = catalog();
        let region = region(&[("alcohol", dec!(9))]);
        let v = resolve_baseline(
            &catalog,
            &tables(),
            &region,
            "alcohol",
            AgeRange::From30To39,
            Gender::Other,
        )
        .unwrap();
        assert_eq!(v, dec!(6.5));
    }

    #[test]
    fn test_bracket_past_table_end_falls_back_to_region() {
        // The alcohol table only covers the first three brackets.
        let catalog = catalog();
        let region = region(&[("alcohol", dec!(9))]);
        let v = resolve_baseline(
            &catalog,
            &tables(),
            &region,
            "alcohol",
            AgeRange::From70,
            Gender::Other,
        )
        .unwrap();
        assert_eq!(v, dec!(9));
    }

    #[test]
    fn test_region_fallback_then_marker_default() {
        let catalog = catalog();
        let with_region = region(&[("caffeine", dec!(3))]);
        let without = region(&[]);
        let t = DemographicsDef::default();

        let v = resolve_baseline(
            &catalog,
            &t,
            &with_region,
            "caffeine",
            AgeRange::From18To29,
            Gender::Other,
        )
        .unwrap();
        assert_eq!(v, dec!(3));

        let v = resolve_baseline(
            &catalog,
            &t,
            &without,
            "caffeine",
            AgeRange::From18To29,
            Gender::Other,
        )
        .unwrap();
        assert_eq!(v, dec!(2));
    }

    #[test]
    fn test_gender_delta_applied() {
        let catalog = catalog();
        let region = region(&[]);
        let t = tables();

        let female = resolve_baseline(
            &catalog,
            &t,
            &region,
            "alcohol",
            AgeRange::From18To29,
            Gender::Female,
        )
        .unwrap();
        assert_eq!(female, dec!(5.5));

        let male = resolve_baseline(
            &catalog,
            &t,
            &region,
            "alcohol",
            AgeRange::From18To29,
            Gender::Male,
        )
        .unwrap();
        assert_eq!(male, dec!(8.5));

        // No "other" entry in the adjustment table: zero adjustment.
        let other = resolve_baseline(
            &catalog,
            &t,
            &region,
            "alcohol",
            AgeRange::From18To29,
            Gender::Other,
        )
        .unwrap();
        assert_eq!(other, dec!(7));
    }

    #[test]
    fn test_never_negative() {
        let catalog = Catalog::from_def(CatalogDef {
            name: "Test".into(),
            description: None,
            version: "1.0".into(),
            markers: vec![marker("alcohol", dec!(0.5))],
        })
        .unwrap();
        let t = DemographicsDef {
            age_baselines: BTreeMap::new(),
            gender_adjustments: BTreeMap::from([(
                "alcohol".to_string(),
                BTreeMap::from([("female".to_string(), dec!(-2))]),
            )]),
        };
        let v = resolve_baseline(
            &catalog,
            &t,
            &region(&[]),
            "alcohol",
            AgeRange::From18To29,
            Gender::Female,
        )
        .unwrap();
        assert_eq!(v, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_marker_is_error() {
        let catalog = catalog();
        let result = resolve_baseline(
            &catalog,
            &DemographicsDef::default(),
            &region(&[]),
            "nicotine",
            AgeRange::From18To29,
            Gender::Other,
        );
        assert!(matches!(result, Err(VitalError::UnknownMarker(_))));
    }

    #[test]
    fn test_baseline_answers_covers_every_marker() {
        let catalog = catalog();
        let answers = baseline_answers(
            &catalog,
            &tables(),
            &region(&[]),
            AgeRange::From18To29,
            Gender::Female,
        );
        assert_eq!(answers.len(), catalog.len());
        assert_eq!(answers["alcohol"], dec!(5.5));
        assert_eq!(answers["caffeine"], dec!(2));
    }
}
