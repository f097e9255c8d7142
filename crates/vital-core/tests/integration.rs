//! Integration tests for build_report() end-to-end on the built-in data.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vital_core::catalog::builtin;
use vital_core::catalog::schema::DemographicsDef;
use vital_core::catalog::{Catalog, RegionTable};
use vital_core::error::VitalError;
use vital_core::model::{AgeRange, AnswerSet, Gender, Session};
use vital_core::{baseline, build_report, recommend, score};

fn setup() -> (Catalog, RegionTable, DemographicsDef) {
    let catalog = builtin::default_catalog().unwrap();
    let regions = builtin::default_regions(&catalog).unwrap();
    let tables = builtin::default_demographics(&catalog).unwrap();
    (catalog, regions, tables)
}

fn answers(entries: &[(&str, Decimal)]) -> AnswerSet {
    entries
        .iter()
        .map(|(id, v)| (id.to_string(), *v))
        .collect()
}

fn session(region: &str, answers: AnswerSet) -> Session {
    Session {
        region: region.to_string(),
        age: AgeRange::From30To39,
        gender: Gender::Female,
        answers,
    }
}

// ---------------------------------------------------------------------------
// Test 1: clean answers across the whole catalog score a full 100
// ---------------------------------------------------------------------------
#[test]
fn clean_answers_score_100() {
    let (catalog, regions, tables) = setup();
    let clean = answers(&[
        ("alcohol", dec!(0)),
        ("smoking", dec!(0)),
        ("sleep", dec!(8)),
        ("exercise", dec!(4)),
        ("water", dec!(8)),
        ("screen_time", dec!(1)),
        ("caffeine", dec!(1)),
        ("fruit_veg", dec!(6)),
        ("fast_food", dec!(0)),
        ("sugary_drinks", dec!(0)),
    ]);

    let report = build_report(
        &session("global", clean),
        &catalog,
        &regions,
        &tables,
        recommend::DEFAULT_LIMIT,
    )
    .unwrap();

    assert_eq!(report.outcome.score, Decimal::ONE_HUNDRED);
    assert!(report.outcome.deductions.is_empty());
    assert!(report.recommendations.is_empty());
    assert_eq!(report.breakdown.len(), catalog.len());
}

// ---------------------------------------------------------------------------
// Test 2: an empty answer set only penalizes benefit markers (value 0 is
// the floor for those, the ceiling of virtue for consumption markers)
// ---------------------------------------------------------------------------
#[test]
fn empty_answers_penalize_benefit_markers_only() {
    let (catalog, regions, tables) = setup();
    let report = build_report(
        &session("global", AnswerSet::new()),
        &catalog,
        &regions,
        &tables,
        recommend::DEFAULT_LIMIT,
    )
    .unwrap();

    // sleep 10, exercise 8, water 5, fruit_veg 8 at the very-bad extreme.
    assert_eq!(report.outcome.score, dec!(69));
    let penalized: Vec<&str> = report
        .outcome
        .deductions
        .iter()
        .map(|d| d.marker_id.as_str())
        .collect();
    assert_eq!(penalized, vec!["sleep", "exercise", "water", "fruit_veg"]);
}

// ---------------------------------------------------------------------------
// Test 3: group outcome goes through the same engine as user answers
// ---------------------------------------------------------------------------
#[test]
fn group_outcome_matches_manual_baseline_scoring() {
    let (catalog, regions, tables) = setup();
    let sess = session("europe", answers(&[("alcohol", dec!(12))]));

    let report = build_report(&sess, &catalog, &regions, &tables, 3).unwrap();

    let region = &regions["europe"];
    let group_answers =
        baseline::baseline_answers(&catalog, &tables, region, sess.age, sess.gender);
    let manual = score::score(&group_answers, &catalog).unwrap();

    assert_eq!(report.group_outcome, manual);
    assert!(manual.score >= Decimal::ZERO && manual.score <= Decimal::ONE_HUNDRED);
}

// ---------------------------------------------------------------------------
// Test 4: recommendations ranked by penalty, capped by limit
// ---------------------------------------------------------------------------
#[test]
fn recommendations_ranked_and_limited() {
    let (catalog, regions, tables) = setup();
    // alcohol 25 -> very bad (10), smoking 6 -> moderate (6),
    // caffeine 6 -> moderate (2); everything else clean.
    let sess = session(
        "global",
        answers(&[
            ("alcohol", dec!(25)),
            ("smoking", dec!(6)),
            ("caffeine", dec!(6)),
            ("sleep", dec!(8)),
            ("exercise", dec!(4)),
            ("water", dec!(8)),
            ("fruit_veg", dec!(6)),
        ]),
    );

    let report = build_report(&sess, &catalog, &regions, &tables, 2).unwrap();
    assert_eq!(report.recommendations.len(), 2);
    assert_eq!(report.recommendations[0].marker_id, "alcohol");
    assert_eq!(report.recommendations[0].potential_gain, dec!(10));
    assert_eq!(report.recommendations[1].marker_id, "smoking");
}

// ---------------------------------------------------------------------------
// Test 5: breakdown rows resolve baselines through the fallback chain
// ---------------------------------------------------------------------------
#[test]
fn breakdown_uses_baseline_fallbacks() {
    let (catalog, regions, tables) = setup();

    // Europe has no sugary_drinks baseline and no age table covers it, so
    // the marker default (1.5) applies.
    let report = build_report(
        &session("europe", AnswerSet::new()),
        &catalog,
        &regions,
        &tables,
        3,
    )
    .unwrap();
    let row = report
        .breakdown
        .iter()
        .find(|r| r.marker_id == "sugary_drinks")
        .unwrap();
    assert_eq!(row.average, dec!(1.5));

    // Alcohol has an age table: bracket 30-39 is 6.5, female delta -1.5.
    let row = report
        .breakdown
        .iter()
        .find(|r| r.marker_id == "alcohol")
        .unwrap();
    assert_eq!(row.average, dec!(5));
}

// ---------------------------------------------------------------------------
// Test 6: unknown region and unknown answer keys fail fast
// ---------------------------------------------------------------------------
#[test]
fn unknown_region_is_fatal() {
    let (catalog, regions, tables) = setup();
    let result = build_report(
        &session("atlantis", AnswerSet::new()),
        &catalog,
        &regions,
        &tables,
        3,
    );
    assert!(matches!(result, Err(VitalError::UnknownRegion(r)) if r == "atlantis"));
}

#[test]
fn unknown_answer_marker_is_fatal() {
    let (catalog, regions, tables) = setup();
    let result = build_report(
        &session("global", answers(&[("chocolate", dec!(3))])),
        &catalog,
        &regions,
        &tables,
        3,
    );
    assert!(matches!(result, Err(VitalError::UnknownMarker(m)) if m == "chocolate"));
}

// ---------------------------------------------------------------------------
// Test 7: report serializes to JSON for the presentation layer
// ---------------------------------------------------------------------------
#[test]
fn report_serializes() {
    let (catalog, regions, tables) = setup();
    let report = build_report(
        &session("global", answers(&[("alcohol", dec!(18))])),
        &catalog,
        &regions,
        &tables,
        3,
    )
    .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"region_label\":\"Global\""));
    assert!(json.contains("\"band\":\"high\""));
    assert!(json.contains("\"18-29\"") || json.contains("\"30-39\""));
}
