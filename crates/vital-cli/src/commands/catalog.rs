use std::path::Path;
use vital_core::catalog::builtin;
use vital_core::error::VitalError;

pub fn list() -> Result<(), VitalError> {
    let catalog = builtin::default_catalog()?;

    println!("{} (v{})\n", catalog.name, catalog.version);
    for marker in catalog.markers() {
        let direction = if marker.invert {
            "higher is better"
        } else {
            "lower is better"
        };
        println!("  {:<14} {} [{}, {}]", marker.id, marker.label, marker.unit, direction);
        if let Some(ref desc) = marker.description {
            println!("                 {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain() -> Result<(), VitalError> {
    let catalog = builtin::default_catalog()?;

    println!("{} (version {})\n", catalog.name, catalog.version);
    println!("Each marker value is placed on a six-band scale:\n");
    println!("  excellent -- at or beyond half the mild threshold on the good side");
    println!("  good      -- inside the mild threshold");
    println!("  mild / moderate / high -- past the matching threshold");
    println!("  very bad  -- past one and a half times the high threshold");
    println!();
    println!("Each band past mild costs its penalty; very bad costs the high");
    println!("penalty plus 2. The score starts at 100 and never drops below 0.\n");

    let max_name = catalog
        .markers()
        .iter()
        .map(|m| m.id.len())
        .max()
        .unwrap_or(12);

    println!("Thresholds and penalties:\n");
    println!(
        "  {:<width$}  {:<10}{:<10}{:<10}{:<12}{:<10}Unit",
        "Marker",
        "Mild",
        "Moderate",
        "High",
        "Penalties",
        "Dir",
        width = max_name + 2
    );
    println!("  {}", "-".repeat(max_name + 66));

    for marker in catalog.markers() {
        let dir = if marker.invert { "up" } else { "down" };
        println!(
            "  {:<width$}  {:<10}{:<10}{:<10}{:<12}{:<10}{}",
            marker.id,
            marker.bands.mild.to_string(),
            marker.bands.moderate.to_string(),
            marker.bands.high.to_string(),
            format!(
                "{}/{}/{}",
                marker.penalties.mild, marker.penalties.moderate, marker.penalties.high
            ),
            dir,
            marker.unit,
            width = max_name + 2
        );
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), VitalError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file defines the lifestyle markers the scoring engine evaluates.
When you run `vital score`, every answer is classified against its marker's
band thresholds and the matching penalty is subtracted from 100.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  markers       (array, required)   List of marker definitions (see below)

Each marker in the "markers" array:
  id            (string, required)  Unique key. Answer files, region
                                    baselines and demographic tables all
                                    reference markers by this id.
  label         (string, required)  Display name.
  unit          (string, required)  Unit for display (e.g., "units/week").
  invert        (bool, optional)    True when higher values are better
                                    (sleep, exercise). Default: false.
  bands         (object, required)  Thresholds {{mild, moderate, high}} as
                                    quoted decimal strings. Strictly
                                    ascending for normal markers, strictly
                                    descending when invert is true.
  penalties     (object, required)  Point costs {{mild, moderate, high}},
                                    non-negative and non-decreasing.
  baseline      (string, required)  Static fallback comparison value used
                                    when no region or age data applies.
  citation      (string, optional)  Reference id shown with recommendations.
  description   (string, optional)  One-line explanation for reports.

Example:
{{
  "name": "My custom catalog",
  "version": "1.0",
  "markers": [
    {{
      "id": "alcohol",
      "label": "Alcohol",
      "unit": "units/week",
      "bands": {{ "mild": "5", "moderate": "10", "high": "14" }},
      "penalties": {{ "mild": "2", "moderate": "5", "high": "8" }},
      "baseline": "6",
      "citation": "who-ghe-2018"
    }},
    {{
      "id": "sleep",
      "label": "Sleep",
      "unit": "hours/night",
      "invert": true,
      "bands": {{ "mild": "7", "moderate": "6", "high": "5" }},
      "penalties": {{ "mild": "2", "moderate": "5", "high": "8" }},
      "baseline": "7"
    }}
  ]
}}

Note: numeric values must be quoted strings, not bare numbers, to preserve
exact decimal precision (e.g., "2.5" not 2.5).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), VitalError> {
    let catalog = vital_core::catalog::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Markers: {}", catalog.len());

    // Advisory gaps, not errors.
    let mut warnings = Vec::new();
    for marker in catalog.markers() {
        if marker.citation.is_none() {
            warnings.push(format!("marker '{}' has no citation", marker.id));
        }
        if marker.description.is_none() {
            warnings.push(format!("marker '{}' has no description", marker.id));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
