use vital_core::baseline;
use vital_core::error::VitalError;
use vital_core::model::Gender;
use vital_core::score;

pub fn run(
    region_id: &str,
    age: &str,
    gender: &str,
    output_format: &str,
) -> Result<(), VitalError> {
    let (catalog, regions, tables) = super::load_data(None)?;

    let age = super::parse_age(age)?;
    let gender = Gender::from_str_loose(gender);

    let region = regions
        .get(region_id)
        .ok_or_else(|| VitalError::UnknownRegion(region_id.to_string()))?;

    let group_answers = baseline::baseline_answers(&catalog, &tables, region, age, gender);
    let group_outcome = score::score(&group_answers, &catalog)?;

    if output_format == "json" {
        let rows: Vec<serde_json::Value> = catalog
            .markers()
            .iter()
            .map(|m| {
                serde_json::json!({
                    "marker_id": m.id,
                    "label": m.label,
                    "unit": m.unit,
                    "baseline": group_answers[&m.id].to_string(),
                })
            })
            .collect();
        let payload = serde_json::json!({
            "region": region_id,
            "region_label": region.label,
            "age": age.to_string(),
            "gender": gender.to_string(),
            "baselines": rows,
            "group_score": group_outcome.score.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Group baselines: {} / {} / {}\n",
        region.label, age, gender
    );

    let max_name = catalog
        .markers()
        .iter()
        .map(|m| m.label.len())
        .max()
        .unwrap_or(10);

    for marker in catalog.markers() {
        println!(
            "  {:<width$}  {} {}",
            marker.label,
            group_answers[&marker.id],
            marker.unit,
            width = max_name
        );
    }

    println!("\n  Expected group score: {} / 100", group_outcome.score);

    Ok(())
}
