use std::path::PathBuf;
use vital_core::error::VitalError;
use vital_core::model::{AnswerSet, Gender, Session};

use crate::output;

#[allow(clippy::too_many_arguments)]
pub fn run(
    answers_file: PathBuf,
    region: &str,
    age: &str,
    gender: &str,
    catalog_file: Option<PathBuf>,
    limit: usize,
    output_format: &str,
    show_all: bool,
    verbose: bool,
) -> Result<(), VitalError> {
    let (catalog, regions, tables) = super::load_data(catalog_file)?;

    let age = super::parse_age(age)?;
    let gender = Gender::from_str_loose(gender);

    let json = std::fs::read_to_string(&answers_file)?;
    let answers: AnswerSet = serde_json::from_str(&json)?;

    let session = Session {
        region: region.to_string(),
        age,
        gender,
        answers,
    };

    let report = vital_core::build_report(&session, &catalog, &regions, &tables, limit)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report, show_all, verbose),
    }

    Ok(())
}
