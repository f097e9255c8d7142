use vital_core::error::VitalError;
use vital_core::score::Report;

pub fn print(report: &Report) -> Result<(), VitalError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
