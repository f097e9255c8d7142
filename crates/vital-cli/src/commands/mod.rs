pub mod baseline;
pub mod catalog;
pub mod score;

use std::path::PathBuf;
use vital_core::catalog::builtin;
use vital_core::catalog::schema::DemographicsDef;
use vital_core::catalog::{Catalog, RegionTable};
use vital_core::error::VitalError;
use vital_core::model::AgeRange;

/// Load catalog, regions and demographic tables, preferring a custom
/// catalog file when given. Regions and demographics always come from the
/// built-in data and are validated against whichever catalog is in use.
pub fn load_data(
    catalog_file: Option<PathBuf>,
) -> Result<(Catalog, RegionTable, DemographicsDef), VitalError> {
    let catalog = match catalog_file {
        Some(path) => vital_core::catalog::load_catalog(&path)?,
        None => builtin::default_catalog()?,
    };
    let regions = builtin::default_regions(&catalog)?;
    let tables = builtin::default_demographics(&catalog)?;
    Ok((catalog, regions, tables))
}

pub fn parse_age(s: &str) -> Result<AgeRange, VitalError> {
    AgeRange::from_str_loose(s).ok_or_else(|| {
        VitalError::InvalidSelection(format!(
            "unknown age bracket '{}'. Expected one of: 18-29, 30-39, 40-49, 50-59, 60-69, 70+",
            s
        ))
    })
}
