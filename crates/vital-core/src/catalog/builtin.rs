use crate::catalog::schema::DemographicsDef;
use crate::catalog::{Catalog, RegionTable};
use crate::error::VitalError;

const MARKERS_JSON: &str = include_str!("../../../../catalog/markers.json");
const REGIONS_JSON: &str = include_str!("../../../../catalog/regions.json");
const DEMOGRAPHICS_JSON: &str = include_str!("../../../../catalog/demographics.json");

/// Region id used when the caller does not pick one.
pub const DEFAULT_REGION: &str = "global";

/// Load the built-in marker catalog.
pub fn default_catalog() -> Result<Catalog, VitalError> {
    crate::catalog::parse_catalog_str(MARKERS_JSON)
}

/// Load the built-in region table, validated against the given catalog.
pub fn default_regions(catalog: &Catalog) -> Result<RegionTable, VitalError> {
    crate::catalog::parse_regions_str(REGIONS_JSON, catalog)
}

/// Load the built-in demographic tables, validated against the given catalog.
pub fn default_demographics(catalog: &Catalog) -> Result<DemographicsDef, VitalError> {
    crate::catalog::parse_demographics_str(DEMOGRAPHICS_JSON, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = default_catalog().unwrap();
        assert!(catalog.contains("alcohol"));
        assert!(catalog.contains("sleep"));
        assert!(catalog.len() >= 8);
    }

    #[test]
    fn test_builtin_regions_load() {
        let catalog = default_catalog().unwrap();
        let regions = default_regions(&catalog).unwrap();
        assert!(regions.contains_key(DEFAULT_REGION));
        assert!(regions.len() >= 2);
    }

    #[test]
    fn test_builtin_demographics_load() {
        let catalog = default_catalog().unwrap();
        let tables = default_demographics(&catalog).unwrap();
        assert!(tables.age_baselines.contains_key("alcohol"));
        assert!(tables.gender_adjustments.contains_key("alcohol"));
    }
}
