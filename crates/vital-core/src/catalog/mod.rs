pub mod builtin;
pub mod schema;

use crate::error::VitalError;
use crate::model::AgeRange;
use rust_decimal::Decimal;
use schema::{CatalogDef, DemographicsDef, Marker, Region};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Map of region id -> region data, loaded once at startup.
pub type RegionTable = BTreeMap<String, Region>;

/// Validated, immutable marker catalog with id-indexed lookup.
///
/// Constructed once from a [`CatalogDef`]; marker order is preserved and
/// determines deduction order in score output.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub name: String,
    pub version: String,
    markers: Vec<Marker>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Validate a parsed definition and build the indexed catalog.
    pub fn from_def(def: CatalogDef) -> Result<Catalog, VitalError> {
        validate_catalog(&def)?;
        let index = def
            .markers
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();
        Ok(Catalog {
            name: def.name,
            version: def.version,
            markers: def.markers,
            index,
        })
    }

    /// Markers in catalog order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a marker by id. An unknown id signals drift between the
    /// catalog and whatever referenced it, so it is a hard error.
    pub fn get(&self, id: &str) -> Result<&Marker, VitalError> {
        self.index
            .get(id)
            .map(|&i| &self.markers[i])
            .ok_or_else(|| VitalError::UnknownMarker(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Load a marker catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, VitalError> {
    let content = std::fs::read_to_string(path).map_err(|e| VitalError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: CatalogDef =
        serde_json::from_str(&content).map_err(|e| VitalError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Catalog::from_def(def)
}

/// Parse a marker catalog from a JSON string.
pub fn parse_catalog_str(json: &str) -> Result<Catalog, VitalError> {
    let def: CatalogDef = serde_json::from_str(json).map_err(VitalError::Json)?;
    Catalog::from_def(def)
}

/// Validate that a catalog definition is well-formed.
pub fn validate_catalog(def: &CatalogDef) -> Result<(), VitalError> {
    if def.markers.is_empty() {
        return Err(VitalError::CatalogInvalid(
            "markers must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for marker in &def.markers {
        if marker.id.is_empty() {
            return Err(VitalError::CatalogInvalid(
                "marker id must not be empty".into(),
            ));
        }
        if !seen.insert(marker.id.as_str()) {
            return Err(VitalError::CatalogInvalid(format!(
                "duplicate marker id '{}'",
                marker.id
            )));
        }

        // Thresholds run mild -> moderate -> high in the direction the
        // marker is read: ascending for consumption, descending for benefit.
        let bands = &marker.bands;
        let ordered = if marker.invert {
            bands.mild > bands.moderate && bands.moderate > bands.high
        } else {
            bands.mild < bands.moderate && bands.moderate < bands.high
        };
        if !ordered {
            return Err(VitalError::CatalogInvalid(format!(
                "marker '{}' has mis-ordered band thresholds for its direction",
                marker.id
            )));
        }

        let p = &marker.penalties;
        if p.mild < Decimal::ZERO {
            return Err(VitalError::CatalogInvalid(format!(
                "marker '{}' has a negative penalty",
                marker.id
            )));
        }
        if !(p.mild <= p.moderate && p.moderate <= p.high) {
            return Err(VitalError::CatalogInvalid(format!(
                "marker '{}' has penalties that decrease with severity",
                marker.id
            )));
        }
    }

    Ok(())
}

/// Load a region table from a JSON file and validate it against the catalog.
pub fn load_regions(path: &Path, catalog: &Catalog) -> Result<RegionTable, VitalError> {
    let content = std::fs::read_to_string(path).map_err(|e| VitalError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_regions_str(&content, catalog)
}

/// Parse a region table from a JSON string and validate it.
pub fn parse_regions_str(json: &str, catalog: &Catalog) -> Result<RegionTable, VitalError> {
    let regions: RegionTable = serde_json::from_str(json).map_err(VitalError::Json)?;
    validate_regions(&regions, catalog)?;
    Ok(regions)
}

/// Every region baseline must name a marker the catalog knows.
pub fn validate_regions(regions: &RegionTable, catalog: &Catalog) -> Result<(), VitalError> {
    for (region_id, region) in regions {
        for marker_id in region.baselines.keys() {
            if !catalog.contains(marker_id) {
                return Err(VitalError::CatalogInvalid(format!(
                    "region '{}' has a baseline for unknown marker '{}'",
                    region_id, marker_id
                )));
            }
        }
    }
    Ok(())
}

/// Load demographic tables from a JSON file and validate them against the
/// catalog.
pub fn load_demographics(path: &Path, catalog: &Catalog) -> Result<DemographicsDef, VitalError> {
    let content = std::fs::read_to_string(path).map_err(|e| VitalError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_demographics_str(&content, catalog)
}

/// Parse demographic tables from a JSON string and validate them.
pub fn parse_demographics_str(
    json: &str,
    catalog: &Catalog,
) -> Result<DemographicsDef, VitalError> {
    let def: DemographicsDef = serde_json::from_str(json).map_err(VitalError::Json)?;
    validate_demographics(&def, catalog)?;
    Ok(def)
}

/// Demographic tables may cover fewer brackets or markers than exist, but
/// never more, and never markers outside the catalog.
pub fn validate_demographics(
    def: &DemographicsDef,
    catalog: &Catalog,
) -> Result<(), VitalError> {
    for (marker_id, values) in &def.age_baselines {
        if !catalog.contains(marker_id) {
            return Err(VitalError::CatalogInvalid(format!(
                "age table references unknown marker '{}'",
                marker_id
            )));
        }
        if values.len() > AgeRange::ALL.len() {
            return Err(VitalError::CatalogInvalid(format!(
                "age table for '{}' has {} entries, more than the {} brackets",
                marker_id,
                values.len(),
                AgeRange::ALL.len()
            )));
        }
    }

    for marker_id in def.gender_adjustments.keys() {
        if !catalog.contains(marker_id) {
            return Err(VitalError::CatalogInvalid(format!(
                "gender adjustments reference unknown marker '{}'",
                marker_id
            )));
        }
    }

    Ok(())
}
