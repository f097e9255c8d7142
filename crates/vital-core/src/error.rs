use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VitalError {
    #[error("failed to load data file {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog data: {0}")]
    CatalogInvalid(String),

    #[error("marker '{0}' is not present in the catalog")]
    UnknownMarker(String),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("invalid demographic selection: {0}")]
    InvalidSelection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
