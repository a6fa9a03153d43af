//! Candidate catalog import/export.
//!
//! A catalog is a JSON array of player records, as exported from the data
//! store or the archive's backup feature. Individual records are lenient
//! (missing fields, `null`s and malformed keywords degrade to empty values);
//! only a document that is not an array is rejected.

use std::path::Path;

use crate::core::Candidate;
use crate::error::{Result, SearchEngineError};

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<Vec<Candidate>> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if !value.is_array() {
        return Err(SearchEngineError::InvalidCatalog(
            "expected a JSON array of players".to_string(),
        ));
    }

    let candidates: Vec<Candidate> = serde_json::from_value(value)?;
    tracing::debug!("Parsed catalog with {} players", candidates.len());
    Ok(candidates)
}

/// Read a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Candidate>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    tracing::info!("Loading catalog from {}", path.as_ref().display());
    parse_catalog(&content)
}

/// Serialize a catalog as pretty JSON.
pub fn export_catalog(candidates: &[Candidate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(candidates)?)
}
