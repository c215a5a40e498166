// src/lookup/mod.rs
use crate::richtext::StyledText;
use crate::utils::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One row of the backing table: a search key and its styled notes blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRow {
    pub key: String,
    pub notes: StyledText,
}

/// The lookup provider: a JSON file of keyed rows, loaded and validated
/// once per run. Keys are matched case-insensitively, first match wins.
pub struct LookupTable {
    rows: Vec<LookupRow>,
}

impl LookupTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let path = path.as_ref();
        tracing::info!("Loading lookup table from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, LookupError> {
        let rows: Vec<LookupRow> =
            serde_json::from_str(raw).map_err(|e| LookupError::Parse(e.to_string()))?;

        // Reject malformed style runs up front so the extractor can rely
        // on the StyledText invariants.
        for row in &rows {
            row.notes.validate().map_err(|e| LookupError::InvalidRow {
                key: row.key.clone(),
                source: e,
            })?;
        }

        tracing::debug!("Lookup table loaded with {} rows", rows.len());
        Ok(Self { rows })
    }

    pub fn find(&self, key: &str) -> Option<&StyledText> {
        let key = key.trim();
        self.rows
            .iter()
            .find(|row| row.key.trim().eq_ignore_ascii_case(key))
            .map(|row| &row.notes)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
