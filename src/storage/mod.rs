// src/storage/mod.rs
use crate::richtext::StyledText;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-section result recorded in the run metadata file.
#[derive(Debug, Serialize)]
pub struct SectionOutcome {
    pub name: String,
    pub found: bool,
    pub text_len: usize,
    pub run_count: usize,
}

/// The placement sink: each section lands in `<base>/<key>/<section>.json`,
/// and an absent section clears any stale file at that destination.
pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory holding all destinations for one lookup key.
    pub fn key_dir(&self, key: &str) -> PathBuf {
        self.base_dir.join(slug(key))
    }

    fn section_path(&self, key: &str, section_name: &str) -> PathBuf {
        self.key_dir(key).join(format!("{}.json", slug(section_name)))
    }

    /// Writes an extracted section to its destination file.
    pub fn save_section(
        &self,
        key: &str,
        section_name: &str,
        content: &StyledText,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.key_dir(key);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = self.section_path(key, section_name);
        let json = serde_json::to_string_pretty(content)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved section to {}", file_path.display());
        Ok(file_path)
    }

    /// Removes the destination file for a section that was not found,
    /// so a stale result from an earlier run never survives. Returns
    /// whether a file was actually removed.
    pub fn clear_section(&self, key: &str, section_name: &str) -> Result<bool, StorageError> {
        let file_path = self.section_path(key, section_name);
        if file_path.exists() {
            fs::remove_file(&file_path).map_err(StorageError::IoError)?;
            tracing::info!("Cleared stale section at {}", file_path.display());
            return Ok(true);
        }
        Ok(false)
    }

    /// Saves a JSON summary of one extraction run next to the sections.
    pub fn save_run_metadata(
        &self,
        key: &str,
        outcomes: &[SectionOutcome],
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.key_dir(key);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join("run_meta.json");

        let metadata = serde_json::json!({
            "key": key,
            "sections_total": outcomes.len(),
            "sections_found": outcomes.iter().filter(|o| o.found).count(),
            "sections": outcomes,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

/// Flattens a key into a filesystem-safe directory name.
pub fn slug(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
