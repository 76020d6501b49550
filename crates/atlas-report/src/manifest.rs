use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::charts::write_json;

/// Record of one export run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    /// RFC 3339 timestamp of the export.
    pub generated_at: String,
    /// Endpoint or file the records came from.
    pub source: String,
    pub rows: usize,
    /// Set when the source failed and the export covers an empty table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_error: Option<String>,
    pub files: Vec<PathBuf>,
}

impl ExportManifest {
    #[must_use]
    pub fn new(source: impl Into<String>, rows: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            source: source.into(),
            rows,
            source_error: None,
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_source_error(mut self, error: Option<String>) -> Self {
        self.source_error = error;
        self
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }
}

/// Write `manifest.json` into `output_dir` and return its path.
pub fn write_manifest(output_dir: &Path, manifest: &ExportManifest) -> Result<PathBuf> {
    let path = output_dir.join("manifest.json");
    write_json(&path, manifest)?;
    Ok(path)
}
