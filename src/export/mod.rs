//! Analysis export.
//!
//! The export document mirrors the on-screen state: the full timeline, its statistics, and the
//! filters active at export time.
//!
//! ```json
//! {
//!   "timestamp": "2025-03-01T10:15:00Z",
//!   "analysis": [ { "timestamp": "...", "title": "...", "type": "decision", ... } ],
//!   "stats": { "totalEvents": 1, "decisions": 1, ... },
//!   "filters": { "searchTerm": "", "filterType": "all" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::filters::ViewFilters;
use crate::models::{AnalysisStats, TimelineEvent};

const EXPORT_FILE_PREFIX: &str = "care-journey-analysis";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Export time
    pub timestamp: DateTime<Utc>,
    pub analysis: Vec<TimelineEvent>,
    pub stats: AnalysisStats,
    pub filters: ViewFilters,
}

impl ExportDocument {
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize analysis export")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse analysis export")
    }

    /// Default file name for this document
    pub fn default_filename(&self) -> String {
        default_export_filename(self.timestamp.date_naive())
    }
}

/// `care-journey-analysis-YYYY-MM-DD.json`
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("{}-{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Resolve the output path: explicit path, or the default name in the current directory
pub fn resolve_output_path(output: Option<&Path>, doc: &ExportDocument) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(doc.default_filename()),
    }
}

/// Write the document as pretty-printed JSON
pub fn write_export(doc: &ExportDocument, path: &Path) -> Result<()> {
    let json = doc.to_json_pretty()?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    info!(
        "Exported {} events to {}",
        doc.analysis.len(),
        path.display()
    );
    Ok(())
}
