use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::LogEntry;
use crate::utils::safe_open_file;

/// Failure to load a chat log. Nothing is committed when this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read (missing, symlink, too large, ...)
    #[error("{0:#}")]
    Read(anyhow::Error),
    /// The content is not valid JSON
    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Read and parse a chat-log export from disk
///
/// The file handle is released as soon as the content has been read (or on error).
pub fn parse_chat_log_file(path: &Path) -> Result<Vec<LogEntry>, LoadError> {
    let content = {
        let mut file = safe_open_file(path).map_err(LoadError::Read)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|e| {
            LoadError::Read(
                anyhow::Error::new(e)
                    .context(format!("Failed to read chat log: {}", path.display())),
            )
        })?;
        content
    };

    debug!(path = %path.display(), bytes = content.len(), "read chat log");
    parse_chat_log_str(&content)
}

/// Parse chat-log JSON text
///
/// Only invalid JSON is an error; a well-formed document of the wrong shape yields no entries.
pub fn parse_chat_log_str(json: &str) -> Result<Vec<LogEntry>, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(parse_chat_log_value(&value))
}

/// Extract entries from an already parsed JSON document
///
/// A non-array document is treated as an empty log. Array elements that do not deserialize as
/// a [`LogEntry`] are skipped and counted.
pub fn parse_chat_log_value(value: &Value) -> Vec<LogEntry> {
    let Some(items) = value.as_array() else {
        warn!("Chat log is not a JSON array; treating it as empty");
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut skipped_count = 0;

    for (idx, item) in items.iter().enumerate() {
        match LogEntry::deserialize(item) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                debug!("Skipping chat log element {}: {}", idx, e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        warn!("Parsed chat log: {} entries ({} skipped)", entries.len(), skipped_count);
    } else {
        info!("Parsed chat log: {} entries", entries.len());
    }

    entries
}
