//! Tunable analysis parameters.
//!
//! The defaults reproduce the fixed behaviour of the heuristic pipeline (7-day related-message
//! window, 100-character evidence excerpts, up to 3 evidence lines, up to 8 milestones). Any of
//! them can be overridden from a TOML file:
//!
//! ```toml
//! related_window_days = 14
//! evidence_excerpt_chars = 160
//! ```
//!
//! Missing keys keep their defaults; unknown keys are rejected.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::utils::default_config_path;

/// Upper bound for `related_window_days` (about a century)
pub const MAX_RELATED_WINDOW_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Messages at most this many days before a decision count as related
    pub related_window_days: i64,
    /// Evidence excerpts are cut to this many characters
    pub evidence_excerpt_chars: usize,
    /// Maximum evidence lines per decision
    pub max_evidence_lines: usize,
    /// Messages must be strictly longer than this to serve as evidence
    pub min_evidence_content_chars: usize,
    /// Maximum milestone events per log
    pub max_milestones: usize,
    /// Trailing related messages scanned for extra reasoning lines
    pub recent_message_count: usize,
    /// Milestone titles quote this many characters of the message
    pub milestone_title_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            related_window_days: 7,
            evidence_excerpt_chars: 100,
            max_evidence_lines: 3,
            min_evidence_content_chars: 10,
            max_milestones: 8,
            recent_message_count: 3,
            milestone_title_chars: 60,
        }
    }
}

impl AnalysisConfig {
    /// Related-message look-back window; `None` when the day count doesn't fit a `Duration`
    pub fn related_window(&self) -> Option<Duration> {
        Duration::try_days(self.related_window_days)
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid analysis config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        info!("Loaded analysis config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config: an explicit path must exist, the default location is optional
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.related_window_days < 0 {
            bail!("related_window_days must not be negative (got {})", self.related_window_days);
        }
        if self.related_window_days > MAX_RELATED_WINDOW_DAYS {
            bail!(
                "related_window_days must be at most {} (got {})",
                MAX_RELATED_WINDOW_DAYS,
                self.related_window_days
            );
        }
        if self.evidence_excerpt_chars == 0 {
            bail!("evidence_excerpt_chars must be greater than 0");
        }
        Ok(())
    }
}
