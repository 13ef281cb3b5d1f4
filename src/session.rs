//! Session state.
//!
//! A [`Session`] is an immutable value holding one loaded log, its analysis, and the active
//! view filters. Every user action is a transition taking `&self` and returning a new session,
//! so a failed action simply leaves the caller holding the previous one. The loaded data is
//! shared between successive sessions through `Arc`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analysis::{Analysis, analyze};
use crate::config::AnalysisConfig;
use crate::export::ExportDocument;
use crate::filters::{FilterExpr, FilterType, ViewFilters, apply_filters, parse_filter};
use crate::models::{AnalysisStats, LogEntry, TimelineEvent};
use crate::parsers::{parse_chat_log_file, parse_chat_log_str};

pub use crate::parsers::LoadError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Query {
    text: String,
    expr: FilterExpr,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    source: Option<PathBuf>,
    raw_entries: Arc<[LogEntry]>,
    analysis: Arc<Analysis>,
    filters: ViewFilters,
    query: Query,
}

impl Session {
    /// Session with nothing loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Analyse already parsed entries
    pub fn from_entries(entries: Vec<LogEntry>, config: &AnalysisConfig) -> Self {
        let analysis = analyze(&entries, config);
        Self {
            source: None,
            raw_entries: entries.into(),
            analysis: Arc::new(analysis),
            filters: ViewFilters::default(),
            query: Query::default(),
        }
    }

    /// Replace the loaded log with `json`; filters are reset
    pub fn load_str(&self, json: &str, config: &AnalysisConfig) -> Result<Session, LoadError> {
        let entries = parse_chat_log_str(json)?;
        Ok(Self::from_entries(entries, config))
    }

    /// Replace the loaded log with the file at `path`; filters are reset
    pub fn load_file(&self, path: &Path, config: &AnalysisConfig) -> Result<Session, LoadError> {
        let entries = parse_chat_log_file(path)?;
        let mut session = Self::from_entries(entries, config);
        session.source = Some(path.to_path_buf());
        debug!(
            "Replaced session ({} events) with {} ({} events)",
            self.timeline().len(),
            path.display(),
            session.timeline().len()
        );
        Ok(session)
    }

    pub fn with_search_term(&self, search_term: impl Into<String>) -> Session {
        Session {
            filters: ViewFilters { search_term: search_term.into(), ..self.filters.clone() },
            ..self.clone()
        }
    }

    pub fn with_filter_type(&self, filter_type: FilterType) -> Session {
        Session { filters: ViewFilters { filter_type, ..self.filters.clone() }, ..self.clone() }
    }

    /// all → decision → milestone → all
    pub fn cycle_filter_type(&self) -> Session {
        self.with_filter_type(self.filters.filter_type.next())
    }

    /// Apply a `field:value` query; an invalid query leaves `self` unchanged
    pub fn with_query(&self, text: &str) -> Result<Session> {
        let expr = parse_filter(text)?;
        Ok(Session {
            query: Query { text: text.trim().to_string(), expr },
            ..self.clone()
        })
    }

    /// Events passing both the view filters and the query, in timeline order
    pub fn visible_events(&self) -> Vec<&TimelineEvent> {
        apply_filters(self.filters.apply(self.timeline()), &self.query.expr)
    }

    /// Export document stamped with `now`; the full timeline is exported
    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            timestamp: now,
            analysis: self.analysis.timeline.clone(),
            stats: self.analysis.stats.clone(),
            filters: self.filters.clone(),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn raw_entries(&self) -> &[LogEntry] {
        &self.raw_entries
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.analysis.timeline
    }

    pub fn stats(&self) -> &AnalysisStats {
        &self.analysis.stats
    }

    pub fn filters(&self) -> &ViewFilters {
        &self.filters
    }

    pub fn query_text(&self) -> &str {
        &self.query.text
    }
}
