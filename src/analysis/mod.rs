//! Heuristic chat-log analysis.
//!
//! The pipeline is synchronous and pure:
//!
//! 1. [`extract_timeline`] picks decisions and milestone messages out of the log and orders them
//! 2. [`annotator`] attaches template text to each event, selected from the [`rules`] tables
//! 3. [`aggregate_stats`] summarises the result for the Journey Overview
//!
//! [`analyze`] runs all three steps.

pub mod annotator;
pub mod extractor;
pub mod rules;
pub mod stats;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AnalysisConfig;
use crate::models::{AnalysisStats, LogEntry, TimelineEvent};

pub use extractor::extract_timeline;
pub use stats::aggregate_stats;

/// Output of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub timeline: Vec<TimelineEvent>,
    pub stats: AnalysisStats,
}

/// Extract the timeline and aggregate its statistics
pub fn analyze(entries: &[LogEntry], config: &AnalysisConfig) -> Analysis {
    let timeline = extract_timeline(entries, config);
    let stats = aggregate_stats(&timeline, entries);

    info!(
        "Analysis complete: {} events ({} decisions, {} milestones)",
        stats.total_events, stats.decisions, stats.milestones
    );

    Analysis { timeline, stats }
}
