//! Data models for chat-log analysis.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`LogEntry`] - One element of the uploaded chat-log array (message or decision)
//! - [`TimelineEvent`] - Annotated decision or milestone derived from the log
//! - [`DetailedAnalysis`] - Template-selected annotation, shaped by [`EventKind`]
//! - [`AnalysisStats`] - Aggregate figures for the Journey Overview
//!
//! Serialized field names are camelCase to match the export format; timestamps use a lenient
//! deserializer from the `parsers::deserializers` module.

pub mod log_entry;
pub mod stats;
pub mod timeline;

pub use log_entry::{EntryKind, LogEntry};
pub use stats::AnalysisStats;
pub use timeline::{DecisionAnalysis, DetailedAnalysis, EventKind, MilestoneAnalysis, TimelineEvent};
