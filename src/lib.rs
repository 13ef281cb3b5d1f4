//! Care Journey Timeline - decisions and milestones from healthcare chat logs
//!
//! This library turns a JSON chat-log export (an array of messages and decisions exchanged
//! between a patient and a care team) into an annotated timeline:
//!
//! - Parsing the export leniently, skipping malformed elements
//! - Extracting decision and milestone events in chronological order
//! - Annotating each event with template text chosen by keyword rules
//! - Aggregating Journey Overview statistics
//! - Filtering, exporting, and browsing the result (CLI and TUI)
//!
//! # Example
//!
//! ```
//! use care_journey_timeline::{AnalysisConfig, analyze, parse_chat_log_str};
//!
//! let json = r#"[
//!     {"type": "decision", "timestamp": "2025-01-10T09:00:00Z", "author": "Dr. Warren",
//!      "title": "Start blood pressure medication", "details": "Low dose"}
//! ]"#;
//!
//! let entries = parse_chat_log_str(json)?;
//! let analysis = analyze(&entries, &AnalysisConfig::default());
//! assert_eq!(analysis.stats.decisions, 1);
//! # Ok::<(), care_journey_timeline::LoadError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod session;
pub mod tui;
pub mod utils;

pub use analysis::{Analysis, aggregate_stats, analyze, extract_timeline};
pub use clipboard::{copy_event_report, copy_to_clipboard};
pub use config::AnalysisConfig;
pub use export::ExportDocument;
pub use filters::{FilterType, ViewFilters};
pub use models::{AnalysisStats, EventKind, LogEntry, TimelineEvent};
pub use parsers::{LoadError, parse_chat_log_file, parse_chat_log_str};
pub use session::Session;
pub use utils::format_path_with_tilde;
