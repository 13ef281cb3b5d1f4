//! JSON parsers for chat-log exports
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Element failures**: Array elements that don't match the [`LogEntry`] shape are counted,
//!   logged, and skipped. One bad element never breaks the whole log.
//!
//! - **Lenient fields**: Missing fields and unparseable timestamps are kept as `None`; the
//!   analysis treats them as empty text and falls back to generic annotations.
//!
//! - **Shape failures**: A well-formed document that isn't an array is an empty log, not an error.
//!
//! - **Hard failures**: Only unreadable files and invalid JSON surface as a typed [`LoadError`],
//!   so the caller can keep its previous state intact.
//!
//! [`LogEntry`]: crate::models::LogEntry

pub mod chat_log;
pub mod deserializers;

pub use chat_log::{LoadError, parse_chat_log_file, parse_chat_log_str, parse_chat_log_value};
