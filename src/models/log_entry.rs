use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a chat-log entry as written by the export script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Message,
    AudioMessage,
    Decision,
    /// Any other (or missing) `type` value; ignored by the extractor
    #[default]
    #[serde(other)]
    Other,
}

/// One element of the uploaded chat-log array
///
/// Every field is optional: a missing field degrades to empty text during analysis instead of
/// rejecting the entry. Only values of the wrong JSON type (e.g. a numeric `content`) make the
/// whole element fail to deserialize, in which case the parser skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub referenced_message_ids: Vec<String>,
}

impl LogEntry {
    /// Plain or audio message
    pub fn is_message(&self) -> bool {
        matches!(self.kind, EntryKind::Message | EntryKind::AudioMessage)
    }

    pub fn is_decision(&self) -> bool {
        self.kind == EntryKind::Decision
    }

    /// Message body, empty when absent
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Author name, empty when absent
    pub fn author_name(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn details_text(&self) -> &str {
        self.details.as_deref().unwrap_or("")
    }
}
