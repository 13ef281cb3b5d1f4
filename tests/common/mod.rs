//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for a chat-log export written to a temporary directory
pub struct ChatLogBuilder {
    temp_dir: TempDir,
    entries: Vec<Value>,
}

impl ChatLogBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, entries: Vec::new() }
    }

    /// Directory holding the log (also a convenient export target)
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_entry(mut self, entry: LogEntryBuilder) -> Self {
        self.entries.push(entry.to_json());
        self
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = LogEntryBuilder>) -> Self {
        self.entries.extend(entries.into_iter().map(|e| e.to_json()));
        self
    }

    /// Add an arbitrary JSON element (malformed entries, wrong field types, ...)
    pub fn with_raw(mut self, value: Value) -> Self {
        self.entries.push(value);
        self
    }

    /// Serialized array
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.entries).expect("Failed to serialize chat log")
    }

    /// Write `chat_log.json` and return its path together with the owning temp dir
    pub fn write(self) -> (TempDir, PathBuf) {
        let content = self.to_json();
        write_raw(self.temp_dir, &content)
    }
}

impl Default for ChatLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw text as `chat_log.json` inside `dir`
pub fn write_raw(dir: TempDir, content: &str) -> (TempDir, PathBuf) {
    let path = dir.path().join("chat_log.json");
    fs::write(&path, content).expect("Failed to write chat log");
    (dir, path)
}

/// Write raw text to a fresh temp dir
pub fn raw_log(content: &str) -> (TempDir, PathBuf) {
    write_raw(TempDir::new().expect("Failed to create temp dir"), content)
}

/// Builder for one chat-log element
pub struct LogEntryBuilder {
    fields: Map<String, Value>,
}

impl LogEntryBuilder {
    pub fn message(author: &str, timestamp: &str, content: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("type".into(), json!("message"));
        fields.insert("author".into(), json!(author));
        fields.insert("timestamp".into(), json!(timestamp));
        fields.insert("content".into(), json!(content));
        Self { fields }
    }

    pub fn decision(author: &str, timestamp: &str, title: &str, details: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("type".into(), json!("decision"));
        fields.insert("author".into(), json!(author));
        fields.insert("timestamp".into(), json!(timestamp));
        fields.insert("title".into(), json!(title));
        fields.insert("details".into(), json!(details));
        Self { fields }
    }

    pub fn with_type(mut self, kind: &str) -> Self {
        self.fields.insert("type".into(), json!(kind));
        self
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// A small journey: two decisions and a handful of messages over two weeks
pub fn sample_journey() -> ChatLogBuilder {
    ChatLogBuilder::new().with_entries([
        LogEntryBuilder::message(
            "Rohan",
            "2025-01-02T08:00:00Z",
            "My blood pressure readings have been high this week",
        ),
        LogEntryBuilder::message(
            "Dr. Warren",
            "2025-01-03T09:30:00Z",
            "Let's schedule a diagnostic test for your cholesterol",
        ),
        LogEntryBuilder::decision(
            "Dr. Warren",
            "2025-01-05T10:00:00Z",
            "Start blood pressure medication",
            "Low dose, reassess in two weeks",
        ),
        LogEntryBuilder::message("Ruby", "2025-01-06T11:00:00Z", "Good morning!"),
        LogEntryBuilder::message(
            "Carla",
            "2025-01-12T14:00:00Z",
            "Sleep has improved since the new treatment plan",
        ),
        LogEntryBuilder::decision(
            "Carla",
            "2025-01-15T16:00:00Z",
            "Nutrition Plan Update",
            "Travel-friendly meals for the trip",
        ),
    ])
}
