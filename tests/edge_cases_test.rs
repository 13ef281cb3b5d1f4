/// Edge case integration tests
///
/// These tests cover malformed elements, missing fields, odd timestamps and unusual content
mod common;

use care_journey_timeline::models::{DetailedAnalysis, EntryKind};
use care_journey_timeline::{AnalysisConfig, EventKind, Session, analyze, parse_chat_log_str};
use common::{ChatLogBuilder, LogEntryBuilder};
use serde_json::json;

fn load(path: &std::path::Path) -> Session {
    Session::empty().load_file(path, &AnalysisConfig::default()).unwrap()
}

#[test]
fn test_edge_case_empty_array() {
    let (_dir, path) = common::raw_log("[]");
    let session = load(&path);

    assert!(session.timeline().is_empty());
    assert_eq!(session.stats().care_phases, vec!["Comprehensive Care"]);
    assert!(session.stats().team_members.is_empty());
    assert!(session.stats().key_metrics.is_empty());
}

#[test]
fn test_edge_case_non_array_documents() {
    for content in [r#"{"entries": []}"#, "42", r#""text""#, "null", "true"] {
        let entries = parse_chat_log_str(content).unwrap();
        assert!(entries.is_empty(), "Expected empty log for {}", content);
    }
}

#[test]
fn test_edge_case_empty_file_is_invalid_json() {
    let (_dir, path) = common::raw_log("");
    let result = Session::empty().load_file(&path, &AnalysisConfig::default());
    assert!(result.unwrap_err().to_string().contains("Invalid JSON file"));
}

#[test]
fn test_edge_case_wrong_field_types_skipped() {
    let (_dir, path) = ChatLogBuilder::new()
        .with_raw(json!({"type": "message", "timestamp": "2025-01-01T00:00:00Z", "content": 42}))
        .with_raw(json!("a bare string"))
        .with_raw(json!(null))
        .with_entry(LogEntryBuilder::message("Ruby", "2025-01-02T00:00:00Z", "Test result is in"))
        .write();

    let session = load(&path);
    assert_eq!(session.raw_entries().len(), 1);
    assert_eq!(session.timeline().len(), 1);
}

#[test]
fn test_edge_case_missing_fields_degrade_to_empty_text() {
    let (_dir, path) = ChatLogBuilder::new()
        .with_entry(
            LogEntryBuilder::decision("", "2025-01-05T00:00:00Z", "", "")
                .without("author")
                .without("title")
                .without("details"),
        )
        .write();

    let session = load(&path);
    let event = &session.timeline()[0];
    assert_eq!(event.kind, EventKind::Decision);
    assert_eq!(event.title, "");
    assert_eq!(event.author, "");
    assert!(session.stats().team_members.is_empty());

    let DetailedAnalysis::Decision(analysis) = &event.detailed_analysis else {
        panic!("expected decision analysis");
    };
    assert_eq!(analysis.reasoning, "• Clinical decision based on comprehensive health assessment");
    assert_eq!(analysis.impact, "• Positive impact on overall health outcomes expected");
    assert_eq!(
        analysis.context,
        "• Decision made within comprehensive care coordination framework"
    );
}

#[test]
fn test_edge_case_undated_entries_never_become_events() {
    let (_dir, path) = ChatLogBuilder::new()
        .with_entry(LogEntryBuilder::decision("A", "", "Medication change", "").without("timestamp"))
        .with_entry(LogEntryBuilder::message("B", "not a date", "Test result pending"))
        .with_entry(LogEntryBuilder::message("C", "2025-01-03T00:00:00Z", "Blood pressure is 130/85"))
        .write();

    let session = load(&path);
    assert_eq!(session.raw_entries().len(), 3);
    assert_eq!(session.timeline().len(), 1);
    assert_eq!(session.timeline()[0].author, "C");
    // Undated content still counts towards key metrics
    assert!(session.stats().key_metrics.contains(&"blood pressure".to_string()));
}

#[test]
fn test_edge_case_timestamp_formats() {
    let entries = parse_chat_log_str(
        r#"[
            {"type":"decision","timestamp":"2025-01-01T10:00:00+07:00","title":"Offset"},
            {"type":"decision","timestamp":"2025-01-01T10:00:00","title":"Naive"},
            {"type":"decision","timestamp":"2025-01-01","title":"Date only"},
            {"type":"decision","timestamp":1735725600000,"title":"Millis"}
        ]"#,
    )
    .unwrap();

    let analysis = analyze(&entries, &AnalysisConfig::default());
    let titles: Vec<&str> = analysis.timeline.iter().map(|e| e.title.as_str()).collect();
    // 03:00Z, 10:00Z, 00:00Z, 10:00Z
    assert_eq!(titles, vec!["Date only", "Offset", "Naive", "Millis"]);
}

#[test]
fn test_edge_case_unknown_types_ignored() {
    let (_dir, path) = ChatLogBuilder::new()
        .with_entry(LogEntryBuilder::message("A", "2025-01-01T00:00:00Z", "Test result").with_type("note"))
        .with_entry(
            LogEntryBuilder::message("B", "2025-01-02T00:00:00Z", "Medication plan")
                .with_type("audio_message"),
        )
        .write();

    let session = load(&path);
    assert_eq!(session.raw_entries()[0].kind, EntryKind::Other);
    assert_eq!(session.timeline().len(), 1);
    assert_eq!(session.timeline()[0].author, "B");
}

#[test]
fn test_edge_case_unicode_truncation() {
    let content = "Résultat du test: tension artérielle élevée 🩺 ".repeat(5);
    let (_dir, path) = ChatLogBuilder::new()
        .with_entry(LogEntryBuilder::message("Zoë", "2025-01-01T00:00:00Z", &content))
        .with_entry(LogEntryBuilder::decision(
            "Dr. Warren",
            "2025-01-02T00:00:00Z",
            "Review",
            "",
        ))
        .write();

    let session = load(&path);
    let milestone = &session.timeline()[0];
    let quoted = milestone.title.strip_prefix("Zoë: ").unwrap().strip_suffix("...").unwrap();
    assert_eq!(quoted.chars().count(), 60);

    let DetailedAnalysis::Decision(analysis) = &session.timeline()[1].detailed_analysis else {
        panic!("expected decision analysis");
    };
    let evidence = analysis.evidence.as_deref().unwrap();
    let excerpt = evidence.strip_prefix("• Zoë: \"").unwrap().strip_suffix("...\"").unwrap();
    assert_eq!(excerpt.chars().count(), 100);
}

#[test]
fn test_edge_case_milestone_cap() {
    let mut builder = ChatLogBuilder::new();
    for day in 1..=12 {
        builder = builder.with_entry(LogEntryBuilder::message(
            "Ruby",
            &format!("2025-01-{:02}T08:00:00Z", day),
            &format!("Medication check {}", day),
        ));
    }
    let (_dir, path) = builder.write();

    let session = load(&path);
    assert_eq!(session.stats().milestones, 8);
    assert_eq!(session.timeline().last().unwrap().summary, "Medication check 8");
}

#[test]
fn test_edge_case_short_messages_not_evidence() {
    let (_dir, path) = ChatLogBuilder::new()
        .with_entry(LogEntryBuilder::message("Ruby", "2025-01-01T00:00:00Z", "ok thanks"))
        .with_entry(LogEntryBuilder::message("Rohan", "2025-01-01T01:00:00Z", "0123456789"))
        .with_entry(LogEntryBuilder::decision("Dr. Warren", "2025-01-02T00:00:00Z", "Review", ""))
        .write();

    let session = load(&path);
    let DetailedAnalysis::Decision(analysis) = &session.timeline()[0].detailed_analysis else {
        panic!("expected decision analysis");
    };
    assert_eq!(analysis.evidence, None);
}

#[test]
fn test_edge_case_equal_timestamps_keep_decision_first() {
    let (_dir, path) = ChatLogBuilder::new()
        .with_entry(LogEntryBuilder::message("A", "2025-01-01T00:00:00Z", "Treatment begins"))
        .with_entry(LogEntryBuilder::decision("B", "2025-01-01T00:00:00Z", "Exercise plan", ""))
        .write();

    let session = load(&path);
    let kinds: Vec<EventKind> = session.timeline().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EventKind::Decision, EventKind::Milestone]);
}
