/// End-to-end tests: chat-log file → session → timeline, stats and export
mod common;

use care_journey_timeline::models::DetailedAnalysis;
use care_journey_timeline::{
    AnalysisConfig, EventKind, ExportDocument, FilterType, Session, analyze, parse_chat_log_file,
    parse_chat_log_str,
};
use chrono::{TimeZone, Utc};
use common::{LogEntryBuilder, sample_journey};

fn load(path: &std::path::Path) -> Session {
    Session::empty().load_file(path, &AnalysisConfig::default()).unwrap()
}

#[test]
fn test_sample_journey_timeline() {
    let (_dir, path) = sample_journey().write();
    let session = load(&path);

    let timeline = session.timeline();
    assert_eq!(timeline.len(), 5);

    let kinds: Vec<EventKind> = timeline.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Milestone,
            EventKind::Milestone,
            EventKind::Decision,
            EventKind::Milestone,
            EventKind::Decision,
        ]
    );

    assert_eq!(timeline[0].title, "Rohan: My blood pressure readings have been high this week...");
    assert_eq!(timeline[2].title, "Start blood pressure medication");
    assert_eq!(timeline[2].summary, "Low dose, reassess in two weeks");
    assert_eq!(timeline[2].author, "Dr. Warren");
}

#[test]
fn test_sample_journey_stats() {
    let (_dir, path) = sample_journey().write();
    let session = load(&path);
    let stats = session.stats();

    assert_eq!(stats.total_events, 5);
    assert_eq!(stats.decisions, 2);
    assert_eq!(stats.milestones, 3);
    assert_eq!(stats.time_span.as_deref(), Some("14 days"));
    assert_eq!(
        stats.team_members.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["Carla", "Dr. Warren", "Rohan"]
    );
    assert_eq!(stats.key_metrics, vec!["blood pressure", "sleep", "cholesterol"]);
    assert_eq!(stats.care_phases, vec!["Diagnostic Phase", "Treatment Phase"]);
}

#[test]
fn test_decision_evidence_from_related_messages() {
    let (_dir, path) = sample_journey().write();
    let session = load(&path);

    let DetailedAnalysis::Decision(analysis) = &session.timeline()[2].detailed_analysis else {
        panic!("expected decision analysis");
    };

    let reasoning: Vec<&str> = analysis.reasoning.lines().collect();
    assert_eq!(reasoning.len(), 4);
    assert_eq!(reasoning[3], "• Test results indicating need for intervention");

    let evidence = analysis.evidence.as_deref().unwrap();
    assert_eq!(
        evidence,
        "• Rohan: \"My blood pressure readings have been high this week...\"\n\
         • Dr. Warren: \"Let's schedule a diagnostic test for your cholesterol...\""
    );
}

#[test]
fn test_timeline_sorted_by_timestamp() {
    // Decisions listed after messages, and out of order
    let (_dir, path) = common::ChatLogBuilder::new()
        .with_entries([
            LogEntryBuilder::message("A", "2025-03-10T10:00:00Z", "Treatment started today"),
            LogEntryBuilder::message("B", "2025-01-01T10:00:00Z", "New test result in"),
            LogEntryBuilder::decision("C", "2025-02-01T10:00:00Z", "Exercise program", "3x/week"),
            LogEntryBuilder::decision("D", "2024-12-01T10:00:00Z", "Nutrition review", ""),
            LogEntryBuilder::message("E", "2025-02-15T10:00:00Z", "Medication refill"),
        ])
        .write();

    let session = load(&path);
    let timeline = session.timeline();
    assert_eq!(timeline.len(), 5);
    assert!(timeline.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
    assert_eq!(timeline[0].author, "D");
    assert_eq!(timeline[4].author, "A");
}

#[test]
fn test_stats_counts_add_up() {
    let (_dir, path) = sample_journey()
        .with_entry(LogEntryBuilder::message("Rohan", "2025-01-20T08:00:00Z", "No update"))
        .with_entry(LogEntryBuilder::decision("Ruby", "2025-01-21T08:00:00Z", "Follow-up", ""))
        .write();

    let stats = load(&path).stats().clone();
    assert_eq!(stats.decisions + stats.milestones, stats.total_events);
    assert_eq!(stats.decisions, 3);
}

#[test]
fn test_non_array_input_is_empty_timeline() {
    let (_dir, path) = common::raw_log(r#"{"type":"decision","title":"Not in an array"}"#);
    let session = load(&path);

    assert_eq!(session.source(), Some(path.as_path()));
    assert!(session.timeline().is_empty());
    assert_eq!(session.stats().total_events, 0);
    assert_eq!(session.stats().time_span, None);
}

#[test]
fn test_blood_pressure_decision_without_related_messages() {
    let entries = parse_chat_log_str(
        r#"[
            {"type":"message","timestamp":"2025-01-01T09:00:00Z","author":"Rohan","content":"Worried about my numbers lately"},
            {"type":"decision","timestamp":"2025-01-20T09:00:00Z","author":"Dr. Warren","title":"Start blood pressure medication"}
        ]"#,
    )
    .unwrap();

    let analysis = analyze(&entries, &AnalysisConfig::default());
    assert_eq!(analysis.timeline.len(), 1);

    let DetailedAnalysis::Decision(decision) = &analysis.timeline[0].detailed_analysis else {
        panic!("expected decision analysis");
    };
    assert_eq!(
        decision.reasoning,
        "• Elevated blood pressure readings requiring immediate intervention\n\
         • Family history of cardiovascular disease increasing risk factors\n\
         • Need for medication to achieve target BP levels"
    );
    assert_eq!(decision.evidence, None);
}

#[test]
fn test_test_result_milestone_annotation() {
    let entries = parse_chat_log_str(
        r#"[{"type":"message","timestamp":"2025-01-01T09:00:00Z","author":"Dr. Warren","content":"Your test result came back"}]"#,
    )
    .unwrap();

    let analysis = analyze(&entries, &AnalysisConfig::default());
    assert_eq!(analysis.timeline.len(), 1);

    let DetailedAnalysis::Milestone(milestone) = &analysis.timeline[0].detailed_analysis else {
        panic!("expected milestone analysis");
    };
    assert_eq!(
        milestone.significance,
        vec![
            "• Diagnostic data providing baseline health metrics",
            "• Objective measurements for treatment planning"
        ]
    );
    assert_eq!(
        milestone.implications,
        vec!["• Treatment adjustments based on results", "• Progress tracking and goal setting"]
    );
    assert_eq!(
        milestone.next_steps,
        vec!["• Review results with care team", "• Adjust protocols as needed"]
    );
}

#[test]
fn test_single_nutrition_decision() {
    let entries = parse_chat_log_str(
        r#"[{"type":"decision","timestamp":"2024-01-10T00:00:00Z","title":"Nutrition Plan Update","author":"Dr. A","details":"..."}]"#,
    )
    .unwrap();

    let analysis = analyze(&entries, &AnalysisConfig::default());
    assert_eq!(analysis.timeline.len(), 1);
    assert_eq!(analysis.stats.total_events, 1);
    assert_eq!(analysis.stats.decisions, 1);
    assert_eq!(analysis.stats.care_phases, vec!["Comprehensive Care"]);
}

#[test]
fn test_export_round_trip() {
    let (dir, path) = sample_journey().write();
    let session = load(&path).with_search_term("blood").with_filter_type(FilterType::All);

    let now = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
    let doc = session.export(now);
    let out = dir.path().join(doc.default_filename());
    care_journey_timeline::export::write_export(&doc, &out).unwrap();

    let reparsed = ExportDocument::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.analysis, session.timeline());
    assert_eq!(&reparsed.stats, session.stats());
    assert_eq!(reparsed.filters.search_term, "blood");

    // Stable state exports identically
    assert_eq!(session.export(now), doc);
}

#[test]
fn test_export_is_unfiltered() {
    let (_dir, path) = sample_journey().write();
    let session = load(&path).with_filter_type(FilterType::Decision);

    let doc = session.export(Utc::now());
    assert_eq!(session.visible_events().len(), 2);
    assert_eq!(doc.analysis.len(), 5);
    assert_eq!(doc.filters.filter_type, FilterType::Decision);
}

#[test]
fn test_failed_load_keeps_previous_session() {
    let (_dir, path) = sample_journey().write();
    let session = load(&path);

    let (_bad_dir, bad_path) = common::raw_log("[{not json");
    let result = session.load_file(&bad_path, &AnalysisConfig::default());
    assert!(result.is_err());

    // The previous value is untouched
    assert_eq!(session.timeline().len(), 5);
    assert_eq!(session.source(), Some(path.as_path()));
}

#[test]
fn test_reload_resets_filters() {
    let (_dir, path) = sample_journey().write();
    let session = load(&path).with_search_term("nutrition").with_filter_type(FilterType::Decision);
    assert_eq!(session.visible_events().len(), 1);

    let reloaded = session.load_file(&path, &AnalysisConfig::default()).unwrap();
    assert!(reloaded.filters().is_default());
    assert_eq!(reloaded.visible_events().len(), 5);
}

#[test]
fn test_parse_file_matches_parse_str() {
    let builder = sample_journey();
    let json = builder.to_json();
    let (_dir, path) = builder.write();

    assert_eq!(parse_chat_log_file(&path).unwrap(), parse_chat_log_str(&json).unwrap());
}

#[test]
fn test_custom_window_changes_evidence() {
    let (_dir, path) = sample_journey().write();
    let config = AnalysisConfig { related_window_days: 1, ..AnalysisConfig::default() };
    let session = Session::empty().load_file(&path, &config).unwrap();

    let DetailedAnalysis::Decision(analysis) = &session.timeline()[2].detailed_analysis else {
        panic!("expected decision analysis");
    };
    // Only messages within a day before Jan 5 10:00 count; none exist
    assert_eq!(analysis.evidence, None);
}
