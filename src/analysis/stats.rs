use std::collections::BTreeSet;

use crate::models::{AnalysisStats, EventKind, LogEntry, TimelineEvent};

use super::rules::{CARE_PHASES, FALLBACK_CARE_PHASE, HEALTH_METRIC_KEYWORDS};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Aggregate the Journey Overview figures
///
/// Key metrics are matched against the content of every raw entry, including entries that
/// never made it onto the timeline.
pub fn aggregate_stats(timeline: &[TimelineEvent], entries: &[LogEntry]) -> AnalysisStats {
    let decisions = timeline.iter().filter(|e| e.kind == EventKind::Decision).count();
    let milestones = timeline.iter().filter(|e| e.kind == EventKind::Milestone).count();

    let team_members: BTreeSet<String> = timeline
        .iter()
        .filter(|e| !e.author.is_empty())
        .map(|e| e.author.clone())
        .collect();

    AnalysisStats {
        total_events: timeline.len(),
        decisions,
        milestones,
        time_span: time_span(timeline),
        team_members,
        key_metrics: key_metrics(entries),
        care_phases: care_phases(timeline),
    }
}

/// `"{n} days"` between the earliest and latest event, rounded up
fn time_span(timeline: &[TimelineEvent]) -> Option<String> {
    let first = timeline.iter().map(|e| e.timestamp).min()?;
    let last = timeline.iter().map(|e| e.timestamp).max()?;

    let millis = (last - first).num_milliseconds();
    let mut days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY != 0 {
        days += 1;
    }
    Some(format!("{} days", days))
}

fn key_metrics(entries: &[LogEntry]) -> Vec<String> {
    let all_content = entries
        .iter()
        .map(|entry| entry.text())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    HEALTH_METRIC_KEYWORDS
        .iter()
        .filter(|keyword| all_content.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

fn care_phases(timeline: &[TimelineEvent]) -> Vec<String> {
    let titles: Vec<String> = timeline.iter().map(|e| e.title.to_lowercase()).collect();

    let phases: Vec<String> = CARE_PHASES
        .iter()
        .filter(|phase| titles.iter().any(|title| title.contains(phase.keyword)))
        .map(|phase| phase.label.to_string())
        .collect();

    if phases.is_empty() { vec![FALLBACK_CARE_PHASE.to_string()] } else { phases }
}
