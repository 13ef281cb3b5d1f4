use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::models::{DetailedAnalysis, EventKind, LogEntry, TimelineEvent};

use super::annotator::{annotate_decision, annotate_milestone, truncate_chars};
use super::rules::{MILESTONE_KEYWORDS, mentions_any};

/// Build the annotated, chronologically ordered timeline of a chat log
///
/// Every decision becomes a `decision` event; the first `max_milestones` messages mentioning a
/// milestone keyword become `milestone` events. Entries without a usable timestamp never become
/// events. The sort is stable, so events sharing a timestamp keep decision-before-milestone
/// and log order.
pub fn extract_timeline(entries: &[LogEntry], config: &AnalysisConfig) -> Vec<TimelineEvent> {
    let decisions: Vec<&LogEntry> = entries.iter().filter(|e| e.is_decision()).collect();
    let messages: Vec<&LogEntry> = entries.iter().filter(|e| e.is_message()).collect();

    let mut timeline = Vec::new();

    for decision in &decisions {
        let Some(timestamp) = decision.timestamp else {
            debug!("Skipping decision without timestamp: {:?}", decision.title);
            continue;
        };

        let related = related_messages(&messages, timestamp, config);
        timeline.push(TimelineEvent {
            timestamp,
            title: decision.title_text().to_string(),
            summary: decision.details_text().to_string(),
            kind: EventKind::Decision,
            author: decision.author_name().to_string(),
            detailed_analysis: DetailedAnalysis::Decision(annotate_decision(
                decision, &related, &messages, config,
            )),
        });
    }

    let milestones = messages
        .iter()
        .filter(|message| message.timestamp.is_some())
        .filter(|message| mentions_any(message.text(), MILESTONE_KEYWORDS))
        .take(config.max_milestones);

    for message in milestones {
        let Some(timestamp) = message.timestamp else {
            continue;
        };
        timeline.push(TimelineEvent {
            timestamp,
            title: format!(
                "{}: {}...",
                message.author_name(),
                truncate_chars(message.text(), config.milestone_title_chars)
            ),
            summary: message.text().to_string(),
            kind: EventKind::Milestone,
            author: message.author_name().to_string(),
            detailed_analysis: DetailedAnalysis::Milestone(annotate_milestone(message)),
        });
    }

    timeline.sort_by_key(|event| event.timestamp);

    debug!(
        "Extracted {} events from {} decisions and {} messages",
        timeline.len(),
        decisions.len(),
        messages.len()
    );

    timeline
}

/// Messages inside `[at - window, at]`, in log order
///
/// A window reaching past the earliest representable time starts there instead.
pub fn related_messages<'a>(
    messages: &[&'a LogEntry],
    at: DateTime<Utc>,
    config: &AnalysisConfig,
) -> Vec<&'a LogEntry> {
    let window_start = config
        .related_window()
        .and_then(|window| at.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    messages
        .iter()
        .copied()
        .filter(|message| {
            message
                .timestamp
                .is_some_and(|ts| ts >= window_start && ts <= at)
        })
        .collect()
}
