//! Template-based annotation of decisions and milestones.
//!
//! Annotations are a pure function of the event and the surrounding messages; every line comes
//! verbatim from the tables in [`super::rules`].

use crate::config::AnalysisConfig;
use crate::models::{DecisionAnalysis, LogEntry, MilestoneAnalysis};

use super::rules::{
    DECISION_CONTEXT, DECISION_IMPACT, DECISION_REASONING, MILESTONE_RULES,
    RECENT_MESSAGE_REASONING,
};

/// Shown in evidence lines for messages without an author
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Annotate a decision
///
/// `related` are the messages inside the decision's look-back window, in log order;
/// `all_messages` is every message of the log.
pub fn annotate_decision(
    decision: &LogEntry,
    related: &[&LogEntry],
    all_messages: &[&LogEntry],
    config: &AnalysisConfig,
) -> DecisionAnalysis {
    let title = decision.title_text();

    let mut reasoning = DECISION_REASONING.lines_for(title);
    let recent_start = related.len().saturating_sub(config.recent_message_count);
    for message in &related[recent_start..] {
        reasoning.extend(RECENT_MESSAGE_REASONING.lines_for(message.text()));
    }

    let impact = DECISION_IMPACT.lines_for(title);
    let context = DECISION_CONTEXT.lines_for_any(all_messages.iter().map(|m| m.text()));

    DecisionAnalysis {
        reasoning: DECISION_REASONING.render(&reasoning),
        evidence: format_evidence(related, config),
        impact: DECISION_IMPACT.render(&impact),
        context: DECISION_CONTEXT.render(&context),
    }
}

/// Annotate a milestone message
///
/// Each matching rule adds its lines to all three lists; a message matching nothing gets
/// empty lists.
pub fn annotate_milestone(message: &LogEntry) -> MilestoneAnalysis {
    let lowered = message.text().to_lowercase();
    let mut analysis = MilestoneAnalysis::default();

    for rule in MILESTONE_RULES.iter().filter(|rule| lowered.contains(rule.keyword)) {
        analysis.significance.extend(rule.significance.iter().map(|s| s.to_string()));
        analysis.implications.extend(rule.implications.iter().map(|s| s.to_string()));
        analysis.next_steps.extend(rule.next_steps.iter().map(|s| s.to_string()));
    }

    analysis
}

/// Evidence excerpts from the related messages, `None` when no message qualifies
///
/// Lengths count `char`s, so an emoji is one character.
pub fn format_evidence(related: &[&LogEntry], config: &AnalysisConfig) -> Option<String> {
    let lines: Vec<String> = related
        .iter()
        .filter(|message| message.text().chars().count() > config.min_evidence_content_chars)
        .take(config.max_evidence_lines)
        .map(|message| evidence_line(message, config.evidence_excerpt_chars))
        .collect();

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

fn evidence_line(message: &LogEntry, excerpt_chars: usize) -> String {
    let author = match message.author_name() {
        "" => UNKNOWN_AUTHOR,
        name => name,
    };
    format!("• {}: \"{}...\"", author, truncate_chars(message.text(), excerpt_chars))
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
