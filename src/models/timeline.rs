use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timeline event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Decision,
    Milestone,
}

impl EventKind {
    /// Wire name (`decision` / `milestone`)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Decision => "decision",
            EventKind::Milestone => "milestone",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Decision => "Decision",
            EventKind::Milestone => "Milestone",
        }
    }
}

/// Annotation attached to a decision event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionAnalysis {
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    pub impact: String,
    pub context: String,
}

/// Annotation attached to a milestone event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneAnalysis {
    pub significance: Vec<String>,
    pub implications: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Free-form annotation whose shape follows the event kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailedAnalysis {
    Decision(DecisionAnalysis),
    Milestone(MilestoneAnalysis),
}

impl DetailedAnalysis {
    /// Headed text sections in display order. Empty sections are left out.
    pub fn sections(&self) -> Vec<(&'static str, String)> {
        let mut sections = Vec::new();
        match self {
            DetailedAnalysis::Decision(analysis) => {
                sections.push(("Clinical Reasoning", analysis.reasoning.clone()));
                sections.push(("Expected Impact", analysis.impact.clone()));
                sections.push(("Context & Considerations", analysis.context.clone()));
                if let Some(evidence) = &analysis.evidence {
                    sections.push(("Supporting Evidence", evidence.clone()));
                }
            }
            DetailedAnalysis::Milestone(analysis) => {
                for (heading, lines) in [
                    ("Significance", &analysis.significance),
                    ("Implications", &analysis.implications),
                    ("Next Steps", &analysis.next_steps),
                ] {
                    if !lines.is_empty() {
                        sections.push((heading, lines.join("\n")));
                    }
                }
            }
        }
        sections
    }
}

/// One annotated point on the care timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub author: String,
    pub detailed_analysis: DetailedAnalysis,
}

impl TimelineEvent {
    /// Plain-text report used for clipboard copies and `--details` output
    pub fn report(&self) -> String {
        let mut report = format!(
            "{} | {} | {}\n{}\n",
            self.timestamp.format("%Y-%m-%d"),
            self.kind.label(),
            self.author,
            self.title
        );
        if !self.summary.is_empty() {
            report.push('\n');
            report.push_str(&self.summary);
            report.push('\n');
        }
        for (heading, body) in self.detailed_analysis.sections() {
            report.push_str(&format!("\n{}:\n{}\n", heading, body));
        }
        report
    }
}
