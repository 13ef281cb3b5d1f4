use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Summary figures for the Journey Overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total_events: usize,
    pub decisions: usize,
    pub milestones: usize,
    /// `"{n} days"`, `None` for an empty timeline
    pub time_span: Option<String>,
    pub team_members: BTreeSet<String>,
    pub key_metrics: Vec<String>,
    pub care_phases: Vec<String>,
}
