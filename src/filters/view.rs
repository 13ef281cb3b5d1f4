use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::models::{EventKind, TimelineEvent};

/// Event-type selector of the timeline view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Decision,
    Milestone,
}

impl FilterType {
    pub fn admits(&self, kind: EventKind) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Decision => kind == EventKind::Decision,
            FilterType::Milestone => kind == EventKind::Milestone,
        }
    }

    /// All → Decision → Milestone → All
    pub fn next(&self) -> Self {
        match self {
            FilterType::All => FilterType::Decision,
            FilterType::Decision => FilterType::Milestone,
            FilterType::Milestone => FilterType::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::All => "all",
            FilterType::Decision => "decision",
            FilterType::Milestone => "milestone",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterType::All),
            "decision" => Ok(FilterType::Decision),
            "milestone" => Ok(FilterType::Milestone),
            _ => bail!("Invalid filter type: '{}' (must be all, decision or milestone)", s),
        }
    }
}

/// Search box and type selector, recorded in exports as `filters`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFilters {
    pub search_term: String,
    pub filter_type: FilterType,
}

impl ViewFilters {
    pub fn new(search_term: impl Into<String>, filter_type: FilterType) -> Self {
        Self { search_term: search_term.into(), filter_type }
    }

    /// Type admitted and, for a non-empty search term, a case-insensitive substring of the
    /// title, author or summary
    pub fn matches(&self, event: &TimelineEvent) -> bool {
        if !self.filter_type.admits(event.kind) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }

        let needle = self.search_term.to_lowercase();
        [&event.title, &event.author, &event.summary]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, events: &'a [TimelineEvent]) -> Vec<&'a TimelineEvent> {
        events.iter().filter(|event| self.matches(event)).collect()
    }

    pub fn is_default(&self) -> bool {
        self.search_term.is_empty() && self.filter_type == FilterType::All
    }
}
