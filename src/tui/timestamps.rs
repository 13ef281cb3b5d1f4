use chrono::{DateTime, Utc};

/// Long form for the detail pane: "January 10, 2024"
pub fn format_event_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Compact form for list rows: "Jan 10, 2024"
pub fn format_list_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
