use chrono::NaiveDate;

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
use super::parser::parse_date;
use crate::models::TimelineEvent;

/// Keep the events matching `filter`, preserving order
pub fn apply_filters<'a, I>(events: I, filter: &FilterExpr) -> Vec<&'a TimelineEvent>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    events.into_iter().filter(|event| matches_filter(event, filter)).collect()
}

/// Evaluate `filter` left to right against one event; an empty filter matches everything
pub fn matches_filter(event: &TimelineEvent, filter: &FilterExpr) -> bool {
    let Some((first, rest)) = filter.filters.split_first() else {
        return true;
    };

    filter.operators.iter().zip(rest).fold(matches_field(event, first), |acc, (op, next)| {
        match op {
            FilterOperator::And => acc && matches_field(event, next),
            FilterOperator::Or => acc || matches_field(event, next),
        }
    })
}

fn matches_field(event: &TimelineEvent, filter: &FieldFilter) -> bool {
    match filter.field {
        FilterField::Type => event.kind.as_str().eq_ignore_ascii_case(&filter.value),
        FilterField::Author => event.author.to_lowercase().contains(&filter.value.to_lowercase()),
        FilterField::Since => parse_date(&filter.value).is_some_and(|date| event_date(event) >= date),
        FilterField::Until => parse_date(&filter.value).is_some_and(|date| event_date(event) <= date),
    }
}

fn event_date(event: &TimelineEvent) -> NaiveDate {
    event.timestamp.date_naive()
}
