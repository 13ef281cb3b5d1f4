//! Timeline filtering.
//!
//! Two layers narrow the visible events:
//!
//! - [`ViewFilters`]: the search box and the all/decision/milestone selector
//! - [`FilterExpr`]: an optional `field:value` query (see [`parser`])

pub mod apply;
pub mod ast;
pub mod parser;
pub mod view;

pub use apply::apply_filters;
pub use ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
pub use parser::parse_filter;
pub use view::{FilterType, ViewFilters};

/// Split TUI input into `(query, search term)` at the first `|`
///
/// Without a `|` the whole input is the search term.
pub fn split_query(input: &str) -> (&str, &str) {
    match input.split_once('|') {
        Some((query, search)) => (query.trim(), search.trim()),
        None => ("", input),
    }
}
