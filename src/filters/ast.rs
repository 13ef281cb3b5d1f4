/// Fields available in timeline queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Event type (decision or milestone)
    Type,
    /// Case-insensitive substring of the event author
    Author,
    /// Events on or after a date (YYYY-MM-DD)
    Since,
    /// Events on or before a date (YYYY-MM-DD, whole day included)
    Until,
}

impl FilterField {
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::Type => "type",
            FilterField::Author => "author",
            FilterField::Since => "since",
            FilterField::Until => "until",
        }
    }
}

/// Logical operators for combining filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Both conditions must match (default between different fields)
    And,
    /// Either condition matches (default within same field)
    Or,
}

/// Single field:value condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}

/// Conditions joined by operators, evaluated left to right
///
/// There are no parentheses: `author:ruby OR type:decision since:2025-01-01` reads as
/// `(ruby OR decision) AND since`. `operators.len()` is always `filters.len() - 1` for a
/// non-empty expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpr {
    pub filters: Vec<FieldFilter>,
    pub operators: Vec<FilterOperator>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    pub fn add_operator(&mut self, operator: FilterOperator) {
        self.operators.push(operator);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
