//! Query parser for timeline filtering.
//!
//! Parses `field:value` expressions into a [`FilterExpr`].
//!
//! # Syntax
//!
//! ```text
//! query     := condition (operator? condition)*
//! condition := field:value | field:"quoted value"
//! operator  := AND | OR (case-insensitive)
//! field     := type | author | since | until (case-insensitive)
//! ```
//!
//! Without an explicit operator, conditions on the same field are OR'd and conditions on
//! different fields are AND'd.
//!
//! # Examples
//!
//! ```rust
//! # use care_journey_timeline::filters::parser::parse_filter;
//! let expr = parse_filter("type:decision").unwrap();
//! let expr = parse_filter("author:ruby author:\"Dr. Warren\"").unwrap();
//! let expr = parse_filter("type:milestone AND since:2025-01-01 until:2025-03-31").unwrap();
//! assert_eq!(expr.filters.len(), 3);
//! ```
//!
//! # Validation
//!
//! - `type` must be `decision` or `milestone`
//! - `since`/`until` must be valid `YYYY-MM-DD` dates
//! - empty field names or values are rejected

use std::iter::Peekable;
use std::str::Chars;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Condition { field: String, value: String },
    And,
    Or,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            return Ok(tokens);
        }
        tokens.push(next_token(&mut chars)?);
    }
}

fn next_token(chars: &mut Peekable<Chars>) -> Result<Token> {
    let word = read_word(chars);

    if word.eq_ignore_ascii_case("and") {
        return Ok(Token::And);
    }
    if word.eq_ignore_ascii_case("or") {
        return Ok(Token::Or);
    }

    let Some((field, raw_value)) = word.split_once(':') else {
        bail!("Invalid token: '{}' (expected field:value or AND/OR)", word);
    };

    let value = match raw_value.strip_prefix('"') {
        Some(rest) => read_quoted(chars, rest)?,
        None => raw_value.to_string(),
    };

    if field.is_empty() || value.trim().is_empty() {
        bail!("Invalid field:value format: {}", word);
    }

    Ok(Token::Condition { field: field.to_string(), value })
}

fn read_word(chars: &mut Peekable<Chars>) -> String {
    let mut word = String::new();
    while let Some(ch) = chars.next_if(|c| !c.is_whitespace()) {
        word.push(ch);
    }
    word
}

/// Finish a quoted value whose opening quote (and possibly more) was already consumed
fn read_quoted(chars: &mut Peekable<Chars>, started: &str) -> Result<String> {
    if let Some((value, _)) = started.split_once('"') {
        return Ok(value.to_string());
    }

    let mut value = started.to_string();
    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

fn parse_field(field: &str) -> Result<FilterField> {
    match field.to_lowercase().as_str() {
        "type" => Ok(FilterField::Type),
        "author" => Ok(FilterField::Author),
        "since" => Ok(FilterField::Since),
        "until" => Ok(FilterField::Until),
        _ => Err(anyhow!(
            "Unknown field: '{}' (valid fields: type, author, since, until)",
            field
        )),
    }
}

fn validate_value(field: FilterField, value: &str) -> Result<()> {
    match field {
        FilterField::Type => match value.to_lowercase().as_str() {
            "decision" | "milestone" => Ok(()),
            _ => bail!("Invalid type value: '{}' (must be 'decision' or 'milestone')", value),
        },
        FilterField::Since | FilterField::Until => {
            if parse_date(value).is_none() {
                bail!("Invalid date format: '{}' (expected YYYY-MM-DD)", value);
            }
            Ok(())
        }
        FilterField::Author => Ok(()),
    }
}

/// Strict `YYYY-MM-DD`; rejects impossible dates such as 2025-02-30
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse a query string into a [`FilterExpr`]
///
/// Blank input yields an empty expression, which matches every event.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    let mut expr = FilterExpr::new();
    let mut expecting_condition = true;
    let mut last_field: Option<FilterField> = None;

    for token in tokens {
        match token {
            Token::Condition { field, value } => {
                let field = parse_field(&field)?;
                validate_value(field, &value)?;

                if !expecting_condition {
                    let implicit = if last_field == Some(field) {
                        FilterOperator::Or
                    } else {
                        FilterOperator::And
                    };
                    expr.add_operator(implicit);
                }

                expr.add_filter(FieldFilter::new(field, value));
                last_field = Some(field);
                expecting_condition = false;
            }
            Token::And | Token::Or if expecting_condition => {
                bail!("Unexpected operator (expected field:value)");
            }
            Token::And => {
                expr.add_operator(FilterOperator::And);
                expecting_condition = true;
            }
            Token::Or => {
                expr.add_operator(FilterOperator::Or);
                expecting_condition = true;
            }
        }
    }

    if expecting_condition && !expr.is_empty() {
        bail!("Filter ended with operator (expected field:value)");
    }

    Ok(expr)
}
