//! Clause types and the predicate evaluator.
//!
//! A [`Clause`] is a single filter predicate: a column, an operator, and the
//! literal value text from the expression. The value stays a string until
//! evaluation, where it is coerced to the column's kind.

use std::cmp::Ordering;

use crate::column::Column;
use crate::op::Op;
use crate::ordering::cmp_ignore_case;
use crate::traits::Seekable;
use crate::value::Value;

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use meeple_seeker::{BoardGame, Clause, Column, Op};
///
/// let clause = Clause::new(Column::Name, Op::Contains, "go");
/// assert!(clause.matches(&BoardGame::new("Go Fish", 2)));
/// assert!(!clause.matches(&BoardGame::new("Chess", 7)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The column to compare.
    pub column: Column,
    /// The comparison operator.
    pub op: Op,
    /// The literal value text, trimmed.
    pub value: String,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(column: Column, op: Op, value: impl Into<String>) -> Self {
        Clause {
            column,
            op,
            value: value.into(),
        }
    }

    /// Parses a single `column operator value` clause.
    ///
    /// Returns `None` for anything malformed. See [`crate::parse_clause`].
    pub fn parse(raw: &str) -> Option<Clause> {
        crate::parse::parse_clause(raw)
    }

    /// Evaluates this clause against an item.
    pub fn matches<T: Seekable>(&self, item: &T) -> bool {
        matches(item, self.column, self.op, &self.value)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.value)
    }
}

/// Decides whether `item`'s `column` satisfies `op` against `value`.
///
/// Never fails: a value that does not parse as the column's numeric kind,
/// or `Contains` on a numeric column, evaluates to `false`.
pub fn matches<T: Seekable>(item: &T, column: Column, op: Op, value: &str) -> bool {
    match item.field_value(column) {
        Value::Text(field) => match_text(field, op, value),
        Value::Integer(field) => match value.parse::<i64>() {
            Ok(value) => match_ordering(op, Some(field.cmp(&value))),
            Err(_) => false,
        },
        Value::Real(field) => match value.parse::<f64>() {
            Ok(value) => match_ordering(op, field.partial_cmp(&value)),
            Err(_) => false,
        },
    }
}

fn match_text(field: &str, op: Op, value: &str) -> bool {
    match op {
        Op::Contains => field.to_lowercase().contains(&value.to_lowercase()),
        _ => op.eval_ordering(cmp_ignore_case(field, value)),
    }
}

// A NaN on either side is unordered: only `!=` holds.
fn match_ordering(op: Op, ordering: Option<Ordering>) -> bool {
    match ordering {
        _ if !op.is_number_op() => false,
        Some(ordering) => op.eval_ordering(ordering),
        None => op == Op::Ne,
    }
}
