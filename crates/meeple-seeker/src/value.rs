//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the runtime value of a column extracted from
//! a record. Every column produces exactly one of the three value kinds.

use std::cmp::Ordering;

use crate::ordering::cmp_ignore_case;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use meeple_seeker::{BoardGame, Column, Seekable, Value};
///
/// let go = BoardGame::new("Go", 1).with_rating(8.0);
///
/// assert_eq!(go.field_value(Column::Name), Value::Text("Go"));
/// assert_eq!(go.field_value(Column::Rating), Value::Real(8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Whole number value.
    Integer(i64),
    /// Floating-point value.
    Real(f64),
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the real value, if present.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(n) => Some(*n),
            _ => None,
        }
    }

    /// Compares two values of the same kind.
    ///
    /// Text compares case-insensitively, numbers in natural order. Reals use
    /// a total order with NaN above every number. Returns `None` only on a
    /// kind mismatch.
    pub fn compare(&self, other: &Value<'_>) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(cmp_ignore_case(a, b)),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Real(a), Value::Real(b)) => Some(total_cmp_nan_last(*a, *b)),
            _ => None,
        }
    }
}

// NaN sorts last whatever its sign bit; -0.0 sorts before 0.0.
fn total_cmp_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}
