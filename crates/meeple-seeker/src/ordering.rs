//! Ordering types for sorting the working view.
//!
//! Provides [`Dir`] for sort direction and [`SortKey`] for column-based
//! ordering, plus the case-insensitive string comparison every text
//! ordering in the crate goes through.

use std::cmp::Ordering;

use crate::column::Column;
use crate::traits::Seekable;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns the direction for an `ascending` flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A column to sort by and the direction to present it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// The column to sort by.
    pub column: Column,
    /// The sort direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates a new ascending sort key for the given column.
    pub fn asc(column: Column) -> Self {
        SortKey {
            column,
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending sort key for the given column.
    pub fn desc(column: Column) -> Self {
        SortKey {
            column,
            dir: Dir::Desc,
        }
    }

    /// Creates a new sort key with the given direction.
    pub fn new(column: Column, dir: Dir) -> Self {
        SortKey { column, dir }
    }

    /// Sorts items in place by this key.
    ///
    /// The sort is stable. Descending order reverses the ascending result
    /// rather than flipping the comparator, so equal keys end up in reverse
    /// of their prior relative order.
    pub fn sort<T: Seekable>(&self, items: &mut [T]) {
        items.sort_by(|a, b| compare_by_column(a, b, self.column));
        if self.dir.is_desc() {
            items.reverse();
        }
    }
}

/// Compares two strings ignoring case.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compares two items on a single column.
///
/// Text columns compare case-insensitively, numeric columns in natural
/// order with NaN reals last.
pub fn compare_by_column<T: Seekable>(a: &T, b: &T, column: Column) -> Ordering {
    a.field_value(column)
        .compare(&b.field_value(column))
        .unwrap_or(Ordering::Equal)
}
