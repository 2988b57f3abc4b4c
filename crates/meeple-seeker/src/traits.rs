//! Traits that let the query engine and selection resolver read records.

use crate::column::Column;
use crate::value::Value;

/// Trait for types whose columns can be filtered and sorted.
///
/// # Example
///
/// ```
/// use meeple_seeker::{Column, Seekable, Value};
///
/// struct Shelf {
///     label: String,
/// }
///
/// impl Seekable for Shelf {
///     fn field_value(&self, column: Column) -> Value<'_> {
///         match column {
///             Column::Name => Value::Text(&self.label),
///             _ => Value::Integer(0),
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a column for comparison.
    ///
    /// The returned variant must agree with [`Column::kind`].
    fn field_value(&self, column: Column) -> Value<'_>;
}

/// Trait for items a selection token can pick by name.
pub trait Named {
    /// Returns the display name used for case-insensitive name matching.
    fn name(&self) -> &str;
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}
