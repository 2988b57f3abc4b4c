//! Filterable and sortable columns of a board game record.
//!
//! Each [`Column`] carries its value kind and the aliases accepted in filter
//! expressions. The first alias is the canonical key, which is also the CSV
//! header name used by catalog files.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::SeekerError;

/// The kind of value a column holds, which selects comparison semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Case-insensitive string comparison.
    Text,
    /// Whole number comparison.
    Integer,
    /// Floating-point comparison.
    Real,
}

/// A column of [`BoardGame`](crate::BoardGame) that expressions can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Id,
    MinPlayers,
    MaxPlayers,
    MinTime,
    MaxTime,
    Difficulty,
    Rank,
    Rating,
    Year,
}

static ALIASES: Lazy<HashMap<&'static str, Column>> = Lazy::new(|| {
    Column::ALL
        .iter()
        .flat_map(|column| column.aliases().iter().map(move |alias| (*alias, *column)))
        .collect()
});

impl Column {
    /// Every column, in catalog file order.
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::Id,
        Column::MinPlayers,
        Column::MaxPlayers,
        Column::MinTime,
        Column::MaxTime,
        Column::Difficulty,
        Column::Rank,
        Column::Rating,
        Column::Year,
    ];

    /// Returns the value kind of this column.
    pub fn kind(self) -> ValueKind {
        match self {
            Column::Name => ValueKind::Text,
            Column::Rating | Column::Difficulty => ValueKind::Real,
            _ => ValueKind::Integer,
        }
    }

    /// Returns the lower-case aliases accepted for this column.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Name => &["objectname", "name"],
            Column::Id => &["id"],
            Column::MinPlayers => &["minplayers", "min_players"],
            Column::MaxPlayers => &["maxplayers", "max_players"],
            Column::MinTime => &["minplaytime", "mintime", "min_time"],
            Column::MaxTime => &["maxplaytime", "maxtime", "max_time"],
            Column::Difficulty => &["avgweight", "difficulty", "weight"],
            Column::Rank => &["rank"],
            Column::Rating => &["average", "rating"],
            Column::Year => &["yearpublished", "year"],
        }
    }

    /// Returns the canonical key of this column.
    pub fn canonical(self) -> &'static str {
        self.aliases()[0]
    }

    /// Resolves free text to a column by case-insensitive alias match.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for unknown names.
    pub fn resolve(text: &str) -> Option<Column> {
        ALIASES.get(text.trim().to_lowercase().as_str()).copied()
    }
}

impl FromStr for Column {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::resolve(s).ok_or_else(|| SeekerError::UnknownColumn(s.to_string()))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Column::Name.kind(), ValueKind::Text);
        assert_eq!(Column::Rating.kind(), ValueKind::Real);
        assert_eq!(Column::Difficulty.kind(), ValueKind::Real);
        assert_eq!(Column::Year.kind(), ValueKind::Integer);
        assert_eq!(Column::Id.kind(), ValueKind::Integer);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(Column::resolve("minPlayers"), Some(Column::MinPlayers));
        assert_eq!(Column::resolve("MAXPLAYTIME"), Some(Column::MaxTime));
        assert_eq!(Column::resolve("  yearPublished "), Some(Column::Year));
        assert_eq!(Column::resolve("Name"), Some(Column::Name));
        assert_eq!(Column::resolve("objectname"), Some(Column::Name));
        assert_eq!(Column::resolve("players"), None);
        assert_eq!(Column::resolve(""), None);
    }

    #[test]
    fn every_alias_round_trips() {
        for column in Column::ALL {
            for alias in column.aliases() {
                assert_eq!(Column::resolve(alias), Some(column), "alias {alias}");
            }
        }
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("rating".parse::<Column>().unwrap(), Column::Rating);
        let err = "colour".parse::<Column>().unwrap_err();
        assert!(matches!(err, SeekerError::UnknownColumn(ref s) if s == "colour"));
    }

    #[test]
    fn display_uses_canonical_key() {
        assert_eq!(Column::Name.to_string(), "objectname");
        assert_eq!(Column::Rating.to_string(), "average");
    }
}
