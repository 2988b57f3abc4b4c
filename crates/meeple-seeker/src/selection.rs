//! Selection token resolution.
//!
//! A selection token picks items out of an ordered candidate list:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `all` | every candidate, in order |
//! | `3` | the third candidate (1-based) |
//! | `2-4` | candidates two through four, inclusive |
//! | anything else | the first candidate with that name, ignoring case |
//!
//! Unlike filtering, resolution is strict: a bad token is an
//! [`InvalidSelection`](crate::SeekerError::InvalidSelection) error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SeekerError, SelectionFailure};
use crate::ordering::cmp_ignore_case;
use crate::traits::Named;

/// The token that selects every candidate.
pub const ALL_SENTINEL: &str = "all";

static INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid index pattern"));
static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("valid range pattern"));

/// The shape of a parsed selection token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every candidate.
    All,
    /// A single 1-based position.
    Index(usize),
    /// An inclusive 1-based range.
    Range(usize, usize),
    /// A case-insensitive name.
    Name(String),
}

impl Selection {
    /// Classifies a token. Only an empty token is rejected here; bounds are
    /// checked against candidates in [`Selection::resolve`].
    pub fn parse(token: &str) -> Result<Selection> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SeekerError::selection(token, SelectionFailure::Empty));
        }
        if token.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Selection::All);
        }
        if INDEX.is_match(token) {
            return Ok(Selection::Index(parse_position(token)));
        }
        if let Some(caps) = RANGE.captures(token) {
            return Ok(Selection::Range(
                parse_position(&caps[1]),
                parse_position(&caps[2]),
            ));
        }
        Ok(Selection::Name(token.to_string()))
    }

    /// Returns `true` for the `all` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Picks the selected items out of `candidates`, preserving their order.
    pub fn resolve<'a, T: Named>(&self, candidates: &'a [T]) -> Result<Vec<&'a T>> {
        let len = candidates.len();
        match self {
            Selection::All => Ok(candidates.iter().collect()),
            Selection::Index(index) => {
                if *index < 1 || *index > len {
                    return Err(self.fail(SelectionFailure::IndexOutOfRange {
                        index: *index,
                        len,
                    }));
                }
                Ok(vec![&candidates[index - 1]])
            }
            Selection::Range(start, end) => {
                if *start < 1 || *end > len || start > end {
                    return Err(self.fail(SelectionFailure::InvalidRange {
                        start: *start,
                        end: *end,
                        len,
                    }));
                }
                Ok(candidates[start - 1..*end].iter().collect())
            }
            Selection::Name(name) => candidates
                .iter()
                .find(|candidate| cmp_ignore_case(candidate.name(), name).is_eq())
                .map(|candidate| vec![candidate])
                .ok_or_else(|| self.fail(SelectionFailure::NameNotFound)),
        }
    }

    fn fail(&self, reason: SelectionFailure) -> SeekerError {
        SeekerError::selection(self.to_string(), reason)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL_SENTINEL),
            Selection::Index(index) => write!(f, "{}", index),
            Selection::Range(start, end) => write!(f, "{}-{}", start, end),
            Selection::Name(name) => write!(f, "{}", name),
        }
    }
}

// Digits that overflow usize can never be in range.
fn parse_position(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

/// Resolves a selection token against an ordered candidate list.
///
/// # Example
///
/// ```
/// use meeple_seeker::resolve_selection;
///
/// let games = ["Go", "Chess", "Monopoly"];
///
/// assert_eq!(resolve_selection("2-3", &games).unwrap(), vec![&"Chess", &"Monopoly"]);
/// assert_eq!(resolve_selection("chess", &games).unwrap(), vec![&"Chess"]);
/// assert!(resolve_selection("10", &games).is_err());
/// ```
pub fn resolve_selection<'a, T: Named>(token: &str, candidates: &'a [T]) -> Result<Vec<&'a T>> {
    Selection::parse(token)?.resolve(candidates)
}
