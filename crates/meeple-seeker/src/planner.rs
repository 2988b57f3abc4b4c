//! Progressive query engine over a board game catalog.
//!
//! A [`Planner`] owns the full catalog and a working view. Every filter call
//! narrows the *current* view, so successive calls accumulate:
//!
//! ```text
//! Unfiltered --filter--> Filtered --filter--> Filtered
//!     ^                                          |
//!     +------------------- reset ----------------+
//! ```

use log::debug;

use crate::column::Column;
use crate::game::BoardGame;
use crate::ordering::{Dir, SortKey};
use crate::parse::parse_expression;

/// Holds a catalog and a progressively narrowed, sorted working view.
///
/// # Example
///
/// ```
/// use meeple_seeker::{BoardGame, Column, Planner};
///
/// let mut planner = Planner::new(vec![
///     BoardGame::new("Go", 1).with_players(2, 5).with_rating(8.0),
///     BoardGame::new("Chess", 7).with_players(2, 2).with_rating(10.0),
///     BoardGame::new("Monopoly", 8).with_players(6, 10).with_rating(1.0),
/// ]);
///
/// let view = planner.filter("minPlayers == 2");
/// assert_eq!(view.len(), 2);
///
/// // narrows the previous result
/// let view = planner.filter_sorted_dir("rating > 5", Column::Rating, false);
/// assert_eq!(view[0].name(), "Chess");
///
/// planner.reset();
/// assert_eq!(planner.view().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    catalog: Vec<BoardGame>,
    view: Vec<BoardGame>,
    filtered: bool,
}

impl Planner {
    /// Creates a planner over a catalog. The view starts as the whole catalog.
    pub fn new(games: impl IntoIterator<Item = BoardGame>) -> Self {
        let catalog: Vec<BoardGame> = games.into_iter().collect();
        Planner {
            view: catalog.clone(),
            catalog,
            filtered: false,
        }
    }

    /// Returns the full catalog, in load order.
    pub fn catalog(&self) -> &[BoardGame] {
        &self.catalog
    }

    /// Returns the current working view.
    pub fn view(&self) -> &[BoardGame] {
        &self.view
    }

    /// Returns `true` once a filter has run since construction or reset.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Returns the number of games in the working view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Returns `true` if the working view is empty.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Filters the working view and sorts the result by name.
    pub fn filter(&mut self, expression: &str) -> &[BoardGame] {
        self.filter_with(expression, None)
    }

    /// Filters the working view and sorts the result by `column`, ascending.
    pub fn filter_sorted(&mut self, expression: &str, column: Column) -> &[BoardGame] {
        self.filter_with(expression, Some(SortKey::asc(column)))
    }

    /// Filters the working view and sorts by `column`, reversed unless
    /// `ascending`.
    pub fn filter_sorted_dir(
        &mut self,
        expression: &str,
        column: Column,
        ascending: bool,
    ) -> &[BoardGame] {
        self.filter_with(
            expression,
            Some(SortKey::new(column, Dir::from_ascending(ascending))),
        )
    }

    /// Filters the working view with every clause of `expression` (AND),
    /// sorts by name, then by `sort` when given, and stores the result as the
    /// new working view.
    pub fn filter_with(&mut self, expression: &str, sort: Option<SortKey>) -> &[BoardGame] {
        let clauses = parse_expression(expression);

        let mut next: Vec<BoardGame> = self
            .view
            .iter()
            .filter(|game| clauses.iter().all(|clause| clause.matches(*game)))
            .cloned()
            .collect();

        SortKey::asc(Column::Name).sort(&mut next);
        if let Some(key) = sort {
            key.sort(&mut next);
        }

        debug!(
            "filter {:?} ({} clauses, sort {:?}): {} -> {} games",
            expression,
            clauses.len(),
            sort,
            self.view.len(),
            next.len()
        );

        self.view = next;
        self.filtered = true;
        &self.view
    }

    /// Restores the working view to a fresh copy of the catalog.
    pub fn reset(&mut self) {
        debug!("reset view to {} games", self.catalog.len());
        self.view = self.catalog.clone();
        self.filtered = false;
    }
}
