//! Meeple Seeker - filter, sort and pick from a board game catalog.
//!
//! The crate has two halves:
//!
//! - A lenient **filter language**: comma-separated `column operator value`
//!   clauses, evaluated against typed columns and applied progressively by a
//!   [`Planner`] that keeps a narrowed working view.
//! - A strict **selection language**: `all`, a 1-based index, an inclusive
//!   range or a name, resolved against any ordered list and used by
//!   [`GameList`] to build a named selection.
//!
//! # Quick Start
//!
//! ```rust
//! use meeple_seeker::{BoardGame, Column, GameList, Planner};
//!
//! let mut planner = Planner::new(vec![
//!     BoardGame::new("Go", 1).with_players(2, 5).with_rating(8.0).with_year(2000),
//!     BoardGame::new("Chess", 7).with_players(2, 2).with_rating(10.0).with_year(2006),
//!     BoardGame::new("Monopoly", 8).with_players(6, 10).with_rating(1.0).with_year(2007),
//! ]);
//!
//! let view = planner.filter_sorted_dir("minPlayers <= 2", Column::Rating, false);
//! assert_eq!(view[0].name(), "Chess");
//!
//! let mut list = GameList::new();
//! list.add("1-2", planner.view()).unwrap();
//! list.remove("go").unwrap();
//! assert_eq!(list.names(), vec!["Chess"]);
//! ```
//!
//! # Filter Semantics
//!
//! | Kind | Columns | Operators |
//! |------|---------|-----------|
//! | Text | name | `==` `!=` `~=` `>` `<` `>=` `<=` (all case-insensitive) |
//! | Integer | id, rank, year, min/max players, min/max time | `==` `!=` `>` `<` `>=` `<=` |
//! | Real | rating, difficulty | `==` `!=` `>` `<` `>=` `<=` |
//!
//! Malformed clauses are dropped and unparsable numbers never match; neither
//! is an error. Clauses are combined with AND.

mod clause;
mod column;
mod error;
mod export;
mod game;
mod game_list;
mod op;
mod ordering;
mod parse;
mod planner;
mod selection;
mod traits;
mod value;

// Re-export public API
pub use clause::{matches, Clause};
pub use column::{Column, ValueKind};
pub use error::{Result, SeekerError, SelectionFailure};
pub use export::{resolve_export_path, write_names, DEFAULT_EXPORT_PATH};
pub use game::BoardGame;
pub use game_list::GameList;
pub use op::Op;
pub use ordering::{cmp_ignore_case, compare_by_column, Dir, SortKey};
pub use parse::{parse_clause, parse_expression};
pub use planner::Planner;
pub use selection::{resolve_selection, Selection, ALL_SENTINEL};
pub use traits::{Named, Seekable};
pub use value::Value;
