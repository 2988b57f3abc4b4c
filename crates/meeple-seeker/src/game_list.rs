//! The user's named selection of games.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::export::write_names;
use crate::game::BoardGame;
use crate::ordering::cmp_ignore_case;
use crate::selection::{resolve_selection, Selection};

/// An insertion-ordered, duplicate-free list of chosen games.
///
/// Additions are resolved against whatever candidates the caller supplies
/// (usually a planner's working view); removals are resolved against the
/// list itself.
///
/// # Example
///
/// ```
/// use meeple_seeker::{BoardGame, GameList};
///
/// let shelf = vec![BoardGame::new("Go", 1), BoardGame::new("Chess", 7)];
///
/// let mut list = GameList::new();
/// list.add("all", &shelf).unwrap();
/// list.remove("chess").unwrap();
///
/// assert_eq!(list.names(), vec!["Go"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: Vec<BoardGame>,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        GameList::default()
    }

    /// Returns the selected games in insertion order.
    pub fn games(&self) -> &[BoardGame] {
        &self.games
    }

    /// Returns `true` if an equal game is already selected.
    pub fn contains(&self, game: &BoardGame) -> bool {
        self.games.contains(game)
    }

    /// Number of selected games.
    pub fn count(&self) -> usize {
        self.games.len()
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Resolves `token` against `candidates` and appends every resolved game
    /// not already present. Returns how many were added.
    pub fn add(&mut self, token: &str, candidates: &[BoardGame]) -> Result<usize> {
        let resolved = resolve_selection(token, candidates)?;
        let before = self.games.len();
        for game in resolved {
            if !self.contains(game) {
                self.games.push(game.clone());
            }
        }
        let added = self.games.len() - before;
        debug!("add {token:?}: {added} added, {} selected", self.games.len());
        Ok(added)
    }

    /// Removes the games `token` resolves to within this list. `all` clears
    /// the list. Returns how many were removed.
    pub fn remove(&mut self, token: &str) -> Result<usize> {
        let selection = Selection::parse(token)?;
        let before = self.games.len();
        if selection.is_all() {
            self.clear();
        } else {
            let doomed: Vec<BoardGame> = selection
                .resolve(&self.games)?
                .into_iter()
                .cloned()
                .collect();
            self.games.retain(|game| !doomed.contains(game));
        }
        let removed = before - self.games.len();
        debug!("remove {token:?}: {removed} removed, {} selected", self.games.len());
        Ok(removed)
    }

    /// Returns the selected names sorted ignoring case, with exact string
    /// order breaking ties.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.games.iter().map(|g| g.name().to_string()).collect();
        names.sort_by(|a, b| cmp_ignore_case(a, b).then_with(|| a.cmp(b)));
        names
    }

    /// Writes [`names`](Self::names) to `path` (or the default export path).
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        write_names(path, self.names())
    }
}
