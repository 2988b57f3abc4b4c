//! Loads a board game catalog from CSV.
//!
//! The header row names columns by their canonical keys (`objectname`, `id`,
//! `minplayers`, ...). Rows that cannot be read are skipped with a warning so a
//! single bad line never loses the whole catalog.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use meeple_seeker::BoardGame;
use serde::Deserialize;

/// One catalog row as it appears on disk.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "objectname")]
    name: String,
    id: i64,
    #[serde(rename = "minplayers")]
    min_players: i64,
    #[serde(rename = "maxplayers")]
    max_players: i64,
    #[serde(rename = "minplaytime")]
    min_time: i64,
    #[serde(rename = "maxplaytime")]
    max_time: i64,
    #[serde(rename = "avgweight")]
    difficulty: f64,
    rank: i64,
    #[serde(rename = "average")]
    rating: f64,
    #[serde(rename = "yearpublished")]
    year: i64,
}

impl From<CatalogRow> for BoardGame {
    fn from(row: CatalogRow) -> Self {
        BoardGame::new(row.name, row.id)
            .with_players(row.min_players, row.max_players)
            .with_play_time(row.min_time, row.max_time)
            .with_difficulty(row.difficulty)
            .with_rank(row.rank)
            .with_rating(row.rating)
            .with_year(row.year)
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<BoardGame>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open catalog {}", path.display()))?;
    let games = from_reader(file)?;
    debug!("loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

/// Reads every well-formed row from `reader`.
///
/// Fails only when the header row itself cannot be read.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BoardGame>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .headers()
        .context("catalog has no readable header row")?;

    let mut games = Vec::new();
    for (line, result) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        match result {
            Ok(row) => games.push(BoardGame::from(row)),
            Err(e) => warn!("skipping catalog row {}: {}", line + 1, e),
        }
    }
    Ok(games)
}
