use std::path::PathBuf;

use clap::Parser;
use meeple_seeker::{Column, Dir, SortKey};

/// Filter a board game catalog and build a list of games to play.
///
/// Filters are comma-separated `column operator value` clauses, for example
/// `minplayers >= 3, rating > 7`. Each `--filter` narrows the result of the
/// previous one. Selection tokens for `--add` and `--remove` are `all`, a
/// 1-based index, an inclusive range such as `2-5`, or a game name.
#[derive(Parser, Debug)]
#[command(name = "meeple", version, about)]
pub struct Cli {
    /// CSV catalog to load
    #[arg(short, long, env = "MEEPLE_CATALOG")]
    pub catalog: PathBuf,

    /// Filter expression, applied in order
    #[arg(short, long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,

    /// Column to sort the result by
    #[arg(short, long, value_name = "COLUMN", default_value = "name")]
    pub sort: Column,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Add games from the filtered view
    #[arg(short, long = "add", value_name = "TOKEN")]
    pub adds: Vec<String>,

    /// Remove games from the selection
    #[arg(short, long = "remove", value_name = "TOKEN")]
    pub removes: Vec<String>,

    /// Write the selected names to a file
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Default file for --save
    #[arg(short, long, env = "MEEPLE_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn sort_key(&self) -> SortKey {
        SortKey::new(self.sort, Dir::from_ascending(!self.desc))
    }

    /// Where `--save` writes, or `None` when saving was not requested.
    ///
    /// An explicit path wins over `--output`; with neither, the export
    /// default applies downstream.
    pub fn save_path(&self) -> Option<Option<PathBuf>> {
        self.save
            .as_ref()
            .map(|explicit| explicit.clone().or_else(|| self.output.clone()))
    }
}
