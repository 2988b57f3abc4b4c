//! meeple - filter a board game catalog and pick what to play.
//!
//! ```text
//! meeple -c games.csv -f "minplayers >= 3" -f "rating > 7" -s rating --desc
//! meeple -c games.csv -f "name ~= go" -a 1-3 -r golang --save
//! ```

mod catalog;
mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use meeple_seeker::{BoardGame, GameList, Planner};

use crate::cli::Cli;

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Runs the filters, then the selection edits, and returns the lines to print.
///
/// Without any `--add` the filtered view is listed with 1-based numbers, which
/// are valid selection tokens for a follow-up call. Otherwise the sorted
/// selection names are listed.
fn run(cli: &Cli, games: Vec<BoardGame>) -> Result<Vec<String>> {
    let mut planner = Planner::new(games);
    let sort = cli.sort_key();

    match cli.filters.split_last() {
        Some((last, earlier)) => {
            for expression in earlier {
                planner.filter(expression);
            }
            planner.filter_with(last, Some(sort));
        }
        None => {
            planner.filter_with("", Some(sort));
        }
    }
    info!("{} of {} games match", planner.len(), planner.catalog().len());

    if cli.adds.is_empty() {
        if !cli.removes.is_empty() || cli.save.is_some() {
            debug!("nothing selected; --remove and --save ignored");
        }
        return Ok(planner
            .view()
            .iter()
            .enumerate()
            .map(|(i, game)| format!("{}. {}", i + 1, game.name()))
            .collect());
    }

    let mut list = GameList::new();
    for token in &cli.adds {
        list.add(token, planner.view())
            .with_context(|| format!("cannot add '{token}'"))?;
    }
    for token in &cli.removes {
        list.remove(token)
            .with_context(|| format!("cannot remove '{token}'"))?;
    }

    if let Some(path) = cli.save_path() {
        let written = list.save(path.as_deref())?;
        info!("saved {} games to {}", list.count(), written.display());
    }

    Ok(list.names())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = catalog::load_catalog(&cli.catalog).and_then(|games| run(&cli, games));
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
