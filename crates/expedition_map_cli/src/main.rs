//! Command-line front end for the expedition map core.
//!
//! # Responsibility
//! - Load configuration and start logging before any command runs.
//! - Render catalog listings and save completion stats as plain text or JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use expedition_map_core::{
    compute_stats_from_bytes, format_cursor, init_logging, AssetPaths, CatalogSources,
    CoordinateQuery, CompletionSummary, LogLevel, MapView, MarkerCatalog, MarkerCategory,
    MarkerFilter, StatsBoard, ViewerConfig,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const WINDOWS_SAVE_DIR: &str =
    r"%USERPROFILE%\AppData\LocalLow\Draknek and Friends\A Monster's Expedition\<Slot-Number>";
const LINUX_SAVE_DIR: &str = "<Steam-folder>/steamapps/compatdata/1052990/pfx/<Slot-Number>";

#[derive(Debug, Parser)]
#[command(author, version, about = "A Monster's Expedition map data and completion stats")]
struct Cli {
    /// JSON config file; environment variables override its values.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
    /// Absolute directory for rolling log files.
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute completion stats from a save file.
    Stats {
        #[arg(value_name = "SAVE")]
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List visible markers from the data directory.
    Markers {
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// Categories to show (default: exhibits, friends, mailboxes).
        #[arg(long, value_name = "CATEGORY", value_parser = parse_category)]
        show: Vec<MarkerCategory>,
        #[arg(long)]
        json: bool,
    },
    /// Resolve an `x, y` coordinate to a map position.
    Locate {
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Print where the game keeps its save files.
    Where,
}

fn parse_category(value: &str) -> Result<MarkerCategory, String> {
    MarkerCategory::parse(value).ok_or_else(|| {
        format!("unknown category `{value}`; expected exhibit|friend|solution|mailbox")
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = ViewerConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.logging.dir = Some(dir);
    }
    if let Err(message) = init_logging(&config.logging) {
        bail!("failed to initialize logging: {message}");
    }

    match cli.command {
        Command::Stats { path, json } => run_stats(&path, json),
        Command::Markers {
            data_dir,
            show,
            json,
        } => {
            let Some(data_dir) = data_dir.or(config.data_dir.clone()) else {
                bail!("no data directory; pass --data-dir or set it in the config");
            };
            run_markers(&config, &data_dir, &show, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Locate { query } => run_locate(&query),
        Command::Where => {
            println!("Select the latest file named `save` (not an image) in the slot folder.");
            println!("Windows: {WINDOWS_SAVE_DIR}");
            println!("Linux:   {LINUX_SAVE_DIR}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_stats(path: &Path, json: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read save file `{}`", path.display()))?;

    let mut board = StatsBoard::new();
    let ticket = board.begin_upload();
    info!(
        "event=stats_command module=cli status=start ticket={} path={}",
        ticket.id(),
        path.display()
    );
    board.finish_upload(ticket, compute_stats_from_bytes(&bytes));
    match board.last_error() {
        None => {
            let summary = board.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_summary(summary: &CompletionSummary) {
    println!(
        "Viewed Exhibits: {} / {} ({}%)",
        summary.exhibits_viewed, summary.exhibits_total, summary.exhibit_percentage
    );
    println!(
        "Hugged Friends:  {} / {} ({}%)",
        summary.hugged_friends, summary.friends_total, summary.friend_percentage
    );
    println!(
        "Visited Islands: {} (unique islands visited)",
        summary.islands_visited
    );
}

fn run_markers(
    config: &ViewerConfig,
    data_dir: &Path,
    show: &[MarkerCategory],
    json: bool,
) -> Result<()> {
    let sources = CatalogSources::load_dir(data_dir)?;
    let catalog = MarkerCatalog::build(&sources);
    let filter = if show.is_empty() {
        MarkerFilter::default()
    } else {
        MarkerFilter::only(show)
    };
    let visible: Vec<_> = catalog.visible(&filter).collect();
    info!(
        "event=markers_list module=cli status=ok total={} visible={}",
        catalog.len(),
        visible.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    let assets = AssetPaths::new(config.base_path.clone());
    for marker in &visible {
        let label = marker
            .title()
            .filter(|title| !title.is_empty())
            .unwrap_or(marker.id.as_str());
        println!(
            "{:<8} {:>12}  {}  [{}]",
            marker.category(),
            format_cursor(marker.position),
            label,
            assets.marker_icon(marker.category())
        );
    }
    println!(
        "{} of {} markers shown ({} landmarks without coordinates skipped, {} malformed entries skipped)",
        visible.len(),
        catalog.len(),
        catalog.dropped_landmarks(),
        catalog.rejected_entries()
    );
    Ok(())
}

fn run_locate(query: &str) -> Result<ExitCode> {
    let Some(parsed) = CoordinateQuery::parse(query) else {
        eprintln!("expected `x, y`, got `{query}`");
        return Ok(ExitCode::FAILURE);
    };
    let view = MapView::default();
    println!(
        "row={} column={} zoom={} on_map={}",
        parsed.target.row,
        parsed.target.column,
        view.fly_to_zoom,
        view.contains(parsed.target)
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::{parse_category, Cli, Command};
    use clap::{CommandFactory, Parser};
    use expedition_map_core::MarkerCategory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn markers_accepts_repeated_show_flags() {
        let cli = Cli::parse_from([
            "expedition-map",
            "markers",
            "--data-dir",
            "/data",
            "--show",
            "solutions",
            "--show",
            "friend",
        ]);
        match cli.command {
            Command::Markers { show, .. } => {
                assert_eq!(show, vec![MarkerCategory::Solution, MarkerCategory::Friend]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(parse_category("islands").is_err());
    }
}
