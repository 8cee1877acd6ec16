//! Coaching report from a game collection.
//!
//! Reads games (a JSON array, or a PGN file with `--pgn --player NAME`),
//! annotates them, applies the filter flags and prints JSON statistics.
//!
//! Usage:
//!   coach-report games.json --color white --from 2025-01-01
//!   coach-report export.pgn --pgn --player alice --per-game

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chess_analyzers::{
    aggregate, annotate_games, AnalysisConfig, AnnotatedGame, FilterState, OpeningBucket,
    OpeningStats,
};
use chess_core::pgn::{game_from_pgn, split_games};
use chess_core::{Game, PlayerColor, SignalSet};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "coach-report")]
#[command(about = "Opening and habit statistics for a set of chess games")]
struct Cli {
    /// Games file: JSON array of game records, or PGN with --pgn
    input: PathBuf,

    /// Treat the input as a multi-game PGN file
    #[arg(long, requires = "player")]
    pgn: bool,

    /// Player whose side is analyzed (PGN input only)
    #[arg(long)]
    player: Option<String>,

    /// Earliest game date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest game date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Exact time control, e.g. 600+5
    #[arg(long)]
    time_control: Option<String>,

    /// Only games played as this color
    #[arg(long)]
    color: Option<PlayerColor>,

    /// Only games in this opening bucket, e.g. italian_game
    #[arg(long)]
    opening: Option<OpeningBucket>,

    /// Include per-game annotations in the output
    #[arg(long)]
    per_game: bool,
}

impl Cli {
    fn filter(&self) -> FilterState {
        FilterState {
            date_from: self.from,
            date_to: self.to,
            time_control: self.time_control.clone(),
            color: self.color,
            opening: self.opening,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OpeningRow {
    bucket: OpeningBucket,
    label: &'static str,
    games: u64,
    wins: u64,
    draws: u64,
    losses: u64,
    score_percent: f64,
}

impl From<&OpeningStats> for OpeningRow {
    fn from(stats: &OpeningStats) -> Self {
        Self {
            bucket: stats.bucket,
            label: stats.bucket.label(),
            games: stats.games,
            wins: stats.wins,
            draws: stats.draws,
            losses: stats.losses,
            score_percent: stats.score_percent,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SkippedGame {
    id: String,
    reason: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GameRow<'a> {
    id: &'a str,
    date: Option<NaiveDate>,
    color: PlayerColor,
    opening: OpeningBucket,
    total_moves: Option<u16>,
    signals: &'a SignalSet,
}

impl<'a> From<&'a AnnotatedGame<'a>> for GameRow<'a> {
    fn from(annotated: &'a AnnotatedGame<'a>) -> Self {
        Self {
            id: &annotated.game.id,
            date: annotated.game.date,
            color: annotated.game.player_color,
            opening: annotated.opening,
            total_moves: annotated.total_moves,
            signals: &annotated.signals,
        }
    }
}

fn load_games(cli: &Cli) -> anyhow::Result<Vec<Game>> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    if !cli.pgn {
        return serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse games from {}", cli.input.display()));
    }

    let player = cli.player.as_deref().context("--player is required with --pgn")?;
    let chunks = split_games(&text);
    let games: Vec<Game> = chunks
        .iter()
        .enumerate()
        .filter_map(|(i, pgn)| game_from_pgn(format!("pgn-{}", i + 1), pgn, player))
        .collect();

    if games.len() < chunks.len() {
        warn!(
            dropped = chunks.len() - games.len(),
            player,
            "Ignored PGN games without the player or without a result"
        );
    }
    Ok(games)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AnalysisConfig::from_env();

    let games = load_games(&cli)?;
    info!(games = games.len(), threads = config.threads, "Loaded games");

    let report = annotate_games(&games, &config);
    let filter = cli.filter();
    let (stats, openings) = aggregate(&report.annotated, &filter);
    info!(
        annotated = report.annotated.len(),
        skipped = report.skipped_count(),
        matched = stats.total_games,
        "Analysis complete"
    );

    let skipped: Vec<SkippedGame> = report
        .skipped
        .iter()
        .map(|err| SkippedGame {
            id: err.game_id().to_string(),
            reason: err.to_string(),
        })
        .collect();

    let mut output = serde_json::json!({
        "filter": filter,
        "stats": stats,
        "openings": openings.iter().map(OpeningRow::from).collect::<Vec<_>>(),
        "skipped": skipped,
    });

    if cli.per_game {
        let rows: Vec<GameRow<'_>> = report
            .annotated
            .iter()
            .filter(|a| filter.matches(a))
            .map(GameRow::from)
            .collect();
        output["games"] = serde_json::to_value(rows)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
