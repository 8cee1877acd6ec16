//! Per-game annotation: tokenize, classify and run the detectors.

use chess_core::{tokenize, Game, SignalSet, Token};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use shakmaty::Color;
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::detector_trait::GameContext;
use crate::error::AnnotateError;
use crate::openings::{classify_as, default_bucket, OpeningBucket};
use crate::unified::detect_signals;

/// A game together with everything derived from its moves.
#[derive(Debug, Clone)]
pub struct AnnotatedGame<'a> {
    pub game: &'a Game,
    pub opening: OpeningBucket,
    pub signals: SignalSet,
    /// Full-move count: the reported value, else derived from the tokens.
    pub total_moves: Option<u16>,
}

/// Outcome of annotating a collection. `annotated` keeps input order.
#[derive(Debug, Default)]
pub struct BatchReport<'a> {
    pub annotated: Vec<AnnotatedGame<'a>>,
    pub skipped: Vec<AnnotateError>,
}

impl BatchReport<'_> {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

fn total_plies(game: &Game, tokens: &[Token]) -> u16 {
    match game.total_moves {
        Some(moves) => moves.saturating_mul(2),
        None => u16::try_from(tokens.len()).unwrap_or(u16::MAX),
    }
}

pub fn annotate_game<'a>(
    game: &'a Game,
    config: &AnalysisConfig,
) -> Result<AnnotatedGame<'a>, AnnotateError> {
    let tokens = tokenize(game.move_source()).map_err(|source| AnnotateError::Parse {
        game_id: game.id.clone(),
        source,
    })?;
    let color = Color::from(game.player_color);

    let opening = classify_as(&tokens, color).unwrap_or_else(|err| {
        warn!(game_id = %game.id, error = %err, "Opening classification failed, using default bucket");
        default_bucket(color)
    });

    let cached = game
        .signals
        .as_ref()
        .filter(|_| config.reuse_cached_signals);
    let signals = match cached {
        Some(signals) => signals.clone(),
        None => {
            let ctx = GameContext {
                tokens: &tokens,
                user_color: color,
                result: game.result,
                total_plies: total_plies(game, &tokens),
                config: &config.detectors,
            };
            detect_signals(&ctx)
        }
    };

    let derived_moves = u16::try_from(tokens.len().div_ceil(2)).unwrap_or(u16::MAX);

    Ok(AnnotatedGame {
        game,
        opening,
        signals,
        total_moves: Some(game.total_moves.unwrap_or(derived_moves)),
    })
}

/// Annotate every game on a pool of `config.threads` workers. Games that
/// cannot be tokenized are reported in `skipped` and never abort the batch.
pub fn annotate_games<'a>(games: &'a [Game], config: &AnalysisConfig) -> BatchReport<'a> {
    let annotate = |game: &'a Game| annotate_game(game, config);

    let results: Vec<Result<AnnotatedGame<'a>, AnnotateError>> = ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()
        .map(|pool| pool.install(|| games.par_iter().map(annotate).collect()))
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build analysis thread pool, annotating sequentially");
            games.iter().map(annotate).collect()
        });

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(annotated) => report.annotated.push(annotated),
            Err(err) => {
                warn!(game_id = err.game_id(), error = %err, "Skipping game");
                report.skipped.push(err);
            }
        }
    }

    debug!(
        games = games.len(),
        annotated = report.annotated.len(),
        skipped = report.skipped_count(),
        "Annotated batch"
    );

    report
}
