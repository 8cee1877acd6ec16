//! Game analysis engine.
//!
//! Classifies each game's opening, runs the signal detectors over its move
//! tokens and folds filtered collections into coaching statistics. The main
//! entry points are [`annotate_games`] and [`aggregate`].

pub mod annotate;
pub mod config;
pub mod detector_trait;
pub mod detectors;
pub mod error;
pub mod openings;
pub mod stats;
pub mod unified;

pub use annotate::{annotate_game, annotate_games, AnnotatedGame, BatchReport};
pub use config::{AnalysisConfig, DetectorConfig};
pub use detector_trait::{GameContext, SignalDetector};
pub use error::{AnnotateError, ClassifyError};
pub use openings::{
    classify, classify_as, default_bucket, OpeningBucket, OpeningCategory, OpeningClassifier,
};
pub use stats::{aggregate, aggregate_parallel, AnalysisStats, FilterState, OpeningStats};
pub use unified::detect_signals;
