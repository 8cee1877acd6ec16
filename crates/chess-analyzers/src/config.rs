//! Engine configuration from environment variables

use std::env;

use serde::{Deserialize, Serialize};

/// Windows and thresholds for the pattern detectors.
///
/// The tempo-loss and fork detectors are textual heuristics; their windows
/// are tunable here rather than fixed in code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Plies counted as "the opening" (10 full moves).
    pub opening_window_plies: u16,

    /// Games at or under this many full moves count as quick.
    pub quick_game_max_moves: u16,

    /// Max ply distance between a quiet queen move and the next queen move.
    pub tempo_window_plies: u16,

    /// Plies after the knight lands on c7/c2 in which a capture completes the fork.
    pub fork_capture_window_plies: u16,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            opening_window_plies: 20,
            quick_game_max_moves: 15,
            tempo_window_plies: 20,
            fork_capture_window_plies: 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub detectors: DetectorConfig,

    /// Worker threads for per-game annotation
    pub threads: usize,

    /// Trust signals already stored on a game instead of recomputing them
    pub reuse_cached_signals: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            detectors: DetectorConfig::default(),
            threads: num_cpus::get(),
            reuse_cached_signals: false,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        let defaults = DetectorConfig::default();

        let detectors = DetectorConfig {
            opening_window_plies: env_parse("OPENING_WINDOW_PLIES")
                .unwrap_or(defaults.opening_window_plies),
            quick_game_max_moves: env_parse("QUICK_GAME_MAX_MOVES")
                .unwrap_or(defaults.quick_game_max_moves),
            tempo_window_plies: env_parse("TEMPO_WINDOW_PLIES")
                .unwrap_or(defaults.tempo_window_plies),
            fork_capture_window_plies: env_parse("FORK_CAPTURE_WINDOW_PLIES")
                .unwrap_or(defaults.fork_capture_window_plies),
        };

        let threads = env_parse::<usize>("ANALYSIS_THREADS")
            .filter(|n| *n > 0)
            .unwrap_or_else(num_cpus::get);

        let reuse_cached_signals = env::var("REUSE_CACHED_SIGNALS")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            detectors,
            threads,
            reuse_cached_signals,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
