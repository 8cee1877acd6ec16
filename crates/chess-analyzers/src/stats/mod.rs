//! Filtering and aggregation of annotated games into portfolio statistics.

pub mod aggregate;
pub mod filter;

pub use aggregate::{
    aggregate, aggregate_parallel, AnalysisStats, OpeningStats, StatsAccumulator, Tally,
};
pub use filter::FilterState;

/// Round to one decimal place for display.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `(wins + draws / 2) / games` as a percentage with one decimal, 0 for no games.
pub fn score_percent(wins: u64, draws: u64, games: u64) -> f64 {
    if games == 0 {
        return 0.0;
    }
    round1((wins as f64 + 0.5 * draws as f64) / games as f64 * 100.0)
}
