//! Folding annotated games into [`AnalysisStats`] and [`OpeningStats`].
//!
//! Everything is accumulated as raw integer sums in a [`StatsAccumulator`];
//! averages and percentages are derived only in [`StatsAccumulator::finish`].
//! Merging two accumulators adds their sums, so any partition of a collection
//! folds to the same result as the whole.

use std::collections::BTreeMap;

use chess_core::GameOutcome;
use rayon::prelude::*;
use serde::Serialize;

use super::{round1, score_percent, FilterState};
use crate::annotate::AnnotatedGame;
use crate::openings::OpeningBucket;

/// Win/draw/loss counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub games: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Loss => self.losses += 1,
        }
    }

    pub fn merge(&mut self, other: &Tally) {
        self.games += other.games;
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
    }

    pub fn score_percent(&self) -> f64 {
        score_percent(self.wins, self.draws, self.games)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsAccumulator {
    pub results: Tally,
    pub length_sum: u64,
    pub length_games: u64,
    pub queen_moves_sum: u64,
    pub castling_ply_sum: u64,
    pub castled_games: u64,
    pub quick_losses: u64,
    pub quick_wins: u64,
    pub queen_tempo_losses: u64,
    pub nc7_forks: u64,
    pub early_checks_received: u64,
    pub openings: BTreeMap<OpeningBucket, Tally>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, annotated: &AnnotatedGame<'_>) {
        let signals = &annotated.signals;
        let outcome = annotated.game.result;

        self.results.record(outcome);
        self.openings
            .entry(annotated.opening)
            .or_default()
            .record(outcome);

        if let Some(moves) = annotated.total_moves {
            self.length_sum += u64::from(moves);
            self.length_games += 1;
        }
        if let Some(ply) = signals.castled_at_ply {
            self.castling_ply_sum += u64::from(ply);
            self.castled_games += 1;
        }

        self.queen_moves_sum += u64::from(signals.queen_moves_first_10);
        self.quick_losses += u64::from(signals.is_quick_loss);
        self.quick_wins += u64::from(signals.is_quick_win);
        self.queen_tempo_losses += u64::from(signals.queen_tempo_loss);
        self.nc7_forks += u64::from(signals.nc7_fork_detected);
        self.early_checks_received += u64::from(signals.early_checks_received);
    }

    /// Add `other`'s sums into `self`.
    pub fn merge(&mut self, other: &StatsAccumulator) {
        self.results.merge(&other.results);
        self.length_sum += other.length_sum;
        self.length_games += other.length_games;
        self.queen_moves_sum += other.queen_moves_sum;
        self.castling_ply_sum += other.castling_ply_sum;
        self.castled_games += other.castled_games;
        self.quick_losses += other.quick_losses;
        self.quick_wins += other.quick_wins;
        self.queen_tempo_losses += other.queen_tempo_losses;
        self.nc7_forks += other.nc7_forks;
        self.early_checks_received += other.early_checks_received;

        for (bucket, tally) in &other.openings {
            self.openings.entry(*bucket).or_default().merge(tally);
        }
    }

    pub fn finish(&self) -> (AnalysisStats, Vec<OpeningStats>) {
        let r = &self.results;
        let stats = AnalysisStats {
            total_games: r.games,
            wins: r.wins,
            draws: r.draws,
            losses: r.losses,
            score_percent: r.score_percent(),
            avg_game_length: mean(self.length_sum, self.length_games),
            avg_queen_moves_first_10: mean(self.queen_moves_sum, r.games),
            avg_castling_ply: mean(self.castling_ply_sum, self.castled_games),
            castled_games: self.castled_games,
            quick_losses: self.quick_losses,
            quick_wins: self.quick_wins,
            queen_tempo_losses: self.queen_tempo_losses,
            nc7_forks: self.nc7_forks,
            early_checks_received: self.early_checks_received,
        };

        let mut openings: Vec<OpeningStats> = self
            .openings
            .iter()
            .map(|(bucket, tally)| OpeningStats {
                bucket: *bucket,
                games: tally.games,
                wins: tally.wins,
                draws: tally.draws,
                losses: tally.losses,
                score_percent: tally.score_percent(),
            })
            .collect();
        // BTreeMap iteration is already in bucket order; the stable sort keeps it for ties.
        openings.sort_by(|a, b| b.games.cmp(&a.games));

        (stats, openings)
    }
}

fn mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round1(sum as f64 / count as f64)
}

/// Portfolio-level statistics for a filtered game set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total_games: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
    pub score_percent: f64,
    /// Mean full moves over games with a known length.
    pub avg_game_length: f64,
    pub avg_queen_moves_first_10: f64,
    /// Mean castling ply over castled games only.
    pub avg_castling_ply: f64,
    pub castled_games: u64,
    pub quick_losses: u64,
    pub quick_wins: u64,
    pub queen_tempo_losses: u64,
    pub nc7_forks: u64,
    pub early_checks_received: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningStats {
    pub bucket: OpeningBucket,
    pub games: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
    pub score_percent: f64,
}

fn accumulate<'g, 'a: 'g>(
    games: impl IntoIterator<Item = &'g AnnotatedGame<'a>>,
    filter: &FilterState,
) -> StatsAccumulator {
    let mut acc = StatsAccumulator::new();
    for game in games.into_iter().filter(|g| filter.matches(g)) {
        acc.add(game);
    }
    acc
}

/// Filter `games` and fold them into global and per-opening statistics.
pub fn aggregate(games: &[AnnotatedGame<'_>], filter: &FilterState) -> (AnalysisStats, Vec<OpeningStats>) {
    accumulate(games, filter).finish()
}

const PARALLEL_CHUNK: usize = 256;

/// Same result as [`aggregate`], folding chunks on the current rayon pool.
pub fn aggregate_parallel(
    games: &[AnnotatedGame<'_>],
    filter: &FilterState,
) -> (AnalysisStats, Vec<OpeningStats>) {
    accumulate_chunked(games, filter, PARALLEL_CHUNK).finish()
}

fn accumulate_chunked(
    games: &[AnnotatedGame<'_>],
    filter: &FilterState,
    chunk_size: usize,
) -> StatsAccumulator {
    games
        .par_chunks(chunk_size.max(1))
        .map(|chunk| accumulate(chunk, filter))
        .reduce(StatsAccumulator::new, |mut a, b| {
            a.merge(&b);
            a
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Game, PlayerColor, SignalSet};
    use proptest::prelude::*;

    fn game(id: usize, result: GameOutcome) -> Game {
        Game {
            id: format!("g{id}"),
            date: None,
            time_control: None,
            player_color: PlayerColor::White,
            result,
            opponent: None,
            opponent_rating: None,
            player_rating: None,
            total_moves: None,
            moves: Vec::new(),
            pgn: None,
            signals: None,
        }
    }

    fn annotated(game: &Game, opening: OpeningBucket, signals: SignalSet, total_moves: Option<u16>) -> AnnotatedGame<'_> {
        AnnotatedGame {
            game,
            opening,
            signals,
            total_moves,
        }
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let (stats, openings) = aggregate(&[], &FilterState::default());
        assert_eq!(stats, AnalysisStats::default());
        assert_eq!(stats.score_percent, 0.0);
        assert!(openings.is_empty());
    }

    #[test]
    fn test_filtered_to_nothing_is_all_zero() {
        let g = game(1, GameOutcome::Win);
        let games = [annotated(&g, OpeningBucket::ItalianGame, SignalSet::default(), Some(20))];
        let filter = FilterState {
            color: Some(PlayerColor::Black),
            ..FilterState::default()
        };
        let (stats, openings) = aggregate(&games, &filter);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.avg_game_length, 0.0);
        assert!(openings.is_empty());
    }

    #[test]
    fn test_avg_castling_ply_skips_uncastled_games() {
        let a = game(1, GameOutcome::Win);
        let b = game(2, GameOutcome::Loss);
        let castled = SignalSet {
            castled_at_ply: Some(10),
            ..SignalSet::default()
        };
        let games = [
            annotated(&a, OpeningBucket::ItalianGame, castled, Some(30)),
            annotated(&b, OpeningBucket::ItalianGame, SignalSet::default(), None),
        ];

        let (stats, _) = aggregate(&games, &FilterState::default());
        assert_eq!(stats.avg_castling_ply, 10.0);
        assert_eq!(stats.castled_games, 1);
        assert_eq!(stats.avg_game_length, 30.0);
        assert_eq!(stats.score_percent, 50.0);
    }

    #[test]
    fn test_habit_counters_are_sums() {
        let a = game(1, GameOutcome::Loss);
        let b = game(2, GameOutcome::Loss);
        let signals = SignalSet {
            queen_moves_first_10: 3,
            is_quick_loss: true,
            early_checks_received: 2,
            queen_tempo_loss: true,
            nc7_fork_detected: true,
            ..SignalSet::default()
        };
        let games = [
            annotated(&a, OpeningBucket::CaroKann, signals.clone(), Some(12)),
            annotated(&b, OpeningBucket::CaroKann, SignalSet { queen_moves_first_10: 2, ..signals }, Some(14)),
        ];

        let (stats, _) = aggregate(&games, &FilterState::default());
        assert_eq!(stats.quick_losses, 2);
        assert_eq!(stats.quick_wins, 0);
        assert_eq!(stats.early_checks_received, 4);
        assert_eq!(stats.queen_tempo_losses, 2);
        assert_eq!(stats.nc7_forks, 2);
        assert_eq!(stats.avg_queen_moves_first_10, 2.5);
        assert_eq!(stats.avg_game_length, 13.0);
    }

    #[test]
    fn test_openings_ordered_by_count_then_declaration() {
        let outcomes = [GameOutcome::Win, GameOutcome::Draw, GameOutcome::Loss, GameOutcome::Win];
        let owned: Vec<Game> = outcomes.iter().enumerate().map(|(i, r)| game(i, *r)).collect();
        let buckets = [
            OpeningBucket::RuyLopez,
            OpeningBucket::LondonSystem,
            OpeningBucket::ItalianGame,
            OpeningBucket::LondonSystem,
        ];
        let games: Vec<_> = owned
            .iter()
            .zip(buckets)
            .map(|(g, b)| annotated(g, b, SignalSet::default(), None))
            .collect();

        let (_, openings) = aggregate(&games, &FilterState::default());
        let order: Vec<_> = openings.iter().map(|o| o.bucket).collect();
        assert_eq!(
            order,
            [OpeningBucket::LondonSystem, OpeningBucket::ItalianGame, OpeningBucket::RuyLopez]
        );
        assert_eq!(openings[0].games, 2);
        assert_eq!(openings[0].score_percent, 75.0);
        assert_eq!(openings[1].score_percent, 0.0);
    }

    fn arb_game() -> impl Strategy<Value = (GameOutcome, usize, SignalSet, Option<u16>)> {
        let outcome = prop_oneof![
            Just(GameOutcome::Win),
            Just(GameOutcome::Draw),
            Just(GameOutcome::Loss)
        ];
        let signals = (
            proptest::option::of(1u16..60),
            0u8..6,
            any::<bool>(),
            any::<bool>(),
            0u8..4,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(castled, queens, ql, qw, checks, tempo, fork)| SignalSet {
                castled_at_ply: castled,
                queen_moves_first_10: queens,
                is_quick_loss: ql,
                is_quick_win: qw,
                early_checks_received: checks,
                queen_tempo_loss: tempo,
                nc7_fork_detected: fork,
            });
        (
            outcome,
            0..OpeningBucket::ALL.len(),
            signals,
            proptest::option::of(1u16..120),
        )
    }

    proptest! {
        #[test]
        fn prop_merge_of_partitions_equals_whole(
            specs in prop::collection::vec(arb_game(), 0..40),
            mask in prop::collection::vec(any::<bool>(), 40),
            chunk_size in 1usize..8,
        ) {
            let owned: Vec<Game> = specs.iter().enumerate().map(|(i, s)| game(i, s.0)).collect();
            let games: Vec<AnnotatedGame<'_>> = owned
                .iter()
                .zip(&specs)
                .map(|(g, (_, bucket, signals, moves))| {
                    annotated(g, OpeningBucket::ALL[*bucket], signals.clone(), *moves)
                })
                .collect();

            let filter = FilterState::default();
            let (left, right): (Vec<_>, Vec<_>) =
                games.iter().zip(&mask).partition(|(_, in_left)| **in_left);

            let mut merged = accumulate(left.into_iter().map(|(g, _)| g), &filter);
            merged.merge(&accumulate(right.into_iter().map(|(g, _)| g), &filter));
            let whole = accumulate(&games, &filter);

            prop_assert_eq!(&merged, &whole);
            prop_assert_eq!(merged.finish(), whole.finish());
            prop_assert_eq!(&accumulate_chunked(&games, &filter, chunk_size), &whole);
            prop_assert_eq!(aggregate_parallel(&games, &filter), aggregate(&games, &filter));
        }
    }
}
