//! Unified runner that applies every signal detector to a game in one pass.

use chess_core::SignalSet;

use crate::detector_trait::{GameContext, SignalDetector};
use crate::detectors::castling::CastlingDetector;
use crate::detectors::early_checks::EarlyChecksDetector;
use crate::detectors::knight_fork::KnightForkDetector;
use crate::detectors::queen_moves::QueenMovesDetector;
use crate::detectors::queen_tempo::QueenTempoDetector;
use crate::detectors::quick_result::QuickResultDetector;

/// All detectors, in the order they are applied.
pub static DETECTORS: &[&dyn SignalDetector] = &[
    &CastlingDetector,
    &QueenMovesDetector,
    &QuickResultDetector,
    &EarlyChecksDetector,
    &QueenTempoDetector,
    &KnightForkDetector,
];

/// Run every detector over the game described by `ctx`.
pub fn detect_signals(ctx: &GameContext<'_>) -> SignalSet {
    let mut signals = SignalSet::default();
    for detector in DETECTORS {
        detector.detect(ctx, &mut signals);
    }
    signals
}
