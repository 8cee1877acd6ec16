//! Queen tempo loss: a textual heuristic, no board is replayed.
//!
//! Flags a game when the player's first queen move in the opening is quiet
//! (neither a capture nor a check) and the queen moves again within
//! `tempo_window_plies`. This approximates "the queen came out and got
//! chased"; it cannot tell a forced retreat from a voluntary one.

use chess_core::{SignalSet, Token};
use shakmaty::Color;

use crate::detector_trait::{GameContext, SignalDetector};

pub fn queen_tempo_loss(opening: &[Token], color: Color, window_plies: u16) -> bool {
    let mut queen_moves = opening.iter().filter(|t| t.is_queen_move_by(color));

    let Some(first) = queen_moves.next() else {
        return false;
    };
    if first.is_capture() || first.is_check() {
        return false;
    }

    queen_moves
        .next()
        .is_some_and(|second| second.ply() - first.ply() <= window_plies)
}

pub struct QueenTempoDetector;

impl SignalDetector for QueenTempoDetector {
    fn name(&self) -> &'static str {
        "queen_tempo_loss"
    }

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet) {
        signals.queen_tempo_loss =
            queen_tempo_loss(ctx.opening(), ctx.user_color, ctx.config.tempo_window_plies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectorConfig;
    use crate::detectors::test_support::{context, tokens};
    use chess_core::GameOutcome;

    #[test]
    fn test_early_queen_chased() {
        let t = tokens(&["e4", "e5", "Qh5", "Nc6", "Bc4", "g6", "Qf3"]);
        assert!(queen_tempo_loss(&t, Color::White, 20));
        assert!(!queen_tempo_loss(&t, Color::Black, 20));
    }

    #[test]
    fn test_first_queen_move_capture_is_fine() {
        let t = tokens(&["e4", "d5", "exd5", "Qxd5", "Nc3", "Qa5"]);
        assert!(!queen_tempo_loss(&t, Color::Black, 20));
    }

    #[test]
    fn test_first_queen_move_check_is_fine() {
        let t = tokens(&["e4", "f6", "d4", "g5", "Qh5+", "Kd7", "Qf7+"]);
        assert!(!queen_tempo_loss(&t, Color::White, 20));
    }

    #[test]
    fn test_single_queen_move() {
        let t = tokens(&["e4", "e5", "Qh5", "Nc6"]);
        assert!(!queen_tempo_loss(&t, Color::White, 20));
    }

    #[test]
    fn test_window_limits_gap() {
        let t = tokens(&["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Nc3", "d6", "Qf3"]);
        assert!(queen_tempo_loss(&t, Color::White, 6));
        assert!(!queen_tempo_loss(&t, Color::White, 4));
    }

    #[test]
    fn test_second_queen_move_outside_opening_window() {
        let mut moves = vec!["e4", "e5", "Qf3"];
        moves.extend(std::iter::repeat(["Nc6", "Ne2", "Nb8", "Ng1"]).take(4).flatten());
        // ply 21: the queen moves again, one ply past the window
        moves.extend(["Nc6", "Qg3"]);
        let t = tokens(&moves);
        assert_eq!(t.len(), 21);

        let mut config = DetectorConfig::default();
        let mut signals = SignalSet::default();
        QueenTempoDetector.detect(&context(&t, Color::White, GameOutcome::Draw, &config), &mut signals);
        assert!(!signals.queen_tempo_loss);

        config.opening_window_plies = 30;
        QueenTempoDetector.detect(&context(&t, Color::White, GameOutcome::Draw, &config), &mut signals);
        assert!(signals.queen_tempo_loss);
    }
}
