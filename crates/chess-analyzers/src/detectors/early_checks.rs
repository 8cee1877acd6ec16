use chess_core::{SignalSet, Token};
use shakmaty::Color;

use crate::detector_trait::{GameContext, SignalDetector};

/// Checks given by `color`'s opponent among `tokens` (saturates at 255).
pub fn checks_received(tokens: &[Token], color: Color) -> u8 {
    let opponent = !color;
    let count = tokens
        .iter()
        .filter(|t| t.color() == opponent && t.is_check())
        .count();
    count.min(u8::MAX as usize) as u8
}

pub struct EarlyChecksDetector;

impl SignalDetector for EarlyChecksDetector {
    fn name(&self) -> &'static str {
        "early_checks_received"
    }

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet) {
        signals.early_checks_received = checks_received(ctx.opening(), ctx.user_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectorConfig;
    use crate::detectors::test_support::{context, tokens};
    use chess_core::GameOutcome;

    #[test]
    fn test_counts_opponent_checks_only() {
        let t = tokens(&["e4", "d5", "exd5", "Qxd5", "Nc3", "Qe5+", "Be2", "Qxe4", "Nf3", "Qxg2#"]);
        assert_eq!(checks_received(&t, Color::White), 2);
        assert_eq!(checks_received(&t, Color::Black), 0);
    }

    #[test]
    fn test_opaque_plus_is_not_a_check() {
        let t = tokens(&["e4", "what+"]);
        assert_eq!(checks_received(&t, Color::White), 0);
    }

    #[test]
    fn test_checks_after_move_ten_are_ignored() {
        let mut moves = vec!["e4", "Qh4+"];
        moves.extend(std::iter::repeat(["Nf3", "Nf6", "Ng1", "Ng8"]).take(4).flatten());
        moves.extend(["Nf3", "Nf6"]);
        // plies 21 and 22, just past the window
        moves.extend(["Ke2", "Qxe4+"]);
        let t = tokens(&moves);
        assert_eq!(t.len(), 22);

        let mut config = DetectorConfig::default();
        let mut signals = SignalSet::default();
        EarlyChecksDetector.detect(&context(&t, Color::White, GameOutcome::Loss, &config), &mut signals);
        assert_eq!(signals.early_checks_received, 1);

        config.opening_window_plies = 22;
        EarlyChecksDetector.detect(&context(&t, Color::White, GameOutcome::Loss, &config), &mut signals);
        assert_eq!(signals.early_checks_received, 2);
    }
}
