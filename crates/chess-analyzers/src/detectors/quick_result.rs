use chess_core::{GameOutcome, SignalSet};

use crate::detector_trait::{GameContext, SignalDetector};

/// A game is quick when it lasted at most `max_moves` full moves.
pub fn is_quick(full_moves: u16, max_moves: u16) -> bool {
    full_moves <= max_moves
}

/// Flags quick losses and quick wins. Draws are never quick results.
pub struct QuickResultDetector;

impl SignalDetector for QuickResultDetector {
    fn name(&self) -> &'static str {
        "quick_result"
    }

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet) {
        let quick = is_quick(ctx.full_moves(), ctx.config.quick_game_max_moves);
        signals.is_quick_loss = quick && ctx.result == GameOutcome::Loss;
        signals.is_quick_win = quick && ctx.result == GameOutcome::Win;
    }
}
