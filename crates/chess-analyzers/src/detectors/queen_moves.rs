use chess_core::{SignalSet, Token};
use shakmaty::Color;

use crate::detector_trait::{GameContext, SignalDetector};

/// Number of queen moves by `color` among `tokens` (saturates at 255).
pub fn queen_moves(tokens: &[Token], color: Color) -> u8 {
    let count = tokens.iter().filter(|t| t.is_queen_move_by(color)).count();
    count.min(u8::MAX as usize) as u8
}

/// Counts queen moves in the opening window (first 10 full moves by default).
pub struct QueenMovesDetector;

impl SignalDetector for QueenMovesDetector {
    fn name(&self) -> &'static str {
        "queen_moves_first_10"
    }

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet) {
        signals.queen_moves_first_10 = queen_moves(ctx.opening(), ctx.user_color);
    }
}
