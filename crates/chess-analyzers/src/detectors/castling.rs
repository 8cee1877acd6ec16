use chess_core::{SignalSet, Token};
use shakmaty::Color;

use crate::detector_trait::{GameContext, SignalDetector};

/// Ply of `color`'s first castle (either side), if any.
pub fn castled_at_ply(tokens: &[Token], color: Color) -> Option<u16> {
    tokens
        .iter()
        .find(|t| t.color() == color && t.is_castle())
        .map(Token::ply)
}

pub struct CastlingDetector;

impl SignalDetector for CastlingDetector {
    fn name(&self) -> &'static str {
        "castled_at_ply"
    }

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet) {
        signals.castled_at_ply = castled_at_ply(ctx.tokens, ctx.user_color);
    }
}
