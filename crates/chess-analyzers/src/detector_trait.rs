//! Base trait and context for signal detectors.

use chess_core::{GameOutcome, SignalSet, Token};
use shakmaty::Color;

use crate::config::DetectorConfig;

/// Everything a detector may look at for one game.
#[derive(Debug, Clone, Copy)]
pub struct GameContext<'a> {
    pub tokens: &'a [Token],
    pub user_color: Color,
    pub result: GameOutcome,
    /// Game length in plies; may exceed `tokens.len()` when the source
    /// reported a full-move count for a truncated move list.
    pub total_plies: u16,
    pub config: &'a DetectorConfig,
}

impl<'a> GameContext<'a> {
    /// Tokens within the first `plies` plies.
    pub fn window(&self, plies: u16) -> &'a [Token] {
        let end = self.tokens.len().min(plies as usize);
        &self.tokens[..end]
    }

    /// Tokens within the configured opening window.
    pub fn opening(&self) -> &'a [Token] {
        self.window(self.config.opening_window_plies)
    }

    /// Full moves started in the game; an odd trailing ply counts as a move.
    pub fn full_moves(&self) -> u16 {
        self.total_plies.div_ceil(2)
    }

    pub fn opponent_color(&self) -> Color {
        !self.user_color
    }
}

/// A detector fills in its field(s) of a [`SignalSet`]. Detectors only
/// inspect tokens and cannot fail; opaque tokens simply never match.
pub trait SignalDetector: Send + Sync {
    /// Signal key, used in logs.
    fn name(&self) -> &'static str;

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet);
}
