//! Nc7 fork motif: a textual heuristic, not a verified tactic.
//!
//! The opponent drops a knight on c7 (or c2 when the opponent is Black),
//! the classic royal fork square, and captures something within the next
//! `fork_capture_window_plies` plies.

use chess_core::{SignalSet, Token};
use shakmaty::{Color, Role, Square};

use crate::detector_trait::{GameContext, SignalDetector};

/// Fork square targeted by a knight of `forking_side`.
pub fn fork_square(forking_side: Color) -> Square {
    match forking_side {
        Color::White => Square::C7,
        Color::Black => Square::C2,
    }
}

/// True when `color`'s opponent forks from c7/c2 and cashes in.
pub fn nc7_fork(tokens: &[Token], color: Color, capture_window: u16) -> bool {
    let opponent = !color;
    let target = fork_square(opponent);

    tokens.iter().enumerate().any(|(i, t)| {
        let lands_on_fork_square = t.color() == opponent
            && t.role() == Some(Role::Knight)
            && t.destination() == Some(target);
        if !lands_on_fork_square {
            return false;
        }

        let deadline = t.ply().saturating_add(capture_window);
        tokens[i + 1..]
            .iter()
            .take_while(|next| next.ply() <= deadline)
            .any(|next| next.color() == opponent && next.is_capture())
    })
}

pub struct KnightForkDetector;

impl SignalDetector for KnightForkDetector {
    fn name(&self) -> &'static str {
        "nc7_fork"
    }

    fn detect(&self, ctx: &GameContext<'_>, signals: &mut SignalSet) {
        signals.nc7_fork_detected =
            nc7_fork(ctx.tokens, ctx.user_color, ctx.config.fork_capture_window_plies);
    }
}
