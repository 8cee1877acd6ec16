//! Individual signal detectors, one per file.

pub mod castling;
pub mod early_checks;
pub mod knight_fork;
pub mod queen_moves;
pub mod queen_tempo;
pub mod quick_result;

#[cfg(test)]
pub(crate) mod test_support {
    use chess_core::{GameOutcome, Token};
    use shakmaty::Color;

    use crate::detector_trait::GameContext;
    use crate::config::DetectorConfig;

    pub fn tokens(moves: &[&str]) -> Vec<Token> {
        moves
            .iter()
            .enumerate()
            .map(|(i, m)| Token::new(i as u16 + 1, *m))
            .collect()
    }

    pub fn context<'a>(
        tokens: &'a [Token],
        user_color: Color,
        result: GameOutcome,
        config: &'a DetectorConfig,
    ) -> GameContext<'a> {
        GameContext {
            tokens,
            user_color,
            result,
            total_plies: tokens.len() as u16,
            config,
        }
    }
}
