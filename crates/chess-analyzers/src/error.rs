//! Engine error types

use chess_core::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("cannot classify a game without moves")]
    NoMoves,
}

/// Why a game was left out of a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("game {game_id}: {source}")]
    Parse {
        game_id: String,
        #[source]
        source: ParseError,
    },
}

impl AnnotateError {
    pub fn game_id(&self) -> &str {
        match self {
            AnnotateError::Parse { game_id, .. } => game_id,
        }
    }
}
