//! Tokenizer error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no moves could be derived from the game")]
    EmptyGame,
}
