//! Shared chess data model: game records, typed move tokens and the PGN
//! movetext tokenizer.

pub mod error;
pub mod game_data;
pub mod pgn;
pub mod token;

pub use error::ParseError;
pub use game_data::{Game, GameOutcome, MoveSource, PlayerColor, SignalSet, UnknownColor};
pub use pgn::tokenize;
pub use token::{normalize_san, Token, TokenKind};

pub use shakmaty::{Color, Role, Square};
