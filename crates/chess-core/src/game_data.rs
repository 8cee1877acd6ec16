use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shakmaty::Color;
use thiserror::Error;

/// Which side the analyzed player had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerColor::White => "white",
            PlayerColor::Black => "black",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color: {0} (expected white or black)")]
pub struct UnknownColor(pub String);

impl FromStr for PlayerColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(PlayerColor::White),
            "black" | "b" => Ok(PlayerColor::Black),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

impl From<PlayerColor> for Color {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::White => Color::White,
            PlayerColor::Black => Color::Black,
        }
    }
}

impl From<Color> for PlayerColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => PlayerColor::White,
            Color::Black => PlayerColor::Black,
        }
    }
}

/// Game result from the analyzed player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    /// Map a PGN result marker ("1-0", "0-1", "1/2-1/2") onto the player's side.
    /// Unfinished games ("*") have no outcome.
    pub fn from_pgn_result(result: &str, color: PlayerColor) -> Option<Self> {
        match (result, color) {
            ("1-0", PlayerColor::White) | ("0-1", PlayerColor::Black) => Some(GameOutcome::Win),
            ("0-1", PlayerColor::White) | ("1-0", PlayerColor::Black) => Some(GameOutcome::Loss),
            ("1/2-1/2", _) => Some(GameOutcome::Draw),
            _ => None,
        }
    }
}

/// Derived per-game signals. Recomputable from the move list at any time;
/// a copy stored on a [`Game`] is only a cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSet {
    pub castled_at_ply: Option<u16>,
    pub queen_moves_first_10: u8,
    pub is_quick_loss: bool,
    pub is_quick_win: bool,
    pub early_checks_received: u8,
    pub queen_tempo_loss: bool,
    pub nc7_fork_detected: bool,
}

/// A game record as handed over by the acquisition layer. Read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time_control: Option<String>,
    #[serde(alias = "userColor")]
    pub player_color: PlayerColor,
    pub result: GameOutcome,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub opponent_rating: Option<i32>,
    #[serde(default, alias = "userRating")]
    pub player_rating: Option<i32>,
    /// Full-move count as reported by the source.
    #[serde(default)]
    pub total_moves: Option<u16>,
    /// SAN moves, already split.
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub pgn: Option<String>,
    #[serde(default)]
    pub signals: Option<SignalSet>,
}

/// Where a game's moves come from.
#[derive(Debug, Clone, Copy)]
pub enum MoveSource<'a> {
    List(&'a [String]),
    Pgn(&'a str),
}

impl Game {
    /// Prefer the split move list; fall back to raw PGN movetext.
    pub fn move_source(&self) -> MoveSource<'_> {
        if !self.moves.is_empty() {
            return MoveSource::List(&self.moves);
        }
        match self.pgn.as_deref() {
            Some(pgn) => MoveSource::Pgn(pgn),
            None => MoveSource::List(&self.moves),
        }
    }
}
