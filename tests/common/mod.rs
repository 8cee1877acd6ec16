#![allow(dead_code)]

use chess_core::{Game, GameOutcome, PlayerColor};
use chrono::NaiveDate;

pub const ITALIAN: &[&str] = &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "d3"];

pub const NAJDORF: &[&str] = &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6"];

pub const LONDON_CASTLED: &[&str] = &[
    "d4", "d5", "Bf4", "Nf6", "e3", "e6", "Nf3", "Bd6", "Bd3", "O-O", "O-O", "c5",
];

/// Build a game record from a SAN move list.
pub fn game(id: &str, color: PlayerColor, result: GameOutcome, moves: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        date: None,
        time_control: None,
        player_color: color,
        result,
        opponent: Some("opponent".to_string()),
        opponent_rating: Some(1500),
        player_rating: Some(1500),
        total_moves: None,
        moves: moves.iter().map(|m| m.to_string()).collect(),
        pgn: None,
        signals: None,
    }
}

pub fn dated(mut game: Game, y: i32, m: u32, d: u32, time_control: &str) -> Game {
    game.date = NaiveDate::from_ymd_opt(y, m, d);
    game.time_control = Some(time_control.to_string());
    game
}
