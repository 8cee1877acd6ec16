use std::fmt;
use std::str::FromStr;

use chess_core::PlayerColor;
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::annotate::AnnotatedGame;
use crate::openings::OpeningBucket;

/// Predicate over annotated games. `None` in any field matches everything;
/// when deserializing, the string `"all"` means the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
    #[serde(deserialize_with = "all_as_none")]
    pub time_control: Option<String>,
    #[serde(deserialize_with = "all_as_none")]
    pub color: Option<PlayerColor>,
    #[serde(deserialize_with = "all_as_none")]
    pub opening: Option<OpeningBucket>,
}

impl FilterState {
    /// True when `annotated` passes every active predicate. A game without a
    /// date fails any date bound.
    pub fn matches(&self, annotated: &AnnotatedGame<'_>) -> bool {
        let game = annotated.game;

        if let Some(from) = self.date_from {
            if !game.date.is_some_and(|d| d >= from) {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if !game.date.is_some_and(|d| d <= to) {
                return false;
            }
        }
        if let Some(ref tc) = self.time_control {
            if game.time_control.as_deref() != Some(tc.as_str()) {
                return false;
            }
        }
        if self.color.is_some_and(|c| c != game.player_color) {
            return false;
        }
        if self.opening.is_some_and(|o| o != annotated.opening) {
            return false;
        }
        true
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == FilterState::default()
    }
}

fn all_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Game, GameOutcome, SignalSet};

    fn game(date: Option<NaiveDate>, tc: Option<&str>, color: PlayerColor) -> Game {
        Game {
            id: "g".to_string(),
            date,
            time_control: tc.map(String::from),
            player_color: color,
            result: GameOutcome::Win,
            opponent: None,
            opponent_rating: None,
            player_rating: None,
            total_moves: Some(30),
            moves: Vec::new(),
            pgn: None,
            signals: None,
        }
    }

    fn annotated(game: &Game, opening: OpeningBucket) -> AnnotatedGame<'_> {
        AnnotatedGame {
            game,
            opening,
            signals: SignalSet::default(),
            total_moves: game.total_moves,
        }
    }

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, d)
    }

    #[test]
    fn test_default_matches_everything() {
        let g = game(None, None, PlayerColor::Black);
        let filter = FilterState::default();
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&annotated(&g, OpeningBucket::OtherBlack)));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = FilterState {
            date_from: day(5),
            date_to: day(10),
            ..FilterState::default()
        };
        for (d, expected) in [(4, false), (5, true), (10, true), (11, false)] {
            let g = game(day(d), None, PlayerColor::White);
            assert_eq!(filter.matches(&annotated(&g, OpeningBucket::ItalianGame)), expected, "day {d}");
        }
    }

    #[test]
    fn test_undated_game_fails_date_bound() {
        let filter = FilterState {
            date_to: day(10),
            ..FilterState::default()
        };
        let g = game(None, None, PlayerColor::White);
        assert!(!filter.matches(&annotated(&g, OpeningBucket::ItalianGame)));
    }

    #[test]
    fn test_exact_match_fields() {
        let g = game(day(1), Some("600"), PlayerColor::White);
        let a = annotated(&g, OpeningBucket::LondonSystem);

        let by_tc = |tc: &str| FilterState {
            time_control: Some(tc.to_string()),
            ..FilterState::default()
        };
        assert!(by_tc("600").matches(&a));
        assert!(!by_tc("600+5").matches(&a));

        let by_color = FilterState {
            color: Some(PlayerColor::Black),
            ..FilterState::default()
        };
        assert!(!by_color.matches(&a));

        let by_opening = FilterState {
            opening: Some(OpeningBucket::LondonSystem),
            ..FilterState::default()
        };
        assert!(by_opening.matches(&a));
    }

    #[test]
    fn test_deserialize_all_as_wildcard() {
        let filter: FilterState = serde_json::from_str(
            r#"{"dateFrom": "2025-01-01", "timeControl": "all", "color": "all", "opening": "caro_kann"}"#,
        )
        .unwrap();
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(filter.time_control, None);
        assert_eq!(filter.color, None);
        assert_eq!(filter.opening, Some(OpeningBucket::CaroKann));

        assert!(serde_json::from_str::<FilterState>(r#"{"opening": "nope"}"#).is_err());
    }
}
