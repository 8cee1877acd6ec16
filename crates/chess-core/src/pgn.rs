//! PGN movetext tokenizing: lightweight regex-based, no board replay.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ParseError;
use crate::game_data::{Game, GameOutcome, MoveSource, PlayerColor};
use crate::token::{normalize_san, Token};

/// A whole tag pair; the quoted value may contain `]` and escaped quotes.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^\s*\[\w+\s+"(?:[^"\\]|\\.)*"\s*\]"#).unwrap());
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}|;[^\n]*").unwrap());
static VARIATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^()]*\)").unwrap());
static NAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\d+").unwrap());
static MOVE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.(?:\.\.)?").unwrap());
static GAME_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^\[Event\s+"#).unwrap());

const RESULT_MARKERS: &[&str] = &["1-0", "0-1", "1/2-1/2", "½-½", "*"];

/// Turn a move list or PGN movetext into ply-indexed tokens.
pub fn tokenize(source: MoveSource<'_>) -> Result<Vec<Token>, ParseError> {
    let tokens: Vec<Token> = match source {
        MoveSource::List(moves) => build_tokens(moves.iter().map(String::as_str)),
        MoveSource::Pgn(pgn) => {
            let movetext = strip_movetext(pgn);
            build_tokens(movetext.split_whitespace())
        }
    };

    if tokens.is_empty() {
        return Err(ParseError::EmptyGame);
    }
    Ok(tokens)
}

fn build_tokens<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<Token> {
    raw.filter(|s| !RESULT_MARKERS.contains(&s.trim()))
        .filter_map(normalize_san)
        .take(u16::MAX as usize)
        .enumerate()
        .map(|(i, san)| Token::new(i as u16 + 1, san))
        .collect()
}

/// Remove headers, comments, variations (innermost first), NAGs and
/// move numbers, leaving whitespace-separated moves and result markers.
fn strip_movetext(pgn: &str) -> String {
    let no_headers = HEADER_RE.replace_all(pgn, " ");
    let mut text = COMMENT_RE.replace_all(&no_headers, " ").into_owned();

    loop {
        let next = VARIATION_RE.replace_all(&text, " ").into_owned();
        if next == text {
            break;
        }
        text = next;
    }

    let no_nags = NAG_RE.replace_all(&text, " ");
    MOVE_NUMBER_RE.replace_all(&no_nags, " ").into_owned()
}

/// Split a multi-game PGN file on its `[Event` headers.
pub fn split_games(text: &str) -> Vec<&str> {
    let starts: Vec<usize> = GAME_START_RE.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() { Vec::new() } else { vec![trimmed] };
    }

    let mut games = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        games.push(text[start..end].trim());
    }
    games
}

/// Build a [`Game`] from a single PGN, seen from `player`'s side.
///
/// Only the tags that feed the data model are read. Returns `None` when the
/// player is not one of the two sides or the game has no decisive/drawn
/// result.
pub fn game_from_pgn(id: impl Into<String>, pgn: &str, player: &str) -> Option<Game> {
    let white = extract_header(pgn, "White")?;
    let black = extract_header(pgn, "Black")?;
    let player_lower = player.to_lowercase();

    let (player_color, opponent) = if white.to_lowercase() == player_lower {
        (PlayerColor::White, black)
    } else if black.to_lowercase() == player_lower {
        (PlayerColor::Black, white)
    } else {
        return None;
    };

    let result = GameOutcome::from_pgn_result(&extract_header(pgn, "Result")?, player_color)?;
    let date = extract_header(pgn, "Date")
        .and_then(|d| NaiveDate::parse_from_str(&d, "%Y.%m.%d").ok());

    let (player_elo, opponent_elo) = match player_color {
        PlayerColor::White => ("WhiteElo", "BlackElo"),
        PlayerColor::Black => ("BlackElo", "WhiteElo"),
    };

    Some(Game {
        id: id.into(),
        date,
        time_control: extract_header(pgn, "TimeControl"),
        player_color,
        result,
        opponent: Some(opponent),
        opponent_rating: extract_header_int(pgn, opponent_elo),
        player_rating: extract_header_int(pgn, player_elo),
        total_moves: None,
        moves: Vec::new(),
        pgn: Some(pgn.to_string()),
        signals: None,
    })
}

/// Extract a string value from a PGN header.
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str().to_string();
    if value.is_empty() { None } else { Some(value) }
}

/// Extract an integer value from a PGN header.
pub fn extract_header_int(pgn: &str, header_name: &str) -> Option<i32> {
    let pattern = format!(r#"\[{}\s+"(\d+)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    re.captures(pgn)?.get(1)?.as_str().parse().ok()
}
