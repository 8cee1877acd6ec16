//! Longest-prefix opening classification.

use std::sync::LazyLock;

use chess_core::Token;
use shakmaty::Color;

use super::lines::{OpeningLine, BUILTIN_LINES, WILDCARD};
use super::{OpeningBucket, OpeningCategory};
use crate::error::ClassifyError;

/// Catch-all categories keyed by White's first move:
/// (first move, category for White, category for Black).
/// Anything not listed falls into the "other" categories.
pub const CATCH_ALL_BY_FIRST_MOVE: &[(&str, OpeningCategory, OpeningCategory)] = &[
    ("e4", OpeningCategory::WhiteE4, OpeningCategory::BlackVsE4),
    ("d4", OpeningCategory::WhiteD4, OpeningCategory::BlackVsD4),
];

static BUILTIN: LazyLock<OpeningClassifier> =
    LazyLock::new(|| OpeningClassifier::new(BUILTIN_LINES.to_vec()));

/// Matches token sequences against a fixed, ordered set of opening lines.
#[derive(Debug, Clone)]
pub struct OpeningClassifier {
    lines: Vec<OpeningLine>,
    depth: usize,
}

impl OpeningClassifier {
    pub fn new(lines: Vec<OpeningLine>) -> Self {
        let depth = lines.iter().map(OpeningLine::len).max().unwrap_or(0);
        Self { lines, depth }
    }

    /// The process-wide classifier over [`BUILTIN_LINES`].
    pub fn builtin() -> &'static OpeningClassifier {
        &BUILTIN
    }

    pub fn lines(&self) -> &[OpeningLine] {
        &self.lines
    }

    /// Number of plies ever inspected: the longest registered line.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Classify against every line regardless of the side it belongs to.
    /// Unmatched games fall back on White's catch-all for the first move.
    pub fn classify(&self, tokens: &[Token]) -> Result<OpeningBucket, ClassifyError> {
        let first = tokens.first().ok_or(ClassifyError::NoMoves)?;
        Ok(match self.best_match(tokens, None) {
            Some(line) => line.bucket,
            None => fallback_category(first, Color::White).catch_all(),
        })
    }

    /// Classify using only lines defined for `color`, with that side's catch-alls.
    pub fn classify_as(&self, tokens: &[Token], color: Color) -> Result<OpeningBucket, ClassifyError> {
        let first = tokens.first().ok_or(ClassifyError::NoMoves)?;
        Ok(match self.best_match(tokens, Some(color)) {
            Some(line) => line.bucket,
            None => fallback_category(first, color).catch_all(),
        })
    }

    /// Longest matching line; on equal length the earlier registration wins.
    fn best_match(&self, tokens: &[Token], color: Option<Color>) -> Option<&OpeningLine> {
        let window = &tokens[..tokens.len().min(self.depth)];
        let mut best: Option<&OpeningLine> = None;

        for line in &self.lines {
            if color.is_some_and(|c| c != line.color) {
                continue;
            }
            if !line_matches(line, window) {
                continue;
            }
            if best.map_or(true, |b| line.len() > b.len()) {
                best = Some(line);
            }
        }

        best
    }
}

fn line_matches(line: &OpeningLine, tokens: &[Token]) -> bool {
    !line.is_empty()
        && line.len() <= tokens.len()
        && line
            .moves
            .iter()
            .zip(tokens)
            .all(|(expected, token)| *expected == WILDCARD || *expected == token.bare_san())
}

fn fallback_category(first: &Token, color: Color) -> OpeningCategory {
    let entry = CATCH_ALL_BY_FIRST_MOVE
        .iter()
        .find(|(mv, _, _)| *mv == first.bare_san());

    match (entry, color) {
        (Some((_, white, _)), Color::White) => *white,
        (Some((_, _, black)), Color::Black) => *black,
        (None, Color::White) => OpeningCategory::WhiteOther,
        (None, Color::Black) => OpeningCategory::BlackVsOther,
    }
}

/// Bucket used when a game cannot be classified at all.
pub fn default_bucket(color: Color) -> OpeningBucket {
    match color {
        Color::White => OpeningBucket::OtherWhite,
        Color::Black => OpeningBucket::OtherBlack,
    }
}

/// [`OpeningClassifier::classify`] on the built-in table.
pub fn classify(tokens: &[Token]) -> Result<OpeningBucket, ClassifyError> {
    OpeningClassifier::builtin().classify(tokens)
}

/// [`OpeningClassifier::classify_as`] on the built-in table.
pub fn classify_as(tokens: &[Token], color: Color) -> Result<OpeningBucket, ClassifyError> {
    OpeningClassifier::builtin().classify_as(tokens, color)
}
