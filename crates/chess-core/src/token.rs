//! Typed move tokens.
//!
//! A [`Token`] is one ply of a game: the normalized SAN text plus the fields
//! detectors care about (moving piece, destination, capture, check), parsed
//! once with shakmaty's SAN parser. Anything that does not parse as SAN is
//! kept as an opaque token and never matches a structured query.

use shakmaty::san::{San, SanPlus, Suffix};
use shakmaty::{CastlingSide, Color, Role, Square};

/// Structured shape of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Move { role: Role, to: Square, capture: bool },
    Castle(CastlingSide),
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    ply: u16,
    color: Color,
    san: String,
    kind: TokenKind,
    check: bool,
}

impl Token {
    /// Build a token for the given 1-based ply. `san` should already be
    /// normalized (see [`normalize_san`]).
    pub fn new(ply: u16, san: impl Into<String>) -> Self {
        let san = san.into();
        let (kind, check) = match san.parse::<SanPlus>() {
            Ok(SanPlus { san: parsed, suffix }) => {
                let check = matches!(suffix, Some(Suffix::Check) | Some(Suffix::Checkmate));
                let kind = match parsed {
                    San::Normal { role, capture, to, .. } => TokenKind::Move { role, to, capture },
                    San::Castle(side) => TokenKind::Castle(side),
                    _ => TokenKind::Opaque,
                };
                (kind, check && kind != TokenKind::Opaque)
            }
            Err(_) => (TokenKind::Opaque, false),
        };

        Self {
            ply,
            color: Color::from_white(ply % 2 == 1),
            san,
            kind,
            check,
        }
    }

    pub fn ply(&self) -> u16 {
        self.ply
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn san(&self) -> &str {
        &self.san
    }

    /// SAN without a trailing check/mate marker.
    pub fn bare_san(&self) -> &str {
        self.san.trim_end_matches(['+', '#'])
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn role(&self) -> Option<Role> {
        match self.kind {
            TokenKind::Move { role, .. } => Some(role),
            TokenKind::Castle(_) => Some(Role::King),
            TokenKind::Opaque => None,
        }
    }

    pub fn destination(&self) -> Option<Square> {
        match self.kind {
            TokenKind::Move { to, .. } => Some(to),
            _ => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self.kind, TokenKind::Move { capture: true, .. })
    }

    /// True for `+` and `#` suffixes.
    pub fn is_check(&self) -> bool {
        self.check
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, TokenKind::Castle(_))
    }

    pub fn is_opaque(&self) -> bool {
        self.kind == TokenKind::Opaque
    }

    /// A queen move by `color`.
    pub fn is_queen_move_by(&self, color: Color) -> bool {
        self.color == color && self.role() == Some(Role::Queen)
    }
}

/// Normalize a raw move string: trims whitespace, strips `!`/`?` annotations,
/// and rewrites zero-style castling (`0-0`, `0-0-0`) to letter O's.
/// Returns `None` when nothing is left.
pub fn normalize_san(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches(['!', '?']);
    if trimmed.is_empty() {
        return None;
    }

    let (body, suffix) = match trimmed.find(['+', '#']) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };

    let body = match body {
        "0-0" => "O-O",
        "0-0-0" => "O-O-O",
        other => other,
    };

    Some(format!("{body}{suffix}"))
}
